//! Stock widgets.

mod group;
mod panel;

pub use group::Group;
pub use panel::Panel;
