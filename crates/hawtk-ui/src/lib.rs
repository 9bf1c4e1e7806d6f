//! hawtk UI: retained widget scene graph on top of `hawtk-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use hawtk_ui::prelude::*;
//!
//! let mut cx = Context::builder()
//!     .viewport(Vec2f::new([640.0, 480.0]))
//!     .build::<MyBackend>(backend_args)?;
//!
//! let root = cx.root();
//! let dark = Color::rgba(0.1, 0.1, 0.1, 1.0);
//! let sidebar = cx.tree_mut().emplace(root, Panel::new(dark), Vec2f::new([160.0, 480.0]))?;
//! cx.tree_mut().emplace(sidebar, Panel::new(Color::WHITE), Vec2f::new([160.0, 32.0]))?;
//!
//! loop {
//!     cx.update();
//!     cx.draw()?;
//! }
//! ```
//!
//! # Custom widgets
//!
//! Implement [`Widget`] and emit triangles through the [`DrawCtx`]:
//!
//! ```rust,ignore
//! struct Marker(Color);
//!
//! impl Widget for Marker {
//!     fn draw(&self, cx: &mut DrawCtx<'_>) -> Result<(), WidgetError> {
//!         let r = cx.rect();
//!         cx.fill_triangle(r.min(), Vec2f::new([r.max().x(), r.min().y()]), r.max(), self.0)?;
//!         Ok(())
//!     }
//! }
//! ```

pub mod context;
pub mod error;
pub mod tree;
pub mod widget;
pub mod widgets;

pub use context::{make_context, Context, ContextBuilder, ContextConfig, FrameStats};
pub use error::{Error, TreeError, WidgetError};
pub use tree::{WidgetId, WidgetTree};
pub use widget::{DrawCtx, UpdateCtx, Widget};

/// Everything needed to build trees and write widgets.
pub mod prelude {
    pub use crate::context::{make_context, Context, ContextBuilder, ContextConfig, FrameStats};
    pub use crate::error::{Error, TreeError, WidgetError};
    pub use crate::tree::{WidgetId, WidgetTree};
    pub use crate::widget::{DrawCtx, UpdateCtx, Widget};
    pub use crate::widgets::{Group, Panel};

    // Engine primitives every widget touches.
    pub use hawtk_engine::coords::{Color, Rect, Vec2f, Vector};
    pub use hawtk_engine::render::{CreateRenderer, RenderError, Renderer, Vertex};
}
