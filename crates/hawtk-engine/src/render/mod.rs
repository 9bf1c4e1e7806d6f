//! Renderer contract and pass bookkeeping.
//!
//! Backends implement [`Renderer`]; the widget layer only ever talks to a
//! [`RenderDevice`], which owns the boxed backend and enforces the pass state
//! machine so that every backend reports misuse the same way.
//!
//! Convention:
//! - vertices are in logical pixels (top-left origin, +Y down)
//! - every three vertices form one triangle, submitted in order

mod clip;
mod device;
mod error;
mod recording;
mod renderer;
mod vertex;

pub use clip::ClipStack;
pub use device::{PassState, PassStats, RenderDevice};
pub use error::RenderError;
pub use recording::{RecordingHandle, RecordingRenderer, RenderCall};
pub use renderer::{CreateRenderer, Renderer};
pub use vertex::Vertex;
