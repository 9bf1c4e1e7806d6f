//! Coordinate and color types shared across renderers and widgets.
//!
//! Canonical CPU space:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! Backends convert to their own device space when they receive vertices.

mod rect;
mod vector;

pub use rect::Rect;
pub use vector::{Color, Scalar, UVec2, Vec2f, Vector};
