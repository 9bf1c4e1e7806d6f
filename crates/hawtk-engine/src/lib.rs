//! hawtk engine crate.
//!
//! This crate owns the leaf pieces the widget layer is built on: fixed-size
//! vector math, vertex data, the renderer contract every backend implements,
//! and logger setup.

pub mod coords;
pub mod logging;
pub mod render;
