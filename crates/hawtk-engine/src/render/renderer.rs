use crate::coords::Vec2f;

use super::{RenderError, Vertex};

/// Backend contract implemented by every concrete renderer.
///
/// Backends do not need to validate call order: the owning
/// [`RenderDevice`](super::RenderDevice) guarantees that
/// - `begin_pass` is only called while idle,
/// - `draw`, scissor and blending calls only happen inside a pass,
/// - `draw` receives a non-empty batch whose length is a multiple of 3.
///
/// Returning `Err` reports a backend failure (lost device, full queue, ...).
pub trait Renderer {
    /// Human-readable backend name for diagnostics.
    fn name(&self) -> &str {
        core::any::type_name::<Self>()
    }

    /// Prepares the backend for the draw calls of one frame.
    fn begin_pass(&mut self) -> Result<(), RenderError>;

    /// Renders `vertices` immediately as a list of triangles.
    fn draw(&mut self, vertices: &[Vertex]) -> Result<(), RenderError>;

    /// Flushes / presents the pass. Any active scissor region ends with it.
    ///
    /// May block (e.g. waiting on a presentation queue).
    fn end_pass(&mut self) -> Result<(), RenderError>;

    /// Restricts subsequent draws to the rect at `offset` with extent `bounds`.
    fn enable_scissor_test(&mut self, offset: Vec2f, bounds: Vec2f) -> Result<(), RenderError>;

    fn disable_scissor_test(&mut self) -> Result<(), RenderError>;

    fn enable_alpha_blending(&mut self) -> Result<(), RenderError> {
        Ok(())
    }

    fn disable_alpha_blending(&mut self) -> Result<(), RenderError> {
        Ok(())
    }
}

/// Construction hook used to build a context by naming a backend type.
///
/// ```rust,ignore
/// let cx = make_context::<MyGlRenderer>(GlArgs { vsync: true })?;
/// ```
///
/// `Args` bundles whatever the backend's constructor needs. Once created the
/// backend is only reachable as `dyn Renderer`.
pub trait CreateRenderer: Renderer + Sized + 'static {
    type Args;

    fn create(args: Self::Args) -> Result<Self, RenderError>;
}
