use core::fmt;

use crate::coords::{Rect, Vec2f};

use super::{CreateRenderer, RenderError, Renderer, Vertex};

/// Pass state of a [`RenderDevice`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PassState {
    Idle,
    InPass,
}

/// Counters for the current (or most recently finished) pass.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct PassStats {
    /// `draw` calls forwarded to the backend.
    pub draw_calls: u32,
    pub vertices: usize,
    /// Scissor enable/disable calls forwarded to the backend.
    pub scissor_changes: u32,
}

/// Owns a backend renderer and enforces the pass contract on its behalf.
///
/// State machine: `Idle → begin_pass → InPass → end_pass → Idle`.
/// Misuse is reported as [`RenderError`] and never reaches the backend, so a
/// bad call cannot corrupt backend state for later frames.
pub struct RenderDevice {
    backend: Box<dyn Renderer>,
    state: PassState,
    scissor: Option<Rect>,
    alpha_blending: bool,
    stats: PassStats,
}

impl RenderDevice {
    pub fn new(backend: Box<dyn Renderer>) -> Self {
        log::debug!("render device created with backend `{}`", backend.name());
        Self {
            backend,
            state: PassState::Idle,
            scissor: None,
            alpha_blending: false,
            stats: PassStats::default(),
        }
    }

    /// Builds the backend `R` from its constructor arguments and erases its type.
    pub fn create<R: CreateRenderer>(args: R::Args) -> Result<Self, RenderError> {
        let backend = R::create(args)?;
        Ok(Self::new(Box::new(backend)))
    }

    #[inline]
    pub fn name(&self) -> &str {
        self.backend.name()
    }

    #[inline]
    pub fn state(&self) -> PassState {
        self.state
    }

    #[inline]
    pub fn is_in_pass(&self) -> bool {
        self.state == PassState::InPass
    }

    /// Active scissor region, `None` when scissoring is disabled.
    #[inline]
    pub fn scissor(&self) -> Option<Rect> {
        self.scissor
    }

    #[inline]
    pub fn alpha_blending(&self) -> bool {
        self.alpha_blending
    }

    #[inline]
    pub fn stats(&self) -> PassStats {
        self.stats
    }

    // ── pass lifecycle ────────────────────────────────────────────────────

    pub fn begin_pass(&mut self) -> Result<(), RenderError> {
        if self.is_in_pass() {
            log::warn!("begin_pass called on `{}` while a pass is active", self.name());
            return Err(RenderError::PassAlreadyActive);
        }

        self.backend.begin_pass()?;
        self.state = PassState::InPass;
        self.stats = PassStats::default();
        log::trace!("pass started");
        Ok(())
    }

    /// Ends the pass. The device is `Idle` afterwards even if the backend
    /// reports an error, and any scissor / blending state is dropped.
    pub fn end_pass(&mut self) -> Result<(), RenderError> {
        self.require_pass("end_pass")?;

        let result = self.backend.end_pass();
        self.state = PassState::Idle;
        self.scissor = None;
        self.alpha_blending = false;

        if let Err(err) = &result {
            log::warn!("backend `{}` failed to end the pass: {err}", self.name());
        }
        log::trace!(
            "pass ended: {} draw calls, {} vertices",
            self.stats.draw_calls,
            self.stats.vertices
        );
        result
    }

    // ── draw calls ────────────────────────────────────────────────────────

    /// Submits a triangle list. Empty batches are accepted and dropped.
    pub fn draw(&mut self, vertices: &[Vertex]) -> Result<(), RenderError> {
        self.require_pass("draw")?;

        if vertices.len() % 3 != 0 {
            log::warn!("rejected draw of {} vertices (not whole triangles)", vertices.len());
            return Err(RenderError::IncompleteTriangle { len: vertices.len() });
        }
        if vertices.is_empty() {
            return Ok(());
        }

        self.backend.draw(vertices)?;
        self.stats.draw_calls += 1;
        self.stats.vertices += vertices.len();
        Ok(())
    }

    pub fn enable_scissor_test(&mut self, offset: Vec2f, bounds: Vec2f) -> Result<(), RenderError> {
        self.require_pass("enable_scissor_test")?;

        self.backend.enable_scissor_test(offset, bounds)?;
        self.scissor = Some(Rect::from_origin_size(offset, bounds));
        self.stats.scissor_changes += 1;
        Ok(())
    }

    pub fn disable_scissor_test(&mut self) -> Result<(), RenderError> {
        self.require_pass("disable_scissor_test")?;

        self.backend.disable_scissor_test()?;
        self.scissor = None;
        self.stats.scissor_changes += 1;
        Ok(())
    }

    pub fn enable_alpha_blending(&mut self) -> Result<(), RenderError> {
        self.require_pass("enable_alpha_blending")?;

        self.backend.enable_alpha_blending()?;
        self.alpha_blending = true;
        Ok(())
    }

    pub fn disable_alpha_blending(&mut self) -> Result<(), RenderError> {
        self.require_pass("disable_alpha_blending")?;

        self.backend.disable_alpha_blending()?;
        self.alpha_blending = false;
        Ok(())
    }

    fn require_pass(&self, operation: &'static str) -> Result<(), RenderError> {
        if self.is_in_pass() {
            Ok(())
        } else {
            log::warn!("{operation} called on `{}` outside of a pass", self.name());
            Err(RenderError::NoActivePass { operation })
        }
    }
}

impl fmt::Debug for RenderDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderDevice")
            .field("backend", &self.name())
            .field("state", &self.state)
            .field("scissor", &self.scissor)
            .field("alpha_blending", &self.alpha_blending)
            .field("stats", &self.stats)
            .finish()
    }
}
