use std::cell::RefCell;
use std::rc::Rc;

use crate::coords::{Rect, Vec2f};

use super::{CreateRenderer, RenderError, Renderer, Vertex};

/// One call received by a [`RecordingRenderer`].
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCall {
    BeginPass,
    Draw {
        vertices: Vec<Vertex>,
        /// Scissor region active when the batch was submitted.
        scissor: Option<Rect>,
    },
    EndPass,
    EnableScissor(Rect),
    DisableScissor,
    EnableAlphaBlending,
    DisableAlphaBlending,
}

#[derive(Debug, Default)]
struct Recording {
    calls: Vec<RenderCall>,
    scissor: Option<Rect>,
    draws_received: usize,
    fail_draw_at: Option<usize>,
    fail_end_pass: bool,
}

/// Shared view of what a [`RecordingRenderer`] received.
///
/// The renderer moves into a context; keep a clone of the handle to inspect
/// the calls afterwards.
#[derive(Debug, Clone, Default)]
pub struct RecordingHandle(Rc<RefCell<Recording>>);

impl RecordingHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call received so far, in order.
    pub fn calls(&self) -> Vec<RenderCall> {
        self.0.borrow().calls.clone()
    }

    /// Number of recorded calls matching `pred`.
    pub fn count(&self, pred: impl Fn(&RenderCall) -> bool) -> usize {
        self.0.borrow().calls.iter().filter(|c| pred(c)).count()
    }

    /// Vertex batches of every recorded draw, in submission order.
    pub fn draws(&self) -> Vec<Vec<Vertex>> {
        self.0
            .borrow()
            .calls
            .iter()
            .filter_map(|c| match c {
                RenderCall::Draw { vertices, .. } => Some(vertices.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn total_vertices(&self) -> usize {
        self.draws().iter().map(Vec::len).sum()
    }

    /// Forgets recorded calls; the failure setting is kept.
    pub fn clear(&self) {
        let mut rec = self.0.borrow_mut();
        rec.calls.clear();
        rec.scissor = None;
    }

    /// Makes the `index`-th draw call (0-based, counted over the renderer's
    /// lifetime) fail with [`RenderError::Backend`].
    pub fn fail_draw_at(&self, index: usize) {
        self.0.borrow_mut().fail_draw_at = Some(index);
    }

    /// Makes every following `end_pass` fail with [`RenderError::Backend`].
    /// The call is still recorded.
    pub fn fail_end_pass(&self, fail: bool) {
        self.0.borrow_mut().fail_end_pass = fail;
    }
}

/// Backend that records calls instead of rendering.
///
/// Used as the test double for the widget layer and for headless runs.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    handle: RecordingHandle,
}

impl RecordingRenderer {
    pub fn new(handle: RecordingHandle) -> Self {
        Self { handle }
    }

    pub fn handle(&self) -> RecordingHandle {
        self.handle.clone()
    }

    fn push(&self, call: RenderCall) {
        self.handle.0.borrow_mut().calls.push(call);
    }
}

impl CreateRenderer for RecordingRenderer {
    type Args = RecordingHandle;

    fn create(handle: RecordingHandle) -> Result<Self, RenderError> {
        Ok(Self::new(handle))
    }
}

impl Renderer for RecordingRenderer {
    fn name(&self) -> &str {
        "recording"
    }

    fn begin_pass(&mut self) -> Result<(), RenderError> {
        self.push(RenderCall::BeginPass);
        Ok(())
    }

    fn draw(&mut self, vertices: &[Vertex]) -> Result<(), RenderError> {
        let mut rec = self.handle.0.borrow_mut();
        let index = rec.draws_received;
        rec.draws_received += 1;
        if rec.fail_draw_at == Some(index) {
            return Err(RenderError::backend(format!("injected failure on draw #{index}")));
        }

        let scissor = rec.scissor;
        rec.calls.push(RenderCall::Draw { vertices: vertices.to_vec(), scissor });
        Ok(())
    }

    fn end_pass(&mut self) -> Result<(), RenderError> {
        let mut rec = self.handle.0.borrow_mut();
        rec.calls.push(RenderCall::EndPass);
        rec.scissor = None;
        if rec.fail_end_pass {
            return Err(RenderError::backend("injected failure on end_pass"));
        }
        Ok(())
    }

    fn enable_scissor_test(&mut self, offset: Vec2f, bounds: Vec2f) -> Result<(), RenderError> {
        let rect = Rect::from_origin_size(offset, bounds);
        self.push(RenderCall::EnableScissor(rect));
        self.handle.0.borrow_mut().scissor = Some(rect);
        Ok(())
    }

    fn disable_scissor_test(&mut self) -> Result<(), RenderError> {
        self.push(RenderCall::DisableScissor);
        self.handle.0.borrow_mut().scissor = None;
        Ok(())
    }

    fn enable_alpha_blending(&mut self) -> Result<(), RenderError> {
        self.push(RenderCall::EnableAlphaBlending);
        Ok(())
    }

    fn disable_alpha_blending(&mut self) -> Result<(), RenderError> {
        self.push(RenderCall::DisableAlphaBlending);
        Ok(())
    }
}
