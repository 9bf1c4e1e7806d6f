use std::any::Any;

use hawtk_engine::coords::{Color, Rect, Vec2f};
use hawtk_engine::render::{RenderDevice, RenderError, Vertex};

use crate::error::WidgetError;
use crate::tree::WidgetId;

// ── Widget trait ──────────────────────────────────────────────────────────

/// The trait every node in the scene graph implements.
///
/// A widget only emits its own geometry. The [`Context`](crate::Context)
/// walks the tree, positions each widget, clips children to their parent and
/// calls `draw` parent-first, so a widget never recurses into children and
/// never begins or ends a pass itself.
///
/// ```rust,ignore
/// struct Swatch(Color);
///
/// impl Widget for Swatch {
///     fn draw(&self, cx: &mut DrawCtx<'_>) -> Result<(), WidgetError> {
///         cx.fill_rect(cx.rect(), self.0)?;
///         Ok(())
///     }
/// }
/// ```
pub trait Widget: AsAny {
    /// Emit this widget's triangles for the current pass.
    ///
    /// Must be idempotent: drawing a widget that is not dirty produces the
    /// same picture as the previous frame.
    fn draw(&self, cx: &mut DrawCtx<'_>) -> Result<(), WidgetError>;

    /// Recompute layout-dependent state during [`Context::update`](crate::Context::update).
    ///
    /// The widget's dirty flag is cleared afterwards unless it calls
    /// [`UpdateCtx::invalidate`].
    fn update(&mut self, _cx: &mut UpdateCtx) {}
}

/// Downcasting support for boxed widgets. Blanket-implemented; never
/// implement it by hand.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }

    #[inline]
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// ── DrawCtx ───────────────────────────────────────────────────────────────

/// Drawing surface handed to [`Widget::draw`].
///
/// Wraps the context's render device with the widget's absolute placement.
/// Scissor state belongs to the traversal and is not reachable from here.
pub struct DrawCtx<'a> {
    id: WidgetId,
    rect: Rect,
    dirty: bool,
    device: &'a mut RenderDevice,
}

impl<'a> DrawCtx<'a> {
    pub(crate) fn new(id: WidgetId, rect: Rect, dirty: bool, device: &'a mut RenderDevice) -> Self {
        Self { id, rect, dirty, device }
    }

    #[inline]
    pub fn id(&self) -> WidgetId {
        self.id
    }

    /// Absolute rect of the widget in logical pixels.
    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    #[inline]
    pub fn origin(&self) -> Vec2f {
        self.rect.origin
    }

    #[inline]
    pub fn bounds(&self) -> Vec2f {
        self.rect.size
    }

    /// `true` if the widget changed since the last [`Context::update`](crate::Context::update).
    ///
    /// Backends with retained buffers may reuse geometry when this is `false`.
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Submits a triangle list as-is.
    pub fn draw(&mut self, vertices: &[Vertex]) -> Result<(), RenderError> {
        self.device.draw(vertices)
    }

    /// Solid axis-aligned rectangle (two triangles).
    pub fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), RenderError> {
        if rect.is_empty() {
            return Ok(());
        }
        self.device.draw(&Vertex::quad(rect, color))
    }

    pub fn fill_triangle(
        &mut self,
        a: Vec2f,
        b: Vec2f,
        c: Vec2f,
        color: Color,
    ) -> Result<(), RenderError> {
        self.device.draw(&Vertex::triangle(a, b, c, color))
    }

    pub fn enable_alpha_blending(&mut self) -> Result<(), RenderError> {
        self.device.enable_alpha_blending()
    }

    pub fn disable_alpha_blending(&mut self) -> Result<(), RenderError> {
        self.device.disable_alpha_blending()
    }
}

// ── UpdateCtx ─────────────────────────────────────────────────────────────

/// Per-widget state handed to [`Widget::update`].
#[derive(Debug)]
pub struct UpdateCtx {
    id: WidgetId,
    rect: Rect,
    invalidated: bool,
}

impl UpdateCtx {
    pub(crate) fn new(id: WidgetId, rect: Rect) -> Self {
        Self { id, rect, invalidated: false }
    }

    #[inline]
    pub fn id(&self) -> WidgetId {
        self.id
    }

    /// Absolute rect as placed by this update.
    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    #[inline]
    pub fn bounds(&self) -> Vec2f {
        self.rect.size
    }

    /// Keep the widget dirty after this update (e.g. an animation in flight).
    #[inline]
    pub fn invalidate(&mut self) {
        self.invalidated = true;
    }

    #[inline]
    pub(crate) fn is_invalidated(&self) -> bool {
        self.invalidated
    }
}
