use hawtk_engine::coords::Color;

use crate::error::WidgetError;
use crate::widget::{DrawCtx, Widget};

/// Solid rectangle filling the widget's bounds.
///
/// # Example
/// ```rust,ignore
/// let slate = Color::rgba(0.1, 0.1, 0.15, 1.0);
/// let card = tree.emplace(root, Panel::new(slate), Vec2f::new([200.0, 120.0]))?;
/// tree.emplace(card, Panel::new(Color::WHITE), Vec2f::new([200.0, 24.0]))?;
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Panel {
    color: Color,
}

impl Panel {
    pub fn new(color: Color) -> Self {
        Self { color }
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Changes the fill. Mutate through
    /// [`WidgetTree::downcast_mut`](crate::WidgetTree::downcast_mut) so the
    /// panel is marked dirty.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}

impl Default for Panel {
    fn default() -> Self {
        Self::new(Color::WHITE)
    }
}

impl Widget for Panel {
    fn draw(&self, cx: &mut DrawCtx<'_>) -> Result<(), WidgetError> {
        // Fully transparent panels only group their children.
        if self.color.a() <= 0.0 {
            return Ok(());
        }
        cx.fill_rect(cx.rect(), self.color)?;
        Ok(())
    }
}
