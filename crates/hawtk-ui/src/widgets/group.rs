use crate::error::WidgetError;
use crate::widget::{DrawCtx, Widget};

/// Invisible container. Emits no geometry; its bounds still clip its children.
///
/// The default root of a [`Context`](crate::Context).
#[derive(Debug, Default, Clone, Copy)]
pub struct Group;

impl Group {
    pub fn new() -> Self {
        Self
    }
}

impl Widget for Group {
    fn draw(&self, _cx: &mut DrawCtx<'_>) -> Result<(), WidgetError> {
        Ok(())
    }
}
