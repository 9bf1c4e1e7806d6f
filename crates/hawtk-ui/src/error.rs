use hawtk_engine::render::RenderError;

use crate::tree::WidgetId;

/// Structural errors from [`WidgetTree`](crate::WidgetTree) operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    #[error("widget {0:?} does not exist (removed or never created)")]
    StaleId(WidgetId),

    #[error("child index {index} out of range for {len} children")]
    OutOfRange { index: usize, len: usize },

    #[error("child range {start}..{end} out of range for {len} children")]
    InvalidRange { start: usize, end: usize, len: usize },

    #[error("widget {0:?} already has a parent; detach it first")]
    AlreadyAttached(WidgetId),

    #[error("attaching {child:?} under {parent:?} would create a cycle")]
    WouldCycle { parent: WidgetId, child: WidgetId },

    #[error("the root widget cannot be removed or re-parented")]
    RootImmutable,
}

/// Failure returned by [`Widget::draw`](crate::Widget::draw).
#[derive(Debug, thiserror::Error)]
pub enum WidgetError {
    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("{0}")]
    Failed(String),
}

impl WidgetError {
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }
}

/// Top-level error for context operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error("widget {id:?} failed to draw: {source}")]
    Draw {
        id: WidgetId,
        #[source]
        source: WidgetError,
    },
}
