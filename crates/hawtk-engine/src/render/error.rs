/// Errors reported by the renderer layer.
///
/// Contract violations are detected by [`RenderDevice`](super::RenderDevice)
/// before the backend is touched; `Backend` carries failures reported by the
/// backend itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("begin_pass called while a pass is already active")]
    PassAlreadyActive,

    #[error("{operation} called outside of a render pass")]
    NoActivePass { operation: &'static str },

    #[error("vertex count {len} is not a multiple of 3")]
    IncompleteTriangle { len: usize },

    #[error("renderer backend failed: {0}")]
    Backend(String),
}

impl RenderError {
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend(message.into())
    }
}
