use thiserror::Error;

/// Fatal compile failures.
///
/// Everything else the compiler meets is tolerated and reported as a
/// [`Diagnostic`](crate::Diagnostic).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CompileError {
    #[error("input contains no content lines")]
    EmptyInput,

    #[error("indentation jumps from level {from} to level {to} at `{content}`")]
    DepthJump {
        from: usize,
        to: usize,
        content: String,
    },
}
