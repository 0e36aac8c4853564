use thiserror::Error;

/// Errors crossing the run boundary.
///
/// These are configuration and transport failures, separate from the
/// evaluator's pass/fail semantics: a result whose status is `failed` is a
/// successful analysis outcome.
#[derive(Debug, Error)]
pub enum RunError {
    /// The parameters were rejected before the run started.
    #[error("invalid parameters: {0}")]
    Params(#[from] ampacity_solvers::Error),

    /// The worker task crashed or was aborted.
    #[error("run worker failed")]
    Worker(#[from] tokio::task::JoinError),
}
