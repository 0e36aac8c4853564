use thiserror::Error;

use ampacity_core::ParamsError;

/// Errors that can occur when starting a search.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The parameters failed structural validation.
    ///
    /// This is a configuration error, rejected before any sample is
    /// evaluated. A result that reports a failed limit is a successful
    /// analysis, not an error.
    #[error("invalid parameters: {0}")]
    InvalidParams(#[from] ParamsError),
}
