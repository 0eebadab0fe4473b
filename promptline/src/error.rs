//! Error types for caller mistakes and sink failures.
//!
//! Bad *user* input is never an error here: it is a [`crate::utils::Rejection`]
//! that triggers a re-prompt. [`PromptError`] only covers what the calling
//! program must deal with.

use std::io;

use thiserror::Error;

/// Result type alias for prompt operations.
pub type Result<T> = std::result::Result<T, PromptError>;

#[derive(Debug, Error)]
pub enum PromptError {
    /// The prompt text was empty or whitespace-only
    #[error("The prompt cannot be null, empty, or whitespaces-only.")]
    BlankPrompt,

    /// `min` was greater than `max`
    #[error("The min ({min}) cannot be greater than the max ({max}).")]
    InvalidBounds { min: String, max: String },

    /// Blank tokens, or tokens equal ignoring case
    #[error(
        "The true and false tokens cannot be empty, whitespaces-only, or case-insensitively equal."
    )]
    InvalidTokens,

    /// No options and no quit entry
    #[error("There must be at least one menu option to select.")]
    EmptyMenu,

    /// The input source hit end of stream under `ExhaustedInput::Fail`
    #[error("The input source is exhausted.")]
    InputExhausted,

    /// Writing or flushing the output sink failed
    #[error("Failed to write to the output sink: {0}")]
    Output(#[from] io::Error),
}
