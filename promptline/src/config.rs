//! # Prompt configuration
//!
//! [`PromptConfig`] tunes how a [`crate::utils::Terminal`] behaves in
//! situations the user cannot fix by typing. Today that is only what happens
//! once the input source reaches end of stream.
//!
//! ```rust
//! use promptline::{ExhaustedInput, PromptConfig};
//!
//! let config = PromptConfig::default().exhausted_input(ExhaustedInput::Fail);
//! assert_eq!(config.on_exhausted, ExhaustedInput::Fail);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What a prompt does when the input source has no more lines.
///
/// - `Retry` treats the missing line like a blank one and prompts again. With
///   a closed stdin this never returns; it is the default so that an exhausted
///   stream behaves exactly like an empty answer.
/// - `Fail` stops the prompt with [`crate::PromptError::InputExhausted`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ExhaustedInput {
    #[default]
    Retry,
    Fail,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PromptConfig {
    pub on_exhausted: ExhaustedInput,
}

impl PromptConfig {
    pub fn exhausted_input(mut self, policy: ExhaustedInput) -> Self {
        self.on_exhausted = policy;
        self
    }
}
