//! # Input Sanitization & Validation
//!
//! Validators turn one raw input line into either a typed value or a
//! [`Rejection`] explaining, in user-facing words, why the line was refused.
//! They never perform I/O themselves: [`crate::utils::Terminal::ask`] owns the
//! read / print / retry loop and only asks a validator for a verdict.
//!
//! ## Validators
//! - [`NotBlank`]: any line with more than spaces and control characters, returned as read.
//! - [`IsBetween`]: a base-10 integer inside an inclusive `[min, max]` range.
//! - [`MatchTokens`]: one of two case-insensitive tokens, mapped to `bool`.
//!
//! Construction of [`IsBetween`] and [`MatchTokens`] checks the caller's
//! parameters and fails with a [`PromptError`] before any input is read.
//!
//! ## Example
//! ```rust
//! use promptline::utils::{IsBetween, Rejection, Validate};
//!
//! let percent = IsBetween::new(0u8, 100).unwrap();
//! assert_eq!(percent.validate("42"), Ok(42));
//! assert!(matches!(percent.validate("101"), Err(Rejection::OutOfBounds(..))));
//! assert_eq!(percent.validate("   "), Err(Rejection::Blank));
//! ```
use std::{error::Error, fmt::Display, str::FromStr};

use crate::error::PromptError;

/// Why a single line of user input was refused.
///
/// Every variant renders the exact retry message shown to the user:
/// - [`Blank`](Rejection::Blank): empty, whitespace-only, or missing line.
/// - [`Technical`](Rejection::Technical): the input source failed to deliver a line.
/// - [`OutOfBounds`](Rejection::OutOfBounds): not an integer, or outside `[min, max]`.
/// - [`Token`](Rejection::Token): matched neither of the two accepted tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    Blank,
    Technical,
    OutOfBounds(String, String),
    Token(String, String),
}

impl Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blank => write!(
                f,
                "Your input cannot be null, empty, or just white space. Please, try again."
            ),
            Self::Technical => write!(f, "There was a technical issue. Please, try again."),
            Self::OutOfBounds(min, max) => write!(
                f,
                "You must enter a number between {} and {}, Please, try again.",
                min, max
            ),
            Self::Token(yes, no) => write!(
                f,
                "You must input either \"{}\" or \"{}\". Please, try again.",
                yes, no
            ),
        }
    }
}

impl Error for Rejection {}

/// A single validation step applied to one raw input line.
///
/// `line` arrives with its line terminator already stripped but otherwise
/// untouched; each validator decides for itself whether to trim.
pub trait Validate {
    type Output;

    fn validate(&self, line: &str) -> Result<Self::Output, Rejection>;
}

/// Strips leading and trailing ASCII control characters and spaces (every
/// char `<= ' '`). Unicode spaces such as NBSP are kept and count as content.
pub(crate) fn trim_blank(s: &str) -> &str {
    s.trim_matches(|c: char| c <= ' ')
}

/// Returns `true` when `s` holds nothing but spaces and control characters.
pub(crate) fn is_blank(s: &str) -> bool {
    trim_blank(s).is_empty()
}

/// `-0`, `-00`, ... are zero; unsigned `FromStr` refuses the sign.
fn negative_zero(s: &str) -> bool {
    s.strip_prefix('-')
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b == b'0'))
}

/// Unicode-aware case-insensitive equality.
fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Accepts any line that is not blank and hands it back exactly as read.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotBlank;

impl Validate for NotBlank {
    type Output = String;

    fn validate(&self, line: &str) -> Result<String, Rejection> {
        if is_blank(line) {
            Err(Rejection::Blank)
        } else {
            Ok(line.to_string())
        }
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Primitive integer types accepted by [`IsBetween`].
///
/// Implemented for every signed and unsigned primitive integer; it cannot be
/// implemented outside this crate.
pub trait Integer: sealed::Sealed + FromStr + PartialOrd + Display + Copy {}

macro_rules! impl_integer {
    ($($t:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}
            impl Integer for $t {}
        )*
    };
}

impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Accepts a base-10 integer inside the inclusive range `[min, max]`.
///
/// The line is parsed as read, so surrounding whitespace makes it unparseable
/// and it is rejected with the bounds reminder. A signed zero (`-0`) is zero
/// for unsigned types too.
#[derive(Debug, Clone, Copy)]
pub struct IsBetween<T> {
    min: T,
    max: T,
}

impl<T: Integer> IsBetween<T> {
    /// Fails with [`PromptError::InvalidBounds`] when `min > max`.
    pub fn new(min: T, max: T) -> Result<Self, PromptError> {
        if max < min {
            return Err(PromptError::InvalidBounds {
                min: min.to_string(),
                max: max.to_string(),
            });
        }
        Ok(IsBetween { min, max })
    }

    pub fn min(&self) -> T {
        self.min
    }

    pub fn max(&self) -> T {
        self.max
    }

    fn out_of_bounds(&self) -> Rejection {
        Rejection::OutOfBounds(self.min.to_string(), self.max.to_string())
    }
}

impl<T: Integer> Validate for IsBetween<T> {
    type Output = T;

    fn validate(&self, line: &str) -> Result<T, Rejection> {
        let line = NotBlank.validate(line)?;

        let digits = if negative_zero(&line) { "0" } else { line.as_str() };

        match digits.parse::<T>() {
            Ok(n) if n >= self.min && n <= self.max => Ok(n),
            _ => Err(self.out_of_bounds()),
        }
    }
}

/// Maps one of two case-insensitive tokens onto `true` / `false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchTokens {
    true_token: String,
    false_token: String,
}

impl MatchTokens {
    /// Trims spaces and control characters off both tokens once.
    ///
    /// Fails with [`PromptError::InvalidTokens`] when either token is blank or
    /// the two are equal ignoring case.
    pub fn new(true_token: &str, false_token: &str) -> Result<Self, PromptError> {
        let true_token = trim_blank(true_token);
        let false_token = trim_blank(false_token);

        if true_token.is_empty() || false_token.is_empty() || eq_ignore_case(true_token, false_token)
        {
            return Err(PromptError::InvalidTokens);
        }

        Ok(MatchTokens {
            true_token: true_token.to_string(),
            false_token: false_token.to_string(),
        })
    }

    pub fn true_token(&self) -> &str {
        &self.true_token
    }

    pub fn false_token(&self) -> &str {
        &self.false_token
    }
}

impl Validate for MatchTokens {
    type Output = bool;

    fn validate(&self, line: &str) -> Result<bool, Rejection> {
        let line = NotBlank.validate(line)?;
        let answer = trim_blank(&line);

        if eq_ignore_case(answer, &self.true_token) {
            Ok(true)
        } else if eq_ignore_case(answer, &self.false_token) {
            Ok(false)
        } else {
            Err(Rejection::Token(
                self.true_token.clone(),
                self.false_token.clone(),
            ))
        }
    }
}
