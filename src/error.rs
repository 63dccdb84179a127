//! Error types shared across the library.
//!
//! Parsing failures and out-of-domain arguments are surfaced to the caller;
//! nothing is retried or swallowed. Operations that can legitimately produce
//! "no result" (like same-day-last-month) return `Option` instead.

/// Errors produced by parsing and argument validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// The input string does not match the expected pattern.
    #[error("input `{input}` does not match pattern `{pattern}`")]
    Format { input: String, pattern: String },

    /// Out-of-domain input, such as a week number of zero.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl DateError {
    /// Build a [`DateError::Format`] from the offending input and pattern.
    pub(crate) fn format(input: &str, pattern: &str) -> Self {
        DateError::Format {
            input: input.to_string(),
            pattern: pattern.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DateError>;
