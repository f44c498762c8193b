//! Error types for style markup processing.

use thiserror::Error;

/// Errors that can occur when parsing a directive's hex color argument.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Empty, or contains something other than hex digits.
    #[error("invalid hex color: #{0}")]
    InvalidHex(String),

    /// Hex digits parsed, but neither `RRGGBB` nor `AARRGGBB`.
    #[error("hex color must have 6 or 8 digits, got {0}")]
    InvalidLength(usize),
}

/// Errors raised by a single style directive.
///
/// These never abort a run: the applicator records them and moves on to the
/// next directive.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DirectiveError {
    /// Color argument could not be parsed.
    #[error("invalid color for `{tag}`: {source}")]
    InvalidColor {
        tag: String,
        source: ColorParseError,
    },

    /// Factor argument is not a number.
    #[error("invalid number for `{tag}`: {value:?}")]
    InvalidNumber { tag: String, value: String },

    /// Factor argument parsed to NaN.
    #[error("factor for `{tag}` is NaN")]
    NotANumber { tag: String },
}

impl DirectiveError {
    /// The tag of the directive that failed.
    pub fn tag(&self) -> &str {
        match self {
            DirectiveError::InvalidColor { tag, .. }
            | DirectiveError::InvalidNumber { tag, .. }
            | DirectiveError::NotANumber { tag } => tag,
        }
    }
}
