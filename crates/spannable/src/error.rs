//! Error types for span insertion.

use std::ops::Range;

use thiserror::Error;

/// Errors that can occur when attaching a span to a buffer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpanError {
    /// The range starts after it ends.
    #[error("invalid range {start}..{end} (start > end)")]
    InvalidRange { start: usize, end: usize },

    /// The range reaches past the end of the text.
    #[error("range {start}..{end} out of bounds for text of len {len}")]
    OutOfBounds { start: usize, end: usize, len: usize },
}

impl SpanError {
    /// Check that `range` is a valid character range for a text of `len` chars.
    pub fn check(range: &Range<usize>, len: usize) -> Result<(), SpanError> {
        if range.start > range.end {
            return Err(SpanError::InvalidRange {
                start: range.start,
                end: range.end,
            });
        }
        if range.end > len {
            return Err(SpanError::OutOfBounds {
                start: range.start,
                end: range.end,
                len,
            });
        }
        Ok(())
    }
}
