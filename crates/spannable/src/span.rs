//! Span type and the buffer trait spans are stored through.

use std::ops::Range;

use crate::annotation::{Annotation, AttributeKind};
use crate::error::SpanError;

/// Stable handle to a span inside a buffer.
///
/// Handles are never reused by [`StyledText`](crate::StyledText), so a
/// removed span's id stays dead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpanId(pub u64);

/// An annotation attached to a half-open character range.
///
/// Boundaries are exclusive on both sides: text inserted at `start` or `end`
/// would not be covered. A zero-length span covers nothing.
#[derive(Clone, Debug, PartialEq)]
pub struct Span {
    /// Handle assigned by the owning buffer.
    pub id: SpanId,
    /// Start character offset (inclusive).
    pub start: usize,
    /// End character offset (exclusive).
    pub end: usize,
    /// The property this span carries.
    pub annotation: Annotation,
}

impl Span {
    pub fn new(id: SpanId, start: usize, end: usize, annotation: Annotation) -> Self {
        Self {
            id,
            start,
            end,
            annotation,
        }
    }

    /// The attribute kind of this span's annotation.
    pub fn kind(&self) -> AttributeKind {
        self.annotation.kind()
    }

    /// The covered character range.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Returns true if this span covers a zero-length range.
    pub fn is_zero_length(&self) -> bool {
        self.start >= self.end
    }

    /// Returns the number of characters covered.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if this span covers a given character offset.
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end
    }

    /// Check if this span shares at least one character with another.
    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Check if this span is found by a lookup over `range`.
    ///
    /// Closed-interval intersection, except that two non-empty ranges that
    /// only touch at a boundary do not match. Empty spans or queries sitting
    /// on the other range's boundary do match.
    pub fn intersects(&self, range: &Range<usize>) -> bool {
        if self.start > range.end || self.end < range.start {
            return false;
        }
        if self.start != self.end
            && range.start != range.end
            && (self.start == range.end || self.end == range.start)
        {
            return false;
        }
        true
    }
}

/// A text buffer that can hold annotation spans.
///
/// This is the only surface markup processing needs: lookup by kind within a
/// range, removal, and insertion over a half-open range.
pub trait Spannable {
    /// Length of the underlying text in characters.
    fn char_len(&self) -> usize;

    /// Ids of the spans of `kind` that intersect `range`, in insertion order.
    ///
    /// See [`Span::intersects`] for the boundary rules.
    fn spans_of_kind(&self, kind: AttributeKind, range: Range<usize>) -> Vec<SpanId>;

    /// Detach a span. Returns `None` if the id is not present.
    fn remove_span(&mut self, id: SpanId) -> Option<Span>;

    /// Attach `annotation` over `range` with exclusive boundaries.
    fn set_span(&mut self, annotation: Annotation, range: Range<usize>)
    -> Result<SpanId, SpanError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(start: usize, end: usize) -> Span {
        Span::new(SpanId(0), start, end, Annotation::Underline)
    }

    #[test]
    fn span_len() {
        assert_eq!(span(5, 10).len(), 5);
        assert_eq!(span(5, 5).len(), 0);
        assert!(span(5, 5).is_zero_length());
    }

    #[test]
    fn span_contains() {
        let s = span(5, 10);
        assert!(!s.contains(4));
        assert!(s.contains(5));
        assert!(s.contains(9));
        assert!(!s.contains(10));

        assert!(!span(3, 3).contains(3));
    }

    #[test]
    fn span_overlaps() {
        let span1 = span(0, 10);
        let span2 = span(5, 15);
        let span3 = span(10, 20);

        assert!(span1.overlaps(&span2));
        assert!(span2.overlaps(&span1));
        assert!(!span1.overlaps(&span3));
        assert!(span2.overlaps(&span3));
    }

    #[test]
    fn intersects_overlapping_and_contained() {
        assert!(span(0, 10).intersects(&(5..15)));
        assert!(span(2, 4).intersects(&(0..10)));
        assert!(span(0, 10).intersects(&(0..10)));
    }

    #[test]
    fn intersects_ignores_touching_non_empty() {
        assert!(!span(0, 5).intersects(&(5..10)));
        assert!(!span(5, 10).intersects(&(0..5)));
        assert!(!span(0, 5).intersects(&(7..10)));
    }

    #[test]
    fn intersects_empty_on_boundary() {
        // Empty span at the edge of a query.
        assert!(span(5, 5).intersects(&(0..5)));
        assert!(span(5, 5).intersects(&(5..10)));
        // Empty query at the edge of a span.
        assert!(span(0, 5).intersects(&(5..5)));
        assert!(span(5, 5).intersects(&(5..5)));
        assert!(!span(6, 6).intersects(&(0..5)));
    }
}
