//! The in-memory styled text buffer.

use std::ops::Range;

use crate::annotation::{Annotation, AttributeKind, ResolvedStyle};
use crate::error::SpanError;
use crate::span::{Span, SpanId, Spannable};

/// Plain text plus the annotation spans applied to it.
///
/// Offsets are character (Unicode scalar) indices, not bytes.
///
/// # Examples
///
/// ```
/// use spannable::{Annotation, Spannable, StyledText};
///
/// let mut text = StyledText::new("Hello World");
/// text.set_span(Annotation::Underline, 6..11).unwrap();
///
/// let segments: Vec<_> = text.segments().map(|(s, _)| s).collect();
/// assert_eq!(segments, ["Hello ", "World"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct StyledText {
    text: String,
    char_len: usize,
    spans: Vec<Span>,
    next_id: u64,
}

impl StyledText {
    /// Create a buffer with no spans.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let char_len = text.chars().count();
        Self {
            text,
            char_len,
            spans: Vec::new(),
            next_id: 0,
        }
    }

    /// Get the plain text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get all spans, in insertion order.
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Look up a span by id.
    pub fn span(&self, id: SpanId) -> Option<&Span> {
        self.spans.iter().find(|s| s.id == id)
    }

    /// All spans of one kind, in insertion order.
    pub fn spans_with_kind(&self, kind: AttributeKind) -> impl Iterator<Item = &Span> {
        self.spans.iter().filter(move |s| s.kind() == kind)
    }

    /// Returns true if there are no spans (plain text only).
    pub fn is_plain(&self) -> bool {
        self.spans.is_empty()
    }

    /// Length of the text in characters.
    pub fn len(&self) -> usize {
        self.char_len
    }

    /// Returns true if the text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Remove all spans.
    pub fn clear_spans(&mut self) {
        self.spans.clear();
    }

    /// Get the style at a character offset.
    ///
    /// Spans are layered in insertion order, so the newest span of a kind
    /// decides that kind's value.
    pub fn style_at(&self, offset: usize) -> ResolvedStyle {
        let mut result = ResolvedStyle::new();
        for span in &self.spans {
            if span.contains(offset) {
                result.apply(&span.annotation);
            }
        }
        result
    }

    /// Get all spans that cover a character offset.
    pub fn spans_at(&self, offset: usize) -> Vec<&Span> {
        self.spans.iter().filter(|s| s.contains(offset)).collect()
    }

    /// Iterate over styled segments.
    ///
    /// Yields `(text_slice, style)` for each run of characters whose set of
    /// covering spans is constant. Unstyled runs come with an empty style.
    pub fn segments(&self) -> SegmentIterator<'_> {
        SegmentIterator::new(self)
    }

    /// Byte offset of a character offset. Offsets past the end clamp to the
    /// text length.
    fn byte_offset(&self, char_offset: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_offset)
            .map(|(byte, _)| byte)
            .unwrap_or(self.text.len())
    }
}

impl Spannable for StyledText {
    fn char_len(&self) -> usize {
        self.char_len
    }

    fn spans_of_kind(&self, kind: AttributeKind, range: Range<usize>) -> Vec<SpanId> {
        self.spans
            .iter()
            .filter(|s| s.kind() == kind && s.intersects(&range))
            .map(|s| s.id)
            .collect()
    }

    fn remove_span(&mut self, id: SpanId) -> Option<Span> {
        let index = self.spans.iter().position(|s| s.id == id)?;
        Some(self.spans.remove(index))
    }

    fn set_span(
        &mut self,
        annotation: Annotation,
        range: Range<usize>,
    ) -> Result<SpanId, SpanError> {
        SpanError::check(&range, self.char_len)?;

        let id = SpanId(self.next_id);
        self.next_id += 1;
        self.spans.push(Span::new(id, range.start, range.end, annotation));
        Ok(id)
    }
}

/// Iterator over styled segments in a [`StyledText`].
pub struct SegmentIterator<'a> {
    text: &'a StyledText,
    pos: usize,
}

impl<'a> SegmentIterator<'a> {
    fn new(text: &'a StyledText) -> Self {
        Self { text, pos: 0 }
    }
}

impl<'a> Iterator for SegmentIterator<'a> {
    type Item = (&'a str, ResolvedStyle);

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.text.char_len {
            return None;
        }

        // Find the next boundary (where style changes)
        let mut end = self.text.char_len;
        for span in &self.text.spans {
            if span.start > self.pos && span.start < end {
                end = span.start;
            }
            if span.end > self.pos && span.end < end {
                end = span.end;
            }
        }

        let style = self.text.style_at(self.pos);
        let slice = &self.text.text[self.text.byte_offset(self.pos)..self.text.byte_offset(end)];
        self.pos = end;

        Some((slice, style))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::FontStyle;
    use crate::color::Color;

    #[test]
    fn plain_text() {
        let text = StyledText::new("Hello World");
        assert_eq!(text.text(), "Hello World");
        assert_eq!(text.len(), 11);
        assert!(text.is_plain());
    }

    #[test]
    fn len_counts_chars_not_bytes() {
        let text = StyledText::new("héllo");
        assert_eq!(text.len(), 5);
        assert_eq!(text.char_len(), 5);
    }

    #[test]
    fn set_span_assigns_fresh_ids() {
        let mut text = StyledText::new("Hello");
        let a = text.set_span(Annotation::Underline, 0..5).unwrap();
        let b = text.set_span(Annotation::Underline, 0..5).unwrap();
        assert_ne!(a, b);

        text.remove_span(a);
        let c = text.set_span(Annotation::Underline, 0..5).unwrap();
        assert_ne!(a, c);
        assert_eq!(text.spans().len(), 2);
    }

    #[test]
    fn set_span_rejects_out_of_bounds() {
        let mut text = StyledText::new("Hello");
        let err = text.set_span(Annotation::Underline, 0..6).unwrap_err();
        assert_eq!(
            err,
            SpanError::OutOfBounds {
                start: 0,
                end: 6,
                len: 5
            }
        );
        assert!(text.is_plain());
    }

    #[test]
    fn remove_missing_span() {
        let mut text = StyledText::new("Hello");
        assert!(text.remove_span(SpanId(42)).is_none());
    }

    #[test]
    fn spans_of_kind_filters_by_kind() {
        let mut text = StyledText::new("Hello World");
        let fg = text
            .set_span(Annotation::Foreground(Color::rgb(255, 0, 0)), 0..5)
            .unwrap();
        text.set_span(Annotation::Background(Color::rgb(0, 0, 255)), 0..5)
            .unwrap();

        assert_eq!(text.spans_of_kind(AttributeKind::Foreground, 0..5), [fg]);
        assert!(text.spans_of_kind(AttributeKind::Underline, 0..5).is_empty());
    }

    #[test]
    fn style_at() {
        let mut text = StyledText::new("Hello World");
        text.set_span(Annotation::Foreground(Color::rgb(255, 0, 0)), 0..5)
            .unwrap();

        assert!(text.style_at(0).foreground.is_some());
        assert!(text.style_at(6).foreground.is_none());
    }

    #[test]
    fn segments_iterator() {
        let mut text = StyledText::new("Hello World");
        text.set_span(Annotation::FontStyle(FontStyle::BOLD), 0..5)
            .unwrap();

        let segments: Vec<_> = text.segments().collect();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].0, "Hello");
        assert!(segments[0].1.is_bold());
        assert_eq!(segments[1].0, " World");
        assert!(!segments[1].1.is_bold());
    }

    #[test]
    fn segments_respect_multibyte_chars() {
        let mut text = StyledText::new("añb");
        text.set_span(Annotation::Underline, 1..2).unwrap();

        let segments: Vec<_> = text.segments().map(|(s, st)| (s, st.underline)).collect();
        assert_eq!(segments, [("a", false), ("ñ", true), ("b", false)]);
    }
}
