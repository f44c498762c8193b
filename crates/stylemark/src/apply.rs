//! Applying a run's directives to a buffer.
//!
//! Each directive is resolved and applied on its own. A directive that fails
//! is logged and recorded in the [`ApplyReport`], and the loop carries on with
//! the next one.

use spannable::{Annotation, AttributeKind, SpanError, SpanId, Spannable};

use crate::entity::StyleRun;
use crate::error::DirectiveError;
use crate::parser::{Directive, parse_directives};
use crate::registry;

/// Why a directive had no effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// No rule is registered for the tag.
    UnknownTag,
    /// The rule needs an argument and the directive had none.
    MissingArgument,
}

/// What happened to one directive.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Applied(AttributeKind),
    Skipped(SkipReason),
    Failed(DirectiveError),
}

/// Per-directive outcomes of one [`apply`] call, in input order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApplyReport<'a> {
    entries: Vec<(Directive<'a>, Outcome)>,
}

impl<'a> ApplyReport<'a> {
    pub fn entries(&self) -> &[(Directive<'a>, Outcome)] {
        &self.entries
    }

    /// Kinds written, in order. A kind shows up once per directive.
    pub fn applied(&self) -> impl Iterator<Item = AttributeKind> + '_ {
        self.entries.iter().filter_map(|(_, outcome)| match outcome {
            Outcome::Applied(kind) => Some(*kind),
            _ => None,
        })
    }

    /// Directives that failed, with their errors.
    pub fn failures(&self) -> impl Iterator<Item = (&Directive<'a>, &DirectiveError)> {
        self.entries
            .iter()
            .filter_map(|(directive, outcome)| match outcome {
                Outcome::Failed(err) => Some((directive, err)),
                _ => None,
            })
    }

    /// Returns true if no directive failed.
    pub fn is_clean(&self) -> bool {
        self.failures().next().is_none()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn push(&mut self, directive: Directive<'a>, outcome: Outcome) {
        self.entries.push((directive, outcome));
    }
}

/// Replace the annotation of one kind over `start..end`.
///
/// Every span of the same kind found by a lookup over the range is removed,
/// then `annotation` is inserted with exclusive boundaries. The range is
/// checked first, so an out-of-bounds call leaves the buffer untouched.
pub fn apply_overlay<S: Spannable + ?Sized>(
    buffer: &mut S,
    annotation: Annotation,
    start: usize,
    end: usize,
) -> Result<SpanId, SpanError> {
    let range = start..end;
    SpanError::check(&range, buffer.char_len())?;

    for id in buffer.spans_of_kind(annotation.kind(), range.clone()) {
        buffer.remove_span(id);
    }
    buffer.set_span(annotation, range)
}

/// Apply one directive over a run.
///
/// Directive-level problems come back as an [`Outcome`]; only bad run bounds
/// are an `Err`.
pub fn apply_directive<S: Spannable + ?Sized>(
    buffer: &mut S,
    directive: &Directive<'_>,
    run: &StyleRun,
) -> Result<Outcome, SpanError> {
    let Some(rule) = registry::lookup(directive.tag) else {
        log::trace!("skipping unknown style tag {:?}", directive.tag);
        return Ok(Outcome::Skipped(SkipReason::UnknownTag));
    };

    match rule.resolve(directive.arg) {
        Ok(Some(annotation)) => {
            apply_overlay(buffer, annotation, run.start(), run.end())?;
            log::trace!(
                "applied {:?} over {}..{}",
                annotation,
                run.start(),
                run.end()
            );
            Ok(Outcome::Applied(annotation.kind()))
        }
        Ok(None) => {
            log::debug!("style tag {:?} needs an argument", directive.tag);
            Ok(Outcome::Skipped(SkipReason::MissingArgument))
        }
        Err(err) => {
            log::warn!(
                "ignoring style directive {:?} (arg {:?}): {}",
                directive.tag,
                directive.arg,
                err
            );
            Ok(Outcome::Failed(err))
        }
    }
}

/// Apply every directive of `run` to `buffer`, in order.
///
/// Later directives win over earlier ones of the same attribute kind. A
/// malformed directive never stops its siblings.
///
/// # Examples
///
/// ```
/// use spannable::{Color, StyledText};
/// use stylemark::{StyleRun, apply};
///
/// let mut text = StyledText::new("Hello World");
/// let run = StyleRun::new(0, 5, "c=FF0000;B;c=nothex");
/// let report = apply(&mut text, &run).unwrap();
///
/// assert_eq!(report.failures().count(), 1);
/// let style = text.style_at(0);
/// assert_eq!(style.foreground, Some(Color::rgb(255, 0, 0)));
/// assert!(style.is_bold());
/// ```
pub fn apply<'a, S: Spannable + ?Sized>(
    buffer: &mut S,
    run: &'a StyleRun,
) -> Result<ApplyReport<'a>, SpanError> {
    let mut report = ApplyReport::default();
    for directive in parse_directives(run.directives()) {
        let outcome = apply_directive(buffer, &directive, run)?;
        report.push(directive, outcome);
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use spannable::{Color, FontStyle, StyledText};

    #[test]
    fn overlay_replaces_same_kind() {
        let mut text = StyledText::new("Hello");
        apply_overlay(&mut text, Annotation::Foreground(Color::rgb(255, 0, 0)), 0, 5).unwrap();
        apply_overlay(&mut text, Annotation::Foreground(Color::rgb(0, 255, 0)), 0, 5).unwrap();

        assert_eq!(text.spans().len(), 1);
        assert_eq!(
            text.spans()[0].annotation,
            Annotation::Foreground(Color::rgb(0, 255, 0))
        );
    }

    #[test]
    fn overlay_keeps_other_kinds() {
        let mut text = StyledText::new("Hello");
        apply_overlay(&mut text, Annotation::Underline, 0, 5).unwrap();
        apply_overlay(&mut text, Annotation::Strikethrough, 0, 5).unwrap();

        assert_eq!(text.spans().len(), 2);
    }

    #[test]
    fn overlay_removes_whole_intersecting_span() {
        let mut text = StyledText::new("Hello World");
        apply_overlay(&mut text, Annotation::FontStyle(FontStyle::BOLD), 0, 11).unwrap();
        apply_overlay(&mut text, Annotation::FontStyle(FontStyle::ITALIC), 6, 11).unwrap();

        assert_eq!(text.spans().len(), 1);
        assert!(!text.style_at(0).is_bold());
        assert!(text.style_at(6).is_italic());
    }

    #[test]
    fn overlay_leaves_touching_span() {
        let mut text = StyledText::new("Hello World");
        apply_overlay(&mut text, Annotation::Underline, 0, 5).unwrap();
        apply_overlay(&mut text, Annotation::Underline, 5, 11).unwrap();

        assert_eq!(text.spans().len(), 2);
    }

    #[test]
    fn overlay_zero_length() {
        let mut text = StyledText::new("Hello");
        apply_overlay(&mut text, Annotation::Underline, 2, 2).unwrap();

        assert_eq!(text.spans().len(), 1);
        assert!(text.spans_at(2).is_empty());
        assert!(!text.style_at(1).underline);
    }

    #[test]
    fn overlay_out_of_bounds_leaves_buffer_untouched() {
        let mut text = StyledText::new("Hello");
        apply_overlay(&mut text, Annotation::Underline, 0, 5).unwrap();

        let err = apply_overlay(&mut text, Annotation::Underline, 3, 9).unwrap_err();
        assert!(matches!(err, SpanError::OutOfBounds { .. }));
        assert_eq!(text.spans().len(), 1);
        assert_eq!(text.spans()[0].range(), 0..5);
    }

    #[test]
    fn report_tracks_each_directive() {
        let mut text = StyledText::new("Hello");
        let run = StyleRun::new(0, 5, "c;zzz;B;s=wide");
        let report = apply(&mut text, &run).unwrap();

        let outcomes: Vec<_> = report.entries().iter().map(|(_, o)| o.clone()).collect();
        assert_eq!(
            outcomes,
            [
                Outcome::Skipped(SkipReason::MissingArgument),
                Outcome::Skipped(SkipReason::UnknownTag),
                Outcome::Applied(AttributeKind::FontStyle),
                Outcome::Failed(DirectiveError::InvalidNumber {
                    tag: "s".to_string(),
                    value: "wide".to_string(),
                }),
            ]
        );
        assert!(!report.is_clean());
        assert_eq!(report.applied().collect::<Vec<_>>(), [AttributeKind::FontStyle]);
    }

    #[test]
    fn bad_bounds_propagate() {
        let mut text = StyledText::new("Hi");
        let run = StyleRun::new(0, 10, "foo;B");
        let err = apply(&mut text, &run).unwrap_err();
        assert_eq!(
            err,
            SpanError::OutOfBounds {
                start: 0,
                end: 10,
                len: 2
            }
        );
        assert!(text.is_plain());
    }

    #[allow(clippy::reversed_empty_ranges)]
    #[test]
    fn reversed_run_propagates() {
        let mut text = StyledText::new("Hello");
        let run = StyleRun::new(4, 2, "B");
        let err = apply(&mut text, &run).unwrap_err();
        assert_eq!(err, SpanError::InvalidRange { start: 4, end: 2 });
        assert!(text.is_plain());
    }

    #[test]
    fn bad_bounds_unnoticed_without_insertion() {
        let mut text = StyledText::new("Hi");
        let run = StyleRun::new(0, 10, "foo;c");
        let report = apply(&mut text, &run).unwrap();
        assert_eq!(report.len(), 2);
        assert!(report.applied().next().is_none());
    }
}
