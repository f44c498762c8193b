//! Splitting directive strings into `(tag, arg)` pairs.

use std::str::Split;

/// Separates directives within a run's markup string.
pub const DIRECTIVE_SEPARATOR: char = ';';

/// Separates a directive's tag from its argument. Only the first one counts.
pub const ARGUMENT_SEPARATOR: char = '=';

/// One `tag[=value]` unit.
///
/// Content is kept verbatim: no trimming, no case folding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Directive<'a> {
    /// Everything before the first `=` (or the whole segment).
    pub tag: &'a str,
    /// Everything after the first `=`, if there was one.
    pub arg: Option<&'a str>,
}

impl<'a> Directive<'a> {
    /// Parse a single segment.
    ///
    /// # Examples
    ///
    /// ```
    /// use stylemark::parser::Directive;
    ///
    /// let d = Directive::parse("c=FF0000");
    /// assert_eq!(d.tag, "c");
    /// assert_eq!(d.arg, Some("FF0000"));
    ///
    /// let d = Directive::parse("x=a=b");
    /// assert_eq!(d.arg, Some("a=b"));
    ///
    /// assert_eq!(Directive::parse("B").arg, None);
    /// ```
    pub fn parse(segment: &'a str) -> Self {
        match segment.split_once(ARGUMENT_SEPARATOR) {
            Some((tag, arg)) => Self {
                tag,
                arg: Some(arg),
            },
            None => Self {
                tag: segment,
                arg: None,
            },
        }
    }

    /// The tag followed by the argument, if any.
    ///
    /// Always one or two elements long.
    pub fn args(&self) -> Vec<&'a str> {
        let mut args = vec![self.tag];
        args.extend(self.arg);
        args
    }

    /// Returns true if the segment was empty.
    pub fn is_empty(&self) -> bool {
        self.tag.is_empty() && self.arg.is_none()
    }
}

/// Lazy iterator over the directives of a markup string.
#[derive(Clone, Debug)]
pub struct Directives<'a> {
    segments: Split<'a, char>,
}

impl<'a> Iterator for Directives<'a> {
    type Item = Directive<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.segments.next().map(Directive::parse)
    }
}

/// Split a markup string into ordered directives.
///
/// Every `;` starts a new segment, so empty segments are yielded too; they
/// carry an empty tag that no rule matches.
///
/// # Examples
///
/// ```
/// use stylemark::parser::parse_directives;
///
/// let tags: Vec<_> = parse_directives("c=FF0000;;B").map(|d| d.tag).collect();
/// assert_eq!(tags, ["c", "", "B"]);
/// ```
pub fn parse_directives(input: &str) -> Directives<'_> {
    Directives {
        segments: input.split(DIRECTIVE_SEPARATOR),
    }
}
