//! Style rules: one per tag.
//!
//! A rule turns a directive's optional argument into the [`Annotation`] it
//! stands for. Rules are pure; attaching the result to a buffer is the
//! applicator's job.

use spannable::{Annotation, AttributeKind, FontStyle};

use crate::color::parse_hex_color;
use crate::error::DirectiveError;

/// Smallest relative size factor.
pub const SIZE_MIN: f32 = 0.5;
/// Largest relative size factor.
pub const SIZE_MAX: f32 = 2.0;
/// Smallest horizontal scale factor.
pub const SCALE_X_MIN: f32 = 0.1;
/// Largest horizontal scale factor.
pub const SCALE_X_MAX: f32 = 2.0;

/// The style a tag maps to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleRule {
    /// `c=RRGGBB`
    Foreground,
    /// `b=RRGGBB`
    Background,
    /// `s=factor`, clamped to [`SIZE_MIN`]..=[`SIZE_MAX`]
    RelativeSize,
    /// `x=factor`, clamped to [`SCALE_X_MIN`]..=[`SCALE_X_MAX`]
    ScaleX,
    Subscript,
    Superscript,
    Underline,
    Strikethrough,
    Italic,
    Bold,
    BoldItalic,
}

impl StyleRule {
    /// The markup tag for this rule.
    pub fn tag(self) -> &'static str {
        match self {
            StyleRule::Foreground => "c",
            StyleRule::Background => "b",
            StyleRule::RelativeSize => "s",
            StyleRule::ScaleX => "x",
            StyleRule::Subscript => "sub",
            StyleRule::Superscript => "sup",
            StyleRule::Underline => "underline",
            StyleRule::Strikethrough => "strike",
            StyleRule::Italic => "I",
            StyleRule::Bold => "B",
            StyleRule::BoldItalic => "BI",
        }
    }

    /// The attribute kind this rule writes.
    pub fn kind(self) -> AttributeKind {
        match self {
            StyleRule::Foreground => AttributeKind::Foreground,
            StyleRule::Background => AttributeKind::Background,
            StyleRule::RelativeSize => AttributeKind::RelativeSize,
            StyleRule::ScaleX => AttributeKind::ScaleX,
            StyleRule::Subscript => AttributeKind::Subscript,
            StyleRule::Superscript => AttributeKind::Superscript,
            StyleRule::Underline => AttributeKind::Underline,
            StyleRule::Strikethrough => AttributeKind::Strikethrough,
            StyleRule::Italic | StyleRule::Bold | StyleRule::BoldItalic => AttributeKind::FontStyle,
        }
    }

    /// Returns true if the rule does nothing without an argument.
    pub fn takes_argument(self) -> bool {
        matches!(
            self,
            StyleRule::Foreground
                | StyleRule::Background
                | StyleRule::RelativeSize
                | StyleRule::ScaleX
        )
    }

    /// Resolve the annotation for a directive argument.
    ///
    /// Returns `Ok(None)` when the rule needs an argument and none was given.
    /// Flag rules ignore any argument.
    ///
    /// # Examples
    ///
    /// ```
    /// use spannable::Annotation;
    /// use stylemark::StyleRule;
    ///
    /// assert_eq!(
    ///     StyleRule::RelativeSize.resolve(Some("5")).unwrap(),
    ///     Some(Annotation::RelativeSize(2.0))
    /// );
    /// assert_eq!(StyleRule::Foreground.resolve(None).unwrap(), None);
    /// assert!(StyleRule::Foreground.resolve(Some("nope")).is_err());
    /// ```
    pub fn resolve(self, arg: Option<&str>) -> Result<Option<Annotation>, DirectiveError> {
        let annotation = match self {
            StyleRule::Foreground => match arg {
                Some(hex) => Annotation::Foreground(self.color(hex)?),
                None => return Ok(None),
            },
            StyleRule::Background => match arg {
                Some(hex) => Annotation::Background(self.color(hex)?),
                None => return Ok(None),
            },
            StyleRule::RelativeSize => match arg {
                Some(value) => Annotation::RelativeSize(self.factor(value, SIZE_MIN, SIZE_MAX)?),
                None => return Ok(None),
            },
            StyleRule::ScaleX => match arg {
                Some(value) => {
                    Annotation::ScaleX(self.factor(value, SCALE_X_MIN, SCALE_X_MAX)?)
                }
                None => return Ok(None),
            },
            StyleRule::Subscript => Annotation::Subscript,
            StyleRule::Superscript => Annotation::Superscript,
            StyleRule::Underline => Annotation::Underline,
            StyleRule::Strikethrough => Annotation::Strikethrough,
            StyleRule::Italic => Annotation::FontStyle(FontStyle::ITALIC),
            StyleRule::Bold => Annotation::FontStyle(FontStyle::BOLD),
            StyleRule::BoldItalic => Annotation::FontStyle(FontStyle::BOLD_ITALIC),
        };
        Ok(Some(annotation))
    }

    fn color(self, hex: &str) -> Result<spannable::Color, DirectiveError> {
        parse_hex_color(hex).map_err(|source| DirectiveError::InvalidColor {
            tag: self.tag().to_string(),
            source,
        })
    }

    /// Parse a factor and clamp it. Infinities clamp to the nearest end.
    fn factor(self, value: &str, min: f32, max: f32) -> Result<f32, DirectiveError> {
        let factor = parse_float(value).ok_or_else(|| DirectiveError::InvalidNumber {
            tag: self.tag().to_string(),
            value: value.to_string(),
        })?;
        if factor.is_nan() {
            return Err(DirectiveError::NotANumber {
                tag: self.tag().to_string(),
            });
        }
        Ok(factor.clamp(min, max))
    }
}

/// Parse a float the way message clients write them: surrounding whitespace
/// is ignored and one trailing `f`/`F`/`d`/`D` type suffix is accepted.
fn parse_float(value: &str) -> Option<f32> {
    let value = value.trim();
    if let Ok(factor) = value.parse() {
        return Some(factor);
    }
    value
        .strip_suffix(['f', 'F', 'd', 'D'])
        .and_then(|digits| digits.parse().ok())
}
