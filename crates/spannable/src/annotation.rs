//! Annotation types.
//!
//! An [`Annotation`] is a single visual property attached to a span. Each
//! annotation has an [`AttributeKind`]; a buffer holds at most one annotation
//! of a given kind over any character once markup has been applied.

use crate::color::Color;

bitflags::bitflags! {
    /// Typeface weight and slant.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct FontStyle: u8 {
        const BOLD = 0b01;
        const ITALIC = 0b10;
        const BOLD_ITALIC = Self::BOLD.bits() | Self::ITALIC.bits();
    }
}

/// The category a span's annotation falls into.
///
/// Overwrite semantics are scoped to a kind: a new annotation replaces
/// existing ones of the same kind, and leaves every other kind alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    Foreground,
    Background,
    RelativeSize,
    ScaleX,
    Subscript,
    Superscript,
    Underline,
    Strikethrough,
    FontStyle,
}

/// A visual property with its payload.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Annotation {
    /// Text color.
    Foreground(Color),
    /// Background color.
    Background(Color),
    /// Font size multiplier.
    RelativeSize(f32),
    /// Horizontal glyph scale multiplier.
    ScaleX(f32),
    Subscript,
    Superscript,
    Underline,
    Strikethrough,
    /// Bold and/or italic face.
    FontStyle(FontStyle),
}

impl Annotation {
    /// The attribute kind this annotation belongs to.
    pub fn kind(&self) -> AttributeKind {
        match self {
            Annotation::Foreground(_) => AttributeKind::Foreground,
            Annotation::Background(_) => AttributeKind::Background,
            Annotation::RelativeSize(_) => AttributeKind::RelativeSize,
            Annotation::ScaleX(_) => AttributeKind::ScaleX,
            Annotation::Subscript => AttributeKind::Subscript,
            Annotation::Superscript => AttributeKind::Superscript,
            Annotation::Underline => AttributeKind::Underline,
            Annotation::Strikethrough => AttributeKind::Strikethrough,
            Annotation::FontStyle(_) => AttributeKind::FontStyle,
        }
    }
}

/// The combined effect of every annotation covering one character.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResolvedStyle {
    pub foreground: Option<Color>,
    pub background: Option<Color>,
    pub relative_size: Option<f32>,
    pub scale_x: Option<f32>,
    pub subscript: bool,
    pub superscript: bool,
    pub underline: bool,
    pub strikethrough: bool,
    pub font_style: FontStyle,
}

impl ResolvedStyle {
    /// Create a new empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no property is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Layer an annotation on top of this style.
    ///
    /// Payload kinds replace the current value; flags are set.
    pub fn apply(&mut self, annotation: &Annotation) {
        match *annotation {
            Annotation::Foreground(color) => self.foreground = Some(color),
            Annotation::Background(color) => self.background = Some(color),
            Annotation::RelativeSize(factor) => self.relative_size = Some(factor),
            Annotation::ScaleX(factor) => self.scale_x = Some(factor),
            Annotation::Subscript => self.subscript = true,
            Annotation::Superscript => self.superscript = true,
            Annotation::Underline => self.underline = true,
            Annotation::Strikethrough => self.strikethrough = true,
            Annotation::FontStyle(style) => self.font_style = style,
        }
    }

    pub fn is_bold(&self) -> bool {
        self.font_style.contains(FontStyle::BOLD)
    }

    pub fn is_italic(&self) -> bool {
        self.font_style.contains(FontStyle::ITALIC)
    }
}
