//! The tag -> rule table.
//!
//! Built at compile time and never mutated, so lookups need no locking and
//! are safe from any thread. Tags match exactly and case-sensitively: `b` is
//! background color, `B` is bold.

use phf::phf_map;

use crate::rule::StyleRule;

/// Map of markup tags to their rules.
pub static STYLE_RULES: phf::Map<&'static str, StyleRule> = phf_map! {
    "c" => StyleRule::Foreground,
    "b" => StyleRule::Background,
    "s" => StyleRule::RelativeSize,
    "x" => StyleRule::ScaleX,
    "sub" => StyleRule::Subscript,
    "sup" => StyleRule::Superscript,
    "underline" => StyleRule::Underline,
    "strike" => StyleRule::Strikethrough,
    "I" => StyleRule::Italic,
    "B" => StyleRule::Bold,
    "BI" => StyleRule::BoldItalic,
};

/// Find the rule for a tag. Unknown tags return `None`.
pub fn lookup(tag: &str) -> Option<StyleRule> {
    STYLE_RULES.get(tag).copied()
}

/// All registered tags, in no particular order.
pub fn tags() -> impl Iterator<Item = &'static str> {
    STYLE_RULES.keys().copied()
}

/// Number of registered tags.
pub fn len() -> usize {
    STYLE_RULES.len()
}
