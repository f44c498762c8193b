//! Inline style markup for message entities.
//!
//! Re-exports the markup core ([`stylemark`]) and the styled text buffer
//! ([`spannable`]) it writes to.
//!
//! ```
//! use stylemark_rs::{StyleRun, StyledText, apply};
//!
//! let mut text = StyledText::new("Hello World");
//! apply(&mut text, &StyleRun::new(6, 11, "underline;s=1.5")).unwrap();
//!
//! assert!(text.style_at(6).underline);
//! assert_eq!(text.style_at(6).relative_size, Some(1.5));
//! ```

pub use spannable;
pub use stylemark;

pub use spannable::{
    Annotation, AttributeKind, Color, FontStyle, ResolvedStyle, Span, SpanError, SpanId,
    Spannable, StyledText,
};
pub use stylemark::{
    ApplyReport, ColorParseError, Directive, DirectiveError, LanguageTagged, MessageEntity,
    Outcome, SkipReason, StyleRule, StyleRun, apply, apply_directive, apply_overlay,
    parse_directives, validate,
};
