//! Styled text buffer with per-attribute span annotations.
//!
//! This crate provides the mutable buffer that inline style markup is applied
//! to: a run of plain text plus a list of [`Span`]s, each carrying one
//! [`Annotation`] over a half-open character range.
//!
//! # Overview
//!
//! Every annotation belongs to exactly one [`AttributeKind`]:
//!
//! - `Foreground` / `Background` - text and background [`Color`]
//! - `RelativeSize` - font size factor
//! - `ScaleX` - horizontal glyph scale factor
//! - `Subscript`, `Superscript`, `Underline`, `Strikethrough` - flags
//! - `FontStyle` - bold/italic face ([`FontStyle`])
//!
//! The [`Spannable`] trait is the seam between markup processing and whatever
//! actually stores spans. [`StyledText`] is the in-crate implementation.
//!
//! # Usage
//!
//! ```
//! use spannable::{Annotation, AttributeKind, Color, Spannable, StyledText};
//!
//! let mut text = StyledText::new("Hello World");
//! text.set_span(Annotation::Foreground(Color::rgb(255, 0, 0)), 0..5).unwrap();
//!
//! assert_eq!(text.spans_of_kind(AttributeKind::Foreground, 0..5).len(), 1);
//! assert!(text.style_at(0).foreground.is_some());
//! assert!(text.style_at(6).foreground.is_none());
//! ```

pub mod annotation;
pub mod color;
pub mod error;
pub mod span;
pub mod text;

// Re-export main types at crate root
pub use annotation::{Annotation, AttributeKind, FontStyle, ResolvedStyle};
pub use color::Color;
pub use error::SpanError;
pub use span::{Span, SpanId, Spannable};
pub use text::{SegmentIterator, StyledText};
