//! Inline style markup for message entities.
//!
//! A message entity's language field can carry a compact style markup string
//! instead of a code language, e.g. `c=FF0000;s=1.5;B`. This crate turns such
//! a string into annotation spans on a [`Spannable`](spannable::Spannable)
//! buffer.
//!
//! # Markup
//!
//! Directives are separated by `;`; a directive's argument follows the first
//! `=`:
//!
//! | tag | effect |
//! |---|---|
//! | `c=RRGGBB` | foreground color (`AARRGGBB` also accepted) |
//! | `b=RRGGBB` | background color |
//! | `s=factor` | relative font size, clamped to 0.5..=2.0 |
//! | `x=factor` | horizontal scale, clamped to 0.1..=2.0 |
//! | `sub`, `sup` | subscript, superscript |
//! | `underline`, `strike` | underline, strikethrough |
//! | `I`, `B`, `BI` | italic, bold, bold italic |
//!
//! Unknown tags are ignored. A malformed argument only drops its own
//! directive.
//!
//! # Usage
//!
//! ```
//! use spannable::{AttributeKind, StyledText};
//! use stylemark::{MessageEntity, StyleRun, apply, validate};
//!
//! let entity = MessageEntity::new(0, 5, Some("c=FF0000;B".into()));
//! assert!(validate(Some(&entity)));
//!
//! let mut text = StyledText::new("Hello World");
//! let run = StyleRun::from_entity(&entity).unwrap();
//! let report = apply(&mut text, &run).unwrap();
//!
//! assert!(report.is_clean());
//! assert_eq!(
//!     report.applied().collect::<Vec<_>>(),
//!     [AttributeKind::Foreground, AttributeKind::FontStyle]
//! );
//! ```

pub mod apply;
pub mod color;
pub mod entity;
pub mod error;
pub mod parser;
pub mod registry;
pub mod rule;

// Re-export main types at crate root
pub use apply::{ApplyReport, Outcome, SkipReason, apply, apply_directive, apply_overlay};
pub use entity::{LanguageTagged, MessageEntity, StyleRun, validate};
pub use error::{ColorParseError, DirectiveError};
pub use parser::{Directive, parse_directives};
pub use rule::StyleRule;
