//! Parser for directive strings.
//!
//! A directive string is a `;`-separated list of `tag[=value]` units, e.g.
//! `c=FF0000;s=1.5;B`.

mod directive;

pub use directive::{
    ARGUMENT_SEPARATOR, DIRECTIVE_SEPARATOR, Directive, Directives, parse_directives,
};
