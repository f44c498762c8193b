//! Hex color arguments.
//!
//! Color directives carry their hex digits without the leading `#`:
//! `c=FF0000` is opaque red, `c=80FF0000` is half-transparent red.

use nom::{IResult, bytes::complete::take_while1, combinator::all_consuming};
use spannable::Color;

use crate::error::ColorParseError;

/// Parse a run of ASCII hex digits.
fn hex_digits(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_hexdigit())(input)
}

/// Parse a hex color argument (the part after `#`).
///
/// Accepts `RRGGBB` (opaque) and `AARRGGBB`, digits in either case.
///
/// # Examples
///
/// ```
/// use spannable::Color;
/// use stylemark::color::parse_hex_color;
///
/// assert_eq!(parse_hex_color("ff5733").unwrap(), Color::rgb(255, 87, 51));
/// assert_eq!(parse_hex_color("80000000").unwrap(), Color::from_argb(0x8000_0000));
/// assert!(parse_hex_color("#ff5733").is_err());
/// ```
pub fn parse_hex_color(hex: &str) -> Result<Color, ColorParseError> {
    let (_, digits) =
        all_consuming(hex_digits)(hex).map_err(|_| ColorParseError::InvalidHex(hex.to_string()))?;

    let value = match digits.len() {
        6 | 8 => u32::from_str_radix(digits, 16)
            .map_err(|_| ColorParseError::InvalidHex(hex.to_string()))?,
        n => return Err(ColorParseError::InvalidLength(n)),
    };

    if digits.len() == 6 {
        Ok(Color::from_argb(0xFF00_0000 | value))
    } else {
        Ok(Color::from_argb(value))
    }
}
