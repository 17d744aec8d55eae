//! Parse textual color notations into a canonical [`Color`].
//!
//! Supported inputs:
//! - `#RRGGBB` (either case)
//! - `rgba(r, g, b, a)`, with exactly one space after each comma
//! - `rgb(r, g, b)`
//! - `hsl(h, s%, l%)`
//!
//! Input that matches none of the prefixes is read as hex: six digits after
//! a first character that can be anything.

use std::{str::FromStr, sync::LazyLock};

use regex::Regex;
use thiserror::Error;

use crate::{
    color::{Color, Component},
    models::{Hsl, Model},
};

/// Matches anywhere in the input, so trailing text after `)` is ignored.
static RGBA_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"rgba?\(([0-9]+), ([0-9]+), ([0-9]+), ([0-9]*\.?[0-9]+)\)")
        .expect("rgba regex pattern is valid")
});

static RGB_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^rgb\(([0-9]+), ([0-9]+), ([0-9]+)\)$").expect("rgb regex pattern is valid")
});

static HSL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^hsl\(([0-9]*\.?[0-9]+), ([0-9]*\.?[0-9]+)%, ([0-9]*\.?[0-9]+)%\)$")
        .expect("hsl regex pattern is valid")
});

/// Reasons a string could not be parsed into a [`Color`]. Each variant holds
/// the rejected input.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Not one character followed by exactly six hex digits.
    #[error("malformed hex color: {0:?}")]
    MalformedHex(String),
    /// An `rgb(`/`rgba` input that does not match the notation, or has a
    /// channel above 255.
    #[error("malformed rgb()/rgba() color: {0:?}")]
    MalformedRgba(String),
    /// An `hsl(` input that does not match the notation.
    #[error("malformed hsl() color: {0:?}")]
    MalformedHsl(String),
    /// Empty input or a functional notation that is not supported.
    #[error("unsupported color format: {0:?}")]
    UnsupportedFormat(String),
}

/// The notation an input is dispatched to, decided from its prefix only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Notation {
    Rgba,
    Rgb,
    Hsl,
    Hex,
    Unsupported,
}

impl Notation {
    fn sniff(input: &str) -> Self {
        if input.starts_with("rgba") {
            Self::Rgba
        } else if input.starts_with('#') {
            Self::Hex
        } else if input.starts_with("rgb(") {
            Self::Rgb
        } else if input.starts_with("hsl(") {
            Self::Hsl
        } else if input.is_empty() || is_functional(input) {
            Self::Unsupported
        } else {
            Self::Hex
        }
    }
}

/// True for inputs shaped like `name(...`.
fn is_functional(input: &str) -> bool {
    input.split_once('(').is_some_and(|(name, _)| {
        !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphabetic())
    })
}

/// Parse any supported notation into a [`Color`].
pub fn parse(input: &str) -> Result<Color, ParseError> {
    let notation = Notation::sniff(input);
    tracing::trace!(input, ?notation, "parsing color");

    let result = match notation {
        Notation::Rgba => parse_rgba(input),
        Notation::Rgb => parse_rgb(input),
        Notation::Hsl => parse_hsl(input),
        Notation::Hex => parse_hex(input),
        Notation::Unsupported => Err(ParseError::UnsupportedFormat(input.to_owned())),
    };

    if let Err(err) = &result {
        tracing::debug!(%err, "rejected color input");
    }

    result
}

/// Parse the two-digit channels that follow the first character. The first
/// character is not checked and may be any `char`.
pub(crate) fn parse_hex(hex: &str) -> Result<Color, ParseError> {
    let malformed = || ParseError::MalformedHex(hex.to_owned());

    let mut chars = hex.chars();
    chars.next().ok_or_else(malformed)?;
    let digits = chars.as_str();

    // `from_str_radix` also accepts a leading sign.
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(malformed());
    }

    let channel = |start: usize| {
        u8::from_str_radix(&digits[start..start + 2], 16).map_err(|_| malformed())
    };

    Ok(Color::new(channel(0)?, channel(2)?, channel(4)?, 1.0))
}

/// Parse `rgba(r, g, b, a)`. Also accepts `rgb(r, g, b, a)`.
pub(crate) fn parse_rgba(rgba: &str) -> Result<Color, ParseError> {
    let malformed = || ParseError::MalformedRgba(rgba.to_owned());

    let caps = RGBA_REGEX.captures(rgba).ok_or_else(malformed)?;
    let channel = |i: usize| caps[i].parse::<u8>().map_err(|_| malformed());
    let alpha = caps[4]
        .parse::<Component>()
        .map_err(|_| malformed())?;

    Ok(Color::new(channel(1)?, channel(2)?, channel(3)?, alpha))
}

fn parse_rgb(rgb: &str) -> Result<Color, ParseError> {
    let malformed = || ParseError::MalformedRgba(rgb.to_owned());

    let caps = RGB_REGEX.captures(rgb).ok_or_else(malformed)?;
    let channel = |i: usize| caps[i].parse::<u8>().map_err(|_| malformed());

    Ok(Color::new(channel(1)?, channel(2)?, channel(3)?, 1.0))
}

fn parse_hsl(hsl: &str) -> Result<Color, ParseError> {
    let malformed = || ParseError::MalformedHsl(hsl.to_owned());

    let caps = HSL_REGEX.captures(hsl).ok_or_else(malformed)?;
    let component = |i: usize| caps[i].parse::<Component>().map_err(|_| malformed());

    Ok(Hsl::new(component(1)?, component(2)?, component(3)?).to_color(1.0))
}

impl Color {
    /// Parse a color from any supported notation.
    /// ```rust
    /// use swatch::Color;
    /// let red = Color::parse("#FF0000").unwrap();
    /// assert_eq!(red.to_rgb(), "rgb(255, 0, 0)");
    /// ```
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        parse(input)
    }
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_by_prefix() {
        assert_eq!(Notation::sniff("rgba(1, 2, 3, 0.5)"), Notation::Rgba);
        assert_eq!(Notation::sniff("rgbafoo"), Notation::Rgba);
        assert_eq!(Notation::sniff("#123456"), Notation::Hex);
        assert_eq!(Notation::sniff("rgb(1, 2, 3)"), Notation::Rgb);
        assert_eq!(Notation::sniff("hsl(1, 2%, 3%)"), Notation::Hsl);
        assert_eq!(Notation::sniff("cmyk(0, 0, 0, 0)"), Notation::Unsupported);
        assert_eq!(Notation::sniff("hsla(1, 2%, 3%, 1)"), Notation::Unsupported);
        assert_eq!(Notation::sniff(""), Notation::Unsupported);
        assert_eq!(Notation::sniff("xFF0000"), Notation::Hex);
        assert_eq!(Notation::sniff("(FF0000"), Notation::Hex);
    }

    #[test]
    fn hex() {
        assert_eq!(parse("#FF0000"), Ok(Color::new(255, 0, 0, 1.0)));
        assert_eq!(parse("#ff8000"), Ok(Color::new(255, 128, 0, 1.0)));
        // The first character is skipped, whatever it is.
        assert_eq!(parse("xFF0000"), Ok(Color::new(255, 0, 0, 1.0)));
        assert_eq!(parse("éFF0000"), Ok(Color::new(255, 0, 0, 1.0)));
        assert_eq!(parse("🎨00FF00"), Ok(Color::new(0, 255, 0, 1.0)));
    }

    #[test]
    fn malformed_hex() {
        for input in ["#FF000", "#FF00000", "FF0000", "#GG0000", "#+F0000", "#F-0000", "éFF00"] {
            assert_eq!(
                parse(input),
                Err(ParseError::MalformedHex(input.to_owned())),
                "{input}"
            );
        }
    }

    #[test]
    fn rgba() {
        assert_eq!(
            parse("rgba(10, 20, 30, 0.5)"),
            Ok(Color::new(10, 20, 30, 0.5))
        );
        assert_eq!(parse("rgba(10, 20, 30, 1)"), Ok(Color::new(10, 20, 30, 1.0)));
        assert_eq!(parse("rgba(10, 20, 30, .25)"), Ok(Color::new(10, 20, 30, 0.25)));
        // Alpha is not range checked.
        assert_eq!(parse("rgba(0, 0, 0, 2.5)"), Ok(Color::new(0, 0, 0, 2.5)));
        // Text after the closing parenthesis is ignored.
        assert_eq!(parse("rgba(1, 2, 3, 0.5);"), Ok(Color::new(1, 2, 3, 0.5)));
    }

    #[test]
    fn malformed_rgba() {
        for input in [
            "rgba(10,20,30,0.5)",
            "rgba(10, 20, 30)",
            "rgba(256, 0, 0, 1)",
            "rgba(-1, 0, 0, 1)",
            "rgba(1, 2, 3, 0.)",
            "rgba",
        ] {
            assert_eq!(
                parse(input),
                Err(ParseError::MalformedRgba(input.to_owned())),
                "{input}"
            );
        }
    }

    #[test]
    fn rgb() {
        assert_eq!(parse("rgb(255, 0, 0)"), Ok(Color::new(255, 0, 0, 1.0)));
        for input in ["rgb(255,0,0)", "rgb(300, 0, 0)", "rgb(1, 2, 3) "] {
            assert_eq!(
                parse(input),
                Err(ParseError::MalformedRgba(input.to_owned())),
                "{input}"
            );
        }
    }

    #[test]
    fn hsl() {
        assert_eq!(parse("hsl(0, 100%, 50%)"), Ok(Color::new(255, 0, 0, 1.0)));
        assert_eq!(
            parse("hsl(24.999999999999996, 74.99999999999999%, 47.05882352941176%)"),
            Ok(Color::new(0xD2, 0x69, 0x1E, 1.0))
        );
        for input in ["hsl(0, 100, 50)", "hsl(0 100% 50%)"] {
            assert_eq!(
                parse(input),
                Err(ParseError::MalformedHsl(input.to_owned())),
                "{input}"
            );
        }
    }

    #[test]
    fn unsupported() {
        assert_eq!(parse(""), Err(ParseError::UnsupportedFormat(String::new())));
        assert_eq!(
            parse("cmyk(0, 0, 0, 0)"),
            Err(ParseError::UnsupportedFormat("cmyk(0, 0, 0, 0)".to_owned()))
        );
    }

    #[test]
    fn std_traits() {
        let red: Color = "#FF0000".parse().unwrap();
        assert_eq!(Color::try_from("#FF0000"), Ok(red));
        assert_eq!(Color::parse("#FF0000"), Ok(red));
    }

    #[test]
    fn error_messages_name_the_input() {
        let err = parse("#nope").unwrap_err();
        assert_eq!(err.to_string(), "malformed hex color: \"#nope\"");
    }
}
