//! Conversions between the hex, RGB, RGBA and HSL notations.
//!
//! The typed conversions live on the models ([`Rgb::to_hsl`],
//! [`Hsl::to_rgb`]). The free functions mirror them for callers working with
//! strings and loose components.
//!
//! All floating point expressions are evaluated in a fixed order so that the
//! unrounded HSL output is reproducible bit for bit:
//!
//! ```rust
//! use swatch::convert::{hsl_to_hex, rgb_to_hsl};
//! let hsl = rgb_to_hsl(0xD2, 0x69, 0x1E);
//! assert_eq!(hsl.hue, 24.999999999999996);
//! assert_eq!(hsl_to_hex(hsl.hue, hsl.saturation, hsl.lightness), "#D2691E");
//! ```

use crate::{
    color::{Color, Component},
    models::{Hsl, Rgb},
    parse::{self, ParseError},
};

impl Rgb {
    /// Convert 8-bit channels to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        util::rgb_to_hsl(self)
    }

    /// Format the channels as `#RRGGBB` with uppercase hex digits.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

impl Hsl {
    /// Convert this color from the HSL notation to 8-bit channels. Channels
    /// that land outside [0, 255] are clamped.
    pub fn to_rgb(&self) -> Rgb {
        util::hsl_to_rgb(self)
    }
}

/// Parse a `#RRGGBB` string into an opaque [`Color`].
pub fn hex_to_rgb(hex: &str) -> Result<Color, ParseError> {
    parse::parse_hex(hex)
}

/// Format channels as an uppercase `#RRGGBB` string.
pub fn rgb_to_hex(red: u8, green: u8, blue: u8) -> String {
    Rgb::new(red, green, blue).to_hex()
}

/// Parse an `rgba(r, g, b, a)` string.
pub fn rgba_to_rgb(rgba: &str) -> Result<Color, ParseError> {
    parse::parse_rgba(rgba)
}

/// Parse a `#RRGGBB` string and convert it to the HSL notation.
pub fn hex_to_hsl(hex: &str) -> Result<Hsl, ParseError> {
    Ok(hex_to_rgb(hex)?.components.to_hsl())
}

/// Convert 8-bit channels to the HSL notation.
pub fn rgb_to_hsl(red: u8, green: u8, blue: u8) -> Hsl {
    Rgb::new(red, green, blue).to_hsl()
}

/// Convert HSL components to 8-bit channels.
pub fn hsl_to_rgb(hue: Component, saturation: Component, lightness: Component) -> Rgb {
    Hsl::new(hue, saturation, lightness).to_rgb()
}

/// Convert HSL components to an uppercase `#RRGGBB` string.
pub fn hsl_to_hex(hue: Component, saturation: Component, lightness: Component) -> String {
    hsl_to_rgb(hue, saturation, lightness).to_hex()
}

mod util {
    use crate::{
        color::Component,
        math::to_channel,
        models::{Hsl, Rgb},
    };

    /// Convert from 8-bit channels to HSL notation.
    ///
    /// The hue dispatch tests red, then green, then blue against the maximum,
    /// so ties resolve in that order. An achromatic color gets a hue and
    /// saturation of 0.
    pub fn rgb_to_hsl(from: &Rgb) -> Hsl {
        let [red, green, blue] = from.to_array().map(|c| Component::from(c) / 255.0);

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let lightness = (max + min) / 2.0;

        if max == min {
            return Hsl::new(0.0, 0.0, lightness * 100.0);
        }

        let delta = max - min;
        let saturation = if lightness > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        let hue = if max == red {
            (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
        } else if max == green {
            (blue - red) / delta + 2.0
        } else {
            (red - green) / delta + 4.0
        };

        Hsl::new(hue / 6.0 * 360.0, saturation * 100.0, lightness * 100.0)
    }

    /// Convert from HSL notation to 8-bit channels.
    pub fn hsl_to_rgb(from: &Hsl) -> Rgb {
        let hue = from.hue;
        let saturation = from.saturation / 100.0;
        let lightness = from.lightness / 100.0;

        let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let x = c * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
        let m = lightness - c / 2.0;

        let (r, g, b) = if (0.0..60.0).contains(&hue) {
            (c, x, 0.0)
        } else if (60.0..120.0).contains(&hue) {
            (x, c, 0.0)
        } else if (120.0..180.0).contains(&hue) {
            (0.0, c, x)
        } else if (180.0..240.0).contains(&hue) {
            (0.0, x, c)
        } else if (240.0..300.0).contains(&hue) {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };

        let (red, red_clamped) = to_channel((r + m) * 255.0);
        let (green, green_clamped) = to_channel((g + m) * 255.0);
        let (blue, blue_clamped) = to_channel((b + m) * 255.0);

        if red_clamped || green_clamped || blue_clamped {
            tracing::debug!(
                hue = from.hue,
                saturation = from.saturation,
                lightness = from.lightness,
                "HSL color is outside the sRGB channel range, clamping"
            );
        }

        Rgb::new(red, green, blue)
    }
}
