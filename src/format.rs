//! Format a [`Color`] and its models as canonical strings.
//!
//! Floating point components are printed with the shortest digits that
//! round-trip, no trailing `.0`, and exponent form (`1e-7`, `1e+21`) only for
//! magnitudes below `1e-6` or from `1e21` on. They are not rounded unless
//! [`Options::ROUND_HSL`] asks for it.

use std::fmt;

use crate::{
    color::{Color, Component, Options},
    math::round_half_up,
    models::{Hsl, Rgb},
};

/// Display adapter printing a [`Component`] in the canonical number format.
#[derive(Clone, Copy, Debug)]
struct Number(Component);

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;

        if value.is_nan() {
            return f.write_str("NaN");
        }
        if value.is_infinite() {
            return f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" });
        }
        // Also covers negative zero.
        if value == 0.0 {
            return f.write_str("0");
        }

        if (1e-6..1e21).contains(&value.abs()) {
            return write!(f, "{value}");
        }

        let scientific = format!("{value:e}");
        match scientific.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                write!(f, "{mantissa}e+{exponent}")
            }
            _ => f.write_str(&scientific),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}, {}, {})",
            Self::NOTATION,
            self.red,
            self.green,
            self.blue
        )
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}, {}%, {}%)",
            Self::NOTATION,
            Number(self.hue),
            Number(self.saturation),
            Number(self.lightness)
        )
    }
}

/// Prints the `rgba(r, g, b, a)` notation.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            self.components.red,
            self.components.green,
            self.components.blue,
            Number(self.alpha)
        )
    }
}

impl Color {
    /// Format as `rgba(r, g, b, a)`. The alpha is printed as is.
    pub fn to_rgba(&self) -> String {
        self.to_string()
    }

    /// Format as `rgb(r, g, b)`, dropping the alpha.
    pub fn to_rgb(&self) -> String {
        self.components.to_string()
    }

    /// Format as `#RRGGBB` with uppercase digits, dropping the alpha.
    pub fn to_hex(&self) -> String {
        self.components.to_hex()
    }

    /// Format as `hsl(h, s%, l%)` with unrounded components.
    /// ```rust
    /// use swatch::Color;
    /// let chocolate = Color::parse("#D2691E").unwrap();
    /// assert_eq!(
    ///     chocolate.to_hsl(),
    ///     "hsl(24.999999999999996, 74.99999999999999%, 47.05882352941176%)"
    /// );
    /// ```
    pub fn to_hsl(&self) -> String {
        self.to_hsl_with(Options::empty())
    }

    /// Format as `hsl(h, s%, l%)`, rounding each component to an integer
    /// when [`Options::ROUND_HSL`] is set.
    pub fn to_hsl_with(&self, options: Options) -> String {
        let hsl = self.components.to_hsl();
        if options.contains(Options::ROUND_HSL) {
            Hsl::from(hsl.to_array().map(round_half_up)).to_string()
        } else {
            hsl.to_string()
        }
    }
}
