//! A [`Color`] holds the canonical form that every notation is parsed into and
//! formatted from: 8-bit sRGB channels with a floating point alpha.

use bitflags::bitflags;

use crate::models::Rgb;

/// A 64-bit floating point value used for alpha and all HSL components.
pub type Component = f64;

bitflags! {
    /// Switches that change the default behavior of some operations on a
    /// [`Color`]. The empty set gives the historical behavior.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Options : u8 {
        /// Keep the alpha of the source color when lightening or darkening.
        /// Without it the derived color is fully opaque.
        const PRESERVE_ALPHA = 1 << 0;
        /// Round the hue, saturation and lightness to integers when
        /// formatting with the HSL notation.
        const ROUND_HSL = 1 << 1;
    }
}

/// A color in the sRGB color space with an alpha component.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// The red, green and blue channels.
    pub components: Rgb,
    /// The alpha component of the color. It is not range checked.
    pub alpha: Component,
}

impl Color {
    /// Create a new [`Color`] from its channels and alpha.
    /// ```rust
    /// use swatch::Color;
    /// let c = Color::new(255, 0, 0, 0.5);
    /// assert_eq!(c.to_rgba(), "rgba(255, 0, 0, 0.5)");
    /// ```
    pub const fn new(red: u8, green: u8, blue: u8, alpha: Component) -> Self {
        Self {
            components: Rgb::new(red, green, blue),
            alpha,
        }
    }

    /// Create a fully opaque [`Color`].
    pub const fn opaque(components: Rgb) -> Self {
        Self {
            components,
            alpha: 1.0,
        }
    }

    /// Return the red channel.
    pub const fn red(&self) -> u8 {
        self.components.red
    }

    /// Return the green channel.
    pub const fn green(&self) -> u8 {
        self.components.green
    }

    /// Return the blue channel.
    pub const fn blue(&self) -> u8 {
        self.components.blue
    }
}

impl From<Rgb> for Color {
    fn from(value: Rgb) -> Self {
        Self::opaque(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_color_with_correct_components() {
        let c = Color::new(10, 20, 30, 0.4);
        assert_eq!(c.components, Rgb::new(10, 20, 30));
        assert_eq!(c.alpha, 0.4);
        assert_eq!((c.red(), c.green(), c.blue()), (10, 20, 30));
    }

    #[test]
    fn colors_from_models_are_opaque() {
        let c = Color::from(Rgb::new(1, 2, 3));
        assert_eq!(c, Color::new(1, 2, 3, 1.0));
    }

    #[test]
    fn default_options_are_empty() {
        assert!(Options::default().is_empty());
        let both = Options::PRESERVE_ALPHA | Options::ROUND_HSL;
        assert!(both.contains(Options::ROUND_HSL));
    }
}
