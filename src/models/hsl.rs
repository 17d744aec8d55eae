//! Model a color with the HSL notation in the sRGB color space.

use crate::color::{Color, Component};
use crate::models::Model;

swatch_macros::gen_model! {
    /// A color specified with the HSL notation in the sRGB color space.
    ///
    /// Saturation and lightness are percentages in [0, 100], not fractions.
    pub struct Hsl {
        /// The hue component of the color, in degrees.
        hue: Component,
        /// The saturation component of the color.
        saturation: Component,
        /// The lightness component of the color.
        lightness: Component,
    }
}

impl Model for Hsl {
    fn to_color(&self, alpha: Component) -> Color {
        self.to_rgb().to_color(alpha)
    }
}
