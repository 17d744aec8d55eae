//! Model a color with 8-bit channels in the sRGB color space.

use crate::color::{Color, Component};
use crate::models::Model;

swatch_macros::gen_model! {
    /// A color specified with red, green and blue channels in [0, 255].
    pub struct Rgb {
        /// The red channel.
        red: u8,
        /// The green channel.
        green: u8,
        /// The blue channel.
        blue: u8,
    }
}

impl Model for Rgb {
    fn to_color(&self, alpha: Component) -> Color {
        Color {
            components: *self,
            alpha,
        }
    }
}
