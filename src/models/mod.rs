//! Models are structs that represent a color in a specified notation. They
//! are a type safe way to convert between notations without going through
//! strings.

use crate::color::{Color, Component};

mod hsl;
mod rgb;

pub use hsl::*;
pub use rgb::*;

/// A trait implemented for color models that can be converted to a
/// canonical [`Color`].
pub trait Model {
    /// Convert a model to a canonical [`Color`] with the given alpha.
    fn to_color(&self, alpha: Component) -> Color;
}
