//! swatch parses colors written as hex, `rgb()`, `rgba()` or `hsl()`, converts
//! between those notations, and derives new colors by changing alpha or
//! lightness.
//!
//! ```rust
//! use swatch::Color;
//! let gray = Color::parse("#808080").unwrap();
//! assert_eq!(gray.lighten(10.0).to_hex(), "#9A9A9A");
//! ```

#![deny(missing_docs)]

mod color;
pub mod convert;
mod format;
mod math;
pub mod models;
mod mutate;
mod parse;

#[cfg(test)]
mod test;

pub use color::{Color, Component, Options};
pub use parse::ParseError;
