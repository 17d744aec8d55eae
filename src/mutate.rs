//! Operations deriving a new [`Color`] from an existing one. None of them
//! modify the receiver.

use crate::{
    color::{Color, Component, Options},
    models::{Hsl, Model},
};

/// The maximum HSL lightness, in percent.
const MAX_LIGHTNESS: Component = 100.0;

impl Color {
    /// Return a copy of this color with the alpha replaced. The value is not
    /// range checked.
    /// ```rust
    /// use swatch::Color;
    /// let black = Color::parse("#000000").unwrap();
    /// assert_eq!(black.alpha(0.3).to_rgba(), "rgba(0, 0, 0, 0.3)");
    /// assert_eq!(black.to_rgba(), "rgba(0, 0, 0, 1)");
    /// ```
    pub fn alpha(&self, value: Component) -> Self {
        Self {
            alpha: value,
            ..*self
        }
    }

    /// Increase the HSL lightness by `amount` percentage points, capped at
    /// 100. Negative amounts darken and are not capped. The result is fully
    /// opaque; use [`Color::lighten_with`] and [`Options::PRESERVE_ALPHA`] to
    /// keep the alpha.
    pub fn lighten(&self, amount: Component) -> Self {
        self.lighten_with(amount, Options::empty())
    }

    /// Same as [`Color::lighten`], honoring [`Options::PRESERVE_ALPHA`].
    pub fn lighten_with(&self, amount: Component, options: Options) -> Self {
        let Hsl {
            hue,
            saturation,
            lightness,
        } = self.components.to_hsl();

        let target = lightness + amount;
        let lightness = target.min(MAX_LIGHTNESS);
        if lightness < target {
            tracing::debug!(requested = target, "lightness capped at 100");
        }

        let alpha = if options.contains(Options::PRESERVE_ALPHA) {
            self.alpha
        } else {
            1.0
        };

        Hsl::new(hue, saturation, lightness).to_color(alpha)
    }

    /// Decrease the HSL lightness by `amount` percentage points. Same as
    /// `lighten(-amount)`.
    pub fn darken(&self, amount: Component) -> Self {
        self.lighten(-amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_component_eq, convert::hex_to_hsl};

    #[test]
    fn alpha_returns_a_new_color() {
        let black = Color::parse("#000000").unwrap();
        let faded = black.alpha(0.3);
        assert_eq!(faded.to_rgba(), "rgba(0, 0, 0, 0.3)");
        assert_eq!(faded.components, black.components);
        // The receiver keeps its alpha.
        assert_eq!(black.alpha, 1.0);
    }

    #[test]
    fn alpha_is_not_range_checked() {
        let c = Color::new(1, 2, 3, 1.0).alpha(-2.0);
        assert_eq!(c.alpha, -2.0);
    }

    #[test]
    fn lighten_gray() {
        let gray = Color::parse("#808080").unwrap();
        let original = hex_to_hsl("#808080").unwrap().lightness;
        let lighter = gray.lighten(10.0);
        assert_eq!(lighter.to_hex(), "#9A9A9A");

        let lightness = hex_to_hsl(&lighter.to_hex()).unwrap().lightness;
        // Quantization to 8 bits moves the lightness by about half a step.
        assert_component_eq!(lightness, (original + 10.0).min(100.0), 0.2);
    }

    #[test]
    fn lighten_keeps_hue_and_saturation() {
        let chocolate = Color::parse("#D2691E").unwrap();
        assert_eq!(chocolate.lighten(10.0).to_hex(), "#E4843F");
        assert_eq!(chocolate.lighten(20.0).to_hex(), "#EAA16C");
    }

    #[test]
    fn lighten_is_capped_at_white() {
        let c = Color::parse("#D2691E").unwrap().lighten(80.0);
        assert_eq!(c.to_hex(), "#FFFFFF");
    }

    #[test]
    fn negative_amounts_darken() {
        let chocolate = Color::parse("#D2691E").unwrap();
        assert_eq!(chocolate.lighten(-20.0).to_hex(), "#793C11");
        assert_eq!(chocolate.darken(20.0), chocolate.lighten(-20.0));
        // Past black the channels are clamped to 0 instead of wrapping
        // around, a deliberate change from the bit-packed hex formatting.
        assert_eq!(chocolate.darken(90.0).to_hex(), "#000000");
        assert_eq!(Color::parse("#000000").unwrap().lighten(-5.0).to_hex(), "#000000");
    }

    #[test]
    fn lighten_resets_alpha_by_default() {
        let c = Color::parse("rgba(10, 20, 30, 0.5)").unwrap();
        assert_eq!(c.lighten(10.0).alpha, 1.0);
        assert_eq!(c.lighten_with(10.0, Options::empty()).alpha, 1.0);
    }

    #[test]
    fn lighten_can_preserve_alpha() {
        let c = Color::parse("rgba(10, 20, 30, 0.5)").unwrap();
        let lighter = c.lighten_with(10.0, Options::PRESERVE_ALPHA);
        assert_eq!(lighter.alpha, 0.5);
        assert_eq!(lighter.components, c.lighten(10.0).components);
    }

    #[test]
    fn lighten_returns_a_new_color() {
        let c = Color::parse("#808080").unwrap();
        let _ = c.lighten(10.0);
        assert_eq!(c.to_hex(), "#808080");
    }
}
