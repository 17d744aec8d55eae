//! Math utility functions.

use num_traits::Float;

/// Round to the nearest integer, with halves going toward positive infinity.
/// This differs from [`f64::round`] for negative halves: `-2.5` rounds to
/// `-2.0`.
pub fn round_half_up<T: Float>(value: T) -> T {
    let floor = value.floor();
    if value - floor >= T::from(0.5).unwrap_or_else(T::zero) {
        floor + T::one()
    } else {
        floor
    }
}

/// Round a scaled channel value and clamp it into the 8-bit range. Returns
/// the channel and whether clamping was needed.
pub fn to_channel<T: Float>(value: T) -> (u8, bool) {
    let rounded = round_half_up(value);
    let max = T::from(u8::MAX).unwrap_or_else(T::zero);
    if rounded.is_nan() {
        return (0, true);
    }
    let clamped = rounded.max(T::zero()).min(max);
    (clamped.to_u8().unwrap_or_default(), clamped != rounded)
}
