//! Vanity rounding policy.
//!
//! Every displayed rental price ends in 9 (499, 1299, ...) and is never
//! rounded below the computed economic minimum.

/// Round `value` up to the smallest integer `r >= value` with `r mod 10 == 9`.
///
/// Defined for non-negative inputs. Negative inputs are not produced by any
/// caller and their result is unspecified.
#[must_use]
pub fn round_up_to_nearest_9(value: f64) -> f64 {
    let remainder = value % 10.0;
    if remainder == 9.0 {
        return value;
    }
    if remainder < 9.0 {
        return (value / 10.0).floor() * 10.0 + 9.0;
    }
    // Fractional last digit in (9, 10), e.g. 1239.5 -> 1249.
    (value / 10.0).ceil() * 10.0 + 9.0
}
