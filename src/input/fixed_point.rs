//! Fixed-point scaling for analog values.
//!
//! Button pressure and stick deflection travel as integers scaled by 10 000,
//! so `10000 == 1.0`. Conversion truncates toward zero.

/// Integer units per 1.0.
pub const FIXED_POINT_SCALE: f64 = 10_000.0;

/// Scale a signed analog value (stick deflection, -1.0..=1.0).
///
/// Saturates instead of wrapping and never returns `i64::MIN`, which the
/// wire's symmetric `i64` range rejects. NaN maps to 0.
#[inline]
pub fn to_fixed(value: f64) -> i64 {
    ((value * FIXED_POINT_SCALE).trunc() as i64).max(-i64::MAX)
}

#[inline]
pub fn from_fixed(value: i64) -> f64 {
    value as f64 / FIXED_POINT_SCALE
}

/// Scale an unsigned analog value (button pressure, 0.0..=1.0).
///
/// Negative input saturates to 0.
#[inline]
pub fn button_value(value: f64) -> u32 {
    (value * FIXED_POINT_SCALE).trunc() as u32
}
