//! Ship rating derivation.
//!
//! ```text
//! rating = 80 * speed * ratio / (CURRENT_YEAR - prod_year + 1)
//! ```
//!
//! where `ratio` is 0.5 for used ships and 1.0 otherwise. The result is
//! rounded half-up to two decimal places on the decimal value of `speed`,
//! so `80 * 0.29 / 160 = 0.145` rates 0.15 even though the nearest `f64`
//! quotient sits just below the midpoint.

use chrono::Datelike;

use crate::ship::Ship;
use crate::types::Timestamp;

/// The in-universe "current" year ratings are measured against.
pub const CURRENT_YEAR: i32 = 3019;

/// Multiplier applied to speed.
pub const RATING_FACTOR: f64 = 80.0;

/// Ratio applied to used ships.
pub const USED_RATIO: f64 = 0.5;

/// Compute the rating for the given inputs.
pub fn compute_rating(speed: f64, is_used: bool, prod_date: Timestamp) -> f64 {
    let age = CURRENT_YEAR - prod_date.year() + 1;
    exact_rating(speed, is_used, age).unwrap_or_else(|| {
        let ratio = if is_used { USED_RATIO } else { 1.0 };
        round_hundredths(RATING_FACTOR * speed * ratio / f64::from(age))
    })
}

/// Rating computed in integer hundredths from the decimal digits of
/// `speed`. `None` when the inputs fall outside what validation admits
/// (negative or non-finite speed, non-positive age) or would overflow.
fn exact_rating(speed: f64, is_used: bool, age: i32) -> Option<f64> {
    let (mantissa, scale) = decimal_parts(speed)?;
    let age = u128::try_from(age).ok().filter(|&a| a > 0)?;
    let halves: u128 = if is_used { 2 } else { 1 };

    // rating * 100 = RATING_FACTOR * mantissa * 100 / (10^scale * age * halves)
    let numerator = mantissa.checked_mul(RATING_FACTOR as u128 * 100)?;
    let denominator = 10u128
        .checked_pow(scale)?
        .checked_mul(age)?
        .checked_mul(halves)?;
    let hundredths =
        numerator.checked_mul(2)?.checked_add(denominator)? / denominator.checked_mul(2)?;

    Some(hundredths as f64 / 100.0)
}

/// Split the shortest decimal representation of `value` into an integer
/// mantissa and the number of fractional digits: `0.29` becomes `(29, 2)`.
fn decimal_parts(value: f64) -> Option<(u128, u32)> {
    if !value.is_finite() || value.is_sign_negative() {
        return None;
    }
    let text = value.to_string();
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let mantissa = format!("{whole}{fraction}").parse().ok()?;
    let scale = u32::try_from(fraction.len()).ok()?;
    Some((mantissa, scale))
}

/// Recompute and store the rating of `ship` from its current fields.
pub fn refresh_rating(ship: &mut Ship) {
    ship.rating = compute_rating(ship.speed, ship.is_used, ship.prod_date);
}

/// Round half away from zero to two decimal places.
pub fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
