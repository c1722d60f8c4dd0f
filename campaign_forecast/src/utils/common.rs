//! Common numeric helpers and argument checks that are used across the crate

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::warn;

use crate::constants::MAX_PERCENT;

use super::error::{invalid_argument, ForecastResult};

/// Above this magnitude every f64 is an integer
const INTEGRAL_F64_THRESHOLD: f64 = 4_503_599_627_370_496.0; // 2^52

/// Rounds the exact decimal value of `value` to `decimals` places, halves away from zero.
/// No scaling happens in binary, so a stored 0.01499.. stays below the midpoint.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() || value.abs() >= INTEGRAL_F64_THRESHOLD {
        return value;
    }
    let Some(exact) = Decimal::from_f64_retain(value) else {
        return value;
    };
    exact
        .round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero)
        .to_string()
        .parse()
        .unwrap_or(value)
}

/// Clamps `value` into `[min, max]` and rounds it to the nearest integer percentage.
pub fn clamp_percent(value: f64, min: f64, max: f64) -> u8 {
    value.clamp(min, max).round() as u8
}

/// Returns Err if `value` is negative, NaN or infinite
pub fn ensure_non_negative(name: &str, value: f64) -> ForecastResult<f64> {
    if !value.is_finite() {
        warn!(argument = name, value, "rejected non-finite argument");
        return Err(invalid_argument(name, format!("must be finite, got {}", value)));
    }
    if value < 0.0 {
        warn!(argument = name, value, "rejected negative argument");
        return Err(invalid_argument(name, format!("must not be negative, got {}", value)));
    }
    Ok(value)
}

/// Returns Err if `value` is above 100
pub fn ensure_percent(name: &str, value: u8) -> ForecastResult<u8> {
    if value > MAX_PERCENT {
        warn!(argument = name, value, "rejected out-of-range percentage");
        return Err(invalid_argument(
            name,
            format!("must be within [0, {}], got {}", MAX_PERCENT, value),
        ));
    }
    Ok(value)
}
