//! Synthetic candlestick series
//!
//! Produces one OHLC candle per month that drifts around the average-scenario
//! profit curve. Noise is scaled by the volatility implied by the confidence:
//!
//! ```plain
//! volatility = 0.1 + (100 - confidence) / 100 * 0.2
//!
//! open  = previous close
//! noise = (u - 0.5) * volatility * max(target, open)      u ~ U[0, 1)
//! close = max(0, target + 0.3 * noise)
//! high  = max(open, close) + |noise|
//! low   = max(0, min(open, close) - |noise|)
//! ```
//!
//! The random source is supplied by the caller, so a seeded generator makes
//! the series reproducible.

use rand::Rng;
use tracing::{debug, trace};

use crate::{
    constants::{CLOSE_NOISE_FACTOR, ROI_AVERAGE, SEED_CLOSE_RATIO, VOLATILITY_FLOOR, VOLATILITY_SPAN},
    projection::scenario_curve,
    types::{Candle, CandleSeries},
    utils::{
        common::{ensure_non_negative, ensure_percent},
        error::ForecastResult,
    },
};

/// Noise scale for a given confidence, from 0.1 at full confidence to 0.3 at none
pub fn volatility(confidence: u8) -> f64 {
    VOLATILITY_FLOOR + (100.0 - confidence as f64) / 100.0 * VOLATILITY_SPAN
}

/// Synthesizes `horizon_months + 1` candles drawing noise from `rng`.
///
/// # Errors
/// - `InvalidArgument` if `score` or `confidence` is above 100, or `investment` is negative or not finite
pub fn synthesize<R: Rng + ?Sized>(
    score: u8,
    confidence: u8,
    investment: f64,
    horizon_months: u32,
    rng: &mut R,
) -> ForecastResult<CandleSeries> {
    ensure_percent("score", score)?;
    ensure_percent("confidence", confidence)?;
    ensure_non_negative("investment", investment)?;

    let probability = score as f64 / 100.0;
    let targets = scenario_curve(investment, ROI_AVERAGE, probability, horizon_months);
    let volatility = volatility(confidence);

    let mut previous_close = match targets.first() {
        Some(first) if *first > 0.0 => *first,
        _ => investment * SEED_CLOSE_RATIO,
    };

    let mut candles = Vec::with_capacity(targets.len());
    for (month, target) in targets.into_iter().enumerate() {
        let open = previous_close;
        let noise = (rng.gen::<f64>() - 0.5) * volatility * target.max(open);
        let close = (target + noise * CLOSE_NOISE_FACTOR).max(0.0);
        let high = open.max(close) + noise.abs();
        let low = (open.min(close) - noise.abs()).max(0.0);

        trace!(month, open, high, low, close, "synthesized candle");
        candles.push(Candle {
            open,
            high,
            low,
            close,
        });
        previous_close = close;
    }

    debug!(
        score,
        confidence,
        investment,
        volatility,
        candles = candles.len(),
        "synthesized candle series"
    );

    Ok(CandleSeries { candles })
}
