//! Heuristic success scorer
//!
//! Maps the funding state of a campaign to a success score, a confidence and a
//! per-factor breakdown:
//!
//! ```plain
//! ratio      = clamp(raised / goal, 0, 1)          (0 when goal == 0)
//! urgency    = 0.05 if days_remaining < window else 0
//! score      = round(clamp(25 + 50 * ratio + 20 * urgency, 5, 95))
//! confidence = round(clamp(60 + 30 * ratio, 40, 95))
//! ```

use tracing::debug;

use crate::{
    clock::Clock,
    constants::*,
    types::{CampaignFunding, FactorBreakdown, PredictionScore},
    utils::{
        common::{clamp_percent, round_to},
        error::{invalid_argument, ForecastResult},
    },
};

/// Scores `funding` against the current time of `clock`.
pub fn score<C: Clock + ?Sized>(
    funding: &CampaignFunding,
    urgency_window_days: i64,
    clock: &C,
) -> ForecastResult<PredictionScore> {
    score_at(funding, urgency_window_days, clock.now_millis())
}

/// Scores `funding` as of `now_millis`.
///
/// # Errors
/// - `InvalidArgument` if `goal` or `raised` is negative or not finite, or the window is negative
pub fn score_at(
    funding: &CampaignFunding,
    urgency_window_days: i64,
    now_millis: i64,
) -> ForecastResult<PredictionScore> {
    funding.validate()?;
    if urgency_window_days < 0 {
        return Err(invalid_argument(
            "urgency_window_days",
            format!("must not be negative, got {}", urgency_window_days),
        ));
    }

    let ratio = funding.progress_ratio();
    let days_remaining = funding.days_remaining(now_millis);
    let urgency_boost = if days_remaining < urgency_window_days {
        URGENCY_BOOST
    } else {
        0.0
    };

    let score = clamp_percent(
        SCORE_BASE + SCORE_RATIO_WEIGHT * ratio + SCORE_URGENCY_WEIGHT * urgency_boost,
        SCORE_MIN,
        SCORE_MAX,
    );
    let confidence = clamp_percent(
        CONFIDENCE_BASE + CONFIDENCE_RATIO_WEIGHT * ratio,
        CONFIDENCE_MIN,
        CONFIDENCE_MAX,
    );

    debug!(
        ratio,
        days_remaining, score, confidence, "scored campaign funding snapshot"
    );

    Ok(PredictionScore {
        score,
        confidence,
        breakdown: breakdown(ratio),
    })
}

/// Factor weights for a clamped funding ratio, rounded to two decimals
pub fn breakdown(ratio: f64) -> FactorBreakdown {
    let weight = |(base, slope): (f64, f64)| round_to(base + slope * ratio, 2);
    FactorBreakdown {
        team: weight(TEAM_WEIGHT),
        traction: weight(TRACTION_WEIGHT),
        market: weight(MARKET_WEIGHT),
        innovation: weight(INNOVATION_WEIGHT),
        financials: weight(FINANCIALS_WEIGHT),
        execution: weight(EXECUTION_WEIGHT),
    }
}
