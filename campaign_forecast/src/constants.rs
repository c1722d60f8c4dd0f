//! Forecast Engine's Constants
// The heuristic coefficients below reproduce the dashboard's scoring model and are not fitted to data.

/// Milliseconds in one day
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Default number of days before the deadline in which a campaign counts as urgent
pub const DEFAULT_URGENCY_WINDOW_DAYS: i64 = 14;

/// Default projection horizon, denominated in months
pub const DEFAULT_HORIZON_MONTHS: u32 = 12;

/// Months per year. ROI tiers are annual, so month `m` accrues `m / 12` of the yearly return.
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Label attached to every prediction produced by the heuristic scorer
pub const MODEL_VERSION: &str = "Heuristic-1.0";

/// Upper bound accepted for scores and confidences
pub const MAX_PERCENT: u8 = 100;

// Scoring formula: score = 25 + 50 * ratio + 20 * urgency_boost
pub const SCORE_BASE: f64 = 25.0;
pub const SCORE_RATIO_WEIGHT: f64 = 50.0;
pub const SCORE_URGENCY_WEIGHT: f64 = 20.0;
/// Urgency boost applied when the deadline falls inside the urgency window
pub const URGENCY_BOOST: f64 = 0.05;
pub const SCORE_MIN: f64 = 5.0;
pub const SCORE_MAX: f64 = 95.0;

// Confidence formula: confidence = 60 + 30 * ratio
pub const CONFIDENCE_BASE: f64 = 60.0;
pub const CONFIDENCE_RATIO_WEIGHT: f64 = 30.0;
pub const CONFIDENCE_MIN: f64 = 40.0;
pub const CONFIDENCE_MAX: f64 = 95.0;

/// Factor weights as `(base, ratio coefficient)` pairs
pub const TEAM_WEIGHT: (f64, f64) = (0.20, 0.20);
pub const TRACTION_WEIGHT: (f64, f64) = (0.15, 0.35);
pub const MARKET_WEIGHT: (f64, f64) = (0.15, 0.0);
pub const INNOVATION_WEIGHT: (f64, f64) = (0.20, 0.0);
pub const FINANCIALS_WEIGHT: (f64, f64) = (0.10, 0.10);
pub const EXECUTION_WEIGHT: (f64, f64) = (0.10, 0.0);

/// Annual ROI of the low scenario (20%)
pub const ROI_LOW: f64 = 0.2;
/// Annual ROI of the average scenario (50%)
pub const ROI_AVERAGE: f64 = 0.5;
/// Annual ROI of the high scenario (100%)
pub const ROI_HIGH: f64 = 1.0;

/// Candle volatility at full confidence
pub const VOLATILITY_FLOOR: f64 = 0.1;
/// Extra volatility added as confidence drops to zero
pub const VOLATILITY_SPAN: f64 = 0.2;
/// Share of the drawn noise that moves the close away from the target curve
pub const CLOSE_NOISE_FACTOR: f64 = 0.3;
/// Opening value of the first candle, as a share of the investment, when the target curve starts at zero
pub const SEED_CLOSE_RATIO: f64 = 0.02;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roi_tiers_are_ordered() {
        assert!(ROI_LOW <= ROI_AVERAGE);
        assert!(ROI_AVERAGE <= ROI_HIGH);
    }

    #[test]
    fn clamp_bounds_are_within_percent_range() {
        assert!(0.0 <= SCORE_MIN && SCORE_MAX <= MAX_PERCENT as f64);
        assert!(0.0 <= CONFIDENCE_MIN && CONFIDENCE_MAX <= MAX_PERCENT as f64);
    }

    #[test]
    fn one_day_in_millis() {
        assert_eq!(MILLIS_PER_DAY, 24 * 60 * 60 * 1000);
    }
}
