//! Profit projections
//!
//! Cumulative profit of an investment for each ROI scenario, weighted by the
//! success probability `score / 100`. Fully deterministic.

use tracing::debug;

use crate::{
    constants::MONTHS_PER_YEAR,
    types::{ProfitSummary, ProjectionSeries, Scenario},
    utils::{
        common::{ensure_non_negative, ensure_percent, round_to},
        error::ForecastResult,
    },
};

/// Unrounded profit of `investment` after `month` months under an annual `roi`
pub(crate) fn expected_profit(investment: f64, roi: f64, month: u32, probability: f64) -> f64 {
    investment * roi * (month as f64 / MONTHS_PER_YEAR) * probability
}

/// Unrounded cumulative profit for months `0..=horizon_months`
pub(crate) fn scenario_curve(
    investment: f64,
    roi: f64,
    probability: f64,
    horizon_months: u32,
) -> Vec<f64> {
    (0..=horizon_months)
        .map(|month| expected_profit(investment, roi, month, probability))
        .collect()
}

/// Projects the monthly cumulative profit of `investment` for every scenario.
/// Each value is rounded to two decimals and month 0 is always zero.
///
/// # Errors
/// - `InvalidArgument` if `score` is above 100 or `investment` is negative or not finite
pub fn project(score: u8, investment: f64, horizon_months: u32) -> ForecastResult<ProjectionSeries> {
    ensure_percent("score", score)?;
    ensure_non_negative("investment", investment)?;

    let probability = score as f64 / 100.0;
    let rounded = |scenario: Scenario| -> Vec<f64> {
        scenario_curve(investment, scenario.roi(), probability, horizon_months)
            .into_iter()
            .map(|value| round_to(value, 2))
            .collect()
    };

    let series = ProjectionSeries {
        low: rounded(Scenario::Low),
        average: rounded(Scenario::Average),
        high: rounded(Scenario::High),
    };

    debug!(
        score,
        investment,
        horizon_months,
        final_average = series.average.last().copied().unwrap_or_default(),
        "projected scenario profits"
    );

    Ok(series)
}

/// Profit after twelve months for every scenario
///
/// # Errors
/// - `InvalidArgument` if `score` is above 100 or `investment` is negative or not finite
pub fn summarize(score: u8, investment: f64) -> ForecastResult<ProfitSummary> {
    ensure_percent("score", score)?;
    ensure_non_negative("investment", investment)?;

    let probability = score as f64 / 100.0;
    let at_year_end = |scenario: Scenario| {
        round_to(
            expected_profit(investment, scenario.roi(), MONTHS_PER_YEAR as u32, probability),
            2,
        )
    };
    let average = at_year_end(Scenario::Average);

    Ok(ProfitSummary {
        low: at_year_end(Scenario::Low),
        average,
        high: at_year_end(Scenario::High),
        expected_value: average,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ForecastError;
    use proptest::prelude::*;

    #[test]
    fn test_half_probability_ten_investment() {
        let series = project(50, 10.0, 12).unwrap();
        assert_eq!(series.len(), 13);
        assert_eq!(series.average[12], 2.5);
        assert_eq!(series.low[12], 1.0);
        assert_eq!(series.high[12], 5.0);
        for scenario in Scenario::ALL {
            assert_eq!(series.get(scenario)[0], 0.0);
        }
    }

    #[test]
    fn test_values_are_rounded_to_cents() {
        let series = project(33, 7.0, 12).unwrap();
        // 7 * 0.5 * (1 / 12) * 0.33 = 0.09625
        assert_eq!(series.average[1], 0.1);
        for value in series.low.iter().chain(&series.average).chain(&series.high) {
            assert_eq!(round_to(*value, 2), *value);
        }
    }

    #[test]
    fn test_rounding_below_midpoint_rounds_down() {
        // 1 * 0.5 * 1 * 0.03 is stored as 0.01499..
        let series = project(3, 1.0, 12).unwrap();
        assert_eq!(series.average[12], 0.01);
        assert_eq!(summarize(3, 1.0).unwrap().average, 0.01);
    }

    #[test]
    fn test_huge_investment_stays_finite() {
        let series = project(100, 1.8e306, 12).unwrap();
        assert!(series.high.iter().all(|v| v.is_finite()));
        assert!(summarize(100, 1.8e306).unwrap().high.is_finite());
    }

    #[test]
    fn test_zero_investment_or_probability_is_flat() {
        for series in [project(0, 100.0, 12).unwrap(), project(80, 0.0, 12).unwrap()] {
            for scenario in Scenario::ALL {
                assert!(series.get(scenario).iter().all(|v| *v == 0.0));
            }
        }
    }

    #[test]
    fn test_zero_horizon_has_single_point() {
        let series = project(50, 10.0, 0).unwrap();
        assert_eq!(series.low, vec![0.0]);
        assert_eq!(series.average, vec![0.0]);
        assert_eq!(series.high, vec![0.0]);
    }

    #[test]
    fn test_longer_horizon_keeps_monthly_accrual() {
        let series = project(50, 10.0, 24).unwrap();
        assert_eq!(series.len(), 25);
        assert_eq!(series.average[24], 5.0);
    }

    #[test]
    fn test_invalid_arguments() {
        assert!(matches!(
            project(50, -1.0, 12),
            Err(ForecastError::InvalidArgument { .. })
        ));
        assert!(project(101, 1.0, 12).is_err());
        assert!(project(50, f64::NAN, 12).is_err());
        assert!(summarize(50, -1.0).is_err());
    }

    #[test]
    fn test_summary_matches_final_month() {
        let summary = summarize(72, 5.0).unwrap();
        let series = project(72, 5.0, 12).unwrap();
        assert_eq!(summary.low, series.low[12]);
        assert_eq!(summary.average, series.average[12]);
        assert_eq!(summary.high, series.high[12]);
        assert_eq!(summary.expected_value, summary.average);
    }

    proptest! {
        #[test]
        fn test_scenarios_are_ordered_and_non_decreasing(
            score in 0u8..=100,
            investment in 0.0f64..1e9,
            horizon in 0u32..=60,
        ) {
            let series = project(score, investment, horizon).unwrap();
            prop_assert_eq!(series.len(), horizon as usize + 1);
            for month in 0..series.len() {
                prop_assert!(series.low[month] >= 0.0);
                prop_assert!(series.low[month] <= series.average[month]);
                prop_assert!(series.average[month] <= series.high[month]);
            }
            for scenario in Scenario::ALL {
                let values = series.get(scenario);
                prop_assert_eq!(values[0], 0.0);
                for pair in values.windows(2) {
                    prop_assert!(pair[0] <= pair[1]);
                }
            }
        }

        #[test]
        fn test_projection_is_deterministic(
            score in 0u8..=100,
            investment in 0.0f64..1e9,
            horizon in 0u32..=24,
        ) {
            let first = project(score, investment, horizon).unwrap();
            let second = project(score, investment, horizon).unwrap();
            for scenario in Scenario::ALL {
                let bits = |values: &[f64]| values.iter().map(|v| v.to_bits()).collect::<Vec<_>>();
                prop_assert_eq!(bits(first.get(scenario)), bits(second.get(scenario)));
            }
        }
    }
}
