//! Forecast settings

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::{
    constants::{DEFAULT_HORIZON_MONTHS, DEFAULT_URGENCY_WINDOW_DAYS},
    utils::error::{invalid_argument, ForecastResult},
};

/// Tunables shared by every component of the engine.
/// Built once with the builder-style setters below and then only read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ForecastSettings {
    /// Campaigns with fewer days left than this receive the urgency boost
    pub urgency_window_days: i64,
    /// Last month of projections and candles (series hold `horizon_months + 1` points)
    pub horizon_months: u32,
    /// Seed for candle noise. `None` draws a fresh seed from the OS on every call.
    pub seed: Option<u64>,
}

impl Default for ForecastSettings {
    fn default() -> Self {
        Self {
            urgency_window_days: DEFAULT_URGENCY_WINDOW_DAYS,
            horizon_months: DEFAULT_HORIZON_MONTHS,
            seed: None,
        }
    }
}

impl ForecastSettings {
    /// Sets the urgency window, denominated in days.
    pub fn urgency_window_days(&mut self, urgency_window_days: i64) -> &mut Self {
        self.urgency_window_days = urgency_window_days;
        self
    }

    /// Sets the projection horizon, denominated in months.
    pub fn horizon_months(&mut self, horizon_months: u32) -> &mut Self {
        self.horizon_months = horizon_months;
        self
    }

    /// Sets the candle noise seed.
    pub fn seed(&mut self, seed: Option<u64>) -> &mut Self {
        self.seed = seed;
        self
    }

    /// Returns Err if the urgency window is negative
    pub fn validate(&self) -> ForecastResult<()> {
        if self.urgency_window_days < 0 {
            return Err(invalid_argument(
                "urgency_window_days",
                format!("must not be negative, got {}", self.urgency_window_days),
            ));
        }
        Ok(())
    }

    /// Random source for candle synthesis: seeded when `seed` is set, from entropy otherwise
    pub fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::RngCore;

    #[test]
    fn test_defaults() {
        let settings = ForecastSettings::default();
        assert_eq!(settings.urgency_window_days, 14);
        assert_eq!(settings.horizon_months, 12);
        assert_eq!(settings.seed, None);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_negative_urgency_window_is_rejected() {
        let mut settings = ForecastSettings::default();
        settings.urgency_window_days(-1);
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let mut settings = ForecastSettings::default();
        settings.seed(Some(7));
        assert_eq!(settings.rng().next_u64(), settings.rng().next_u64());
    }

    proptest! {
        #[test]
        fn test_forecast_settings_proptest(
            urgency_window_days in 0i64..365,
            horizon_months in 0u32..600,
            seed in any::<Option<u64>>(),
        ) {
            let mut settings = ForecastSettings::default();
            settings
                .urgency_window_days(urgency_window_days)
                .horizon_months(horizon_months)
                .seed(seed);

            prop_assert_eq!(settings.urgency_window_days, urgency_window_days);
            prop_assert_eq!(settings.horizon_months, horizon_months);
            prop_assert_eq!(settings.seed, seed);
            prop_assert!(settings.validate().is_ok());
        }
    }
}
