//! The forecast engine that wires the scorer, the projection generator and the candle synthesizer.
//!
//! Data only flows one way:
//!
//! ```plain
//! CampaignFunding ──► scorer ──┬──► projection (score)
//!                              └──► candles    (score, confidence)
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    candles,
    clock::{Clock, SystemClock},
    projection,
    record::PredictionRecord,
    scorer,
    settings::ForecastSettings,
    types::*,
    utils::error::ForecastResult,
};

/// A campaign that passed the minimum score filter
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct RankedCampaign<K> {
    pub id: K,
    pub prediction: PredictionScore,
}

/// Stateless facade over the three forecast components.
/// Holds only read-only settings and a clock, so it can be shared between threads freely.
#[derive(Clone, Debug, Default)]
pub struct ForecastEngine<C = SystemClock> {
    settings: ForecastSettings,
    clock: C,
}

impl ForecastEngine<SystemClock> {
    /// Engine reading the wall clock
    pub fn with_settings(settings: ForecastSettings) -> ForecastResult<Self> {
        Self::new(settings, SystemClock)
    }
}

impl<C: Clock> ForecastEngine<C> {
    pub fn new(settings: ForecastSettings, clock: C) -> ForecastResult<Self> {
        settings.validate()?;
        Ok(Self { settings, clock })
    }

    pub fn settings(&self) -> &ForecastSettings {
        &self.settings
    }

    /// Scores a funding snapshot using the configured urgency window.
    pub fn score(&self, funding: &CampaignFunding) -> ForecastResult<PredictionScore> {
        scorer::score(funding, self.settings.urgency_window_days, &self.clock)
    }

    /// Scores a funding snapshot and stamps the result.
    pub fn predict(&self, funding: &CampaignFunding) -> ForecastResult<PredictionRecord> {
        let now = self.clock.now_millis();
        let prediction = scorer::score_at(funding, self.settings.urgency_window_days, now)?;
        Ok(PredictionRecord::new(prediction, now))
    }

    pub fn project(&self, score: u8, investment: f64) -> ForecastResult<ProjectionSeries> {
        projection::project(score, investment, self.settings.horizon_months)
    }

    pub fn summarize(&self, score: u8, investment: f64) -> ForecastResult<ProfitSummary> {
        projection::summarize(score, investment)
    }

    /// Synthesizes candles with the random source derived from the settings.
    /// With a configured seed every call returns the same series.
    pub fn synthesize(
        &self,
        score: u8,
        confidence: u8,
        investment: f64,
    ) -> ForecastResult<CandleSeries> {
        let mut rng = self.settings.rng();
        self.synthesize_with(score, confidence, investment, &mut rng)
    }

    /// Synthesizes candles drawing noise from the given random source.
    pub fn synthesize_with<R: Rng + ?Sized>(
        &self,
        score: u8,
        confidence: u8,
        investment: f64,
        rng: &mut R,
    ) -> ForecastResult<CandleSeries> {
        candles::synthesize(
            score,
            confidence,
            investment,
            self.settings.horizon_months,
            rng,
        )
    }

    /// Runs the full pipeline for one campaign and one investment amount.
    pub fn forecast(
        &self,
        funding: &CampaignFunding,
        investment: f64,
    ) -> ForecastResult<CampaignForecast> {
        let prediction = self.predict(funding)?;
        let projection = self.project(prediction.score(), investment)?;
        let summary = self.summarize(prediction.score(), investment)?;
        let candles = self.synthesize(prediction.score(), prediction.confidence(), investment)?;

        debug!(
            score = prediction.score(),
            confidence = prediction.confidence(),
            investment,
            expected_value = summary.expected_value,
            "built campaign forecast"
        );

        Ok(CampaignForecast {
            prediction,
            projection,
            summary,
            candles,
        })
    }

    /// Scores every campaign, keeps those scoring at least `min_score` and
    /// orders them by score, highest first. Ties keep their input order.
    pub fn rank<K, I>(&self, campaigns: I, min_score: u8) -> ForecastResult<Vec<RankedCampaign<K>>>
    where
        I: IntoIterator<Item = (K, CampaignFunding)>,
    {
        let now = self.clock.now_millis();
        let mut ranked = Vec::new();
        for (id, funding) in campaigns {
            let prediction = scorer::score_at(&funding, self.settings.urgency_window_days, now)?;
            if prediction.score >= min_score {
                ranked.push(RankedCampaign { id, prediction });
            }
        }
        ranked.sort_by(|a, b| b.prediction.score.cmp(&a.prediction.score));

        debug!(kept = ranked.len(), min_score, "ranked campaigns");
        Ok(ranked)
    }
}
