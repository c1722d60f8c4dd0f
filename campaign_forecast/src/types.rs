use serde::{Deserialize, Serialize};

use crate::{
    constants::{MAX_PERCENT, MILLIS_PER_DAY, ROI_AVERAGE, ROI_HIGH, ROI_LOW},
    record::PredictionRecord,
    utils::{
        common::ensure_non_negative,
        error::{ForecastError, ForecastResult},
    },
};

/// Funding facts of a single campaign, as read from the contract layer
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignFunding {
    /// Funding target. Zero is tolerated and scores as an unfunded campaign.
    pub goal: f64,
    /// Amount collected so far. May exceed `goal`.
    pub raised: f64,
    /// Campaign deadline in milliseconds since the Unix epoch
    pub deadline_epoch_millis: i64,
}

impl CampaignFunding {
    pub fn new(goal: f64, raised: f64, deadline_epoch_millis: i64) -> Self {
        Self {
            goal,
            raised,
            deadline_epoch_millis,
        }
    }

    /// Returns Err if `goal` or `raised` is negative or not finite
    pub fn validate(&self) -> ForecastResult<()> {
        ensure_non_negative("goal", self.goal)?;
        ensure_non_negative("raised", self.raised)?;
        Ok(())
    }

    /// Funding progress `raised / goal` clamped to `[0, 1]`. Zero when the goal is zero.
    pub fn progress_ratio(&self) -> f64 {
        if self.goal > 0.0 {
            (self.raised / self.goal).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Funding progress as a whole percentage in `[0, 100]`
    pub fn progress_percentage(&self) -> u8 {
        if self.goal > 0.0 {
            (self.raised * 100.0 / self.goal)
                .round()
                .clamp(0.0, MAX_PERCENT as f64) as u8
        } else {
            0
        }
    }

    /// Whole days left until the deadline, never negative
    pub fn days_remaining(&self, now_millis: i64) -> i64 {
        self.deadline_epoch_millis
            .saturating_sub(now_millis)
            .div_euclid(MILLIS_PER_DAY)
            .max(0)
    }
}

/// Named factors of the score breakdown
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Factor {
    Team,
    Traction,
    Market,
    Innovation,
    Financials,
    Execution,
}

impl Factor {
    pub const ALL: [Factor; 6] = [
        Factor::Team,
        Factor::Traction,
        Factor::Market,
        Factor::Innovation,
        Factor::Financials,
        Factor::Execution,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Factor::Team => "team",
            Factor::Traction => "traction",
            Factor::Market => "market",
            Factor::Innovation => "innovation",
            Factor::Financials => "financials",
            Factor::Execution => "execution",
        }
    }
}

/// Per-factor weights in `[0, 1]`.
/// The weights are informative only and do not sum to one.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct FactorBreakdown {
    pub team: f64,
    pub traction: f64,
    pub market: f64,
    pub innovation: f64,
    pub financials: f64,
    pub execution: f64,
}

impl FactorBreakdown {
    pub fn get(&self, factor: Factor) -> f64 {
        match factor {
            Factor::Team => self.team,
            Factor::Traction => self.traction,
            Factor::Market => self.market,
            Factor::Innovation => self.innovation,
            Factor::Financials => self.financials,
            Factor::Execution => self.execution,
        }
    }

    /// Iterates over `(factor, weight)` pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (Factor, f64)> + '_ {
        Factor::ALL.into_iter().map(move |factor| (factor, self.get(factor)))
    }
}

/// Heuristic success estimate derived from one funding snapshot
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct PredictionScore {
    /// Success score in `[5, 95]`
    pub score: u8,
    /// Confidence in `[40, 95]`
    pub confidence: u8,
    pub breakdown: FactorBreakdown,
}

/// Annual ROI assumption used to project profit
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Scenario {
    Low,
    Average,
    High,
}

impl Scenario {
    pub const ALL: [Scenario; 3] = [Scenario::Low, Scenario::Average, Scenario::High];

    /// Annual return of the scenario
    pub fn roi(&self) -> f64 {
        match self {
            Scenario::Low => ROI_LOW,
            Scenario::Average => ROI_AVERAGE,
            Scenario::High => ROI_HIGH,
        }
    }
}

/// Cumulative profit per month (index 0 is month 0) for each scenario
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ProjectionSeries {
    pub low: Vec<f64>,
    pub average: Vec<f64>,
    pub high: Vec<f64>,
}

impl ProjectionSeries {
    pub fn get(&self, scenario: Scenario) -> &[f64] {
        match scenario {
            Scenario::Low => &self.low,
            Scenario::Average => &self.average,
            Scenario::High => &self.high,
        }
    }

    /// Number of points per scenario (`horizon + 1`)
    pub fn len(&self) -> usize {
        self.average.len()
    }

    pub fn is_empty(&self) -> bool {
        self.average.is_empty()
    }
}

/// Profit at the end of a twelve month horizon per scenario
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitSummary {
    pub low: f64,
    pub average: f64,
    pub high: f64,
    /// Expected profit, which is the average scenario
    pub expected_value: f64,
}

/// One synthetic OHLC bar
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Candle {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl Candle {
    /// `true` for an up month
    pub fn is_bullish(&self) -> bool {
        self.close >= self.open
    }
}

/// Ordered candles, one per month starting at month 0
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CandleSeries {
    pub candles: Vec<Candle>,
}

impl CandleSeries {
    pub fn len(&self) -> usize {
        self.candles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Candle> {
        self.candles.iter()
    }

    /// Vertical value range covering every wick, widened on both sides by
    /// `padding_fraction` of the raw span. The lower bound never drops below zero.
    pub fn value_range(&self, padding_fraction: f64) -> Option<(f64, f64)> {
        let min_low = self.candles.iter().map(|c| c.low).reduce(f64::min)?;
        let max_high = self.candles.iter().map(|c| c.high).reduce(f64::max)?;
        let pad = (max_high - min_low) * padding_fraction;
        Some(((min_low - pad).max(0.0), max_high + pad))
    }
}

impl<'a> IntoIterator for &'a CandleSeries {
    type Item = &'a Candle;
    type IntoIter = std::slice::Iter<'a, Candle>;

    fn into_iter(self) -> Self::IntoIter {
        self.candles.iter()
    }
}

/// Everything the dashboard shows for one campaign
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CampaignForecast {
    pub prediction: PredictionRecord,
    pub projection: ProjectionSeries,
    pub summary: ProfitSummary,
    pub candles: CandleSeries,
}

impl CampaignForecast {
    pub fn to_json(&self) -> ForecastResult<String> {
        serde_json::to_string(self).map_err(ForecastError::from)
    }
}
