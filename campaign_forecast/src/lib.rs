//! Heuristic forecasts for crowdfunding campaigns.
//!
//! - [`scorer`] turns funding facts into a success score, a confidence and a factor breakdown
//! - [`projection`] projects low/average/high cumulative profit curves from a score
//! - [`candles`] synthesizes an OHLC series around the average curve, with noise driven by confidence
//! - [`engine::ForecastEngine`] wires the three together behind one set of settings

pub mod candles;
pub mod clock;
pub mod constants;
pub mod engine;
pub mod projection;
pub mod record;
pub mod scorer;
pub mod settings;
pub mod types;
mod utils;

pub use clock::{Clock, FixedClock, SystemClock};
pub use engine::{ForecastEngine, RankedCampaign};
pub use record::PredictionRecord;
pub use settings::ForecastSettings;
pub use types::*;
pub use utils::error::{ForecastError, ForecastResult};
