use serde::{Deserialize, Serialize};

use crate::{constants::MODEL_VERSION, types::PredictionScore};

/// Prediction record
/// A score stamped with the time it was computed and the model that produced it
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionRecord {
    pub computed_at_millis: i64,
    pub model_version: String,
    pub prediction: PredictionScore,
    pub note: Option<String>,
}

/// Builder for prediction records
impl PredictionRecord {
    /// Create a new instance of a prediction record
    /// Fills the `computed_at_millis`, `model_version` and `prediction` fields
    pub fn new(prediction: PredictionScore, computed_at_millis: i64) -> Self {
        Self {
            computed_at_millis,
            model_version: MODEL_VERSION.to_string(),
            prediction,
            note: None,
        }
    }

    /// Fills the `note` field of the record
    pub fn note<S: AsRef<str>>(&mut self, text: S) -> &mut Self {
        self.note = Some(text.as_ref().to_string());
        self
    }

    pub fn score(&self) -> u8 {
        self.prediction.score
    }

    pub fn confidence(&self) -> u8 {
        self.prediction.confidence
    }
}
