use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ValidationStatus {
    Passed,
    Warnings,
}

/// A recorded inconsistency in the submitted answers.
///
/// Advisory only: scoring proceeds regardless, with the item-derived
/// value taking precedence over any declared total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ConsistencyError {
    pub instrument_id: String,
    pub declared: f64,
    pub computed: f64,
    pub message: String,
}

/// Advisory validation outcome merged into the final assessment.
/// Never blocks score computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValidationReport {
    pub status: ValidationStatus,
    pub consistency_errors: Vec<ConsistencyError>,
    /// More than 80% of answered mental-health items sat at the item
    /// maximum. A signal for human review, not a rejection.
    pub suspicious_pattern_detected: bool,
}

impl ValidationReport {
    pub fn new(consistency_errors: Vec<ConsistencyError>, suspicious_pattern_detected: bool) -> Self {
        let status = if consistency_errors.is_empty() && !suspicious_pattern_detected {
            ValidationStatus::Passed
        } else {
            ValidationStatus::Warnings
        };
        Self {
            status,
            consistency_errors,
            suspicious_pattern_detected,
        }
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new(Vec::new(), false)
    }
}
