use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::pathway::{CarePathway, Stratification};
use super::validation::ValidationReport;

/// Severity band for an instrument's raw total.
///
/// One shared enum covers every instrument's vocabulary: the full
/// depression/anxiety bands, screener outcomes, and the well-being
/// index bands (where higher raw scores are better).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    /// Too few items answered to score the instrument. A normal
    /// outcome, not an error.
    InsufficientData,
    None,
    Minimal,
    Mild,
    Moderate,
    ModeratelySevere,
    Severe,
    NegativeScreen,
    PositiveScreen,
    Poor,
    Low,
    Fair,
    Good,
}

/// Categorical risk level derived from the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Critical,
}

impl RiskLevel {
    /// The single source of truth for score → level mapping. Callers
    /// must never invert this; an externally asserted level that
    /// disagrees with it is a validation error.
    pub fn for_score(composite: f64) -> Self {
        if composite >= 80.0 {
            RiskLevel::Critical
        } else if composite >= 60.0 {
            RiskLevel::High
        } else if composite >= 40.0 {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        }
    }
}

/// Per-instrument scoring output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InstrumentResult {
    pub instrument_id: String,
    /// Raw instrument total (item sum, or the declared total when too
    /// few items were present).
    pub total_score: f64,
    pub severity: Severity,
    /// Weighted contribution to the composite, always within the
    /// instrument's declared cap.
    pub weighted_risk: f64,
    pub completed_items: usize,
    /// False when the minimum item count was not met; the instrument
    /// then contributes nothing to the composite.
    pub sufficient_data: bool,
    /// Instrument-specific indicators, e.g. `suicide_risk`.
    pub clinical_flags: BTreeMap<String, bool>,
}

impl InstrumentResult {
    /// The degraded result returned below the minimum item count.
    pub fn insufficient(instrument_id: &str, completed_items: usize) -> Self {
        Self {
            instrument_id: instrument_id.to_string(),
            total_score: 0.0,
            severity: Severity::InsufficientData,
            weighted_risk: 0.0,
            completed_items,
            sufficient_data: false,
            clinical_flags: BTreeMap::new(),
        }
    }

    pub fn flag(&self, name: &str) -> bool {
        self.clinical_flags.get(name).copied().unwrap_or(false)
    }
}

/// The full engine output for one evaluation. Immutable once produced;
/// the caller owns it and decides whether to persist or discard it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskAssessment {
    /// Composite risk score, clamped to [0, 100].
    pub composite_score: f64,
    pub risk_level: RiskLevel,
    pub instrument_breakdown: BTreeMap<String, InstrumentResult>,
    pub stratification: Stratification,
    pub care_pathway: CarePathway,
    pub validation: ValidationReport,
}
