//! Composite score aggregation.

use std::collections::BTreeMap;

use acuity_core::{InstrumentResult, RiskLevel};

/// The clamped composite score and its derived risk level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Composite {
    pub score: f64,
    pub level: RiskLevel,
}

/// Sum weighted contributions across instruments with sufficient data,
/// clamp to [0, 100], and derive the categorical risk level.
///
/// Instruments lacking data contribute zero — excluded, not penalized.
/// A raised `suicide_risk` flag on any instrument overrides the level
/// to critical irrespective of the numeric score.
pub fn aggregate(breakdown: &BTreeMap<String, InstrumentResult>) -> Composite {
    let sum: f64 = breakdown
        .values()
        .filter(|r| r.sufficient_data)
        .map(|r| r.weighted_risk)
        .sum();
    let score = sum.clamp(0.0, 100.0);

    let suicide_risk = breakdown.values().any(|r| r.flag("suicide_risk"));
    let level = if suicide_risk {
        RiskLevel::Critical
    } else {
        RiskLevel::for_score(score)
    };

    Composite { score, level }
}
