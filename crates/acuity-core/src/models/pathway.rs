use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// How quickly a clinician should act on the assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ClinicalPriority {
    Immediate,
    Urgent,
    Routine,
    Preventive,
}

/// Recommended window for first intervention, keyed by risk level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum InterventionTimeframe {
    Immediate,
    Within48Hours,
    WithinTwoWeeks,
    WithinOneMonth,
    WithinThreeMonths,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Stratification {
    pub clinical_priority: ClinicalPriority,
    pub intervention_timeframe: InterventionTimeframe,
    pub care_coordination_required: bool,
}

/// Referral and escalation flags recommended by the assessment.
///
/// Flags are monotonic: escalation rules only ever turn them on, so the
/// final pathway is the union of every triggered rule regardless of
/// evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CarePathway {
    pub primary_care: bool,
    pub mental_health_referral: bool,
    pub emergency_intervention: bool,
    pub specialist_referral: bool,
    pub care_management: bool,
}

impl Default for CarePathway {
    /// Every pathway starts at primary care with no escalations.
    fn default() -> Self {
        Self {
            primary_care: true,
            mental_health_referral: false,
            emergency_intervention: false,
            specialist_referral: false,
            care_management: false,
        }
    }
}
