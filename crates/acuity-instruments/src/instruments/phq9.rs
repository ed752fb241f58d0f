use std::collections::BTreeMap;

use acuity_core::{AnswerSet, InstrumentResult, Severity};

use crate::items::{answered_items, ItemRange};
use crate::Instrument;

/// PHQ-9: 9-item depression screener, items scored 0–3, total 0–27.
///
/// Item 9 is the suicidal-ideation item: any value above zero raises
/// the `suicide_risk` clinical flag regardless of the total, which the
/// aggregator escalates to a critical risk level.
pub struct Phq9;

const ITEMS: [&str; 9] = [
    "phq9_1", "phq9_2", "phq9_3", "phq9_4", "phq9_5", "phq9_6", "phq9_7", "phq9_8", "phq9_9",
];

const SUICIDE_ITEM: &str = "phq9_9";

/// Depression carries the largest share of the composite.
pub const MAX_CONTRIBUTION: f64 = 50.0;

/// Added when the suicidal-ideation item is endorsed at any level.
const SUICIDE_RISK_WEIGHT: f64 = 25.0;

impl Instrument for Phq9 {
    fn id(&self) -> &'static str {
        "phq9"
    }

    fn name(&self) -> &'static str {
        "PHQ-9"
    }

    fn item_keys(&self) -> &'static [&'static str] {
        &ITEMS
    }

    fn item_range(&self) -> ItemRange {
        ItemRange::new(0.0, 3.0)
    }

    fn declared_total_key(&self) -> Option<&'static str> {
        Some("phq9_total")
    }

    fn min_items(&self) -> usize {
        5
    }

    fn mental_health_items(&self) -> bool {
        true
    }

    fn score(&self, answers: &AnswerSet) -> InstrumentResult {
        // The suicide indicator is independent of scoring: it must
        // survive even an insufficient-data outcome, because a single
        // endorsed ideation item escalates the whole assessment.
        let suicide_risk = answers
            .value(SUICIDE_ITEM)
            .map(|raw| self.item_range().clamp(raw) > 0.0)
            .unwrap_or(false);

        let Some(resolved) = self.resolve_total(answers) else {
            let mut result = InstrumentResult::insufficient(self.id(), answered_count(answers));
            result
                .clinical_flags
                .insert("suicide_risk".to_string(), suicide_risk);
            return result;
        };

        let total = resolved.total;
        let severity = severity_for(total);

        let mut weighted = band_weight(total);
        if suicide_risk {
            weighted += SUICIDE_RISK_WEIGHT;
        }

        let mut clinical_flags = BTreeMap::new();
        clinical_flags.insert("suicide_risk".to_string(), suicide_risk);

        InstrumentResult {
            instrument_id: self.id().to_string(),
            total_score: total,
            severity,
            weighted_risk: weighted.min(MAX_CONTRIBUTION),
            completed_items: resolved.completed_items,
            sufficient_data: true,
            clinical_flags,
        }
    }
}

fn answered_count(answers: &AnswerSet) -> usize {
    answered_items(answers, &ITEMS, ItemRange::new(0.0, 3.0)).len()
}

/// Published PHQ-9 severity cut-offs.
fn severity_for(total: f64) -> Severity {
    if total >= 20.0 {
        Severity::Severe
    } else if total >= 15.0 {
        Severity::ModeratelySevere
    } else if total >= 10.0 {
        Severity::Moderate
    } else if total >= 5.0 {
        Severity::Mild
    } else {
        Severity::Minimal
    }
}

/// Band-based risk weight: the minimal band contributes the raw score
/// itself, higher bands contribute fixed steps.
fn band_weight(total: f64) -> f64 {
    if total >= 20.0 {
        35.0
    } else if total >= 15.0 {
        28.0
    } else if total >= 10.0 {
        22.0
    } else if total >= 5.0 {
        12.0
    } else {
        total
    }
}
