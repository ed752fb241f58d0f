use std::collections::BTreeMap;

use acuity_core::{AnswerSet, InstrumentResult, Severity};

use crate::items::ItemRange;
use crate::Instrument;

/// Social determinants of health: boolean or ordinal flags for low
/// social support, financial stress, and unstable housing.
///
/// Any truthy value (true, or a number above zero) counts as an
/// endorsed flag. The per-flag weights are provisional business rules
/// pending clinical review, like the AUDIT-C thresholds.
pub struct SocialDeterminants;

const ITEMS: [&str; 3] = ["social_support_low", "financial_stress", "housing_unstable"];

/// (key, weight) pairs; the uncapped sum is 19, hence the cap below.
const FLAG_WEIGHTS: [(&str, f64); 3] = [
    ("social_support_low", 8.0),
    ("financial_stress", 6.0),
    ("housing_unstable", 5.0),
];

pub const MAX_CONTRIBUTION: f64 = 15.0;

impl Instrument for SocialDeterminants {
    fn id(&self) -> &'static str {
        "social"
    }

    fn name(&self) -> &'static str {
        "Social Determinants"
    }

    fn item_keys(&self) -> &'static [&'static str] {
        &ITEMS
    }

    fn item_range(&self) -> ItemRange {
        ItemRange::new(0.0, 1.0)
    }

    fn min_items(&self) -> usize {
        1
    }

    fn score(&self, answers: &AnswerSet) -> InstrumentResult {
        let answered: Vec<_> = ITEMS
            .iter()
            .filter(|key| answers.contains(key))
            .collect();
        if answered.is_empty() {
            return InstrumentResult::insufficient(self.id(), 0);
        }

        let mut endorsed = 0usize;
        let mut weighted = 0.0;
        for (key, weight) in FLAG_WEIGHTS {
            if answers.get(key).is_some_and(|v| v.truthy()) {
                endorsed += 1;
                weighted += weight;
            }
        }

        InstrumentResult {
            instrument_id: self.id().to_string(),
            total_score: endorsed as f64,
            severity: Severity::None,
            weighted_risk: weighted.min(MAX_CONTRIBUTION),
            completed_items: answered.len(),
            sufficient_data: true,
            clinical_flags: BTreeMap::new(),
        }
    }
}
