use std::collections::BTreeMap;

use acuity_core::{AnswerSet, InstrumentResult, Severity};

use crate::items::{answered_items, ItemRange};
use crate::Instrument;

/// PHQ-2: abbreviated 2-item depression screener, total 0–6.
/// A total of 3 or more is a positive screen warranting the full PHQ-9.
pub struct Phq2;

const ITEMS: [&str; 2] = ["phq2_1", "phq2_2"];

pub const MAX_CONTRIBUTION: f64 = 25.0;

impl Instrument for Phq2 {
    fn id(&self) -> &'static str {
        "phq2"
    }

    fn name(&self) -> &'static str {
        "PHQ-2"
    }

    fn item_keys(&self) -> &'static [&'static str] {
        &ITEMS
    }

    fn item_range(&self) -> ItemRange {
        ItemRange::new(0.0, 3.0)
    }

    fn declared_total_key(&self) -> Option<&'static str> {
        Some("phq2_total")
    }

    fn min_items(&self) -> usize {
        2
    }

    fn mental_health_items(&self) -> bool {
        true
    }

    fn score(&self, answers: &AnswerSet) -> InstrumentResult {
        let Some(resolved) = self.resolve_total(answers) else {
            let answered = answered_items(answers, &ITEMS, self.item_range()).len();
            return InstrumentResult::insufficient(self.id(), answered);
        };

        let total = resolved.total;
        let positive = total >= 3.0;

        let weighted = if positive {
            (total * 4.2).min(MAX_CONTRIBUTION)
        } else {
            total * 2.0
        };

        InstrumentResult {
            instrument_id: self.id().to_string(),
            total_score: total,
            severity: if positive {
                Severity::PositiveScreen
            } else {
                Severity::NegativeScreen
            },
            weighted_risk: weighted,
            completed_items: resolved.completed_items,
            sufficient_data: true,
            clinical_flags: BTreeMap::new(),
        }
    }
}
