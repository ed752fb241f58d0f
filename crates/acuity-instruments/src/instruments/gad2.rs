use std::collections::BTreeMap;

use acuity_core::{AnswerSet, InstrumentResult, Severity};

use crate::items::{answered_items, ItemRange};
use crate::Instrument;

/// GAD-2: abbreviated 2-item anxiety screener, total 0–6.
/// A total of 3 or more is a positive screen warranting the full GAD-7.
pub struct Gad2;

const ITEMS: [&str; 2] = ["gad2_1", "gad2_2"];

pub const MAX_CONTRIBUTION: f64 = 20.0;

impl Instrument for Gad2 {
    fn id(&self) -> &'static str {
        "gad2"
    }

    fn name(&self) -> &'static str {
        "GAD-2"
    }

    fn item_keys(&self) -> &'static [&'static str] {
        &ITEMS
    }

    fn item_range(&self) -> ItemRange {
        ItemRange::new(0.0, 3.0)
    }

    fn declared_total_key(&self) -> Option<&'static str> {
        Some("gad2_total")
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
            (total * 3.5).min(MAX_CONTRIBUTION)
        } else {
            total * 1.5
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
