use std::collections::BTreeMap;

use acuity_core::{AnswerSet, InstrumentResult, Severity};

use crate::items::{answered_items, ItemRange};
use crate::Instrument;

/// GAD-7: 7-item anxiety screener, items scored 0–3, total 0–21.
pub struct Gad7;

const ITEMS: [&str; 7] = [
    "gad7_1", "gad7_2", "gad7_3", "gad7_4", "gad7_5", "gad7_6", "gad7_7",
];

pub const MAX_CONTRIBUTION: f64 = 25.0;

impl Instrument for Gad7 {
    fn id(&self) -> &'static str {
        "gad7"
    }

    fn name(&self) -> &'static str {
        "GAD-7"
    }

    fn item_keys(&self) -> &'static [&'static str] {
        &ITEMS
    }

    fn item_range(&self) -> ItemRange {
        ItemRange::new(0.0, 3.0)
    }

    fn declared_total_key(&self) -> Option<&'static str> {
        Some("gad7_total")
    }

    fn min_items(&self) -> usize {
        4
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

        InstrumentResult {
            instrument_id: self.id().to_string(),
            total_score: total,
            severity: severity_for(total),
            weighted_risk: band_weight(total),
            completed_items: resolved.completed_items,
            sufficient_data: true,
            clinical_flags: BTreeMap::new(),
        }
    }
}

/// Published GAD-7 severity cut-offs.
fn severity_for(total: f64) -> Severity {
    if total >= 15.0 {
        Severity::Severe
    } else if total >= 10.0 {
        Severity::Moderate
    } else if total >= 5.0 {
        Severity::Mild
    } else {
        Severity::Minimal
    }
}

fn band_weight(total: f64) -> f64 {
    if total >= 15.0 {
        25.0
    } else if total >= 10.0 {
        20.0
    } else if total >= 5.0 {
        12.0
    } else {
        total * 1.5
    }
}
