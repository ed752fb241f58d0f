use std::collections::BTreeMap;

use acuity_core::{AnswerSet, InstrumentResult, Severity};

use crate::items::{answered_items, ItemRange, ResolvedTotal};
use crate::Instrument;

/// WHO-5: 5-item well-being index, reported on a 0–100 scale where
/// higher is better — the inverse risk direction from the other
/// instruments, so low well-being adds to the composite.
///
/// Accepts either the pre-computed index (`who5_index`, 0–100) or the
/// five raw items (`who5_1`..`who5_5`, 0–5 each, raw sum × 4 = index).
/// The item path needs all five items; the declared index is the
/// fallback. It is not an item sum, so it is exempt from the
/// declared-total consistency check.
pub struct Who5;

const ITEMS: [&str; 5] = ["who5_1", "who5_2", "who5_3", "who5_4", "who5_5"];

const INDEX_KEY: &str = "who5_index";

pub const MAX_CONTRIBUTION: f64 = 25.0;

impl Instrument for Who5 {
    fn id(&self) -> &'static str {
        "who5"
    }

    fn name(&self) -> &'static str {
        "WHO-5"
    }

    fn item_keys(&self) -> &'static [&'static str] {
        &ITEMS
    }

    fn item_range(&self) -> ItemRange {
        ItemRange::new(0.0, 5.0)
    }

    fn min_items(&self) -> usize {
        ITEMS.len()
    }

    fn resolve_total(&self, answers: &AnswerSet) -> Option<ResolvedTotal> {
        let items = answered_items(answers, &ITEMS, self.item_range());
        if items.len() == ITEMS.len() {
            let raw_sum: f64 = items.iter().map(|i| i.value).sum();
            return Some(ResolvedTotal {
                total: raw_sum * 4.0,
                completed_items: items.len(),
            });
        }

        let index = answers.value(INDEX_KEY)?;
        Some(ResolvedTotal {
            total: ItemRange::new(0.0, 100.0).clamp(index),
            completed_items: items.len(),
        })
    }

    fn score(&self, answers: &AnswerSet) -> InstrumentResult {
        let Some(resolved) = self.resolve_total(answers) else {
            let answered = answered_items(answers, &ITEMS, self.item_range()).len();
            return InstrumentResult::insufficient(self.id(), answered);
        };

        let index = resolved.total;

        InstrumentResult {
            instrument_id: self.id().to_string(),
            total_score: index,
            severity: severity_for(index),
            weighted_risk: band_weight(index),
            completed_items: resolved.completed_items,
            sufficient_data: true,
            clinical_flags: BTreeMap::new(),
        }
    }
}

fn severity_for(index: f64) -> Severity {
    if index >= 68.0 {
        Severity::Good
    } else if index >= 50.0 {
        Severity::Fair
    } else if index >= 25.0 {
        Severity::Low
    } else {
        Severity::Poor
    }
}

/// Poor well-being contributes risk; good well-being contributes none.
fn band_weight(index: f64) -> f64 {
    if index < 25.0 {
        25.0
    } else if index < 50.0 {
        15.0
    } else if index < 68.0 {
        8.0
    } else {
        0.0
    }
}
