use std::collections::BTreeMap;

use acuity_core::{AnswerSet, InstrumentResult, Severity};

use crate::items::{answered_items, ItemRange};
use crate::Instrument;

/// AUDIT-C: 3-item alcohol-use composite, items scored 0–4, sum 0–12.
///
/// The risk-weight thresholds here are provisional business rules, not
/// a published AUDIT-C scoring key; confirm with a clinical
/// stakeholder before treating them as authoritative.
pub struct AuditC;

const ITEMS: [&str; 3] = ["audit_c_1", "audit_c_2", "audit_c_3"];

pub const MAX_CONTRIBUTION: f64 = 15.0;

impl Instrument for AuditC {
    fn id(&self) -> &'static str {
        "audit_c"
    }

    fn name(&self) -> &'static str {
        "AUDIT-C"
    }

    fn item_keys(&self) -> &'static [&'static str] {
        &ITEMS
    }

    fn item_range(&self) -> ItemRange {
        ItemRange::new(0.0, 4.0)
    }

    fn min_items(&self) -> usize {
        ITEMS.len()
    }

    fn score(&self, answers: &AnswerSet) -> InstrumentResult {
        let Some(resolved) = self.resolve_total(answers) else {
            let answered = answered_items(answers, &ITEMS, self.item_range()).len();
            return InstrumentResult::insufficient(self.id(), answered);
        };

        let sum = resolved.total;
        let weighted = if sum >= 4.0 {
            (sum * 2.5).min(MAX_CONTRIBUTION)
        } else if sum >= 2.0 {
            sum * 1.5
        } else {
            0.0
        };

        InstrumentResult {
            instrument_id: self.id().to_string(),
            total_score: sum,
            severity: Severity::None,
            weighted_risk: weighted,
            completed_items: resolved.completed_items,
            sufficient_data: true,
            clinical_flags: BTreeMap::new(),
        }
    }
}
