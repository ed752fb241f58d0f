use std::collections::BTreeMap;

use acuity_core::{AnswerSet, InstrumentResult, Severity};

use crate::items::{answered_items, ItemRange};
use crate::Instrument;

/// Pain screening: severity and interference, each rated 0–10.
///
/// Severity is the anchor item — without it the instrument reports
/// insufficient data. Interference is optional and adds its own tier.
pub struct Pain;

const ITEMS: [&str; 2] = ["pain_severity", "pain_interference"];

const SEVERITY_KEY: &str = "pain_severity";
const INTERFERENCE_KEY: &str = "pain_interference";

pub const MAX_CONTRIBUTION: f64 = 25.0;

impl Instrument for Pain {
    fn id(&self) -> &'static str {
        "pain"
    }

    fn name(&self) -> &'static str {
        "Pain Screen"
    }

    fn item_keys(&self) -> &'static [&'static str] {
        &ITEMS
    }

    fn item_range(&self) -> ItemRange {
        ItemRange::new(0.0, 10.0)
    }

    fn min_items(&self) -> usize {
        1
    }

    fn score(&self, answers: &AnswerSet) -> InstrumentResult {
        let range = self.item_range();
        let answered = answered_items(answers, &ITEMS, range);

        let Some(severity) = answers.value(SEVERITY_KEY).map(|v| range.clamp(v)) else {
            return InstrumentResult::insufficient(self.id(), answered.len());
        };
        let interference = answers
            .value(INTERFERENCE_KEY)
            .map(|v| range.clamp(v))
            .unwrap_or(0.0);

        let weighted = (severity_tier(severity) + interference_tier(interference))
            .min(MAX_CONTRIBUTION);

        InstrumentResult {
            instrument_id: self.id().to_string(),
            total_score: severity + interference,
            severity: Severity::None,
            weighted_risk: weighted,
            completed_items: answered.len(),
            sufficient_data: true,
            clinical_flags: BTreeMap::new(),
        }
    }
}

fn severity_tier(severity: f64) -> f64 {
    if severity >= 7.0 {
        15.0
    } else if severity >= 4.0 {
        10.0
    } else if severity >= 1.0 {
        5.0
    } else {
        0.0
    }
}

fn interference_tier(interference: f64) -> f64 {
    if interference >= 7.0 {
        10.0
    } else if interference >= 4.0 {
        6.0
    } else if interference >= 1.0 {
        3.0
    } else {
        0.0
    }
}
