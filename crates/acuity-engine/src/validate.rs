//! Response validation: internal consistency and suspicious-pattern
//! checks. Always returns a report, never an error — findings are
//! advisory and scoring proceeds regardless.

use acuity_core::{AnswerSet, ConsistencyError, RiskLevel, ValidationReport};
use acuity_instruments::all_instruments;
use acuity_instruments::items::answered_items;

use crate::error::EngineError;

/// Fraction of answered mental-health items at the item maximum above
/// which the response pattern is flagged for human review.
const SUSPICIOUS_AT_MAX_RATIO: f64 = 0.8;

const EPSILON: f64 = 1e-9;

/// Validate an answer set.
///
/// Consistency: for every instrument accepting a declared item-sum
/// total, if enough individual items are present their sum must equal
/// the declared value; a mismatch is recorded (the item-derived value
/// still wins for scoring). Suspicious pattern: across all answered
/// depression/anxiety items, more than 80% at the item maximum raises
/// the review flag.
pub fn validate(answers: &AnswerSet) -> ValidationReport {
    let mut consistency_errors = Vec::new();
    let mut mh_answered = 0usize;
    let mut mh_at_max = 0usize;

    for instrument in all_instruments() {
        let items = answered_items(answers, instrument.item_keys(), instrument.item_range());

        if instrument.mental_health_items() {
            mh_answered += items.len();
            mh_at_max += items.iter().filter(|i| i.at_maximum).count();
        }

        let Some(declared_key) = instrument.declared_total_key() else {
            continue;
        };
        let Some(declared) = answers.value(declared_key) else {
            continue;
        };
        if items.len() < instrument.min_items() {
            continue;
        }

        let computed: f64 = items.iter().map(|i| i.value).sum();
        if (computed - declared).abs() > EPSILON {
            consistency_errors.push(ConsistencyError {
                instrument_id: instrument.id().to_string(),
                declared,
                computed,
                message: format!(
                    "{}: declared total {declared} does not match item sum {computed}",
                    instrument.name(),
                ),
            });
        }
    }

    let suspicious = mh_answered > 0
        && (mh_at_max as f64 / mh_answered as f64) > SUSPICIOUS_AT_MAX_RATIO;

    ValidationReport::new(consistency_errors, suspicious)
}

/// Check a caller-asserted risk level against the engine's own
/// score→level mapping.
///
/// Some intake clients echo back a risk level alongside the score they
/// were shown; the engine never accepts such a claim as input, but
/// callers can use this to reject inconsistent submissions. The
/// mapping is [`RiskLevel::for_score`] — the same one the aggregator
/// uses, deliberately not a second thresholding rule.
pub fn check_risk_level_claim(claimed: RiskLevel, composite_score: f64) -> Result<(), EngineError> {
    let computed = RiskLevel::for_score(composite_score);
    if claimed == computed {
        Ok(())
    } else {
        Err(EngineError::RiskLevelMismatch {
            claimed,
            computed,
            score: composite_score,
        })
    }
}
