//! acuity-engine
//!
//! The screening risk engine: one synchronous, side-effect-free
//! operation that turns an [`AnswerSet`] into a [`RiskAssessment`].
//!
//! Evaluation is a pure function of its input — no clock, no I/O, no
//! state between calls — so it is safe to invoke concurrently from any
//! number of callers. The surrounding system owns persistence,
//! alerting, and telemetry; [`events`] provides the structured record
//! those collaborators consume.

pub mod aggregate;
pub mod error;
pub mod events;
pub mod stratify;
pub mod validate;

use std::collections::BTreeMap;

use acuity_core::{AnswerSet, RiskAssessment};
use acuity_instruments::all_instruments;

pub use error::EngineError;

/// Evaluate a screening answer set.
///
/// Every registered instrument scores independently; instruments below
/// their minimum item count report insufficient data and contribute
/// nothing. Validation findings are advisory and never block scoring.
pub fn evaluate(answers: &AnswerSet) -> RiskAssessment {
    let mut breakdown = BTreeMap::new();
    for instrument in all_instruments() {
        breakdown.insert(instrument.id().to_string(), instrument.score(answers));
    }

    let validation = validate::validate(answers);
    let composite = aggregate::aggregate(&breakdown);
    let (stratification, care_pathway) =
        stratify::stratify(composite.score, composite.level, &breakdown);

    RiskAssessment {
        composite_score: composite.score,
        risk_level: composite.level,
        instrument_breakdown: breakdown,
        stratification,
        care_pathway,
        validation,
    }
}

/// Evaluate an untyped JSON payload from the intake layer.
///
/// Fails fast with [`EngineError::Core`] when the payload is not a
/// key→value mapping — the only condition that aborts evaluation.
pub fn evaluate_json(payload: &serde_json::Value) -> Result<RiskAssessment, EngineError> {
    let answers = AnswerSet::from_json(payload)?;
    Ok(evaluate(&answers))
}
