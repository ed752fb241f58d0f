//! Structured screening events for the alerting and telemetry layers.
//!
//! The engine itself never logs or raises alerts; it only produces a
//! [`RiskAssessment`]. Callers that persist or act on an assessment
//! build a `ScreeningEvent` from it and `emit()` it via `tracing`, so
//! the surrounding system gets one consistent, structured record per
//! evaluation.

use jiff::Timestamp;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use acuity_core::{RiskAssessment, RiskLevel};

/// A caller-side record of one completed evaluation.
#[derive(Debug, Clone, Serialize)]
pub struct ScreeningEvent {
    pub id: Uuid,
    pub recorded_at: Timestamp,
    pub composite_score: f64,
    pub risk_level: RiskLevel,
    pub emergency_intervention: bool,
    pub suspicious_pattern: bool,
    pub consistency_errors: usize,
}

impl ScreeningEvent {
    /// Stamp an assessment with an id and the current time. This is
    /// the caller's boundary — the assessment itself carries neither,
    /// so `evaluate` stays deterministic.
    pub fn from_assessment(assessment: &RiskAssessment) -> Self {
        Self {
            id: Uuid::new_v4(),
            recorded_at: Timestamp::now(),
            composite_score: assessment.composite_score,
            risk_level: assessment.risk_level,
            emergency_intervention: assessment.care_pathway.emergency_intervention,
            suspicious_pattern: assessment.validation.suspicious_pattern_detected,
            consistency_errors: assessment.validation.consistency_errors.len(),
        }
    }

    /// Whether the alerting layer should raise a clinical alert: any
    /// non-low risk level, or an emergency-intervention pathway.
    pub fn needs_alert(&self) -> bool {
        self.risk_level != RiskLevel::Low || self.emergency_intervention
    }

    /// Emit this event via tracing.
    pub fn emit(&self) {
        info!(
            screening.id = %self.id,
            screening.composite_score = self.composite_score,
            screening.risk_level = ?self.risk_level,
            screening.needs_alert = self.needs_alert(),
            screening.suspicious_pattern = self.suspicious_pattern,
            screening.consistency_errors = self.consistency_errors,
            "screening evaluated"
        );
    }
}
