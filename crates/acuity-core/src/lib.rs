//! acuity-core
//!
//! Pure domain types for the screening risk engine. No I/O, no clock,
//! no service dependency — this is the shared vocabulary of the Acuity
//! system: answer sets in, risk assessments out.

pub mod error;
pub mod models;

pub use error::CoreError;
pub use models::answer::{AnswerSet, AnswerValue};
pub use models::assessment::{InstrumentResult, RiskAssessment, RiskLevel, Severity};
pub use models::pathway::{CarePathway, ClinicalPriority, InterventionTimeframe, Stratification};
pub use models::validation::{ConsistencyError, ValidationReport, ValidationStatus};
