use acuity_core::{CoreError, RiskLevel};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A caller asserted a risk level that contradicts the level the
    /// engine derives from the composite score. The engine's own
    /// mapping is always authoritative.
    #[error(
        "risk level claim '{claimed:?}' contradicts computed '{computed:?}' for score {score}"
    )]
    RiskLevelMismatch {
        claimed: RiskLevel,
        computed: RiskLevel,
        score: f64,
    },
}
