//! acuity-instruments
//!
//! Clinical screening instrument scorers. Pure functions of an
//! [`AnswerSet`] — no clock, no I/O, no shared state. Each instrument
//! reads only its own item keys, clamps raw values into range, and
//! produces an [`InstrumentResult`] with a capped risk-weight
//! contribution.

pub mod instruments;
pub mod items;

use acuity_core::{AnswerSet, InstrumentResult};
use items::{ItemRange, ResolvedTotal};

/// Trait implemented by each screening instrument.
///
/// The metadata accessors (`item_keys`, `item_range`,
/// `declared_total_key`, `min_items`) drive both the default total
/// resolution and the cross-instrument validation checks, so an
/// instrument's scoring formula never re-states its own item layout.
pub trait Instrument: Send + Sync {
    /// Unique identifier (e.g. "phq9", "audit_c").
    fn id(&self) -> &'static str;

    /// Human-readable name (e.g. "PHQ-9", "AUDIT-C").
    fn name(&self) -> &'static str;

    /// The item keys this instrument reads from the answer set.
    fn item_keys(&self) -> &'static [&'static str];

    /// Valid range for a single item; raw values are clamped into it.
    fn item_range(&self) -> ItemRange;

    /// Key of a caller-declared total whose meaning is "sum of my
    /// items", if the instrument accepts one. Used both as a scoring
    /// fallback and by the consistency check.
    fn declared_total_key(&self) -> Option<&'static str> {
        None
    }

    /// Minimum answered items for the item-derived total to be valid.
    fn min_items(&self) -> usize;

    /// Whether these items count toward the suspicious-pattern
    /// heuristic (depression/anxiety item banks do; others do not).
    fn mental_health_items(&self) -> bool {
        false
    }

    /// Resolve the instrument total: the clamped item sum when the
    /// minimum item count is met, otherwise the declared total if one
    /// was supplied. `None` means insufficient data.
    fn resolve_total(&self, answers: &AnswerSet) -> Option<ResolvedTotal> {
        items::resolve_total(
            answers,
            self.item_keys(),
            self.item_range(),
            self.declared_total_key(),
            self.min_items(),
        )
    }

    /// Score the instrument. Below the minimum item count this returns
    /// the degraded insufficient-data result, never an error.
    fn score(&self, answers: &AnswerSet) -> InstrumentResult;
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::phq9::Phq9),
        Box::new(instruments::phq2::Phq2),
        Box::new(instruments::gad7::Gad7),
        Box::new(instruments::gad2::Gad2),
        Box::new(instruments::who5::Who5),
        Box::new(instruments::pain::Pain),
        Box::new(instruments::audit_c::AuditC),
        Box::new(instruments::social::SocialDeterminants),
    ]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}
