//! Item normalization shared by every scorer.
//!
//! Raw answer values are untrusted client input. The rules here run
//! before any scoring formula, so the formulas can assume clean,
//! range-valid numbers: out-of-range values are silently clamped
//! (screening must tolerate malformed input without halting), and a
//! caller-declared total is honored only when too few individual items
//! were answered to compute the sum directly.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use acuity_core::AnswerSet;

/// The valid closed range for one item value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ItemRange {
    pub min: f64,
    pub max: f64,
}

impl ItemRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Clamp a raw value into this range.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

/// An answered item after normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnsweredItem {
    pub key: &'static str,
    /// The clamped value used for scoring.
    pub value: f64,
    /// True when the clamped value sits at the item maximum.
    pub at_maximum: bool,
}

/// Collect the answered items among `keys`, clamped into `range`.
pub fn answered_items(
    answers: &AnswerSet,
    keys: &'static [&'static str],
    range: ItemRange,
) -> Vec<AnsweredItem> {
    keys.iter()
        .copied()
        .filter_map(|key| {
            answers.value(key).map(|raw| {
                let value = range.clamp(raw);
                AnsweredItem {
                    key,
                    value,
                    at_maximum: value >= range.max,
                }
            })
        })
        .collect()
}

/// An instrument total after item-sum/declared-total resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedTotal {
    pub total: f64,
    pub completed_items: usize,
}

/// Resolve an instrument total from its items and optional declared
/// total.
///
/// The item sum takes precedence whenever at least `min_items` items
/// were answered, even if a declared total disagrees (the mismatch is
/// the validator's concern, not the scorer's). With fewer items, the
/// declared total is used as-is, clamped to the instrument's possible
/// span. Neither available means insufficient data.
pub fn resolve_total(
    answers: &AnswerSet,
    keys: &'static [&'static str],
    range: ItemRange,
    declared_key: Option<&'static str>,
    min_items: usize,
) -> Option<ResolvedTotal> {
    let items = answered_items(answers, keys, range);
    if items.len() >= min_items {
        return Some(ResolvedTotal {
            total: items.iter().map(|i| i.value).sum(),
            completed_items: items.len(),
        });
    }

    let declared = declared_key.and_then(|key| answers.value(key))?;
    let span = ItemRange::new(range.min * keys.len() as f64, range.max * keys.len() as f64);
    Some(ResolvedTotal {
        total: span.clamp(declared),
        completed_items: items.len(),
    })
}
