use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// A single raw answer value as submitted by the intake layer.
///
/// Values are untrusted: every scorer clamps them into its own valid
/// range before use, so out-of-range input degrades instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum AnswerValue {
    Integer(i64),
    Decimal(f64),
    Boolean(bool),
}

impl AnswerValue {
    /// Numeric view of the value. Booleans read as 1.0 / 0.0 so ordinal
    /// and boolean social-determinant flags share one code path.
    pub fn as_f64(&self) -> f64 {
        match *self {
            AnswerValue::Integer(v) => v as f64,
            AnswerValue::Decimal(v) => v,
            AnswerValue::Boolean(v) => {
                if v {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }

    /// Truthiness: `true`, or any value strictly greater than zero.
    pub fn truthy(&self) -> bool {
        match *self {
            AnswerValue::Boolean(v) => v,
            _ => self.as_f64() > 0.0,
        }
    }
}

/// An immutable mapping from item identifier to raw answer value.
///
/// Keys not recognized by any scorer are ignored. An `AnswerSet` is
/// supplied fresh on every evaluation; the engine keeps no state
/// between calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerSet {
    answers: BTreeMap<String, AnswerValue>,
}

impl AnswerSet {
    pub fn from_entries<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, AnswerValue)>,
        K: Into<String>,
    {
        Self {
            answers: entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Build an answer set from an untyped JSON payload.
    ///
    /// The payload must be a JSON object whose members are numbers or
    /// booleans; anything else fails with [`CoreError::InvalidInput`].
    /// Null members are treated as unanswered and skipped.
    pub fn from_json(payload: &serde_json::Value) -> Result<Self, CoreError> {
        let object = payload
            .as_object()
            .ok_or_else(|| CoreError::InvalidInput("payload is not an object".to_string()))?;

        let mut answers = BTreeMap::new();
        for (key, value) in object {
            let parsed = match value {
                serde_json::Value::Null => continue,
                serde_json::Value::Bool(b) => AnswerValue::Boolean(*b),
                serde_json::Value::Number(n) => {
                    if let Some(i) = n.as_i64() {
                        AnswerValue::Integer(i)
                    } else if let Some(f) = n.as_f64() {
                        AnswerValue::Decimal(f)
                    } else {
                        return Err(CoreError::InvalidInput(format!(
                            "answer '{key}' is not a representable number"
                        )));
                    }
                }
                other => {
                    return Err(CoreError::InvalidInput(format!(
                        "answer '{key}' has unsupported type: {other}"
                    )));
                }
            };
            answers.insert(key.clone(), parsed);
        }

        Ok(Self { answers })
    }

    pub fn get(&self, key: &str) -> Option<&AnswerValue> {
        self.answers.get(key)
    }

    /// Numeric value for a key, if answered with a usable number.
    ///
    /// NaN cannot be ordered, so it would defeat range clamping and
    /// poison every downstream sum; it is treated as unanswered.
    /// Infinities are orderable and clamp like any other
    /// out-of-range value.
    pub fn value(&self, key: &str) -> Option<f64> {
        self.answers
            .get(key)
            .map(AnswerValue::as_f64)
            .filter(|v| !v.is_nan())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.answers.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}
