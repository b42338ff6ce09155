//! Check value shapes
//!
//! Under each pattern in `checks`, a definition may give a bare needle, a
//! `{ "check": ..., "count": ... }` object, or an array mixing both. The JSON
//! is inspected once and folded into the closed [`AssertionSpec`] set.

use serde_json::{Number, Value};

use crate::core::models::{ExpectedCount, NeedleTemplate};
use crate::error::ConfigError;

/// A parsed check value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssertionSpec {
    /// Bare needle, at least one occurrence
    Single(String),
    /// Needle with an explicit count
    SingleWithCount(String, ExpectedCount),
    /// Several specs, in order
    List(Vec<AssertionSpec>),
}

impl AssertionSpec {
    /// Inspect the JSON value declared under `pattern`
    pub fn from_value(pattern: &str, value: &Value) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidCheck {
            pattern: pattern.to_string(),
            reason,
        };

        match value {
            Value::String(needle) => Ok(Self::Single(needle.clone())),
            Value::Object(map) => {
                let needle = match map.get("check") {
                    Some(Value::String(needle)) => needle.clone(),
                    Some(other) => return Err(invalid(format!("\"check\" must be a string, got {other}"))),
                    None => return Err(invalid("object is missing \"check\"".to_string())),
                };
                let count = match map.get("count") {
                    None | Some(Value::Null) => None,
                    Some(Value::Number(n)) => Some(
                        integral(n).ok_or_else(|| invalid(format!("\"count\" must be an integer, got {n}")))?,
                    ),
                    Some(other) => return Err(invalid(format!("\"count\" must be an integer, got {other}"))),
                };
                Ok(Self::SingleWithCount(needle, ExpectedCount::from_raw(count)))
            },
            Value::Array(items) => items
                .iter()
                .map(|item| Self::from_value(pattern, item))
                .collect::<Result<Vec<_>, _>>()
                .map(Self::List),
            other => Err(invalid(format!("expected a string, object or array, got {other}"))),
        }
    }

    /// Flatten into needle templates in declaration order
    #[must_use]
    pub fn needles(&self) -> Vec<NeedleTemplate> {
        let mut out = Vec::new();
        self.collect_needles(&mut out);
        out
    }

    fn collect_needles(&self, out: &mut Vec<NeedleTemplate>) {
        match self {
            Self::Single(needle) => out.push(NeedleTemplate::new(needle.as_str(), ExpectedCount::AtLeastOne)),
            Self::SingleWithCount(needle, expected) => out.push(NeedleTemplate::new(needle.as_str(), *expected)),
            Self::List(specs) => {
                for spec in specs {
                    spec.collect_needles(out);
                }
            },
        }
    }
}

/// The number as an integer, accepting floats with no fractional part
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn integral(n: &Number) -> Option<i64> {
    n.as_i64().or_else(|| {
        let f = n.as_f64()?;
        let in_range = f >= i64::MIN as f64 && f < i64::MAX as f64;
        (in_range && f.fract().abs() < f64::EPSILON).then(|| f as i64)
    })
}
