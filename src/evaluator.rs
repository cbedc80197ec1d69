//! Applies a selector [`Program`] to a json [`Value`].
//!
//! Evaluation walks each chain left to right. Every selector inspects
//! the current value, computes a partial result and hands sub-values to
//! the remainder of the chain. The remainder is threaded as a subslice
//! so that range, property, filter and flatten can pass the same
//! remainder to many sub-values without cloning any iterator state.
//!
//! The input document is only ever read; the returned document is
//! independently owned.

use indexmap::IndexMap;
use tracing::warn;

use crate::ast::{Chain, Program, Selector};
use crate::value::Value;
use thiserror::Error;

/// Errors raised when a selector cannot be applied to a value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApplyError {
    /// The selector does not support the value's kind (e.g. a key
    /// selector applied to an array).
    #[error("selector and json value don't match: {selector}, {value}")]
    Mismatch {
        selector: &'static str,
        value: &'static str,
    },

    /// A key or property lookup missed.
    #[error("key \"{0}\" was not found in the json object")]
    KeyNotFound(String),

    /// An index fell outside the array.
    #[error("index {index} is out of range for an array of length {len}")]
    IndexOutOfRange { index: i64, len: usize },

    /// A range endpoint fell outside the array, or the range was
    /// reversed.
    #[error("range [{}:{}] is out of bounds for an array of length {len}", fmt_bound(.start), fmt_bound(.end))]
    RangeOutOfBounds {
        start: Option<i64>,
        end: Option<i64>,
        len: usize,
    },
}

fn fmt_bound(bound: &Option<i64>) -> String {
    bound.map(|n| n.to_string()).unwrap_or_default()
}

impl Program {
    /// Applies every chain of the program to `json`.
    ///
    /// A single chain yields its result directly; multiple chains yield
    /// an array of the chain results in declaration order.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsq::{parse_json, parse_selectors, to_json};
    ///
    /// let json = parse_json(r#"{"key1":{"key3":3,"key4":4},"key2":2}"#).unwrap();
    /// let program = parse_selectors(r#""key1"."key3""#).unwrap();
    ///
    /// let result = program.apply(&json).unwrap();
    /// assert_eq!(to_json(&result), "3");
    /// ```
    pub fn apply(&self, json: &Value) -> Result<Value, ApplyError> {
        let chains = self.chains();
        if chains.len() == 1 {
            chains[0].apply(json)
        } else {
            chains
                .iter()
                .map(|chain| chain.apply(json))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array)
        }
    }
}

impl Chain {
    /// Applies the chain's selectors to `json` in sequential order.
    pub fn apply(&self, json: &Value) -> Result<Value, ApplyError> {
        apply_selectors(json, self.selectors())
    }
}

/// Applies the remaining selectors of a chain to a value.
///
/// An exhausted remainder returns the value unchanged.
fn apply_selectors(json: &Value, remainder: &[Selector]) -> Result<Value, ApplyError> {
    let Some((selector, rest)) = remainder.split_first() else {
        return Ok(json.clone());
    };

    match (selector, json) {
        (Selector::Any, value) => apply_selectors(value, rest),

        (Selector::Key(key), Value::Object(members)) => match members.get(key) {
            Some(value) => apply_selectors(value, rest),
            None => Err(ApplyError::KeyNotFound(key.clone())),
        },

        (Selector::Index(index), Value::Array(items)) => {
            let position = usize::try_from(*index)
                .ok()
                .filter(|i| *i < items.len())
                .ok_or(ApplyError::IndexOutOfRange {
                    index: *index,
                    len: items.len(),
                })?;
            apply_selectors(&items[position], rest)
        }

        (Selector::Range { start, end }, Value::Array(items)) => {
            apply_range(*start, *end, items, rest)
        }

        (Selector::Property(keys), Value::Object(members)) => {
            let mut result = Vec::with_capacity(keys.len());
            for key in keys {
                let value = members
                    .get(key)
                    .ok_or_else(|| ApplyError::KeyNotFound(key.clone()))?;
                result.push((key.clone(), apply_selectors(value, rest)?));
            }
            // duplicate keys in the list collapse to the first here
            Ok(Value::object_from(result))
        }

        (Selector::Filter(key), Value::Array(items)) => {
            let mut result = Vec::new();
            for item in items {
                // only objects containing the key contribute; every
                // other element is skipped, never an error
                if let Value::Object(members) = item {
                    if let Some(value) = members.get(key) {
                        result.push(apply_selectors(value, rest)?);
                    }
                }
            }
            Ok(Value::Array(result))
        }

        (Selector::Truncate, value) => {
            if !rest.is_empty() {
                warn!("truncate is not the last selector of its chain");
            }
            Ok(match value {
                Value::Object(_) => Value::Object(IndexMap::new()),
                Value::Array(_) => Value::Array(Vec::new()),
                scalar => scalar.clone(),
            })
        }

        (Selector::Flatten, Value::Array(items)) => {
            let mut flattened = Vec::new();
            for item in items {
                // sub-results that are arrays are spliced in, everything
                // else is dropped
                if let Value::Array(nested) = apply_selectors(item, rest)? {
                    flattened.extend(nested);
                }
            }
            Ok(Value::Array(flattened))
        }

        (selector, value) => Err(ApplyError::Mismatch {
            selector: selector.name(),
            value: value.kind(),
        }),
    }
}

fn apply_range(
    start: Option<i64>,
    end: Option<i64>,
    items: &[Value],
    rest: &[Selector],
) -> Result<Value, ApplyError> {
    // an all-open range over an empty array selects nothing
    if items.is_empty() && start.is_none() && end.is_none() {
        return Ok(Value::Array(Vec::new()));
    }

    let len = items.len() as i64;
    let from = start.unwrap_or(0);
    // the end bound is inclusive and defaults to the last element
    let to = end.unwrap_or(len - 1);

    if from < 0 || to < 0 || from >= len || to >= len || from > to {
        return Err(ApplyError::RangeOutOfBounds {
            start,
            end,
            len: items.len(),
        });
    }

    items[from as usize..=to as usize]
        .iter()
        .map(|item| apply_selectors(item, rest))
        .collect::<Result<Vec<_>, _>>()
        .map(Value::Array)
}
