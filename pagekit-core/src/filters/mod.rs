//! Per-entity filter builders
//!
//! Raw input arrives as a [`FilterBag`] (query strings, CLI `key=value`
//! pairs, JSON bodies). Each entity filter coerces the bag once, at the
//! boundary, into a typed struct; the typed struct then compiles to a
//! [`Predicate`] without any further fallible step.
//!
//! Coercion policy is uniform across all fields: a value that cannot be
//! coerced fails the request with [`PageError::InvalidFilterValue`].
//! Absent keys, `null` and empty strings are treated as "not supplied".
//!
//! [`PageError::InvalidFilterValue`]: crate::error::PageError::InvalidFilterValue

pub mod coerce;
pub mod product;
pub mod user;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::predicate::Predicate;

pub use product::ProductFilter;
pub use user::UserFilter;

/// Loosely-typed filter parameters, keyed by camelCase filter name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterBag(BTreeMap<String, Value>);

impl FilterBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value (builder style)
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parse a `key=value` pair as produced by CLI flags.
    ///
    /// Values stay strings; typing happens during coercion.
    pub fn parse_pair(pair: &str) -> Option<(String, String)> {
        let (key, value) = pair.split_once('=')?;
        let key = key.trim();
        if key.is_empty() {
            return None;
        }
        Some((key.to_owned(), value.to_owned()))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for FilterBag {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// A typed filter that can be built from a bag and compiled to a predicate
pub trait FilterConditions: Sized {
    /// Entity name used in diagnostics
    const ENTITY: &'static str;

    /// Recognized filter keys
    const KEYS: &'static [&'static str];

    /// Coerce a raw bag into the typed filter.
    fn from_bag(bag: &FilterBag) -> Result<Self>;

    /// Build the conjunctive predicate. Never fails.
    fn predicate(&self) -> Predicate;
}

/// Log keys the entity does not recognize. They contribute nothing.
pub(crate) fn warn_unknown_keys<F: FilterConditions>(bag: &FilterBag) {
    for key in bag.keys().filter(|key| !F::KEYS.contains(key)) {
        tracing::warn!(entity = F::ENTITY, filter = key, "ignoring unknown filter key");
    }
}

/// Drop empty strings so they behave like absent values.
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_pair_splits_on_first_equals() {
        assert_eq!(
            FilterBag::parse_pair("name=a=b"),
            Some(("name".into(), "a=b".into()))
        );
        assert_eq!(FilterBag::parse_pair("name="), Some(("name".into(), "".into())));
        assert_eq!(FilterBag::parse_pair("=x"), None);
        assert_eq!(FilterBag::parse_pair("novalue"), None);
    }

    #[test]
    fn deserializes_from_json_object() {
        let bag: FilterBag = serde_json::from_value(json!({"age": "20", "inStock": true})).unwrap();
        assert_eq!(bag.get("age"), Some(&json!("20")));
        assert_eq!(bag.get("inStock"), Some(&json!(true)));
        assert_eq!(bag.keys().collect::<Vec<_>>(), vec!["age", "inStock"]);
    }
}
