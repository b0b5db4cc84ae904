//! Request parameters
//!
//! [`Params`] maps parameter names to their string form. Iteration is always
//! in byte order of the names, which is the order the signature is computed in.

use crate::http::encoding::encode_form;
use std::collections::BTreeMap;

/// Name → value request parameters, kept sorted by name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert a value, returning the previous one for that name
    pub fn insert(&mut self, name: impl Into<String>, value: impl ToString) -> Option<String> {
        self.0.insert(name.into(), value.to_string())
    }

    /// Insert only when a value is present
    pub fn insert_opt<V: ToString>(&mut self, name: impl Into<String>, value: Option<V>) {
        if let Some(value) = value {
            self.insert(name, value);
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.0.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Merge `other` into `self`; values in `other` win
    pub fn merge(mut self, other: Params) -> Self {
        self.0.extend(other.0);
        self
    }

    /// Encoded `name=value&...` string, in name order
    pub fn to_query(&self) -> String {
        encode_form(self.iter())
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        params.extend(iter);
        params
    }
}

impl<K: Into<String>, V: ToString> Extend<(K, V)> for Params {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}
