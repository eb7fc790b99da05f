//! Insertion-ordered property map.
//!
//! Keys enumerate in the order they were first written. Writing an existing
//! key replaces its value in place without moving it.

use crate::key::PropertyKey;
use crate::value::Value;

/// Ordered key/value storage for records and extra-property sets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Properties {
    entries: Vec<(PropertyKey, Value)>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a value. Returns the previous value, if any.
    pub fn insert(&mut self, key: impl Into<PropertyKey>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        match self.position(&key) {
            Some(idx) => Some(std::mem::replace(&mut self.entries[idx].1, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<PropertyKey>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &PropertyKey) -> Option<&Value> {
        self.position(key).map(|idx| &self.entries[idx].1)
    }

    pub fn contains_key(&self, key: &PropertyKey) -> bool {
        self.position(key).is_some()
    }

    pub fn remove(&mut self, key: &PropertyKey) -> Option<Value> {
        self.position(key).map(|idx| self.entries.remove(idx).1)
    }

    /// Shallow-copy every entry of `other` onto `self`, last write wins.
    pub fn extend_from(&mut self, other: &Properties) {
        for (key, value) in &other.entries {
            self.insert(key.clone(), value.clone());
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &PropertyKey> {
        self.entries.iter().map(|(key, _)| key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PropertyKey, &Value)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Linear scan; records are expected to hold a handful of keys.
    fn position(&self, key: &PropertyKey) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }
}

impl<K: Into<PropertyKey>, V: Into<Value>> FromIterator<(K, V)> for Properties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut properties = Properties::new();
        for (key, value) in iter {
            properties.insert(key, value);
        }
        properties
    }
}

impl IntoIterator for Properties {
    type Item = (PropertyKey, Value);
    type IntoIter = std::vec::IntoIter<(PropertyKey, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for Properties {
    fn from(map: serde_json::Map<String, serde_json::Value>) -> Self {
        map.into_iter().collect()
    }
}
