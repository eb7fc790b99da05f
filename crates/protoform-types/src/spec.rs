//! Factory specs: which keys bind to positional arguments and which
//! properties are fixed up front.

use crate::key::PropertyKey;
use crate::value::Value;

/// One element of a factory spec.
#[derive(Debug, Clone, PartialEq)]
pub enum SpecEntry {
    /// Bound to the next positional argument.
    Key(PropertyKey),
    /// Always set to the captured value; consumes no argument.
    Preset(PropertyKey, Value),
}

impl SpecEntry {
    pub fn key(&self) -> &PropertyKey {
        match self {
            SpecEntry::Key(key) | SpecEntry::Preset(key, _) => key,
        }
    }
}

impl From<&str> for SpecEntry {
    fn from(name: &str) -> Self {
        SpecEntry::Key(name.into())
    }
}

impl From<String> for SpecEntry {
    fn from(name: String) -> Self {
        SpecEntry::Key(name.into())
    }
}

impl From<PropertyKey> for SpecEntry {
    fn from(key: PropertyKey) -> Self {
        SpecEntry::Key(key)
    }
}

impl<K: Into<PropertyKey>, V: Into<Value>> From<(K, V)> for SpecEntry {
    fn from((key, value): (K, V)) -> Self {
        SpecEntry::Preset(key.into(), value.into())
    }
}

/// Ordered sequence of [`SpecEntry`] values, keys and presets interleaved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FactorySpec {
    entries: Vec<SpecEntry>,
}

impl FactorySpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// A spec made only of positional keys.
    pub fn from_keys<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<PropertyKey>,
    {
        keys.into_iter().map(|k| SpecEntry::Key(k.into())).collect()
    }

    pub fn key(mut self, key: impl Into<PropertyKey>) -> Self {
        self.entries.push(SpecEntry::Key(key.into()));
        self
    }

    pub fn preset(mut self, key: impl Into<PropertyKey>, value: impl Into<Value>) -> Self {
        self.entries.push(SpecEntry::Preset(key.into(), value.into()));
        self
    }

    pub fn push(&mut self, entry: SpecEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[SpecEntry] {
        &self.entries
    }

    /// Positional keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &PropertyKey> {
        self.entries.iter().filter_map(|entry| match entry {
            SpecEntry::Key(key) => Some(key),
            SpecEntry::Preset(..) => None,
        })
    }

    pub fn presets(&self) -> impl Iterator<Item = (&PropertyKey, &Value)> {
        self.entries.iter().filter_map(|entry| match entry {
            SpecEntry::Preset(key, value) => Some((key, value)),
            SpecEntry::Key(_) => None,
        })
    }

    /// Number of positional arguments the spec consumes.
    pub fn arity(&self) -> usize {
        self.keys().count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<E: Into<SpecEntry>> FromIterator<E> for FactorySpec {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<E: Into<SpecEntry>> From<Vec<E>> for FactorySpec {
    fn from(entries: Vec<E>) -> Self {
        entries.into_iter().collect()
    }
}

impl<E: Into<SpecEntry>, const N: usize> From<[E; N]> for FactorySpec {
    fn from(entries: [E; N]) -> Self {
        entries.into_iter().collect()
    }
}
