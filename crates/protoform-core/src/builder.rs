//! Fluent construction of makers.

use protoform_types::{FactorySpec, PropertyKey, Properties, Record, SpecEntry, Value};

use crate::factory::{Maker, create_with_props};

/// Accumulates a prototype, spec entries and extra properties, then builds a
/// [`Maker`]. Equivalent to calling [`create_with_props`] directly.
#[derive(Debug, Clone, Default)]
pub struct FactoryBuilder {
    prototype: Option<Record>,
    spec: FactorySpec,
    props: Properties,
}

impl FactoryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `prototype` instead of the base object.
    pub fn prototype(mut self, prototype: &Record) -> Self {
        self.prototype = Some(prototype.clone());
        self
    }

    pub fn key(mut self, key: impl Into<PropertyKey>) -> Self {
        self.spec.push(SpecEntry::Key(key.into()));
        self
    }

    pub fn keys<I, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<PropertyKey>,
    {
        for key in keys {
            self.spec.push(SpecEntry::Key(key.into()));
        }
        self
    }

    pub fn preset(mut self, key: impl Into<PropertyKey>, value: impl Into<Value>) -> Self {
        self.spec.push(SpecEntry::Preset(key.into(), value.into()));
        self
    }

    /// Add one extra property. Repeated keys overwrite.
    pub fn prop(mut self, key: impl Into<PropertyKey>, value: impl Into<Value>) -> Self {
        self.props.insert(key, value);
        self
    }

    pub fn props(mut self, props: &Properties) -> Self {
        self.props.extend_from(props);
        self
    }

    pub fn build(self) -> Maker {
        create_with_props(self.prototype.as_ref(), self.spec, self.props)
    }
}
