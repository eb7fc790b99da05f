//! Prototype-linked records.
//!
//! A `Record` is a shared handle to a property bag plus an immutable link to
//! a parent record. Lookups that miss on the record's own properties fall
//! back along the parent chain. Cloning a `Record` clones the handle, not the
//! properties.

use std::fmt;
use std::sync::{Arc, OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::key::PropertyKey;
use crate::properties::Properties;
use crate::value::Value;

/// The process-wide default base object.
static BASE: OnceLock<Record> = OnceLock::new();

struct RecordInner {
    prototype: Option<Record>,
    properties: RwLock<Properties>,
}

/// A shared, prototype-linked object.
#[derive(Clone)]
pub struct Record {
    inner: Arc<RecordInner>,
}

impl Record {
    /// Create an empty record. `None` means no prototype at all.
    pub fn new(prototype: Option<Record>) -> Self {
        Self::from_properties(prototype, Properties::new())
    }

    /// Create a record with initial own properties.
    pub fn from_properties(prototype: Option<Record>, properties: Properties) -> Self {
        Self {
            inner: Arc::new(RecordInner {
                prototype,
                properties: RwLock::new(properties),
            }),
        }
    }

    /// The default base object: every record created without an explicit
    /// prototype through the factory inherits from it. It has no prototype.
    pub fn base() -> Record {
        BASE.get_or_init(|| Record::new(None)).clone()
    }

    /// Create an empty record whose prototype is `prototype`, or the base
    /// object when `None`.
    pub fn inheriting(prototype: Option<&Record>) -> Self {
        let prototype = prototype.cloned().unwrap_or_else(Record::base);
        Self::new(Some(prototype))
    }

    pub fn prototype(&self) -> Option<&Record> {
        self.inner.prototype.as_ref()
    }

    /// Identity comparison.
    pub fn ptr_eq(&self, other: &Record) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    pub fn get_own(&self, key: &PropertyKey) -> Option<Value> {
        self.read().get(key).cloned()
    }

    /// Own property first, then each prototype in turn.
    pub fn get(&self, key: &PropertyKey) -> Option<Value> {
        let mut current = Some(self);
        while let Some(record) = current {
            if let Some(value) = record.get_own(key) {
                return Some(value);
            }
            current = record.prototype();
        }
        None
    }

    pub fn has_own(&self, key: &PropertyKey) -> bool {
        self.read().contains_key(key)
    }

    pub fn has(&self, key: &PropertyKey) -> bool {
        let mut current = Some(self);
        while let Some(record) = current {
            if record.has_own(key) {
                return true;
            }
            current = record.prototype();
        }
        false
    }

    /// Set an own property. Returns the previous own value, if any.
    pub fn set(&self, key: impl Into<PropertyKey>, value: impl Into<Value>) -> Option<Value> {
        self.write().insert(key, value)
    }

    pub fn remove(&self, key: &PropertyKey) -> Option<Value> {
        self.write().remove(key)
    }

    /// Shallow-copy `source` onto this record's own properties.
    pub fn assign(&self, source: &Properties) {
        self.write().extend_from(source);
    }

    /// Own keys in enumeration order.
    pub fn own_keys(&self) -> Vec<PropertyKey> {
        self.read().keys().cloned().collect()
    }

    /// Snapshot of the own properties.
    pub fn entries(&self) -> Properties {
        self.read().clone()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Same prototype identity and equal own properties, in the same order.
    /// Nested objects still compare by identity.
    pub fn content_eq(&self, other: &Record) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        let same_prototype = match (self.prototype(), other.prototype()) {
            (Some(a), Some(b)) => a.ptr_eq(b),
            (None, None) => true,
            _ => false,
        };
        same_prototype && *self.read() == *other.read()
    }

    fn read(&self) -> RwLockReadGuard<'_, Properties> {
        self.inner
            .properties
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Properties> {
        self.inner
            .properties
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

// Nested records print as their address so self-referencing graphs terminate.
impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (key, value) in self.read().iter() {
            match value {
                Value::Object(record) => {
                    map.entry(&key.to_string(), &format_args!("Record@{:p}", Arc::as_ptr(&record.inner)));
                }
                other => {
                    map.entry(&key.to_string(), other);
                }
            }
        }
        map.finish()
    }
}
