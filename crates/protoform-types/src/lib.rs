//! Shared object-model types for protoform.
//!
//! This crate contains the data model the factory operates on: property keys,
//! values, ordered property maps, prototype-linked records, factory specs,
//! blueprint configuration and their associated error types.
//!
//! No factory logic lives here -- only serde, serde_json, uuid, thiserror.

pub mod config;
pub mod error;
pub mod key;
pub mod properties;
pub mod record;
pub mod spec;
pub mod value;

pub use key::{PropertyKey, Symbol};
pub use properties::Properties;
pub use record::Record;
pub use spec::{FactorySpec, SpecEntry};
pub use value::Value;
