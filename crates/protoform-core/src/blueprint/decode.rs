//! Lenient decoding of loosely typed spec arrays.
//!
//! A string is a positional key. A two-element array whose first element is
//! a string is a preset. Anything else is skipped.

use protoform_types::{FactorySpec, SpecEntry, Value};
use tracing::debug;

/// Decode a JSON-shaped spec array into a [`FactorySpec`]. Never fails.
pub fn decode_spec(entries: &[serde_json::Value]) -> FactorySpec {
    let mut spec = FactorySpec::new();

    for (index, entry) in entries.iter().enumerate() {
        match entry {
            serde_json::Value::String(name) => spec.push(SpecEntry::Key(name.into())),
            serde_json::Value::Array(pair) if pair.len() == 2 => match &pair[0] {
                serde_json::Value::String(name) => {
                    spec.push(SpecEntry::Preset(name.into(), Value::from(pair[1].clone())));
                }
                _ => debug!(index, "Skipping spec pair without a string key"),
            },
            other => debug!(index, entry = %other, "Skipping malformed spec entry"),
        }
    }

    spec
}
