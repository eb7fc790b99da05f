//! Blueprint configuration types.
//!
//! `FactoryConfig` represents a TOML document declaring named makers. The
//! `spec` array is kept loosely typed so mixed key/pair entries survive
//! deserialisation; decoding into a `FactorySpec` happens in protoform-core.

use serde::{Deserialize, Serialize};

/// Top-level blueprint document.
///
/// All fields have defaults -- an empty document declares no blueprints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FactoryConfig {
    #[serde(default, rename = "blueprint")]
    pub blueprints: Vec<BlueprintConfig>,
}

/// A single named maker definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlueprintConfig {
    /// Unique name used to look the maker up.
    pub name: String,
    /// Mixed spec: strings are keys, `[key, value]` pairs are presets.
    #[serde(default)]
    pub spec: Vec<serde_json::Value>,
    /// Extra properties copied onto every produced record.
    #[serde(default)]
    pub props: serde_json::Map<String, serde_json::Value>,
    /// Own properties of a fresh prototype record (parented on the base object).
    #[serde(default)]
    pub proto: Option<serde_json::Map<String, serde_json::Value>>,
    /// Reuse the prototype of another named blueprint. Wins over `proto`.
    #[serde(default)]
    pub prototype: Option<String>,
}

impl BlueprintConfig {
    /// A blueprint with only a name: no keys, no presets, base prototype.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            spec: Vec::new(),
            props: serde_json::Map::new(),
            proto: None,
            prototype: None,
        }
    }
}
