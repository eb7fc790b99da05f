//! Name-indexed registry of makers built from blueprint config.
//!
//! Prototype resolution rules:
//! - `prototype = "other"` reuses the exact prototype record of blueprint
//!   `other`, so both makers share identity
//! - `proto = { .. }` builds a fresh prototype parented on the base object
//! - neither selects the base object
//! - reference chains are followed to any depth; cycles are rejected

use std::collections::HashMap;
use std::path::Path;

use protoform_types::config::{BlueprintConfig, FactoryConfig};
use protoform_types::error::BlueprintError;
use protoform_types::{Properties, Record};
use tracing::{debug, warn};

use super::decode::decode_spec;
use crate::factory::{Maker, create_with_props};

/// Registry of makers, indexed by blueprint name.
pub struct BlueprintRegistry {
    makers: HashMap<String, Maker>,
}

impl BlueprintRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            makers: HashMap::new(),
        }
    }

    /// Build every blueprint in `config`.
    pub fn from_config(config: &FactoryConfig) -> Result<Self, BlueprintError> {
        let mut by_name: HashMap<&str, &BlueprintConfig> = HashMap::new();
        for blueprint in &config.blueprints {
            if by_name.insert(blueprint.name.as_str(), blueprint).is_some() {
                return Err(BlueprintError::DuplicateName(blueprint.name.clone()));
            }
        }

        let mut resolved: HashMap<String, Record> = HashMap::new();
        let mut registry = Self::new();

        for blueprint in &config.blueprints {
            let mut chain = Vec::new();
            let prototype = resolve_prototype(blueprint, &by_name, &mut resolved, &mut chain)?;
            let maker = create_with_props(
                Some(&prototype),
                decode_spec(&blueprint.spec),
                Properties::from(blueprint.props.clone()),
            );
            registry.makers.insert(blueprint.name.clone(), maker);
        }

        debug!(count = registry.makers.len(), "Loaded blueprints");
        Ok(registry)
    }

    /// Parse a TOML document and build its blueprints.
    pub fn from_toml_str(source: &str) -> Result<Self, BlueprintError> {
        let config: FactoryConfig =
            toml::from_str(source).map_err(|e| BlueprintError::Parse(e.to_string()))?;
        Self::from_config(&config)
    }

    /// Read and parse a TOML blueprint file.
    pub fn from_path(path: &Path) -> Result<Self, BlueprintError> {
        let source = std::fs::read_to_string(path).map_err(|e| {
            BlueprintError::FileSystemError(format!("{}: {e}", path.display()))
        })?;
        Self::from_toml_str(&source)
    }

    /// Register a maker under the given name.
    ///
    /// If a maker with this name already exists, it is replaced and returned.
    pub fn register(&mut self, name: impl Into<String>, maker: Maker) -> Option<Maker> {
        self.makers.insert(name.into(), maker)
    }

    /// Look up a maker by name.
    pub fn get(&self, name: &str) -> Option<&Maker> {
        self.makers.get(name)
    }

    /// List all registered names, sorted.
    pub fn list_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.makers.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.makers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.makers.is_empty()
    }
}

impl Default for BlueprintRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve the prototype record for `blueprint`, memoised by name so that
/// every reference to the same blueprint yields the same record.
fn resolve_prototype(
    blueprint: &BlueprintConfig,
    by_name: &HashMap<&str, &BlueprintConfig>,
    resolved: &mut HashMap<String, Record>,
    chain: &mut Vec<String>,
) -> Result<Record, BlueprintError> {
    if let Some(record) = resolved.get(&blueprint.name) {
        return Ok(record.clone());
    }

    if chain.contains(&blueprint.name) {
        chain.push(blueprint.name.clone());
        return Err(BlueprintError::PrototypeCycle(chain.join(" -> ")));
    }
    chain.push(blueprint.name.clone());

    let record = match (&blueprint.prototype, &blueprint.proto) {
        (Some(reference), proto) => {
            if proto.is_some() {
                warn!(
                    blueprint = %blueprint.name,
                    prototype = %reference,
                    "Both `prototype` and `proto` set, using `prototype`"
                );
            }
            let parent = by_name.get(reference.as_str()).ok_or_else(|| {
                BlueprintError::UnknownPrototype {
                    blueprint: blueprint.name.clone(),
                    prototype: reference.clone(),
                }
            })?;
            resolve_prototype(parent, by_name, resolved, chain)?
        }
        (None, Some(own)) => {
            Record::from_properties(Some(Record::base()), Properties::from(own.clone()))
        }
        (None, None) => Record::base(),
    };

    chain.pop();
    resolved.insert(blueprint.name.clone(), record.clone());
    Ok(record)
}
