use uuid::Uuid;

use std::fmt;

/// A unique property key, distinct from every other symbol.
///
/// Backed by a UUID v7 so two symbols created with the same description
/// never collide. The description is for display only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol {
    id: Uuid,
    description: Option<String>,
}

impl Symbol {
    /// Create a new symbol without a description.
    pub fn new() -> Self {
        Self {
            id: Uuid::now_v7(),
            description: None,
        }
    }

    /// Create a new symbol carrying a human-readable description.
    pub fn with_description(description: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            description: Some(description.into()),
        }
    }

    pub fn id(&self) -> &Uuid {
        &self.id
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl Default for Symbol {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.description {
            Some(desc) => write!(f, "Symbol({desc})"),
            None => write!(f, "Symbol()"),
        }
    }
}

/// Name of a property on a record: either a plain string or a [`Symbol`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    Name(String),
    Symbol(Symbol),
}

impl PropertyKey {
    /// The string name, if this key is not a symbol.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            PropertyKey::Name(name) => Some(name),
            PropertyKey::Symbol(_) => None,
        }
    }

    pub fn is_symbol(&self) -> bool {
        matches!(self, PropertyKey::Symbol(_))
    }
}

impl From<&str> for PropertyKey {
    fn from(name: &str) -> Self {
        PropertyKey::Name(name.to_string())
    }
}

impl From<String> for PropertyKey {
    fn from(name: String) -> Self {
        PropertyKey::Name(name)
    }
}

impl From<&String> for PropertyKey {
    fn from(name: &String) -> Self {
        PropertyKey::Name(name.clone())
    }
}

impl From<Symbol> for PropertyKey {
    fn from(symbol: Symbol) -> Self {
        PropertyKey::Symbol(symbol)
    }
}

impl From<&Symbol> for PropertyKey {
    fn from(symbol: &Symbol) -> Self {
        PropertyKey::Symbol(symbol.clone())
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyKey::Name(name) => f.write_str(name),
            PropertyKey::Symbol(symbol) => write!(f, "{symbol}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_with_same_description_are_distinct() {
        let a = Symbol::with_description("tag");
        let b = Symbol::with_description("tag");
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn test_symbol_display() {
        assert_eq!(Symbol::with_description("id").to_string(), "Symbol(id)");
        assert_eq!(Symbol::new().to_string(), "Symbol()");
    }

    #[test]
    fn test_name_key_from_str() {
        let key = PropertyKey::from("name");
        assert_eq!(key.as_name(), Some("name"));
        assert!(!key.is_symbol());
        assert_eq!(key, PropertyKey::Name("name".to_string()));
    }

    #[test]
    fn test_symbol_key_is_not_a_name() {
        let symbol = Symbol::with_description("hidden");
        let key = PropertyKey::from(&symbol);
        assert!(key.is_symbol());
        assert_eq!(key.as_name(), None);
        assert_eq!(key.to_string(), "Symbol(hidden)");
    }
}
