use thiserror::Error;

/// Errors raised while loading blueprint definitions.
///
/// The factory itself never fails; only the configuration layer does.
#[derive(Debug, Error)]
pub enum BlueprintError {
    #[error("failed to parse blueprint config: {0}")]
    Parse(String),

    #[error("blueprint '{0}' is defined more than once")]
    DuplicateName(String),

    #[error("blueprint '{blueprint}' references unknown prototype '{prototype}'")]
    UnknownPrototype { blueprint: String, prototype: String },

    #[error("prototype cycle detected: {0}")]
    PrototypeCycle(String),

    #[error("filesystem error: {0}")]
    FileSystemError(String),
}
