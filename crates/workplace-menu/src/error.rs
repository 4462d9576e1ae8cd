//! Error types for the menu engine

use thiserror::Error;

use crate::rules::Dimension;

/// Result type alias for menu engine operations
pub type MenuResult<T> = Result<T, MenuError>;

/// Menu engine error types
///
/// Everything here is a configuration-time failure. Evaluation itself never
/// fails: unresolvable names and facts failures degrade to an invisible entry.
#[derive(Debug, Error)]
pub enum MenuError {
    #[error("Invalid legacy rule string '{input}': expected {expected} significant characters, found {found}")]
    InvalidLegacyLength {
        input: String,
        expected: usize,
        found: usize,
    },

    #[error("Unknown rule: {0}")]
    UnknownRule(String),

    #[error("Unknown catalog rule set: {0}")]
    UnknownCatalogRuleSet(String),

    #[error("Rule set '{name}' is registered twice with conflicting rules")]
    DuplicateRuleSet { name: String },

    #[error("Rule set '{rule_set}' has no rule covering the {dimension} dimension")]
    IncompleteRuleSet {
        rule_set: String,
        dimension: Dimension,
    },

    #[error("Rule '{rule}' in rule set '{rule_set}' can never apply")]
    UnreachableRule { rule_set: String, rule: String },

    #[error("Menu item '{item}' references unknown rule set '{rule_set}'")]
    UnresolvedRuleSet { item: String, rule_set: String },

    #[error("Invalid menu definition: {0}")]
    InvalidMenu(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for MenuError {
    fn from(err: std::io::Error) -> Self {
        MenuError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for MenuError {
    fn from(err: serde_json::Error) -> Self {
        MenuError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for MenuError {
    fn from(err: serde_yaml::Error) -> Self {
        MenuError::Serialization(err.to_string())
    }
}

impl MenuError {
    /// Stable error code for logs and tooling output
    pub fn code(&self) -> &'static str {
        match self {
            MenuError::InvalidLegacyLength { .. } => "INVALID_LEGACY_LENGTH",
            MenuError::UnknownRule(_) => "UNKNOWN_RULE",
            MenuError::UnknownCatalogRuleSet(_) => "UNKNOWN_CATALOG_RULE_SET",
            MenuError::DuplicateRuleSet { .. } => "DUPLICATE_RULE_SET",
            MenuError::IncompleteRuleSet { .. } => "INCOMPLETE_RULE_SET",
            MenuError::UnreachableRule { .. } => "UNREACHABLE_RULE",
            MenuError::UnresolvedRuleSet { .. } => "UNRESOLVED_RULE_SET",
            MenuError::InvalidMenu(_) => "INVALID_MENU",
            MenuError::Config(_) => "CONFIG_ERROR",
            MenuError::Io(_) => "IO_ERROR",
            MenuError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }
}

/// Failure reported by the resource/permission subsystem while resolving facts.
///
/// The assembler never propagates these; the affected entry becomes invisible.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FactsError {
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    #[error("Permission check failed for {resource_id}: {reason}")]
    PermissionCheck { resource_id: String, reason: String },

    #[error("Lock state unavailable for {resource_id}: {reason}")]
    LockState { resource_id: String, reason: String },

    #[error("Facts provider error: {0}")]
    Provider(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        let err = MenuError::DuplicateRuleSet {
            name: "lock".into(),
        };
        assert_eq!(err.code(), "DUPLICATE_RULE_SET");
        assert_eq!(
            err.to_string(),
            "Rule set 'lock' is registered twice with conflicting rules"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.json");
        let err: MenuError = io.into();
        assert_eq!(err.code(), "IO_ERROR");
        assert!(err.to_string().contains("missing.json"));
    }
}
