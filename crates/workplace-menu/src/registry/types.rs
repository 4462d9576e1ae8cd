//! Configuration types for the rule set registry.

use serde::{Deserialize, Serialize};

/// Ordered list of rule set registrations
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryConfig {
    #[serde(default)]
    pub rule_sets: Vec<RegistryEntry>,
}

/// One named registration.
///
/// ```json
/// { "name": "undo_changes", "legacy": "d d iiid iaaa dddd" }
/// { "name": "edit", "catalog": "edit" }
/// { "name": "rename", "rules": ["online.invisible", "..."] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryEntry {
    /// Registry key menu items refer to
    pub name: String,

    #[serde(flatten)]
    pub source: RuleSetSource,
}

/// Where a registered rule set comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleSetSource {
    /// Legacy compact status string
    Legacy(String),
    /// Named catalog rule set
    Catalog(String),
    /// Explicit list of catalog rule names, validated on load
    Rules(Vec<String>),
}

impl RegistryEntry {
    pub fn legacy(name: impl Into<String>, encoded: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: RuleSetSource::Legacy(encoded.into()),
        }
    }

    pub fn catalog(name: impl Into<String>, catalog_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: RuleSetSource::Catalog(catalog_name.into()),
        }
    }

    pub fn rules<S: Into<String>>(name: impl Into<String>, rules: impl IntoIterator<Item = S>) -> Self {
        Self {
            name: name.into(),
            source: RuleSetSource::Rules(rules.into_iter().map(Into::into).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_sources_from_json() {
        let config: RegistryConfig = serde_json::from_str(
            r#"{
                "rule_sets": [
                    {"name": "undo", "legacy": "d d iiid iaaa dddd"},
                    {"name": "edit", "catalog": "edit"},
                    {"name": "siblings", "rules": ["show_siblings"]}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(
            config.rule_sets,
            vec![
                RegistryEntry::legacy("undo", "d d iiid iaaa dddd"),
                RegistryEntry::catalog("edit", "edit"),
                RegistryEntry::rules("siblings", ["show_siblings"]),
            ]
        );
    }

    #[test]
    fn test_entry_sources_from_yaml() {
        let config: RegistryConfig = serde_yaml::from_str(
            "rule_sets:\n  - name: lock\n    catalog: lock\n  - name: props\n    legacy: a a aaaa aaaa aaaa\n",
        )
        .unwrap();
        assert_eq!(config.rule_sets.len(), 2);
        assert_eq!(config.rule_sets[1], RegistryEntry::legacy("props", "a a aaaa aaaa aaaa"));
    }

    #[test]
    fn test_entry_without_source_is_rejected() {
        let result: Result<RegistryEntry, _> = serde_json::from_str(r#"{"name": "orphan"}"#);
        assert!(result.is_err());
    }
}
