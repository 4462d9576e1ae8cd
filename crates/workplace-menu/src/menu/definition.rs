//! Raw menu item definitions, loaded once and read-only afterwards.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::{parse_document, MenuConfig};
use crate::error::{MenuError, MenuResult};
use crate::registry::RuleSetRegistry;

/// Bundled default context menu
const BUNDLED_MENU: &str = include_str!("data/context_menu.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuItemKind {
    #[default]
    Entry,
    Separator,
    Parent,
}

/// One configured menu item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItemDefinition {
    /// Localization key, also used as the label when none is given
    #[serde(default)]
    pub key: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Name of the governing rule set in the registry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_set: Option<String>,

    #[serde(default)]
    pub kind: MenuItemKind,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_items: Vec<MenuItemDefinition>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Command identifier the UI invokes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

impl MenuItemDefinition {
    pub fn entry(key: impl Into<String>, rule_set: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: None,
            rule_set: Some(rule_set.into()),
            kind: MenuItemKind::Entry,
            sub_items: Vec::new(),
            icon: None,
            command: None,
        }
    }

    pub fn separator() -> Self {
        Self {
            key: String::new(),
            label: None,
            rule_set: None,
            kind: MenuItemKind::Separator,
            sub_items: Vec::new(),
            icon: None,
            command: None,
        }
    }

    pub fn parent(
        key: impl Into<String>,
        rule_set: impl Into<String>,
        sub_items: Vec<MenuItemDefinition>,
    ) -> Self {
        Self {
            kind: MenuItemKind::Parent,
            sub_items,
            ..Self::entry(key, rule_set)
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    pub fn is_separator(&self) -> bool {
        self.kind == MenuItemKind::Separator
    }
}

/// Problem found while checking definitions against a registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DefinitionWarning {
    /// Path of item keys from the top level, joined with `/`
    pub item: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_set: Option<String>,
    pub message: String,
}

impl std::fmt::Display for DefinitionWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.item, self.message)
    }
}

/// The full menu tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuDefinitions {
    #[serde(default)]
    pub items: Vec<MenuItemDefinition>,
}

impl MenuDefinitions {
    pub fn new(items: Vec<MenuItemDefinition>) -> Self {
        Self { items }
    }

    /// Load the bundled default context menu
    pub fn bundled() -> MenuResult<Self> {
        Ok(serde_json::from_str(BUNDLED_MENU)?)
    }

    /// Load from a JSON or YAML file
    pub fn load(path: &Path) -> MenuResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            MenuError::Io(format!("Failed to read menu from {}: {}", path.display(), e))
        })?;
        let definitions: MenuDefinitions = parse_document(path, &content)?;
        tracing::info!(
            "Loaded {} top-level menu items from file: {}",
            definitions.items.len(),
            path.display()
        );
        Ok(definitions)
    }

    /// Load the configured menu file, or the bundled menu when none is set
    pub fn from_menu_config(config: &MenuConfig) -> MenuResult<Self> {
        match &config.menu_file {
            Some(path) => Self::load(path),
            None => {
                tracing::info!("No menu file configured. Using bundled defaults.");
                Self::bundled()
            }
        }
    }

    /// Check every item against the registry.
    ///
    /// Structural problems (separators or plain entries with sub-items) are
    /// errors. Unresolvable rule set names are warnings, or
    /// [`MenuError::UnresolvedRuleSet`] when `strict` is set.
    pub fn validate(
        &self,
        registry: &RuleSetRegistry,
        strict: bool,
    ) -> MenuResult<Vec<DefinitionWarning>> {
        let mut warnings = Vec::new();
        validate_items(&self.items, "", registry, &mut warnings)?;

        if strict {
            if let Some(unresolved) = warnings.iter().find(|w| w.rule_set.is_some()) {
                return Err(MenuError::UnresolvedRuleSet {
                    item: unresolved.item.clone(),
                    rule_set: unresolved.rule_set.clone().unwrap_or_default(),
                });
            }
        }

        for warning in &warnings {
            tracing::warn!("Menu definition: {}", warning);
        }
        Ok(warnings)
    }
}

fn validate_items(
    items: &[MenuItemDefinition],
    prefix: &str,
    registry: &RuleSetRegistry,
    warnings: &mut Vec<DefinitionWarning>,
) -> MenuResult<()> {
    for (index, item) in items.iter().enumerate() {
        let key = if item.key.is_empty() {
            format!("#{}", index)
        } else {
            item.key.clone()
        };
        let path = if prefix.is_empty() {
            key
        } else {
            format!("{}/{}", prefix, key)
        };

        match item.kind {
            MenuItemKind::Separator => {
                if !item.sub_items.is_empty() {
                    return Err(MenuError::InvalidMenu(format!(
                        "separator {} has sub-items",
                        path
                    )));
                }
                continue;
            }
            MenuItemKind::Entry if !item.sub_items.is_empty() => {
                return Err(MenuError::InvalidMenu(format!(
                    "entry {} has sub-items; declare it as a parent",
                    path
                )));
            }
            MenuItemKind::Parent if item.sub_items.is_empty() => {
                warnings.push(DefinitionWarning {
                    item: path.clone(),
                    rule_set: None,
                    message: "parent has no sub-items".to_string(),
                });
            }
            _ => {}
        }

        match &item.rule_set {
            Some(name) if !registry.contains(name) => warnings.push(DefinitionWarning {
                item: path.clone(),
                rule_set: Some(name.clone()),
                message: format!("unknown rule set '{}', item will be invisible", name),
            }),
            Some(_) => {}
            None if item.kind == MenuItemKind::Entry => warnings.push(DefinitionWarning {
                item: path.clone(),
                rule_set: None,
                message: "no rule set, item will be invisible".to_string(),
            }),
            None => {}
        }

        validate_items(&item.sub_items, &path, registry, warnings)?;
    }
    Ok(())
}
