//! Rule set registry implementation.
//!
//! The registry loads rule set registrations from:
//! 1. A configured file (`WORKPLACE_MENU_RULES_FILE`, JSON or YAML)
//! 2. Bundled defaults (compiled into binary) when no file is configured
//!
//! Legacy strings used directly as rule set names are decoded on first use
//! and cached.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use super::types::{RegistryConfig, RegistryEntry, RuleSetSource};
use crate::config::{parse_document, MenuConfig};
use crate::error::{MenuError, MenuResult};
use crate::legacy;
use crate::rules::{catalog_rule_set, Dimension, RuleSet};

/// Bundled default registry configuration
const BUNDLED_RULE_SETS: &str = include_str!("data/menu_rules.json");

/// Source of the registry configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Loaded from a configuration file
    File(PathBuf),
    /// Using bundled defaults
    Bundled,
    /// Built in code from a [`RegistryConfig`]
    Inline,
}

/// Name to rule set lookup.
///
/// Built once and then only read. The decode cache is the one piece of
/// shared mutable state; concurrent lookups of the same new legacy string
/// observe the same cached `Arc`.
#[derive(Debug)]
pub struct RuleSetRegistry {
    /// Registered rule sets by name
    rule_sets: HashMap<String, Arc<RuleSet>>,

    /// Registration order, for listing
    order: Vec<String>,

    /// Legacy strings decoded on demand, keyed by normalized string
    decoded: RwLock<HashMap<String, Arc<RuleSet>>>,

    /// Source of the loaded registrations (for logging)
    config_source: ConfigSource,
}

impl RuleSetRegistry {
    /// Build from an in-memory configuration
    pub fn from_config(config: RegistryConfig) -> MenuResult<Self> {
        Self::build(config, ConfigSource::Inline)
    }

    /// Build from the bundled default registrations
    pub fn bundled() -> MenuResult<Self> {
        let config: RegistryConfig = serde_json::from_str(BUNDLED_RULE_SETS)?;
        Self::build(config, ConfigSource::Bundled)
    }

    /// Build from a JSON or YAML file
    pub fn load(path: &Path) -> MenuResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            MenuError::Io(format!("Failed to read rule sets from {}: {}", path.display(), e))
        })?;
        let config: RegistryConfig = parse_document(path, &content)?;
        let registry = Self::build(config, ConfigSource::File(path.to_path_buf()))?;
        tracing::info!(
            "Loaded {} rule sets from file: {}",
            registry.len(),
            path.display()
        );
        Ok(registry)
    }

    /// Build from the configured file, or the bundled defaults when none is set
    pub fn from_menu_config(config: &MenuConfig) -> MenuResult<Self> {
        match &config.rules_file {
            Some(path) => Self::load(path),
            None => {
                tracing::info!("No rule set file configured. Using bundled defaults.");
                Self::bundled()
            }
        }
    }

    fn build(config: RegistryConfig, config_source: ConfigSource) -> MenuResult<Self> {
        let mut registry = Self {
            rule_sets: HashMap::new(),
            order: Vec::new(),
            decoded: RwLock::new(HashMap::new()),
            config_source,
        };
        for entry in config.rule_sets {
            registry.register(entry)?;
        }
        Ok(registry)
    }

    /// Register one entry.
    ///
    /// Registering a name again with identical rules is a no-op; with
    /// different rules it fails.
    fn register(&mut self, entry: RegistryEntry) -> MenuResult<()> {
        let rule_set = resolve_entry(&entry)?;

        if let Some(existing) = self.rule_sets.get(&entry.name) {
            if existing.same_rules(&rule_set) {
                tracing::debug!(name = %entry.name, "Rule set registered again with identical rules");
                return Ok(());
            }
            return Err(MenuError::DuplicateRuleSet { name: entry.name });
        }

        self.order.push(entry.name.clone());
        self.rule_sets.insert(entry.name, Arc::new(rule_set));
        Ok(())
    }

    /// Look a rule set up by name.
    ///
    /// Registered names win. Otherwise a name of legacy length, with or
    /// without the `legacy:` prefix, is decoded and cached. Unknown codes
    /// leave their dimension out; a name in which no segment decodes is not
    /// a rule set.
    pub fn get(&self, name: &str) -> Option<Arc<RuleSet>> {
        if let Some(rule_set) = self.rule_sets.get(name) {
            return Some(Arc::clone(rule_set));
        }

        let encoded = name.strip_prefix(legacy::LEGACY_NAME_PREFIX).unwrap_or(name);
        if !legacy::is_legacy_string(encoded) {
            return None;
        }
        self.decode_cached(encoded)
    }

    /// Whether `name` resolves, either registered or as a decodable legacy string
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    fn decode_cached(&self, encoded: &str) -> Option<Arc<RuleSet>> {
        let cache_key = legacy::normalize(encoded);

        // Check cache first (read lock)
        if let Ok(cache) = self.decoded.read() {
            if let Some(cached) = cache.get(&cache_key) {
                return Some(Arc::clone(cached));
            }
        }

        let rule_set = match legacy::decode(encoded) {
            Ok(rule_set) if rule_set.is_empty() => {
                tracing::debug!("No legacy code in '{}' decodes, not a rule set", encoded);
                return None;
            }
            Ok(rule_set) => rule_set,
            Err(e) => {
                tracing::warn!("Cannot decode legacy rule set '{}': {}", encoded, e);
                return None;
            }
        };

        // Cache the result (write lock); the first writer wins
        match self.decoded.write() {
            Ok(mut cache) => Some(Arc::clone(
                cache.entry(cache_key).or_insert_with(|| Arc::new(rule_set)),
            )),
            Err(_) => {
                tracing::warn!("Legacy rule set cache is poisoned, serving an uncached decode");
                Some(Arc::new(rule_set))
            }
        }
    }

    /// Registered names in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Number of registered rule sets (decoded cache excluded)
    pub fn len(&self) -> usize {
        self.rule_sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rule_sets.is_empty()
    }

    /// Get the current config source
    pub fn config_source(&self) -> &ConfigSource {
        &self.config_source
    }
}

/// Turn a registration into its rule set, named after the entry
fn resolve_entry(entry: &RegistryEntry) -> MenuResult<RuleSet> {
    match &entry.source {
        RuleSetSource::Legacy(encoded) => {
            let decoded = legacy::decode(encoded)?;
            let composite = decoded.rules().iter().any(|rule| rule.dimension().is_none());
            if !composite && decoded.rules().len() < Dimension::ALL.len() {
                tracing::warn!(
                    "Legacy rule set '{}' ({}) leaves {} dimension(s) out; those resources will be invisible",
                    entry.name,
                    encoded,
                    Dimension::ALL.len() - decoded.rules().len()
                );
            }
            Ok(RuleSet::new(entry.name.clone(), decoded.rules().to_vec()))
        }
        RuleSetSource::Catalog(catalog_name) => {
            let catalog = catalog_rule_set(catalog_name)?;
            Ok(RuleSet::new(entry.name.clone(), catalog.rules().to_vec()))
        }
        RuleSetSource::Rules(names) => RuleSet::from_rule_names(entry.name.clone(), names.as_slice()),
    }
}

impl Default for RuleSetRegistry {
    fn default() -> Self {
        Self {
            rule_sets: HashMap::new(),
            order: Vec::new(),
            decoded: RwLock::new(HashMap::new()),
            config_source: ConfigSource::Inline,
        }
    }
}

/// Rule names plus the legacy encoding when one exists, for diagnostics
pub fn describe(rule_set: &RuleSet) -> String {
    match legacy::encode(rule_set) {
        Some(encoded) => format!("{} ({})", rule_set, encoded),
        None => rule_set.to_string(),
    }
}
