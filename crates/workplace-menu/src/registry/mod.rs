//! Rule Set Registry
//!
//! Menu items name the rule set that governs them. The registry maps those
//! names to rule sets built once at startup from an ordered list of
//! registrations:
//!
//! ```json
//! { "rule_sets": [
//!     { "name": "edit", "catalog": "edit" },
//!     { "name": "undo_changes", "legacy": "d d iiid iaaa dddd" },
//!     { "name": "siblings", "rules": ["show_siblings"] }
//! ] }
//! ```
//!
//! # Configuration Sources
//!
//! 1. The file named by `WORKPLACE_MENU_RULES_FILE` (JSON or YAML)
//! 2. Bundled defaults (menu_rules.json)
//!
//! # Usage
//!
//! ```ignore
//! use workplace_menu::registry::RuleSetRegistry;
//!
//! let registry = RuleSetRegistry::bundled()?;
//! let verdict = registry.get("edit").map(|set| set.evaluate(&facts));
//!
//! // legacy strings resolve without registration
//! let decoded = registry.get("d d aaaa aaaa dddd");
//! ```

mod rule_sets;
mod types;

pub use rule_sets::{describe, ConfigSource, RuleSetRegistry};
pub use types::{RegistryConfig, RegistryEntry, RuleSetSource};
