//! Configuration for loading rule sets and menu definitions

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{MenuError, MenuResult};

/// Environment variable naming the registry file
pub const RULES_FILE_ENV: &str = "WORKPLACE_MENU_RULES_FILE";
/// Environment variable naming the menu definition file
pub const MENU_FILE_ENV: &str = "WORKPLACE_MENU_FILE";
/// Environment variable enabling strict validation
pub const STRICT_ENV: &str = "WORKPLACE_MENU_STRICT";

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuConfig {
    /// Registry file (JSON or YAML); bundled rule sets when unset
    #[serde(default)]
    pub rules_file: Option<PathBuf>,

    /// Menu definition file (JSON or YAML); bundled menu when unset
    #[serde(default)]
    pub menu_file: Option<PathBuf>,

    /// Treat menu items referencing unknown rule sets as errors (default: false)
    #[serde(default = "default_strict")]
    pub strict: bool,
}

fn default_strict() -> bool {
    false
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            rules_file: None,
            menu_file: None,
            strict: default_strict(),
        }
    }
}

impl MenuConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let rules_file = std::env::var(RULES_FILE_ENV)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);
        let menu_file = std::env::var(MENU_FILE_ENV)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);
        let strict = std::env::var(STRICT_ENV)
            .map(|s| s.eq_ignore_ascii_case("true") || s == "1")
            .unwrap_or_else(|_| default_strict());

        Self {
            rules_file,
            menu_file,
            strict,
        }
    }

    /// Load configuration from a JSON or YAML file
    pub fn from_file(path: &Path) -> MenuResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| MenuError::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        parse_document(path, &content)
    }
}

/// UTF-8 BOM character
const UTF8_BOM: char = '\u{FEFF}';

/// Parse a JSON or YAML document, picking the format by file extension.
///
/// Anything other than `.yaml`/`.yml` is read as JSON. A leading UTF-8 BOM is ignored.
pub(crate) fn parse_document<T>(path: &Path, content: &str) -> MenuResult<T>
where
    T: serde::de::DeserializeOwned,
{
    let content = content.strip_prefix(UTF8_BOM).unwrap_or(content);
    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
        .unwrap_or(false);

    if is_yaml {
        serde_yaml::from_str(content).map_err(|e| {
            MenuError::Serialization(format!("Failed to parse YAML from {}: {}", path.display(), e))
        })
    } else {
        serde_json::from_str(content).map_err(|e| {
            MenuError::Serialization(format!("Failed to parse JSON from {}: {}", path.display(), e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_from_env_defaults() {
        temp_env::with_vars_unset([RULES_FILE_ENV, MENU_FILE_ENV, STRICT_ENV], || {
            assert_eq!(MenuConfig::from_env(), MenuConfig::default());
        });
    }

    #[test]
    fn test_from_env_values() {
        temp_env::with_vars(
            [
                (RULES_FILE_ENV, Some("/etc/workplace/rules.yaml")),
                (MENU_FILE_ENV, Some("  ")),
                (STRICT_ENV, Some("TRUE")),
            ],
            || {
                let config = MenuConfig::from_env();
                assert_eq!(
                    config.rules_file.as_deref(),
                    Some(Path::new("/etc/workplace/rules.yaml"))
                );
                assert_eq!(config.menu_file, None);
                assert!(config.strict);
            },
        );
    }

    #[test]
    fn test_strict_ignores_garbage() {
        temp_env::with_var(STRICT_ENV, Some("yes please"), || {
            assert!(!MenuConfig::from_env().strict);
        });
    }

    #[test]
    fn test_from_yaml_file() {
        let mut file = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
        writeln!(file, "rules_file: rules.json\nstrict: true").unwrap();

        let config = MenuConfig::from_file(file.path()).unwrap();
        assert_eq!(config.rules_file, Some(PathBuf::from("rules.json")));
        assert!(config.strict);
    }

    #[test]
    fn test_json_with_bom() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "\u{FEFF}{{\"menu_file\": \"menu.json\"}}").unwrap();

        let config = MenuConfig::from_file(file.path()).unwrap();
        assert_eq!(config.menu_file, Some(PathBuf::from("menu.json")));
        assert!(!config.strict);
    }

    #[test]
    fn test_missing_file() {
        let err = MenuConfig::from_file(Path::new("/nonexistent/workplace.json")).unwrap_err();
        assert_eq!(err.code(), "CONFIG_ERROR");
    }
}
