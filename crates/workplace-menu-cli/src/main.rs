//! `workplace-menu`: decode legacy rule strings, evaluate rule sets and
//! render context menus from the command line.

mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::builder::BoolishValueParser;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use workplace_menu::config::{MenuConfig, MENU_FILE_ENV, RULES_FILE_ENV, STRICT_ENV};

#[derive(Parser, Debug)]
#[command(name = "workplace-menu", version, about = "Context-menu visibility rules for the content workplace")]
struct Cli {
    /// Engine configuration file (JSON or YAML); flags below override it
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Rule set registry file (JSON or YAML); bundled rule sets when unset
    #[arg(long, global = true, env = RULES_FILE_ENV)]
    rules: Option<PathBuf>,

    /// Menu definition file (JSON or YAML); bundled menu when unset
    #[arg(long, global = true, env = MENU_FILE_ENV)]
    menu: Option<PathBuf>,

    /// Fail on menu items referencing unknown rule sets
    #[arg(long, global = true, env = STRICT_ENV, value_parser = BoolishValueParser::new())]
    strict: bool,

    /// Log output format (logs go to stderr)
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode a legacy rule string and print the resulting rule set
    Decode {
        /// Legacy string, e.g. "d d aaaa aaaa dddd"
        input: String,
        /// Ignore the direct publish and show siblings literals
        #[arg(long)]
        positional: bool,
    },
    /// Evaluate one rule set against resource facts
    Evaluate {
        /// Registered rule set name or legacy string
        rule_set: String,
        /// Resource facts as JSON ("-" reads stdin)
        #[arg(long)]
        facts: PathBuf,
        /// Scan for the first verdict that is not invisible, as parents do
        #[arg(long)]
        first_visible: bool,
    },
    /// Assemble the filtered menu for one or more resources
    Menu {
        /// Facts table as JSON: {"resources": {"<id>": {...facts}}} ("-" reads stdin)
        #[arg(long)]
        facts: PathBuf,
        /// Selected resource id; repeat for a multi-selection
        #[arg(long = "resource", required = true)]
        resources: Vec<String>,
        /// Acting user id
        #[arg(long, default_value = "admin")]
        user: String,
    },
    /// Load registry and menu definitions and report problems
    Check,
}

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "workplace_menu=info,workplace_menu_cli=info".into());

    let (text, json) = match format {
        LogFormat::Text => (
            Some(tracing_subscriber::fmt::layer().with_writer(std::io::stderr)),
            None,
        ),
        LogFormat::Json => (
            None,
            Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            ),
        ),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(text)
        .with(json)
        .init();
}

/// Merge the optional config file with command line flags
fn resolve_config(cli: &Cli) -> Result<MenuConfig> {
    let mut config = match &cli.config {
        Some(path) => MenuConfig::from_file(path)
            .with_context(|| format!("Failed to load config file: {}", path.display()))?,
        None => MenuConfig::default(),
    };
    if let Some(rules) = &cli.rules {
        config.rules_file = Some(rules.clone());
    }
    if let Some(menu) = &cli.menu {
        config.menu_file = Some(menu.clone());
    }
    config.strict |= cli.strict;
    Ok(config)
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.log_format);

    let config = resolve_config(&cli)?;
    tracing::debug!(?config, "Resolved configuration");

    match cli.command {
        Command::Decode { input, positional } => commands::decode(&input, positional),
        Command::Evaluate {
            rule_set,
            facts,
            first_visible,
        } => commands::evaluate(&config, &rule_set, &facts, first_visible),
        Command::Menu {
            facts,
            resources,
            user,
        } => commands::menu(&config, &facts, resources, &user),
        Command::Check => commands::check(&config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_menu_requires_resource() {
        let result = Cli::try_parse_from(["workplace-menu", "menu", "--facts", "facts.json"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from([
            "workplace-menu",
            "--rules",
            "rules.yaml",
            "--strict",
            "check",
        ])
        .unwrap();
        let config = resolve_config(&cli).unwrap();
        assert_eq!(config.rules_file, Some(PathBuf::from("rules.yaml")));
        assert!(config.strict);
        assert_eq!(cli.log_format, LogFormat::Text);
    }

    #[test]
    fn test_strict_env_accepts_numeric_flag() {
        temp_env::with_var(STRICT_ENV, Some("1"), || {
            let cli = Cli::try_parse_from(["workplace-menu", "check"]).unwrap();
            assert!(cli.strict);
            assert!(resolve_config(&cli).unwrap().strict);
        });
        temp_env::with_var(STRICT_ENV, Some("0"), || {
            let cli = Cli::try_parse_from(["workplace-menu", "check"]).unwrap();
            assert!(!cli.strict);
        });
        temp_env::with_var(STRICT_ENV, Some("TRUE"), || {
            let cli = Cli::try_parse_from(["workplace-menu", "check"]).unwrap();
            assert!(cli.strict);
        });
    }
}
