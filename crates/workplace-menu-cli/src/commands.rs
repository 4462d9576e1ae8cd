use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Serialize;

use workplace_menu::legacy;
use workplace_menu::registry::{describe, ConfigSource};
use workplace_menu::{
    FactsTable, MenuAssembler, MenuConfig, MenuDefinitions, MenuRequest, ResourceFacts,
    RuleSetRegistry, Verdict,
};

#[derive(Serialize)]
struct DecodeOutput<'a> {
    name: &'a str,
    rules: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    legacy: Option<String>,
}

#[derive(Serialize)]
struct EvaluateOutput<'a> {
    rule_set: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    matched_rule: Option<&'static str>,
    verdict: Verdict,
}

#[derive(Serialize)]
struct CheckOutput {
    rule_sets: usize,
    rules_source: String,
    menu_items: usize,
    warnings: Vec<String>,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to render output")?;
    println!("{}", rendered);
    Ok(())
}

/// Read a file, or stdin for "-"
fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read stdin")?;
        return Ok(content);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}

pub fn decode(input: &str, positional: bool) -> Result<()> {
    let rule_set = if positional {
        legacy::decode_positional(input)
    } else {
        legacy::decode(input)
    }
    .with_context(|| format!("Failed to decode '{}'", input))?;

    print_json(&DecodeOutput {
        name: rule_set.name(),
        rules: rule_set.rule_names(),
        legacy: legacy::encode(&rule_set),
    })
}

pub fn evaluate(config: &MenuConfig, name: &str, facts_path: &Path, first_visible: bool) -> Result<()> {
    let registry = RuleSetRegistry::from_menu_config(config).context("Failed to load rule sets")?;
    let Some(rule_set) = registry.get(name) else {
        bail!("Unknown rule set: {}", name);
    };
    tracing::debug!("Evaluating {}", describe(&rule_set));

    let facts: ResourceFacts = serde_json::from_str(&read_input(facts_path)?)
        .with_context(|| format!("Failed to parse facts from {}", facts_path.display()))?;

    let verdict = if first_visible {
        rule_set.evaluate_first_visible(&facts)
    } else {
        rule_set.evaluate(&facts)
    };

    print_json(&EvaluateOutput {
        rule_set: rule_set.name(),
        matched_rule: rule_set.matching_rule(&facts).map(|rule| rule.name()),
        verdict,
    })
}

pub fn menu(config: &MenuConfig, facts_path: &Path, resources: Vec<String>, user: &str) -> Result<()> {
    let registry = RuleSetRegistry::from_menu_config(config).context("Failed to load rule sets")?;
    let definitions = MenuDefinitions::from_menu_config(config).context("Failed to load menu")?;
    definitions.validate(&registry, config.strict)?;

    let table = FactsTable::from_json_str(&read_input(facts_path)?)
        .with_context(|| format!("Failed to parse facts table from {}", facts_path.display()))?;

    let request = MenuRequest::new(resources, user);
    let entries = MenuAssembler::new(&registry).assemble(&definitions.items, &request, &table);
    print_json(&entries)
}

pub fn check(config: &MenuConfig) -> Result<()> {
    let registry = RuleSetRegistry::from_menu_config(config).context("Failed to load rule sets")?;
    let definitions = MenuDefinitions::from_menu_config(config).context("Failed to load menu")?;
    let warnings = definitions.validate(&registry, config.strict)?;

    let rules_source = match registry.config_source() {
        ConfigSource::File(path) => path.display().to_string(),
        ConfigSource::Bundled => "bundled".to_string(),
        ConfigSource::Inline => "inline".to_string(),
    };

    print_json(&CheckOutput {
        rule_sets: registry.len(),
        rules_source,
        menu_items: definitions.items.len(),
        warnings: warnings.iter().map(ToString::to_string).collect(),
    })
}
