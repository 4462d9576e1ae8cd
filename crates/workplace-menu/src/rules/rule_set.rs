//! Ordered, named rule sets and their evaluation.

use serde::Serialize;

use super::{Dimension, Rule};
use crate::error::{MenuError, MenuResult};
use crate::facts::ResourceFacts;
use crate::verdict::Verdict;

/// Ordered collection of rules forming one menu item's visibility policy.
///
/// Evaluation stops at the first rule that applies, so order matters
/// whenever two rules can apply to the same facts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleSet {
    name: String,
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Create a rule set without validation.
    ///
    /// Legacy-decoded sets use this since the decoder may leave dimensions out.
    pub fn new(name: impl Into<String>, rules: Vec<Rule>) -> Self {
        Self {
            name: name.into(),
            rules,
        }
    }

    /// Start a validated rule set
    pub fn builder(name: impl Into<String>) -> RuleSetBuilder {
        RuleSetBuilder {
            name: name.into(),
            rules: Vec::new(),
        }
    }

    /// Build a validated rule set from catalog rule names
    pub fn from_rule_names<S: AsRef<str>>(name: impl Into<String>, names: &[S]) -> MenuResult<Self> {
        let mut builder = Self::builder(name);
        for rule_name in names {
            let rule_name = rule_name.as_ref();
            let rule = Rule::from_name(rule_name)
                .ok_or_else(|| MenuError::UnknownRule(rule_name.to_string()))?;
            builder = builder.rule(rule);
        }
        builder.build()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Same rules in the same order, regardless of name
    pub fn same_rules(&self, other: &RuleSet) -> bool {
        self.rules == other.rules
    }

    /// The rule responsible for the given facts, if any
    pub fn matching_rule(&self, facts: &ResourceFacts) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.applies(facts))
    }

    /// Evaluate: the first applicable rule decides; no applicable rule means invisible.
    pub fn evaluate(&self, facts: &ResourceFacts) -> Verdict {
        match self.matching_rule(facts) {
            Some(rule) => rule.decide(facts),
            None => {
                tracing::trace!(
                    rule_set = %self.name,
                    relation = ?facts.project_relation,
                    "No rule applies, entry is invisible"
                );
                Verdict::Invisible
            }
        }
    }

    /// Evaluate scanning every applicable rule, returning the first verdict that is not invisible.
    ///
    /// Used for parent entries, whose own rules act as alternatives.
    pub fn evaluate_first_visible(&self, facts: &ResourceFacts) -> Verdict {
        self.rules
            .iter()
            .filter(|rule| rule.applies(facts))
            .map(|rule| rule.decide(facts))
            .find(|verdict| !verdict.is_invisible())
            .unwrap_or(Verdict::Invisible)
    }
}

impl std::fmt::Display for RuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]", self.name, self.rule_names().join(", "))
    }
}

/// Builder for rule sets assembled from the structured catalog.
///
/// `build` rejects rules that an earlier rule shadows and rule sets that leave
/// a dimension uncovered, so a built set always has exactly one responsible
/// rule for any facts.
#[derive(Debug, Clone)]
pub struct RuleSetBuilder {
    name: String,
    rules: Vec<Rule>,
}

impl RuleSetBuilder {
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rules(mut self, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.rules.extend(rules);
        self
    }

    pub fn build(self) -> MenuResult<RuleSet> {
        for (index, rule) in self.rules.iter().enumerate() {
            let shadowed = self.rules[..index]
                .iter()
                .any(|earlier| shadows(earlier, rule));
            if shadowed {
                return Err(MenuError::UnreachableRule {
                    rule_set: self.name.clone(),
                    rule: rule.name().to_string(),
                });
            }
        }

        let always_applies = self.rules.iter().any(|rule| rule.dimension().is_none());
        if !always_applies {
            for dimension in Dimension::ALL {
                let covered = self
                    .rules
                    .iter()
                    .any(|rule| rule.dimension() == Some(dimension) && rule.guard().is_none());
                if !covered {
                    return Err(MenuError::IncompleteRuleSet {
                        rule_set: self.name,
                        dimension,
                    });
                }
            }
        }

        Ok(RuleSet::new(self.name, self.rules))
    }
}

/// Whether `earlier` applies to every resource `later` could apply to
fn shadows(earlier: &Rule, later: &Rule) -> bool {
    match (earlier.dimension(), later.dimension()) {
        (None, _) => true,
        (Some(a), Some(b)) if a == b => earlier.guard().is_none() || earlier.guard() == later.guard(),
        _ => false,
    }
}
