//! Turns menu definitions into a filtered menu tree for one request.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::definition::{MenuItemDefinition, MenuItemKind};
use super::entry::MenuEntry;
use super::filter::filter_entries;
use crate::error::FactsError;
use crate::facts::{FactsProvider, ResourceFacts};
use crate::registry::RuleSetRegistry;
use crate::rules::RuleSet;
use crate::verdict::Verdict;

/// The resources a menu is requested for, and who is asking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuRequest {
    pub resource_ids: Vec<String>,
    pub user_id: String,
}

impl MenuRequest {
    pub fn new(resource_ids: Vec<String>, user_id: impl Into<String>) -> Self {
        Self {
            resource_ids,
            user_id: user_id.into(),
        }
    }

    pub fn single(resource_id: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self::new(vec![resource_id.into()], user_id)
    }
}

/// How a rule set is consulted for an item
#[derive(Debug, Clone, Copy)]
enum Evaluation {
    /// First applicable rule decides
    FirstApplicable,
    /// First applicable rule that does not hide the item decides
    FirstVisible,
}

/// Where the facts for the selected resources come from
#[derive(Clone, Copy)]
enum Selection<'r> {
    /// Resolved through the provider for every evaluated entry
    Provider {
        provider: &'r dyn FactsProvider,
        request: &'r MenuRequest,
    },
    /// Already resolved by the caller
    Resolved(&'r [ResourceFacts]),
}

impl Selection<'_> {
    fn is_empty(&self) -> bool {
        match self {
            Selection::Provider { request, .. } => request.resource_ids.is_empty(),
            Selection::Resolved(facts) => facts.is_empty(),
        }
    }

    /// Facts for every selected resource, in selection order
    fn resolve(&self, item: &MenuItemDefinition) -> Vec<Result<ResourceFacts, FactsError>> {
        match self {
            Selection::Provider { provider, request } => request
                .resource_ids
                .iter()
                .map(|resource_id| {
                    let resolved = provider.resolve(resource_id, &request.user_id);
                    if let Err(e) = &resolved {
                        tracing::warn!(
                            item = %item.key,
                            resource = %resource_id,
                            user = %request.user_id,
                            "Failed to resolve resource facts, hiding menu item: {}",
                            e
                        );
                    }
                    resolved
                })
                .collect(),
            Selection::Resolved(facts) => facts.iter().copied().map(Ok).collect(),
        }
    }
}

/// Builds display-ready menus from definitions and a registry.
///
/// Assembly never fails: unknown rule sets and facts failures make the
/// affected entries invisible.
pub struct MenuAssembler<'a> {
    registry: &'a RuleSetRegistry,
}

impl<'a> MenuAssembler<'a> {
    pub fn new(registry: &'a RuleSetRegistry) -> Self {
        Self { registry }
    }

    /// Assemble the filtered menu for a request.
    ///
    /// Facts are resolved per evaluated entry, so a provider failure hides
    /// only that entry. With several resources selected each entry takes the
    /// most restrictive verdict over all of them. A request without resources
    /// yields an empty menu.
    pub fn assemble(
        &self,
        items: &[MenuItemDefinition],
        request: &MenuRequest,
        provider: &dyn FactsProvider,
    ) -> Vec<MenuEntry> {
        self.assemble_selection(items, Selection::Provider { provider, request })
    }

    /// Assemble for facts already at hand, one value per selected resource
    pub fn assemble_for_facts(
        &self,
        items: &[MenuItemDefinition],
        facts: &[ResourceFacts],
    ) -> Vec<MenuEntry> {
        self.assemble_selection(items, Selection::Resolved(facts))
    }

    fn assemble_selection(&self, items: &[MenuItemDefinition], selection: Selection<'_>) -> Vec<MenuEntry> {
        if selection.is_empty() {
            tracing::debug!("Menu requested without resources");
            return Vec::new();
        }
        self.build_list(items, selection)
    }

    fn build_list(&self, items: &[MenuItemDefinition], selection: Selection<'_>) -> Vec<MenuEntry> {
        let entries = items
            .iter()
            .map(|item| self.build_item(item, selection))
            .collect();
        filter_entries(entries)
    }

    fn build_item(&self, item: &MenuItemDefinition, selection: Selection<'_>) -> MenuEntry {
        let (verdict, sub_menu) = match item.kind {
            MenuItemKind::Separator => return MenuEntry::separator(),
            MenuItemKind::Entry => (
                self.verdict_for(item, selection, Evaluation::FirstApplicable),
                Vec::new(),
            ),
            MenuItemKind::Parent => {
                let sub_menu = self.build_list(&item.sub_items, selection);
                // A shown parent is always clickable; its own rule set only
                // decides whether it is shown
                let hidden = sub_menu.is_empty()
                    && self
                        .verdict_for(item, selection, Evaluation::FirstVisible)
                        .is_invisible();
                let verdict = if hidden { Verdict::Invisible } else { Verdict::Active };
                (verdict, sub_menu)
            }
        };

        let mut entry = MenuEntry::new(item.key.clone(), verdict);
        if let Some(label) = &item.label {
            entry.label = label.clone();
        }
        entry.icon = item.icon.clone();
        entry.command = item.command.clone();
        entry.sub_menu = sub_menu;
        entry
    }

    fn verdict_for(
        &self,
        item: &MenuItemDefinition,
        selection: Selection<'_>,
        evaluation: Evaluation,
    ) -> Verdict {
        let Some(rule_set) = self.rule_set_for(item) else {
            return Verdict::Invisible;
        };

        let mut combined = Verdict::Active;
        for resolved in selection.resolve(item) {
            let verdict = match resolved {
                Ok(facts) => match evaluation {
                    Evaluation::FirstApplicable => rule_set.evaluate(&facts),
                    Evaluation::FirstVisible => rule_set.evaluate_first_visible(&facts),
                },
                Err(_) => Verdict::Invisible,
            };
            combined = combined.restrict(verdict);
            if combined.is_invisible() {
                break;
            }
        }
        combined
    }

    fn rule_set_for(&self, item: &MenuItemDefinition) -> Option<Arc<RuleSet>> {
        let Some(name) = item.rule_set.as_deref() else {
            if item.kind == MenuItemKind::Entry {
                tracing::warn!(item = %item.key, "Menu item has no rule set, hiding it");
            }
            return None;
        };
        let rule_set = self.registry.get(name);
        if rule_set.is_none() {
            tracing::warn!(item = %item.key, rule_set = %name, "Unknown rule set, hiding menu item");
        }
        rule_set
    }
}
