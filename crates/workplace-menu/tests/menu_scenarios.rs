//! End-to-end menu scenarios against the public API.

use proptest::prelude::*;

use workplace_menu::facts::{FactsTable, ProjectRelation, ResourceFacts, StaticFacts, WorkflowState};
use workplace_menu::legacy;
use workplace_menu::menu::{filter_entries, MenuAssembler, MenuDefinitions, MenuEntry, MenuItemDefinition, MenuRequest};
use workplace_menu::registry::{RegistryConfig, RegistryEntry, RuleSetRegistry};
use workplace_menu::rules::{Rule, RuleSet};
use workplace_menu::verdict::{InactiveReason, Verdict};

fn direct_publish_facts() -> ResourceFacts {
    ResourceFacts::new(ProjectRelation::SameProjectUnlocked)
        .folder()
        .with_direct_publish(true)
        .with_parent_new(false)
}

#[test]
fn test_positional_decode_of_changed_only_rules() {
    let rule_set = legacy::decode_positional("d d iaaa iaaa dddd").unwrap();
    assert_eq!(
        rule_set.rule_names(),
        vec![
            "online.invisible",
            "other_project.invisible",
            "unlocked.active_if_changed",
            "locked_by_me.active_if_changed",
            "locked_by_other.invisible",
        ]
    );
    assert_eq!(
        rule_set.evaluate(&ResourceFacts::new(ProjectRelation::Online)),
        Verdict::Invisible
    );
}

#[test]
fn test_direct_publish_literal_in_other_project() {
    let rule_set = legacy::decode("d d iaaa iaaa dddd").unwrap();
    assert_eq!(rule_set.rules(), &[Rule::DirectPublish]);
    assert_eq!(
        rule_set.evaluate(&ResourceFacts::new(ProjectRelation::OtherProject)),
        Verdict::Invisible
    );
}

#[test]
fn test_direct_publish_folder() {
    let rule_set = legacy::decode("ddiaaaiaaadddd").unwrap();
    assert_eq!(rule_set.evaluate(&direct_publish_facts()), Verdict::Active);
}

#[test]
fn test_direct_publish_new_parent_folder() {
    let rule_set = legacy::decode("ddiaaaiaaadddd").unwrap();
    let facts = direct_publish_facts().with_parent_new(true);
    assert_eq!(
        rule_set.evaluate(&facts),
        Verdict::inactive(InactiveReason::ParentFolderNew)
    );
}

#[test]
fn test_separators_around_hidden_entry() {
    let registry = RuleSetRegistry::from_config(RegistryConfig {
        rule_sets: vec![
            RegistryEntry::catalog("all", "standard"),
            RegistryEntry::legacy("none", "d d dddd dddd dddd"),
        ],
    })
    .unwrap();
    let items = vec![
        MenuItemDefinition::entry("A", "all"),
        MenuItemDefinition::separator(),
        MenuItemDefinition::separator(),
        MenuItemDefinition::entry("B", "none"),
        MenuItemDefinition::separator(),
        MenuItemDefinition::entry("C", "all"),
    ];
    let facts = StaticFacts(ResourceFacts::new(ProjectRelation::SameProjectUnlocked));

    let menu = MenuAssembler::new(&registry).assemble(&items, &MenuRequest::single("/r", "u"), &facts);

    assert_eq!(menu.len(), 3);
    assert_eq!(menu[0].key, "A");
    assert!(menu[1].is_separator);
    assert_eq!(menu[2].key, "C");
}

#[test]
fn test_invisible_parent_with_active_child() {
    let registry = RuleSetRegistry::from_config(RegistryConfig {
        rule_sets: vec![
            RegistryEntry::catalog("all", "standard"),
            RegistryEntry::legacy("none", "d d dddd dddd dddd"),
        ],
    })
    .unwrap();
    let items = vec![MenuItemDefinition::parent(
        "P",
        "none",
        vec![MenuItemDefinition::entry("X", "all")],
    )];

    let menu = MenuAssembler::new(&registry)
        .assemble_for_facts(&items, &[ResourceFacts::new(ProjectRelation::SameProjectLockedByMe)]);

    assert_eq!(menu.len(), 1);
    assert_eq!(menu[0].verdict, Verdict::Active);
    assert_eq!(menu[0].sub_menu.len(), 1);
    assert_eq!(menu[0].sub_menu[0].key, "X");
}

#[test]
fn test_bundled_menu_for_online_project_keeps_separator_laws() {
    let registry = RuleSetRegistry::bundled().unwrap();
    let definitions = MenuDefinitions::bundled().unwrap();
    let facts = StaticFacts(ResourceFacts::new(ProjectRelation::Online));

    let menu = MenuAssembler::new(&registry).assemble(
        &definitions.items,
        &MenuRequest::single("/sites/default/", "guest"),
        &facts,
    );
    // online project: only the always-active entries survive
    assert!(menu.iter().all(|entry| !entry.verdict.is_invisible()));
    assert!(!menu.first().is_some_and(|e| e.is_separator));
    assert!(!menu.last().is_some_and(|e| e.is_separator));
}

#[test]
fn test_all_invisible_menu_is_empty() {
    let registry = RuleSetRegistry::bundled().unwrap();
    let facts = StaticFacts(ResourceFacts::new(ProjectRelation::Online));

    let nothing = vec![
        MenuItemDefinition::entry("a", "d d dddd dddd dddd"),
        MenuItemDefinition::separator(),
        MenuItemDefinition::parent("p", "d d dddd dddd dddd", vec![MenuItemDefinition::entry("c", "missing")]),
    ];
    let menu = MenuAssembler::new(&registry).assemble(
        &nothing,
        &MenuRequest::single("/sites/default/", "guest"),
        &facts,
    );
    assert!(menu.is_empty());
}

#[test]
fn test_bundled_menu_for_locked_changed_file() {
    let registry = RuleSetRegistry::bundled().unwrap();
    let definitions = MenuDefinitions::bundled().unwrap();
    let mut table = FactsTable::new();
    table.insert(
        "/sites/default/index.html",
        ResourceFacts::new(ProjectRelation::SameProjectLockedByMe)
            .with_state(WorkflowState::Changed)
            .writable()
            .with_direct_publish(true),
    );

    let menu = MenuAssembler::new(&registry).assemble(
        &definitions.items,
        &MenuRequest::single("/sites/default/index.html", "editor"),
        &table,
    );
    let find = |key: &str| menu.iter().find(|entry| entry.key == key);

    assert!(find("GUI_EXPLORER_CONTEXT_LOCK_0").is_none());
    assert_eq!(find("GUI_EXPLORER_CONTEXT_UNLOCK_0").unwrap().verdict, Verdict::Active);
    assert_eq!(find("GUI_EXPLORER_CONTEXT_UNDO_CHANGES_0").unwrap().verdict, Verdict::Active);
    assert!(find("GUI_EXPLORER_CONTEXT_UNDELETE_0").is_none());

    let publish = find("GUI_EXPLORER_CONTEXT_PUBLISH_0").unwrap();
    assert_eq!(publish.verdict, Verdict::Active);
    assert_eq!(publish.sub_menu.len(), 2);
}

#[test]
fn test_registry_decodes_rule_set_names_once() {
    let registry = RuleSetRegistry::bundled().unwrap();
    let a = registry.get("a i aaai iiid aaai").unwrap();
    let b = registry.get("legacy:aiaaaiiiidaaai").unwrap();
    assert!(std::sync::Arc::ptr_eq(&a, &b));
}

fn arb_entry() -> impl Strategy<Value = MenuEntry> {
    prop_oneof![
        Just(MenuEntry::separator()),
        "[a-z]{1,6}".prop_map(|key| MenuEntry::new(key, Verdict::Active)),
        "[a-z]{1,6}".prop_map(|key| MenuEntry::new(key, Verdict::inactive(InactiveReason::Unchanged))),
        "[a-z]{1,6}".prop_map(|key| MenuEntry::new(key, Verdict::Invisible)),
    ]
}

fn arb_relation() -> impl Strategy<Value = ProjectRelation> {
    prop_oneof![
        Just(ProjectRelation::Online),
        Just(ProjectRelation::SameProjectUnlocked),
        Just(ProjectRelation::SameProjectLockedByMe),
        Just(ProjectRelation::SameProjectLockedByOther),
        Just(ProjectRelation::OtherProject),
    ]
}

proptest! {
    #[test]
    fn prop_filter_is_idempotent(entries in prop::collection::vec(arb_entry(), 0..24)) {
        let once = filter_entries(entries);
        let twice = filter_entries(once.clone());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_filter_separator_laws(entries in prop::collection::vec(arb_entry(), 0..24)) {
        let filtered = filter_entries(entries);
        prop_assert!(filtered.iter().all(|e| e.is_separator || e.is_visible()));
        prop_assert!(!filtered.first().is_some_and(|e| e.is_separator));
        prop_assert!(!filtered.last().is_some_and(|e| e.is_separator));
        prop_assert!(filtered.windows(2).all(|w| !(w[0].is_separator && w[1].is_separator)));
    }

    #[test]
    fn prop_decode_is_deterministic(input in "[aid ]{0,20}") {
        match (legacy::decode(&input), legacy::decode(&input)) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
            (Err(a), Err(b)) => prop_assert_eq!(a.to_string(), b.to_string()),
            _ => prop_assert!(false, "decode of {:?} is not deterministic", input),
        }
    }

    #[test]
    fn prop_one_rule_per_relation(code in "[aid]{14}", relation in arb_relation()) {
        let rule_set: RuleSet = legacy::decode_positional(&code).unwrap();
        let facts = ResourceFacts::new(relation);
        let applicable = rule_set.rules().iter().filter(|rule| rule.applies(&facts)).count();
        prop_assert!(applicable <= 1);
    }
}
