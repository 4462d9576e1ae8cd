//! Visibility rules
//!
//! A rule belongs to one of five mutually exclusive *dimensions*, each of
//! which matches exactly one [`ProjectRelation`]. Within a dimension a small,
//! fixed set of alternatives decides the verdict, some of them looking at the
//! workflow state, permissions and lock inheritance.
//!
//! Two composite rules (direct publish and show siblings) are not split by
//! dimension and apply to every resource.
//!
//! Rules are plain `Copy` values with no state, so rule sets can be shared
//! freely between concurrent requests.

mod catalog;
mod rule_set;

pub use catalog::{catalog_rule_set, catalog_rule_set_names};
pub use rule_set::{RuleSet, RuleSetBuilder};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::MenuError;
use crate::facts::{ProjectRelation, ResourceFacts, WorkflowState};
use crate::verdict::{InactiveReason, Verdict};

/// One of the five project/lock relationships a rule set encodes a choice for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Online,
    OtherProject,
    Unlocked,
    LockedByMe,
    LockedByOther,
}

impl Dimension {
    /// Dimensions in legacy segment order
    pub const ALL: [Dimension; 5] = [
        Dimension::Online,
        Dimension::OtherProject,
        Dimension::Unlocked,
        Dimension::LockedByMe,
        Dimension::LockedByOther,
    ];

    /// The dimension responsible for a project relation
    pub fn of(relation: ProjectRelation) -> Dimension {
        match relation {
            ProjectRelation::Online => Dimension::Online,
            ProjectRelation::OtherProject => Dimension::OtherProject,
            ProjectRelation::SameProjectUnlocked => Dimension::Unlocked,
            ProjectRelation::SameProjectLockedByMe => Dimension::LockedByMe,
            ProjectRelation::SameProjectLockedByOther => Dimension::LockedByOther,
        }
    }

    /// The project relation this dimension matches
    pub fn relation(&self) -> ProjectRelation {
        match self {
            Dimension::Online => ProjectRelation::Online,
            Dimension::OtherProject => ProjectRelation::OtherProject,
            Dimension::Unlocked => ProjectRelation::SameProjectUnlocked,
            Dimension::LockedByMe => ProjectRelation::SameProjectLockedByMe,
            Dimension::LockedByOther => ProjectRelation::SameProjectLockedByOther,
        }
    }

    /// Width of this dimension's segment in a legacy rule string
    pub fn legacy_width(&self) -> usize {
        match self {
            Dimension::Online | Dimension::OtherProject => 1,
            Dimension::Unlocked | Dimension::LockedByMe | Dimension::LockedByOther => 4,
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dimension::Online => write!(f, "online"),
            Dimension::OtherProject => write!(f, "other_project"),
            Dimension::Unlocked => write!(f, "unlocked"),
            Dimension::LockedByMe => write!(f, "locked_by_me"),
            Dimension::LockedByOther => write!(f, "locked_by_other"),
        }
    }
}

/// Alternatives for the online and other-project dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectRule {
    Active,
    Inactive,
    Invisible,
}

impl ProjectRule {
    pub const ALL: [ProjectRule; 3] = [ProjectRule::Active, ProjectRule::Inactive, ProjectRule::Invisible];

    pub fn code(&self) -> &'static str {
        match self {
            ProjectRule::Active => "a",
            ProjectRule::Inactive => "i",
            ProjectRule::Invisible => "d",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|rule| rule.code() == code)
    }

    fn decide(&self, reason: InactiveReason) -> Verdict {
        match self {
            ProjectRule::Active => Verdict::Active,
            ProjectRule::Inactive => Verdict::inactive(reason),
            ProjectRule::Invisible => Verdict::Invisible,
        }
    }
}

/// Workflow-aware alternatives shared by the unlocked and locked-by-me dimensions.
///
/// Legacy codes list the outcome per workflow state in the order
/// unchanged, changed, new, deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkflowRule {
    /// `aaaa`
    Active,
    /// `iiii`
    Inactive,
    /// `dddd`
    Invisible,
    /// `aaai`: active unless deleted, needs write permission
    ActiveUnlessDeleted,
    /// `iaaa`: active once changed, needs write permission
    ActiveIfChanged,
    /// `iiid`: inactive, hidden when deleted
    InactiveUnlessDeleted,
    /// `ddda`: only shown for deleted resources, needs write permission
    ActiveIfDeleted,
}

impl WorkflowRule {
    pub const ALL: [WorkflowRule; 7] = [
        WorkflowRule::Active,
        WorkflowRule::Inactive,
        WorkflowRule::Invisible,
        WorkflowRule::ActiveUnlessDeleted,
        WorkflowRule::ActiveIfChanged,
        WorkflowRule::InactiveUnlessDeleted,
        WorkflowRule::ActiveIfDeleted,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            WorkflowRule::Active => "aaaa",
            WorkflowRule::Inactive => "iiii",
            WorkflowRule::Invisible => "dddd",
            WorkflowRule::ActiveUnlessDeleted => "aaai",
            WorkflowRule::ActiveIfChanged => "iaaa",
            WorkflowRule::InactiveUnlessDeleted => "iiid",
            WorkflowRule::ActiveIfDeleted => "ddda",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|rule| rule.code() == code)
    }

    /// Decide for a resource in the current project.
    ///
    /// `idle_reason` is reported by the plain inactive alternatives;
    /// `check_inherited` makes the permission-checking alternatives refuse
    /// inherited locks.
    fn decide(
        &self,
        facts: &ResourceFacts,
        idle_reason: Option<InactiveReason>,
        check_inherited: bool,
    ) -> Verdict {
        let permitted = || {
            if check_inherited && facts.lock_is_inherited {
                Verdict::inactive(InactiveReason::LockInherited)
            } else if !facts.has_write_permission {
                Verdict::inactive(InactiveReason::NoWritePermission)
            } else {
                Verdict::Active
            }
        };
        let deleted = facts.workflow_state == WorkflowState::Deleted;

        match self {
            WorkflowRule::Active => Verdict::Active,
            WorkflowRule::Inactive => Verdict::Inactive(idle_reason),
            WorkflowRule::Invisible => Verdict::Invisible,
            WorkflowRule::ActiveUnlessDeleted => {
                if deleted {
                    Verdict::inactive(InactiveReason::Deleted)
                } else {
                    permitted()
                }
            }
            WorkflowRule::ActiveIfChanged => {
                if facts.workflow_state == WorkflowState::Unchanged {
                    Verdict::inactive(InactiveReason::Unchanged)
                } else {
                    permitted()
                }
            }
            WorkflowRule::InactiveUnlessDeleted => {
                if deleted {
                    Verdict::Invisible
                } else {
                    Verdict::Inactive(idle_reason)
                }
            }
            WorkflowRule::ActiveIfDeleted => {
                if deleted {
                    permitted()
                } else {
                    Verdict::Invisible
                }
            }
        }
    }
}

/// Alternatives for resources locked by another user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LockedByOtherRule {
    /// `aaaa`
    Active,
    /// `dddd`
    Invisible,
    /// `aaai`
    ActiveUnlessDeleted,
}

impl LockedByOtherRule {
    pub const ALL: [LockedByOtherRule; 3] = [
        LockedByOtherRule::Active,
        LockedByOtherRule::Invisible,
        LockedByOtherRule::ActiveUnlessDeleted,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            LockedByOtherRule::Active => "aaaa",
            LockedByOtherRule::Invisible => "dddd",
            LockedByOtherRule::ActiveUnlessDeleted => "aaai",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|rule| rule.code() == code)
    }

    fn decide(&self, facts: &ResourceFacts) -> Verdict {
        match self {
            LockedByOtherRule::Active => Verdict::Active,
            LockedByOtherRule::Invisible => Verdict::Invisible,
            LockedByOtherRule::ActiveUnlessDeleted => {
                if facts.workflow_state == WorkflowState::Deleted {
                    Verdict::inactive(InactiveReason::Deleted)
                } else {
                    Verdict::Active
                }
            }
        }
    }
}

/// Extra precondition narrowing a rule beyond its dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Guard {
    /// The workplace auto-locks resources on edit
    Autolock,
}

/// A single visibility rule.
///
/// Serialized as its stable catalog name, e.g. `"unlocked.active_if_changed"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Rule {
    Online(ProjectRule),
    OtherProject(ProjectRule),
    Unlocked(WorkflowRule),
    /// Unlocked, but autolock lets the user act as if holding the lock
    UnlockedAutolock(WorkflowRule),
    LockedByMe(WorkflowRule),
    LockedByOther(LockedByOtherRule),
    DirectPublish,
    ShowSiblings,
}

static RULES_BY_NAME: Lazy<HashMap<&'static str, Rule>> =
    Lazy::new(|| Rule::all().map(|rule| (rule.name(), rule)).collect());

impl Rule {
    /// Every rule in the catalog
    pub fn all() -> impl Iterator<Item = Rule> {
        let project = ProjectRule::ALL.into_iter();
        let workflow = WorkflowRule::ALL.into_iter();

        project
            .clone()
            .map(Rule::Online)
            .chain(project.map(Rule::OtherProject))
            .chain(workflow.clone().map(Rule::Unlocked))
            .chain(workflow.clone().map(Rule::UnlockedAutolock))
            .chain(workflow.map(Rule::LockedByMe))
            .chain(LockedByOtherRule::ALL.into_iter().map(Rule::LockedByOther))
            .chain([Rule::DirectPublish, Rule::ShowSiblings])
    }

    /// Look a rule up by its catalog name
    pub fn from_name(name: &str) -> Option<Rule> {
        RULES_BY_NAME.get(name).copied()
    }

    /// Stable catalog name
    pub fn name(&self) -> &'static str {
        match self {
            Rule::Online(rule) => match rule {
                ProjectRule::Active => "online.active",
                ProjectRule::Inactive => "online.inactive",
                ProjectRule::Invisible => "online.invisible",
            },
            Rule::OtherProject(rule) => match rule {
                ProjectRule::Active => "other_project.active",
                ProjectRule::Inactive => "other_project.inactive",
                ProjectRule::Invisible => "other_project.invisible",
            },
            Rule::Unlocked(rule) => match rule {
                WorkflowRule::Active => "unlocked.active",
                WorkflowRule::Inactive => "unlocked.inactive",
                WorkflowRule::Invisible => "unlocked.invisible",
                WorkflowRule::ActiveUnlessDeleted => "unlocked.active_unless_deleted",
                WorkflowRule::ActiveIfChanged => "unlocked.active_if_changed",
                WorkflowRule::InactiveUnlessDeleted => "unlocked.inactive_unless_deleted",
                WorkflowRule::ActiveIfDeleted => "unlocked.active_if_deleted",
            },
            Rule::UnlockedAutolock(rule) => match rule {
                WorkflowRule::Active => "unlocked_autolock.active",
                WorkflowRule::Inactive => "unlocked_autolock.inactive",
                WorkflowRule::Invisible => "unlocked_autolock.invisible",
                WorkflowRule::ActiveUnlessDeleted => "unlocked_autolock.active_unless_deleted",
                WorkflowRule::ActiveIfChanged => "unlocked_autolock.active_if_changed",
                WorkflowRule::InactiveUnlessDeleted => "unlocked_autolock.inactive_unless_deleted",
                WorkflowRule::ActiveIfDeleted => "unlocked_autolock.active_if_deleted",
            },
            Rule::LockedByMe(rule) => match rule {
                WorkflowRule::Active => "locked_by_me.active",
                WorkflowRule::Inactive => "locked_by_me.inactive",
                WorkflowRule::Invisible => "locked_by_me.invisible",
                WorkflowRule::ActiveUnlessDeleted => "locked_by_me.active_unless_deleted",
                WorkflowRule::ActiveIfChanged => "locked_by_me.active_if_changed",
                WorkflowRule::InactiveUnlessDeleted => "locked_by_me.inactive_unless_deleted",
                WorkflowRule::ActiveIfDeleted => "locked_by_me.active_if_deleted",
            },
            Rule::LockedByOther(rule) => match rule {
                LockedByOtherRule::Active => "locked_by_other.active",
                LockedByOtherRule::Invisible => "locked_by_other.invisible",
                LockedByOtherRule::ActiveUnlessDeleted => "locked_by_other.active_unless_deleted",
            },
            Rule::DirectPublish => "direct_publish",
            Rule::ShowSiblings => "show_siblings",
        }
    }

    /// Dimension this rule belongs to; `None` for the composite rules
    pub fn dimension(&self) -> Option<Dimension> {
        match self {
            Rule::Online(_) => Some(Dimension::Online),
            Rule::OtherProject(_) => Some(Dimension::OtherProject),
            Rule::Unlocked(_) | Rule::UnlockedAutolock(_) => Some(Dimension::Unlocked),
            Rule::LockedByMe(_) => Some(Dimension::LockedByMe),
            Rule::LockedByOther(_) => Some(Dimension::LockedByOther),
            Rule::DirectPublish | Rule::ShowSiblings => None,
        }
    }

    /// Precondition beyond the dimension match, if any
    pub fn guard(&self) -> Option<Guard> {
        match self {
            Rule::UnlockedAutolock(_) => Some(Guard::Autolock),
            _ => None,
        }
    }

    /// Legacy segment code; `None` for rules the legacy format cannot express
    pub fn legacy_code(&self) -> Option<&'static str> {
        match self {
            Rule::Online(rule) | Rule::OtherProject(rule) => Some(rule.code()),
            Rule::Unlocked(rule) | Rule::LockedByMe(rule) => Some(rule.code()),
            Rule::LockedByOther(rule) => Some(rule.code()),
            Rule::UnlockedAutolock(_) | Rule::DirectPublish | Rule::ShowSiblings => None,
        }
    }

    /// Whether this rule is responsible for the given facts
    pub fn applies(&self, facts: &ResourceFacts) -> bool {
        let guard_holds = match self.guard() {
            Some(Guard::Autolock) => facts.autolock_enabled,
            None => true,
        };
        match self.dimension() {
            Some(dimension) => dimension.relation() == facts.project_relation && guard_holds,
            None => true,
        }
    }

    /// Verdict for facts this rule applies to
    pub fn decide(&self, facts: &ResourceFacts) -> Verdict {
        match self {
            Rule::Online(rule) => rule.decide(InactiveReason::OnlineProject),
            Rule::OtherProject(rule) => rule.decide(InactiveReason::OtherProject),
            Rule::Unlocked(rule) => rule.decide(facts, Some(InactiveReason::NotLocked), false),
            Rule::UnlockedAutolock(rule) => rule.decide(facts, None, false),
            Rule::LockedByMe(rule) => rule.decide(facts, None, true),
            Rule::LockedByOther(rule) => rule.decide(facts),
            Rule::DirectPublish => decide_direct_publish(facts),
            Rule::ShowSiblings => Verdict::Active,
        }
    }
}

fn decide_direct_publish(facts: &ResourceFacts) -> Verdict {
    match facts.project_relation {
        ProjectRelation::Online | ProjectRelation::OtherProject => return Verdict::Invisible,
        ProjectRelation::SameProjectLockedByOther => {
            return Verdict::inactive(InactiveReason::LockedByOther)
        }
        ProjectRelation::SameProjectUnlocked | ProjectRelation::SameProjectLockedByMe => {}
    }
    if facts.is_locked_for_publishing {
        return Verdict::inactive(InactiveReason::ProjectPublishing);
    }
    if !facts.has_direct_publish_permission {
        return Verdict::inactive(InactiveReason::NoDirectPublishPermission);
    }
    if facts.parent_is_new {
        return Verdict::inactive(InactiveReason::ParentFolderNew);
    }
    if !facts.is_folder && facts.workflow_state == WorkflowState::Unchanged {
        return Verdict::inactive(InactiveReason::Unchanged);
    }
    Verdict::Active
}

impl TryFrom<String> for Rule {
    type Error = MenuError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Rule::from_name(&name).ok_or(MenuError::UnknownRule(name))
    }
}

impl From<Rule> for &'static str {
    fn from(rule: Rule) -> Self {
        rule.name()
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use test_case::test_case;

    fn unlocked(state: WorkflowState) -> ResourceFacts {
        ResourceFacts::new(ProjectRelation::SameProjectUnlocked)
            .with_state(state)
            .writable()
    }

    #[test]
    fn test_catalog_names_unique_and_resolvable() {
        let names: HashSet<_> = Rule::all().map(|rule| rule.name()).collect();
        assert_eq!(names.len(), Rule::all().count());
        for rule in Rule::all() {
            assert_eq!(Rule::from_name(rule.name()), Some(rule));
        }
        assert_eq!(Rule::from_name("unlocked.sometimes"), None);
    }

    #[test]
    fn test_exactly_one_dimension_per_relation() {
        for relation in ProjectRelation::all() {
            let facts = ResourceFacts::new(relation);
            let matching: Vec<_> = Dimension::ALL
                .into_iter()
                .filter(|d| d.relation() == facts.project_relation)
                .collect();
            assert_eq!(matching, vec![Dimension::of(relation)]);
        }
    }

    #[test_case("aaaa", WorkflowRule::Active)]
    #[test_case("iiii", WorkflowRule::Inactive)]
    #[test_case("dddd", WorkflowRule::Invisible)]
    #[test_case("aaai", WorkflowRule::ActiveUnlessDeleted)]
    #[test_case("iaaa", WorkflowRule::ActiveIfChanged)]
    #[test_case("iiid", WorkflowRule::InactiveUnlessDeleted)]
    #[test_case("ddda", WorkflowRule::ActiveIfDeleted)]
    fn test_workflow_codes(code: &str, expected: WorkflowRule) {
        assert_eq!(WorkflowRule::from_code(code), Some(expected));
        assert_eq!(expected.code(), code);
    }

    #[test_case(WorkflowState::Unchanged, Verdict::inactive(InactiveReason::Unchanged))]
    #[test_case(WorkflowState::Changed, Verdict::Active)]
    #[test_case(WorkflowState::New, Verdict::Active)]
    #[test_case(WorkflowState::Deleted, Verdict::Active)]
    fn test_active_if_changed(state: WorkflowState, expected: Verdict) {
        let rule = Rule::Unlocked(WorkflowRule::ActiveIfChanged);
        assert_eq!(rule.decide(&unlocked(state)), expected);
    }

    #[test_case(WorkflowState::Unchanged, Verdict::Invisible)]
    #[test_case(WorkflowState::Deleted, Verdict::Active)]
    fn test_active_if_deleted(state: WorkflowState, expected: Verdict) {
        let rule = Rule::Unlocked(WorkflowRule::ActiveIfDeleted);
        assert_eq!(rule.decide(&unlocked(state)), expected);
    }

    #[test]
    fn test_inactive_unless_deleted() {
        let rule = Rule::Unlocked(WorkflowRule::InactiveUnlessDeleted);
        assert_eq!(
            rule.decide(&unlocked(WorkflowState::Changed)),
            Verdict::inactive(InactiveReason::NotLocked)
        );
        assert_eq!(rule.decide(&unlocked(WorkflowState::Deleted)), Verdict::Invisible);
    }

    #[test]
    fn test_write_permission_required() {
        let facts = ResourceFacts::new(ProjectRelation::SameProjectUnlocked)
            .with_state(WorkflowState::Changed);
        assert_eq!(
            Rule::Unlocked(WorkflowRule::ActiveUnlessDeleted).decide(&facts),
            Verdict::inactive(InactiveReason::NoWritePermission)
        );
        // plain active ignores permissions
        assert_eq!(Rule::Unlocked(WorkflowRule::Active).decide(&facts), Verdict::Active);
    }

    #[test]
    fn test_locked_by_me_rejects_inherited_lock() {
        let facts = ResourceFacts::new(ProjectRelation::SameProjectLockedByMe)
            .with_state(WorkflowState::Changed)
            .writable()
            .with_inherited_lock(true);

        assert_eq!(
            Rule::LockedByMe(WorkflowRule::ActiveUnlessDeleted).decide(&facts),
            Verdict::inactive(InactiveReason::LockInherited)
        );
        assert_eq!(Rule::LockedByMe(WorkflowRule::Active).decide(&facts), Verdict::Active);
        assert_eq!(
            Rule::LockedByMe(WorkflowRule::Inactive).decide(&facts),
            Verdict::Inactive(None)
        );
    }

    #[test]
    fn test_locked_by_other_active_unless_deleted() {
        let rule = Rule::LockedByOther(LockedByOtherRule::ActiveUnlessDeleted);
        let facts = ResourceFacts::new(ProjectRelation::SameProjectLockedByOther);
        assert_eq!(rule.decide(&facts), Verdict::Active);
        assert_eq!(
            rule.decide(&facts.with_state(WorkflowState::Deleted)),
            Verdict::inactive(InactiveReason::Deleted)
        );
    }

    #[test]
    fn test_autolock_guard() {
        let rule = Rule::UnlockedAutolock(WorkflowRule::ActiveUnlessDeleted);
        let facts = unlocked(WorkflowState::Changed);
        assert!(!rule.applies(&facts));
        assert!(rule.applies(&facts.with_autolock(true)));
        assert!(Rule::Unlocked(WorkflowRule::Inactive).applies(&facts.with_autolock(true)));
    }

    #[test]
    fn test_project_rules_reasons() {
        let online = ResourceFacts::new(ProjectRelation::Online);
        assert_eq!(
            Rule::Online(ProjectRule::Inactive).decide(&online),
            Verdict::inactive(InactiveReason::OnlineProject)
        );
        let other = ResourceFacts::new(ProjectRelation::OtherProject);
        assert_eq!(
            Rule::OtherProject(ProjectRule::Inactive).decide(&other),
            Verdict::inactive(InactiveReason::OtherProject)
        );
        assert!(!Rule::Online(ProjectRule::Active).applies(&other));
    }

    #[test]
    fn test_direct_publish_decisions() {
        let base = ResourceFacts::new(ProjectRelation::SameProjectLockedByMe)
            .with_state(WorkflowState::Changed)
            .with_direct_publish(true);

        assert_eq!(Rule::DirectPublish.decide(&base), Verdict::Active);
        assert_eq!(
            Rule::DirectPublish.decide(&base.with_publish_lock(true)),
            Verdict::inactive(InactiveReason::ProjectPublishing)
        );
        assert_eq!(
            Rule::DirectPublish.decide(&base.with_direct_publish(false)),
            Verdict::inactive(InactiveReason::NoDirectPublishPermission)
        );
        assert_eq!(
            Rule::DirectPublish.decide(&base.with_state(WorkflowState::Unchanged)),
            Verdict::inactive(InactiveReason::Unchanged)
        );
        assert_eq!(
            Rule::DirectPublish.decide(&base.with_state(WorkflowState::Unchanged).folder()),
            Verdict::Active
        );

        let mut locked_by_other = base;
        locked_by_other.project_relation = ProjectRelation::SameProjectLockedByOther;
        assert_eq!(
            Rule::DirectPublish.decide(&locked_by_other),
            Verdict::inactive(InactiveReason::LockedByOther)
        );
    }

    #[test]
    fn test_rule_serializes_as_name() {
        let rule = Rule::UnlockedAutolock(WorkflowRule::ActiveIfChanged);
        let json = serde_json::to_string(&rule).unwrap();
        assert_eq!(json, "\"unlocked_autolock.active_if_changed\"");
        let parsed: Rule = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, rule);
        assert!(serde_json::from_str::<Rule>("\"bogus\"").is_err());
    }
}
