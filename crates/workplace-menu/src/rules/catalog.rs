//! Named rule sets built directly from the structured catalog.
//!
//! Registry entries refer to these by name instead of loading rule
//! implementations dynamically.

use super::{LockedByOtherRule, ProjectRule, Rule, RuleSet, WorkflowRule};
use crate::error::{MenuError, MenuResult};

const CATALOG_NAMES: &[&str] = &[
    "lock",
    "unlock",
    "steal_lock",
    "edit",
    "undo_changes",
    "undelete",
    "standard",
    "direct_publish",
    "show_siblings",
];

/// Names of every catalog rule set
pub fn catalog_rule_set_names() -> &'static [&'static str] {
    CATALOG_NAMES
}

/// Build the catalog rule set with the given name
pub fn catalog_rule_set(name: &str) -> MenuResult<RuleSet> {
    let builder = RuleSet::builder(name);
    let builder = match name {
        "lock" => builder
            .rule(Rule::Online(ProjectRule::Invisible))
            .rule(Rule::OtherProject(ProjectRule::Invisible))
            .rule(Rule::Unlocked(WorkflowRule::Active))
            .rule(Rule::LockedByMe(WorkflowRule::Invisible))
            .rule(Rule::LockedByOther(LockedByOtherRule::Invisible)),
        "unlock" => builder
            .rule(Rule::Online(ProjectRule::Invisible))
            .rule(Rule::OtherProject(ProjectRule::Invisible))
            .rule(Rule::Unlocked(WorkflowRule::Invisible))
            .rule(Rule::LockedByMe(WorkflowRule::Active))
            .rule(Rule::LockedByOther(LockedByOtherRule::Invisible)),
        "steal_lock" => builder
            .rule(Rule::Online(ProjectRule::Invisible))
            .rule(Rule::OtherProject(ProjectRule::Invisible))
            .rule(Rule::Unlocked(WorkflowRule::Invisible))
            .rule(Rule::LockedByMe(WorkflowRule::Invisible))
            .rule(Rule::LockedByOther(LockedByOtherRule::Active)),
        // autolock lets an unlocked resource be edited directly
        "edit" => builder
            .rule(Rule::Online(ProjectRule::Inactive))
            .rule(Rule::OtherProject(ProjectRule::Inactive))
            .rule(Rule::UnlockedAutolock(WorkflowRule::ActiveUnlessDeleted))
            .rule(Rule::Unlocked(WorkflowRule::InactiveUnlessDeleted))
            .rule(Rule::LockedByMe(WorkflowRule::ActiveUnlessDeleted))
            .rule(Rule::LockedByOther(LockedByOtherRule::Invisible)),
        "undo_changes" => builder
            .rule(Rule::Online(ProjectRule::Invisible))
            .rule(Rule::OtherProject(ProjectRule::Invisible))
            .rule(Rule::UnlockedAutolock(WorkflowRule::ActiveIfChanged))
            .rule(Rule::Unlocked(WorkflowRule::Inactive))
            .rule(Rule::LockedByMe(WorkflowRule::ActiveIfChanged))
            .rule(Rule::LockedByOther(LockedByOtherRule::Invisible)),
        "undelete" => builder
            .rule(Rule::Online(ProjectRule::Invisible))
            .rule(Rule::OtherProject(ProjectRule::Invisible))
            .rule(Rule::UnlockedAutolock(WorkflowRule::ActiveIfDeleted))
            .rule(Rule::Unlocked(WorkflowRule::Invisible))
            .rule(Rule::LockedByMe(WorkflowRule::ActiveIfDeleted))
            .rule(Rule::LockedByOther(LockedByOtherRule::Invisible)),
        "standard" => builder
            .rule(Rule::Online(ProjectRule::Active))
            .rule(Rule::OtherProject(ProjectRule::Active))
            .rule(Rule::Unlocked(WorkflowRule::Active))
            .rule(Rule::LockedByMe(WorkflowRule::Active))
            .rule(Rule::LockedByOther(LockedByOtherRule::Active)),
        "direct_publish" => builder.rule(Rule::DirectPublish),
        "show_siblings" => builder.rule(Rule::ShowSiblings),
        other => return Err(MenuError::UnknownCatalogRuleSet(other.to_string())),
    };
    builder.build()
}
