//! Resource facts consumed by the rules, and the provider seam that supplies them.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::FactsError;

/// How the resource relates to the acting user's current project.
///
/// Exactly one relation holds for any resource, which is what makes
/// "first applicable rule wins" well defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectRelation {
    /// The user is working in the online (published) project
    Online,
    /// In the current project, not locked
    SameProjectUnlocked,
    /// In the current project, locked by the acting user
    SameProjectLockedByMe,
    /// In the current project, locked by somebody else
    SameProjectLockedByOther,
    /// Modified or locked in another project
    OtherProject,
}

impl ProjectRelation {
    pub fn all() -> impl Iterator<Item = ProjectRelation> {
        [
            ProjectRelation::Online,
            ProjectRelation::SameProjectUnlocked,
            ProjectRelation::SameProjectLockedByMe,
            ProjectRelation::SameProjectLockedByOther,
            ProjectRelation::OtherProject,
        ]
        .into_iter()
    }

    /// True for the relations where the resource belongs to the current project
    pub fn is_inside_project(&self) -> bool {
        matches!(
            self,
            ProjectRelation::SameProjectUnlocked
                | ProjectRelation::SameProjectLockedByMe
                | ProjectRelation::SameProjectLockedByOther
        )
    }
}

/// Edit/delete workflow state of the resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowState {
    New,
    Changed,
    #[default]
    Unchanged,
    Deleted,
}

impl WorkflowState {
    pub fn all() -> impl Iterator<Item = WorkflowState> {
        [
            WorkflowState::New,
            WorkflowState::Changed,
            WorkflowState::Unchanged,
            WorkflowState::Deleted,
        ]
        .into_iter()
    }
}

/// Snapshot of everything the rules may look at for one resource and user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceFacts {
    pub project_relation: ProjectRelation,

    #[serde(default)]
    pub workflow_state: WorkflowState,

    #[serde(default)]
    pub is_folder: bool,

    /// The parent folder is new and not yet published
    #[serde(default)]
    pub parent_is_new: bool,

    #[serde(default)]
    pub has_view_permission: bool,

    #[serde(default)]
    pub has_write_permission: bool,

    #[serde(default)]
    pub has_direct_publish_permission: bool,

    /// The lock held by the user comes from a locked parent folder
    #[serde(default)]
    pub lock_is_inherited: bool,

    /// The whole project is currently being published
    #[serde(default)]
    pub is_locked_for_publishing: bool,

    /// The workplace locks resources automatically when they are edited
    #[serde(default)]
    pub autolock_enabled: bool,
}

impl ResourceFacts {
    /// Facts for an unchanged file with no permissions granted
    pub fn new(project_relation: ProjectRelation) -> Self {
        Self {
            project_relation,
            workflow_state: WorkflowState::Unchanged,
            is_folder: false,
            parent_is_new: false,
            has_view_permission: false,
            has_write_permission: false,
            has_direct_publish_permission: false,
            lock_is_inherited: false,
            is_locked_for_publishing: false,
            autolock_enabled: false,
        }
    }

    pub fn with_state(mut self, state: WorkflowState) -> Self {
        self.workflow_state = state;
        self
    }

    pub fn folder(mut self) -> Self {
        self.is_folder = true;
        self
    }

    pub fn with_parent_new(mut self, parent_is_new: bool) -> Self {
        self.parent_is_new = parent_is_new;
        self
    }

    /// Grant view and write permission
    pub fn writable(mut self) -> Self {
        self.has_view_permission = true;
        self.has_write_permission = true;
        self
    }

    pub fn with_direct_publish(mut self, allowed: bool) -> Self {
        self.has_direct_publish_permission = allowed;
        self
    }

    pub fn with_inherited_lock(mut self, inherited: bool) -> Self {
        self.lock_is_inherited = inherited;
        self
    }

    pub fn with_publish_lock(mut self, locked: bool) -> Self {
        self.is_locked_for_publishing = locked;
        self
    }

    pub fn with_autolock(mut self, enabled: bool) -> Self {
        self.autolock_enabled = enabled;
        self
    }
}

/// Supplies resource facts for a resource as seen by a user.
///
/// Implementations live in the resource/permission subsystem. Calls are
/// treated as synchronous, side-effect-free queries and are never retried.
pub trait FactsProvider {
    fn resolve(&self, resource_id: &str, user_id: &str) -> Result<ResourceFacts, FactsError>;
}

impl<F> FactsProvider for F
where
    F: Fn(&str, &str) -> Result<ResourceFacts, FactsError>,
{
    fn resolve(&self, resource_id: &str, user_id: &str) -> Result<ResourceFacts, FactsError> {
        self(resource_id, user_id)
    }
}

/// Provider returning the same facts for every resource
#[derive(Debug, Clone, Copy)]
pub struct StaticFacts(pub ResourceFacts);

impl FactsProvider for StaticFacts {
    fn resolve(&self, _resource_id: &str, _user_id: &str) -> Result<ResourceFacts, FactsError> {
        Ok(self.0)
    }
}

/// Facts keyed by resource id, typically loaded from a JSON document.
///
/// Unknown resources resolve to [`FactsError::ResourceNotFound`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FactsTable {
    #[serde(default)]
    pub resources: HashMap<String, ResourceFacts>,
}

impl FactsTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, resource_id: impl Into<String>, facts: ResourceFacts) {
        self.resources.insert(resource_id.into(), facts);
    }

    pub fn from_json_str(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }
}

impl FactsProvider for FactsTable {
    fn resolve(&self, resource_id: &str, _user_id: &str) -> Result<ResourceFacts, FactsError> {
        self.resources
            .get(resource_id)
            .copied()
            .ok_or_else(|| FactsError::ResourceNotFound(resource_id.to_string()))
    }
}
