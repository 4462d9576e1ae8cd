//! Visibility verdicts and the reason keys carried by inactive entries.

use serde::{Deserialize, Serialize};

/// Why an entry is shown but disabled.
///
/// Serialized as an opaque key; the rendering layer localizes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InactiveReason {
    #[serde(rename = "inactive.online_project")]
    OnlineProject,
    #[serde(rename = "inactive.other_project")]
    OtherProject,
    #[serde(rename = "inactive.not_locked")]
    NotLocked,
    #[serde(rename = "inactive.unchanged")]
    Unchanged,
    #[serde(rename = "inactive.deleted")]
    Deleted,
    #[serde(rename = "inactive.no_write_permission")]
    NoWritePermission,
    #[serde(rename = "inactive.lock_inherited")]
    LockInherited,
    #[serde(rename = "inactive.locked_by_other")]
    LockedByOther,
    #[serde(rename = "inactive.no_direct_publish_permission")]
    NoDirectPublishPermission,
    #[serde(rename = "inactive.parent_folder_new")]
    ParentFolderNew,
    #[serde(rename = "inactive.project_publishing")]
    ProjectPublishing,
}

impl InactiveReason {
    /// The localization key for this reason
    pub fn key(&self) -> &'static str {
        match self {
            InactiveReason::OnlineProject => "inactive.online_project",
            InactiveReason::OtherProject => "inactive.other_project",
            InactiveReason::NotLocked => "inactive.not_locked",
            InactiveReason::Unchanged => "inactive.unchanged",
            InactiveReason::Deleted => "inactive.deleted",
            InactiveReason::NoWritePermission => "inactive.no_write_permission",
            InactiveReason::LockInherited => "inactive.lock_inherited",
            InactiveReason::LockedByOther => "inactive.locked_by_other",
            InactiveReason::NoDirectPublishPermission => "inactive.no_direct_publish_permission",
            InactiveReason::ParentFolderNew => "inactive.parent_folder_new",
            InactiveReason::ProjectPublishing => "inactive.project_publishing",
        }
    }
}

impl std::fmt::Display for InactiveReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Visibility outcome for one menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "mode", content = "reason", rename_all = "lowercase")]
pub enum Verdict {
    /// Shown and clickable
    Active,
    /// Shown but disabled
    Inactive(Option<InactiveReason>),
    /// Not shown at all
    Invisible,
}

impl Verdict {
    /// Inactive with a reason key
    pub fn inactive(reason: InactiveReason) -> Self {
        Verdict::Inactive(Some(reason))
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Verdict::Active)
    }

    pub fn is_inactive(&self) -> bool {
        matches!(self, Verdict::Inactive(_))
    }

    pub fn is_invisible(&self) -> bool {
        matches!(self, Verdict::Invisible)
    }

    /// Reason key, only present for inactive verdicts
    pub fn reason(&self) -> Option<InactiveReason> {
        match self {
            Verdict::Inactive(reason) => *reason,
            _ => None,
        }
    }

    /// Position in the restrictiveness order (Active < Inactive < Invisible)
    fn restrictiveness(&self) -> u8 {
        match self {
            Verdict::Active => 0,
            Verdict::Inactive(_) => 1,
            Verdict::Invisible => 2,
        }
    }

    /// Merge two verdicts, keeping the more restrictive one.
    ///
    /// On a tie the left-hand verdict (and its reason) is kept.
    pub fn restrict(self, other: Verdict) -> Verdict {
        if other.restrictiveness() > self.restrictiveness() {
            other
        } else {
            self
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Active => write!(f, "active"),
            Verdict::Inactive(Some(reason)) => write!(f, "inactive ({})", reason),
            Verdict::Inactive(None) => write!(f, "inactive"),
            Verdict::Invisible => write!(f, "invisible"),
        }
    }
}
