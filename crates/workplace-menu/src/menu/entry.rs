//! Display-ready menu entries produced per request.

use serde::{Deserialize, Serialize};

use crate::verdict::{InactiveReason, Verdict};

/// One entry of the assembled menu.
///
/// `reason` is only set for inactive entries and carries an opaque,
/// localizable key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub key: String,

    pub label: String,

    pub verdict: Verdict,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<InactiveReason>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    #[serde(default)]
    pub is_separator: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_menu: Vec<MenuEntry>,
}

impl MenuEntry {
    pub fn new(key: impl Into<String>, verdict: Verdict) -> Self {
        let key = key.into();
        Self {
            label: key.clone(),
            key,
            verdict,
            reason: verdict.reason(),
            icon: None,
            command: None,
            is_separator: false,
            sub_menu: Vec::new(),
        }
    }

    pub fn separator() -> Self {
        Self {
            key: String::new(),
            label: String::new(),
            verdict: Verdict::Active,
            reason: None,
            icon: None,
            command: None,
            is_separator: true,
            sub_menu: Vec::new(),
        }
    }

    pub fn is_visible(&self) -> bool {
        !self.verdict.is_invisible()
    }

    pub fn is_active(&self) -> bool {
        self.verdict.is_active()
    }
}
