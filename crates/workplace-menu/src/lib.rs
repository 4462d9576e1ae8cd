//! Workplace Menu Visibility Engine
//!
//! Decides, for every resource a user is browsing in the workplace, which
//! context-menu commands are shown, shown but disabled, or hidden.
//!
//! # Overview
//!
//! - [`rules`]: the catalog of visibility rules and ordered rule sets
//! - [`legacy`]: decoder for the 14 character compact rule strings
//! - [`registry`]: rule sets by name, built once at startup
//! - [`menu`]: assembles and filters the display-ready menu tree
//!
//! # Usage
//!
//! ```ignore
//! use workplace_menu::{MenuAssembler, MenuDefinitions, MenuRequest, RuleSetRegistry};
//!
//! let registry = RuleSetRegistry::bundled()?;
//! let definitions = MenuDefinitions::bundled()?;
//!
//! let menu = MenuAssembler::new(&registry).assemble(
//!     &definitions.items,
//!     &MenuRequest::single("/sites/default/index.html", "editor"),
//!     &facts_provider,
//! );
//! ```

pub mod config;
pub mod error;
pub mod facts;
pub mod legacy;
pub mod menu;
pub mod registry;
pub mod rules;
pub mod verdict;

pub use config::MenuConfig;
pub use error::{FactsError, MenuError, MenuResult};
pub use facts::{FactsProvider, FactsTable, ProjectRelation, ResourceFacts, StaticFacts, WorkflowState};
pub use menu::{MenuAssembler, MenuDefinitions, MenuEntry, MenuItemDefinition, MenuRequest};
pub use registry::RuleSetRegistry;
pub use rules::{Rule, RuleSet};
pub use verdict::{InactiveReason, Verdict};
