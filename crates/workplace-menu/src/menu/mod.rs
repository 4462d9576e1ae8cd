//! Menu assembly
//!
//! Raw item definitions name a rule set each. Per request the assembler
//! evaluates those rule sets against fresh resource facts, builds parent
//! sub-menus bottom-up and filters every sibling list, so the result can be
//! handed to the rendering layer as is.

mod assembler;
mod definition;
mod entry;
mod filter;

pub use assembler::{MenuAssembler, MenuRequest};
pub use definition::{DefinitionWarning, MenuDefinitions, MenuItemDefinition, MenuItemKind};
pub use entry::MenuEntry;
pub use filter::{filter_entries, filter_tree};
