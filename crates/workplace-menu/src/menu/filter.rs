//! Sibling-list filtering: invisible entries and redundant separators go.

use super::entry::MenuEntry;

/// Filter one sibling list.
///
/// Drops invisible entries, collapses runs of separators into one and drops
/// separators at either end. Sub-menus are left as they are; the assembler
/// filters them bottom-up before their parent is decided. Applying the filter
/// twice gives the same result as applying it once.
pub fn filter_entries(entries: Vec<MenuEntry>) -> Vec<MenuEntry> {
    let mut result: Vec<MenuEntry> = Vec::with_capacity(entries.len());

    for entry in entries {
        if entry.is_separator {
            // kept only directly after a non-separator
            if result.last().is_some_and(|last| !last.is_separator) {
                result.push(entry);
            }
        } else if entry.is_visible() {
            result.push(entry);
        }
    }

    while result.last().is_some_and(|last| last.is_separator) {
        result.pop();
    }
    result
}

/// Filter a whole tree, deepest lists first
pub fn filter_tree(entries: Vec<MenuEntry>) -> Vec<MenuEntry> {
    let entries = entries
        .into_iter()
        .map(|mut entry| {
            entry.sub_menu = filter_tree(std::mem::take(&mut entry.sub_menu));
            entry
        })
        .collect();
    filter_entries(entries)
}
