use std::collections::HashSet;

use super::{CatalogEntry, DuplicateSet};

/// Collect the message identifiers that occur more than once in `entries`.
///
/// Entries with an empty `msgid` (the catalog header) are skipped.
pub fn find_duplicates(entries: &[CatalogEntry]) -> DuplicateSet {
    let mut seen: HashSet<&str> = HashSet::with_capacity(entries.len());
    let mut duplicates = DuplicateSet::new();

    for entry in entries.iter().filter(|entry| !entry.is_header()) {
        if !seen.insert(entry.msgid.as_str()) {
            duplicates.insert(entry.msgid.clone());
        }
    }

    duplicates
}
