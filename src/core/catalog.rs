use std::collections::{BTreeMap, BTreeSet};

/// One message of a gettext catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogEntry {
    pub msgctxt: Option<String>,
    /// Source text; empty for the catalog header.
    pub msgid: String,
    pub msgid_plural: Option<String>,
    /// Singular translation, or every `msgstr[N]` form in index order.
    pub msgstr: Vec<String>,
    /// Entry was commented out with `#~`.
    pub obsolete: bool,
}

impl CatalogEntry {
    pub fn new(msgid: impl Into<String>, msgstr: impl Into<String>) -> Self {
        Self {
            msgid: msgid.into(),
            msgstr: vec![msgstr.into()],
            ..Self::default()
        }
    }

    /// The header and other empty identifiers carry metadata, not content.
    pub fn is_header(&self) -> bool {
        self.msgid.is_empty()
    }
}

/// Message identifiers that occur more than once in one catalog.
pub type DuplicateSet = BTreeSet<String>;

/// Duplicates per catalog path. Only catalogs with duplicates are present.
pub type ScanResult = BTreeMap<String, DuplicateSet>;
