//! Core scanning engine.
//!
//! ## Module Structure
//!
//! - `catalog`: Catalog entry and result types
//! - `parsers`: gettext `.po` parser
//! - `discovery`: Glob-based catalog discovery
//! - `scanner`: Duplicate detection over one catalog
//! - `aggregator`: Parallel scan of all catalogs into a `ScanResult`

pub mod aggregator;
pub mod catalog;
pub mod discovery;
pub mod parsers;
pub mod scanner;

pub use aggregator::scan_catalogs;
pub use catalog::{CatalogEntry, DuplicateSet, ScanResult};
pub use discovery::discover_catalogs;
pub use scanner::find_duplicates;
