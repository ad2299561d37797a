//! Catalog parsers.
//!
//! - `po`: gettext `.po` files

pub mod po;

pub use po::{parse_po, parse_po_file};
