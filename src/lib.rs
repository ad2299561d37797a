//! po-lint - duplicate `msgid` checker for gettext catalogs
//!
//! po-lint is a CLI tool and library that scans every `.po` file below a project
//! root and reports message identifiers defined more than once in the same catalog.
//! Output adapts to the environment: a plain console stream, or a GitHub Actions
//! step summary with inline annotations.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, run loop, exit status)
//! - `config`: Run configuration built once at process entry
//! - `core`: Catalog discovery, parsing and duplicate detection
//! - `reporters`: Console and GitHub Actions output

pub mod cli;
pub mod config;
pub mod core;
pub mod reporters;
