use std::{
    path::{Path, PathBuf},
    sync::mpsc,
    thread,
};

use anyhow::{Result, anyhow};
use colored::Colorize;
use rayon::prelude::*;

use super::{
    DuplicateSet, ScanResult, discovery::display_path, find_duplicates, parsers::parse_po_file,
};
use crate::reporters::Reporter;

/// Duplicates found in one catalog.
#[derive(Debug)]
struct CatalogScan {
    path: String,
    duplicates: DuplicateSet,
}

/// Load and scan every catalog in parallel.
///
/// Each catalog's duplicates are announced through
/// [`Reporter::report_duplicate`] as soon as that catalog is done, then merged
/// into the returned [`ScanResult`]. The first catalog that fails to load
/// aborts the scan and its error is returned.
pub fn scan_catalogs<R: Reporter>(
    root: &Path,
    files: &[PathBuf],
    verbose: bool,
    reporter: &mut R,
) -> Result<ScanResult> {
    let (sender, receiver) = mpsc::channel::<CatalogScan>();

    thread::scope(|scope| -> Result<ScanResult> {
        let worker = scope.spawn(move || {
            files.par_iter().try_for_each_with(sender, |sender, file| {
                let scan = scan_catalog(root, file, verbose)?;
                if !scan.duplicates.is_empty() {
                    // Receiver only hangs up after a reporting error, which is returned below.
                    let _ = sender.send(scan);
                }
                Ok::<(), anyhow::Error>(())
            })
        });

        let mut result = ScanResult::new();
        let mut streamed = Ok(());
        for scan in receiver {
            if streamed.is_ok() {
                streamed = scan
                    .duplicates
                    .iter()
                    .try_for_each(|msgid| reporter.report_duplicate(&scan.path, msgid));
            }
            result.insert(scan.path, scan.duplicates);
        }

        worker
            .join()
            .map_err(|_| anyhow!("Catalog scan worker panicked"))??;
        streamed?;

        Ok(result)
    })
}

fn scan_catalog(root: &Path, file: &Path, verbose: bool) -> Result<CatalogScan> {
    let path = display_path(root, file);
    if verbose {
        eprintln!("{} {}", "Checking".dimmed(), path);
    }

    let entries = parse_po_file(file)?;
    Ok(CatalogScan {
        duplicates: find_duplicates(&entries),
        path,
    })
}
