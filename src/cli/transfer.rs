//! CSV import and export shell commands

use std::io::{BufRead, Write};
use std::path::Path;

use super::Console;
use crate::error::FinTrackResult;
use crate::export::{export_accounts_to_file, export_categories_to_file, export_operations_to_file};
use crate::import::ImportTarget;
use crate::storage::Storage;

/// What an export command writes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportTarget {
    Operations,
    Accounts,
    Categories,
}

impl ExportTarget {
    fn label(&self) -> &'static str {
        match self {
            Self::Operations => "operations",
            Self::Accounts => "accounts",
            Self::Categories => "categories",
        }
    }

    fn export(&self, storage: &Storage, path: &Path) -> FinTrackResult<usize> {
        match self {
            Self::Operations => export_operations_to_file(storage, path),
            Self::Accounts => export_accounts_to_file(storage, path),
            Self::Categories => export_categories_to_file(storage, path),
        }
    }
}

/// `import-accounts` and `import-operations`
pub fn import_csv<R: BufRead, W: Write>(
    storage: &Storage,
    target: ImportTarget,
    console: &mut Console<R, W>,
) -> FinTrackResult<()> {
    let path = console.ask(&format!("CSV file path ({}): ", target.format_hint()))?;
    let count = target.import(storage, Path::new(&path))?;
    writeln!(console.out(), "OK: {} {} imported.", count, target.label())?;
    Ok(())
}

/// `export-operations`, `export-accounts` and `export-categories`
pub fn export_csv<R: BufRead, W: Write>(
    storage: &Storage,
    target: ExportTarget,
    console: &mut Console<R, W>,
) -> FinTrackResult<()> {
    let path = console.ask(&format!(
        "Output CSV path (e.g. exports/{}.csv): ",
        target.label()
    ))?;
    let count = target.export(storage, Path::new(&path))?;
    writeln!(
        console.out(),
        "OK: {} {} exported to {}",
        count,
        target.label(),
        path
    )?;
    Ok(())
}
