//! Export module for FinTrack
//!
//! CSV export of operations, accounts and categories. Files are UTF-8
//! without a byte order mark.

pub mod csv;

pub use self::csv::{
    escape_csv, export_accounts_to_file, export_categories_to_file, export_operations_to_file,
    write_accounts_csv, write_categories_csv, write_operations_csv, CsvExportVisitor,
    ExportRecord,
};
