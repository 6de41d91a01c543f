//! CSV Export functionality
//!
//! Exports operations, accounts and categories to CSV. One visitor knows how
//! to turn each entity kind into a line; the `write_*` functions feed it from
//! storage and the `export_*_to_file` functions wrap them with file handling.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{FinTrackError, FinTrackResult};
use crate::models::{BankAccount, Category, Operation};
use crate::storage::{Repository, Storage};

/// Header line for operations files
pub const OPERATIONS_HEADER: &str = "id,type,bankAccountId,amount,date,categoryId,description";
/// Header line for accounts files
pub const ACCOUNTS_HEADER: &str = "id,name,balance";
/// Header line for categories files
pub const CATEGORIES_HEADER: &str = "id,type,name";

/// Anything the visitor can write
#[derive(Debug, Clone, Copy)]
pub enum ExportRecord<'a> {
    Account(&'a BankAccount),
    Category(&'a Category),
    Operation(&'a Operation),
}

/// Writes one CSV line per visited record
pub struct CsvExportVisitor<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> CsvExportVisitor<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    /// Write a header line; not counted as a record
    pub fn header(&mut self, header: &str) -> FinTrackResult<()> {
        writeln!(self.writer, "{}", header).map_err(export_error)
    }

    /// Append the CSV line for `record`
    pub fn visit(&mut self, record: ExportRecord<'_>) -> FinTrackResult<()> {
        let written = match record {
            ExportRecord::Account(account) => writeln!(
                self.writer,
                "{},{},{}",
                account.id,
                escape_csv(account.name()),
                account.balance()
            ),
            ExportRecord::Category(category) => writeln!(
                self.writer,
                "{},{},{}",
                category.id,
                category.flow_type(),
                escape_csv(category.name())
            ),
            ExportRecord::Operation(op) => writeln!(
                self.writer,
                "{},{},{},{},{},{},{}",
                op.id,
                op.flow_type(),
                op.account_id(),
                op.amount(),
                op.date().format("%Y-%m-%d"),
                op.category_id(),
                escape_csv(op.description().unwrap_or(""))
            ),
        };
        written.map_err(export_error)?;

        self.written += 1;
        Ok(())
    }

    /// Records visited so far
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flush and hand back the writer
    pub fn finish(mut self) -> FinTrackResult<W> {
        self.writer.flush().map_err(export_error)?;
        Ok(self.writer)
    }
}

/// Write every operation, in store order
pub fn write_operations_csv<W: Write>(storage: &Storage, writer: W) -> FinTrackResult<usize> {
    let operations = storage.operations.get_all()?;
    write_records(
        writer,
        OPERATIONS_HEADER,
        operations.iter().map(ExportRecord::Operation),
    )
}

/// Write every account
pub fn write_accounts_csv<W: Write>(storage: &Storage, writer: W) -> FinTrackResult<usize> {
    let accounts = storage.accounts.get_all()?;
    write_records(
        writer,
        ACCOUNTS_HEADER,
        accounts.iter().map(ExportRecord::Account),
    )
}

/// Write every category
pub fn write_categories_csv<W: Write>(storage: &Storage, writer: W) -> FinTrackResult<usize> {
    let categories = storage.categories.get_all()?;
    write_records(
        writer,
        CATEGORIES_HEADER,
        categories.iter().map(ExportRecord::Category),
    )
}

/// Export operations to a file, creating parent directories as needed
pub fn export_operations_to_file(storage: &Storage, path: &Path) -> FinTrackResult<usize> {
    export_to_file(path, |w| write_operations_csv(storage, w))
}

/// Export accounts to a file
pub fn export_accounts_to_file(storage: &Storage, path: &Path) -> FinTrackResult<usize> {
    export_to_file(path, |w| write_accounts_csv(storage, w))
}

/// Export categories to a file
pub fn export_categories_to_file(storage: &Storage, path: &Path) -> FinTrackResult<usize> {
    export_to_file(path, |w| write_categories_csv(storage, w))
}

fn write_records<'a, W: Write>(
    writer: W,
    header: &str,
    records: impl Iterator<Item = ExportRecord<'a>>,
) -> FinTrackResult<usize> {
    let mut visitor = CsvExportVisitor::new(writer);
    visitor.header(header)?;
    for record in records {
        visitor.visit(record)?;
    }
    let written = visitor.written();
    visitor.finish()?;
    Ok(written)
}

fn export_to_file<F>(path: &Path, write: F) -> FinTrackResult<usize>
where
    F: FnOnce(&mut BufWriter<File>) -> FinTrackResult<usize>,
{
    if path.to_string_lossy().trim().is_empty() {
        return Err(FinTrackError::InvalidArgument(
            "Path to the output file is required".into(),
        ));
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(export_error)?;
    }

    let file = File::create(path).map_err(export_error)?;
    let mut writer = BufWriter::new(file);
    let count = write(&mut writer)?;
    writer.flush().map_err(export_error)?;

    tracing::info!(path = %path.display(), count, "export finished");
    Ok(count)
}

fn export_error(e: std::io::Error) -> FinTrackError {
    FinTrackError::Export(e.to_string())
}

/// Quote a free-text field if it contains a comma or a double quote
pub fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, MoneyFlowType};
    use crate::services::{AccountService, CategoryService, OperationService};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    fn populated_storage() -> Storage {
        let storage = Storage::in_memory();
        let account = AccountService::new(&storage)
            .create("Main, \"Daily\"", Money::new(dec!(100.50)))
            .unwrap();
        let category = CategoryService::new(&storage)
            .create(MoneyFlowType::Expense, "Food")
            .unwrap();
        OperationService::new(&storage)
            .create(
                MoneyFlowType::Expense,
                account.id,
                Money::new(dec!(12.40)),
                NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
                category.id,
                Some("Lunch, with \"Bob\""),
            )
            .unwrap();
        storage
    }

    #[test]
    fn test_escape_csv() {
        assert_eq!(escape_csv("plain"), "plain");
        assert_eq!(escape_csv("a,b"), "\"a,b\"");
        assert_eq!(escape_csv("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_csv(""), "");
    }

    #[test]
    fn test_write_operations_csv() {
        let storage = populated_storage();
        let op = storage.operations.get_all().unwrap().remove(0);

        let mut output = Vec::new();
        let count = write_operations_csv(&storage, &mut output).unwrap();

        assert_eq!(count, 1);
        let text = String::from_utf8(output).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], OPERATIONS_HEADER);
        assert_eq!(
            lines[1],
            format!(
                "{},Expense,{},12.40,2025-03-14,{},\"Lunch, with \"\"Bob\"\"\"",
                op.id,
                op.account_id(),
                op.category_id()
            )
        );
    }

    #[test]
    fn test_missing_description_is_empty_field() {
        let storage = Storage::in_memory();
        let account = AccountService::new(&storage)
            .create("Main", Money::zero())
            .unwrap();
        let category = CategoryService::new(&storage)
            .create(MoneyFlowType::Income, "Salary")
            .unwrap();
        OperationService::new(&storage)
            .create(
                MoneyFlowType::Income,
                account.id,
                Money::new(dec!(5)),
                NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                category.id,
                None,
            )
            .unwrap();

        let mut output = Vec::new();
        write_operations_csv(&storage, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.lines().nth(1).unwrap().ends_with(','));
    }

    #[test]
    fn test_escaped_fields_parse_back() {
        let storage = populated_storage();

        let mut output = Vec::new();
        write_accounts_csv(&storage, &mut output).unwrap();

        let mut reader = ::csv::Reader::from_reader(output.as_slice());
        let records: Vec<_> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 1);
        assert_eq!(&records[0][1], "Main, \"Daily\"");
        assert_eq!(&records[0][2], "100.50");

        let mut output = Vec::new();
        write_operations_csv(&storage, &mut output).unwrap();
        let mut reader = ::csv::Reader::from_reader(output.as_slice());
        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(&record[6], "Lunch, with \"Bob\"");
    }

    #[test]
    fn test_write_categories_csv() {
        let storage = populated_storage();
        let category = storage.categories.get_all().unwrap().remove(0);

        let mut output = Vec::new();
        write_categories_csv(&storage, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert_eq!(
            text,
            format!("{}\n{},Expense,Food\n", CATEGORIES_HEADER, category.id)
        );
    }

    #[test]
    fn test_export_to_file_creates_directories() {
        let storage = populated_storage();
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("out").join("ops.csv");

        let count = export_operations_to_file(&storage, &path).unwrap();

        assert_eq!(count, 1);
        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"id,type"));
    }

    #[test]
    fn test_export_blank_path() {
        let storage = Storage::in_memory();
        let err = export_accounts_to_file(&storage, Path::new("")).unwrap_err();
        assert!(matches!(err, FinTrackError::InvalidArgument(_)));
    }

    #[test]
    fn test_export_into_file_path_as_directory_fails() {
        let storage = populated_storage();
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "x").unwrap();

        let err = export_categories_to_file(&storage, &blocker.join("cats.csv")).unwrap_err();
        assert!(matches!(err, FinTrackError::Export(_)));
    }
}
