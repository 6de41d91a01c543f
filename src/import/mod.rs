//! CSV import pipeline
//!
//! Every importer runs the same four stages per data line: parse the raw
//! fields into a typed row, validate it, map it to an entity, and save it.
//! The first line of a file is a header and is skipped. A row that fails any
//! of the first three stages is dropped and the import carries on; only
//! rows that make it through all four are counted.

pub mod accounts;
pub mod operations;

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use csv::{ReaderBuilder, Trim};

use crate::error::{FinTrackError, FinTrackResult};
use crate::models::Money;
use crate::storage::Storage;

pub use accounts::{AccountRow, AccountsCsvImporter};
pub use operations::{OperationRow, OperationsCsvImporter};

/// Date formats accepted in import files, tried in order
pub const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d.%m.%Y", "%m/%d/%Y"];

/// A CSV importer for one entity type
pub trait CsvImporter {
    /// Typed form of one data line
    type Row;
    /// Entity produced from a row
    type Entity;

    /// Label used in log output
    fn kind(&self) -> &'static str;

    /// Turn the split fields of one line into a typed row
    fn parse(&self, fields: &[String]) -> FinTrackResult<Self::Row>;

    /// Check domain rules the row must satisfy
    fn validate(&self, row: &Self::Row) -> FinTrackResult<()>;

    /// Build the entity
    fn map(&self, row: Self::Row) -> FinTrackResult<Self::Entity>;

    /// Persist the entity
    fn save(&self, entity: Self::Entity) -> FinTrackResult<()>;

    /// Import a CSV file and return how many rows were saved
    fn import(&self, path: &Path) -> FinTrackResult<usize> {
        if path.to_string_lossy().trim().is_empty() {
            return Err(FinTrackError::InvalidArgument(
                "Path to the CSV file is required".into(),
            ));
        }
        if !path.is_file() {
            return Err(FinTrackError::FileNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path).map_err(|e| {
            FinTrackError::Import(format!("cannot read {}: {}", path.display(), e))
        })?;
        self.import_text(&content)
    }

    /// Import CSV content that is already in memory
    fn import_text(&self, content: &str) -> FinTrackResult<usize> {
        let mut imported = 0;
        let mut skipped = 0;

        for (index, line) in content.lines().enumerate().skip(1) {
            match self.import_line(line) {
                Ok(()) => imported += 1,
                Err(e) if e.is_row_level() => {
                    skipped += 1;
                    tracing::debug!(kind = self.kind(), line = index + 1, error = %e, "row skipped");
                }
                Err(e) => return Err(e),
            }
        }

        tracing::info!(kind = self.kind(), imported, skipped, "import finished");
        Ok(imported)
    }

    /// Run all four stages on one line
    fn import_line(&self, line: &str) -> FinTrackResult<()> {
        let fields = split_fields(line)?;
        let row = self.parse(&fields)?;
        self.validate(&row)?;
        let entity = self.map(row)?;
        self.save(entity)
    }
}

/// Which importer the shell should run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportTarget {
    Accounts,
    Operations,
}

impl ImportTarget {
    /// Plural noun for messages
    pub fn label(&self) -> &'static str {
        match self {
            Self::Accounts => "accounts",
            Self::Operations => "operations",
        }
    }

    /// Expected column layout, for prompts
    pub fn format_hint(&self) -> &'static str {
        match self {
            Self::Accounts => "name,balance",
            Self::Operations => "type,accountId,amount,date,categoryId,description",
        }
    }

    /// Run the matching importer against `storage`
    pub fn import(&self, storage: &Storage, path: &Path) -> FinTrackResult<usize> {
        match self {
            Self::Accounts => AccountsCsvImporter::new(storage).import(path),
            Self::Operations => OperationsCsvImporter::new(storage).import(path),
        }
    }
}

/// Split one CSV line into trimmed fields
///
/// Quoted fields may contain commas and doubled quotes.
pub fn split_fields(line: &str) -> FinTrackResult<Vec<String>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(line.as_bytes());

    match reader.records().next() {
        Some(Ok(record)) => Ok(record.iter().map(str::to_string).collect()),
        Some(Err(e)) => Err(FinTrackError::Validation(format!("Malformed CSV line: {}", e))),
        None => Err(FinTrackError::Validation("Empty line".into())),
    }
}

/// Parse a calendar date in any of [`DATE_FORMATS`]
pub fn parse_date(s: &str) -> FinTrackResult<NaiveDate> {
    let s = s.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(s, format).ok())
        .ok_or_else(|| FinTrackError::Validation(format!("Could not parse date: '{}'", s)))
}

pub(crate) fn parse_money(s: &str) -> FinTrackResult<Money> {
    Money::parse(s).map_err(|e| FinTrackError::Validation(e.to_string()))
}

pub(crate) fn require_fields(fields: &[String], min: usize) -> FinTrackResult<()> {
    if fields.len() < min {
        return Err(FinTrackError::Validation(format!(
            "Expected at least {} fields, found {}",
            min,
            fields.len()
        )));
    }
    Ok(())
}
