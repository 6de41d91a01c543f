//! Operations importer: `type,accountId,amount,date,categoryId,description`
//!
//! The description column is optional. Account and category IDs must refer
//! to entities already in storage.

use chrono::NaiveDate;

use super::{parse_date, parse_money, require_fields, CsvImporter};
use crate::error::{FinTrackError, FinTrackResult};
use crate::models::{AccountId, CategoryId, DomainFactory, Money, MoneyFlowType, Operation};
use crate::storage::{Repository, Storage};

/// One parsed operations line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationRow {
    pub flow_type: MoneyFlowType,
    pub account_id: AccountId,
    pub amount: Money,
    pub date: NaiveDate,
    pub category_id: CategoryId,
    pub description: Option<String>,
}

/// Imports operations
pub struct OperationsCsvImporter<'a> {
    storage: &'a Storage,
    factory: DomainFactory,
}

impl<'a> OperationsCsvImporter<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self {
            storage,
            factory: DomainFactory::new(),
        }
    }
}

impl CsvImporter for OperationsCsvImporter<'_> {
    type Row = OperationRow;
    type Entity = Operation;

    fn kind(&self) -> &'static str {
        "operations"
    }

    fn parse(&self, fields: &[String]) -> FinTrackResult<OperationRow> {
        require_fields(fields, 5)?;

        let flow_type = MoneyFlowType::parse(&fields[0]).ok_or_else(|| {
            FinTrackError::Validation(format!("Unknown operation type: '{}'", fields[0]))
        })?;
        let account_id = AccountId::parse(&fields[1]).map_err(|e| {
            FinTrackError::Validation(format!("Invalid account ID '{}': {}", fields[1], e))
        })?;
        let category_id = CategoryId::parse(&fields[4]).map_err(|e| {
            FinTrackError::Validation(format!("Invalid category ID '{}': {}", fields[4], e))
        })?;

        let description = fields
            .get(5)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Ok(OperationRow {
            flow_type,
            account_id,
            amount: parse_money(&fields[2])?,
            date: parse_date(&fields[3])?,
            category_id,
            description,
        })
    }

    fn validate(&self, row: &OperationRow) -> FinTrackResult<()> {
        if !row.amount.is_positive() {
            return Err(FinTrackError::Validation(format!(
                "Amount must be positive: {}",
                row.amount
            )));
        }
        if self.storage.accounts.get(row.account_id)?.is_none() {
            return Err(FinTrackError::account_not_found(row.account_id.to_string()));
        }
        if self.storage.categories.get(row.category_id)?.is_none() {
            return Err(FinTrackError::category_not_found(row.category_id.to_string()));
        }
        Ok(())
    }

    fn map(&self, row: OperationRow) -> FinTrackResult<Operation> {
        self.factory.create_operation(
            row.flow_type,
            row.account_id,
            row.amount,
            row.date,
            row.category_id,
            row.description.as_deref(),
        )
    }

    fn save(&self, entity: Operation) -> FinTrackResult<()> {
        self.storage.operations.add(entity)
    }
}
