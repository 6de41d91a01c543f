//! Accounts importer: `name,balance`

use super::{parse_money, require_fields, CsvImporter};
use crate::error::{FinTrackError, FinTrackResult};
use crate::models::{BankAccount, DomainFactory, Money};
use crate::storage::{Repository, Storage};

/// One parsed accounts line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRow {
    pub name: String,
    pub balance: Money,
}

/// Imports bank accounts
pub struct AccountsCsvImporter<'a> {
    storage: &'a Storage,
    factory: DomainFactory,
}

impl<'a> AccountsCsvImporter<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self {
            storage,
            factory: DomainFactory::new(),
        }
    }
}

impl CsvImporter for AccountsCsvImporter<'_> {
    type Row = AccountRow;
    type Entity = BankAccount;

    fn kind(&self) -> &'static str {
        "accounts"
    }

    fn parse(&self, fields: &[String]) -> FinTrackResult<AccountRow> {
        require_fields(fields, 2)?;

        let name = fields[0].trim();
        if name.is_empty() {
            return Err(FinTrackError::Validation("Account name is empty".into()));
        }

        Ok(AccountRow {
            name: name.to_string(),
            balance: parse_money(&fields[1])?,
        })
    }

    fn validate(&self, row: &AccountRow) -> FinTrackResult<()> {
        if row.balance.is_negative() {
            return Err(FinTrackError::Validation(format!(
                "Balance cannot be negative: {}",
                row.balance
            )));
        }
        Ok(())
    }

    fn map(&self, row: AccountRow) -> FinTrackResult<BankAccount> {
        self.factory.create_bank_account(&row.name, row.balance)
    }

    fn save(&self, entity: BankAccount) -> FinTrackResult<()> {
        self.storage.accounts.add(entity)
    }
}
