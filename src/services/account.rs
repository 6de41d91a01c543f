//! Account service
//!
//! Provides business logic for bank accounts: CRUD, balance edits and
//! recalculating a balance from the account's operations.

use crate::error::{FinTrackError, FinTrackResult};
use crate::models::{AccountId, BankAccount, DomainFactory, Money, MoneyFlowType};
use crate::storage::{Repository, Storage};

/// Service for account management
pub struct AccountService<'a> {
    storage: &'a Storage,
    factory: DomainFactory,
}

/// Outcome of recomputing a balance from operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceRecalc {
    /// The account has no operations; the balance was left alone
    NoOperations,
    /// The stored balance already matched
    Unchanged(Money),
    /// The balance was moved from `old` to `new`
    Updated { old: Money, new: Money },
}

impl<'a> AccountService<'a> {
    /// Create a new account service
    pub fn new(storage: &'a Storage) -> Self {
        Self {
            storage,
            factory: DomainFactory::new(),
        }
    }

    /// Create and store a new account
    pub fn create(&self, name: &str, initial_balance: Money) -> FinTrackResult<BankAccount> {
        let account = self.factory.create_bank_account(name, initial_balance)?;
        self.storage.accounts.add(account.clone())?;
        Ok(account)
    }

    /// Get an account by ID
    pub fn get(&self, id: AccountId) -> FinTrackResult<Option<BankAccount>> {
        self.storage.accounts.get(id)
    }

    /// Get all accounts, ordered by name for display
    pub fn list(&self) -> FinTrackResult<Vec<BankAccount>> {
        let mut accounts = self.storage.accounts.get_all()?;
        accounts.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(accounts)
    }

    /// Write back an account that was modified in place
    pub fn update(&self, account: BankAccount) -> FinTrackResult<()> {
        self.storage.accounts.update(account)
    }

    /// Rename an account
    pub fn rename(&self, id: AccountId, new_name: &str) -> FinTrackResult<BankAccount> {
        let mut account = self.require(id)?;
        account.rename(new_name)?;
        self.storage.accounts.update(account.clone())?;
        Ok(account)
    }

    /// Move the balance to `new_balance` via a credit or debit
    ///
    /// Returns `None` when the balance already had that value.
    pub fn set_balance(&self, id: AccountId, new_balance: Money) -> FinTrackResult<Option<BankAccount>> {
        let mut account = self.require(id)?;
        if !account.adjust_to(new_balance)? {
            return Ok(None);
        }
        self.storage.accounts.update(account.clone())?;
        Ok(Some(account))
    }

    /// Delete an account; missing IDs are ignored
    pub fn delete(&self, id: AccountId) -> FinTrackResult<()> {
        self.storage.accounts.delete(id)
    }

    /// Recompute the balance as total income minus total expense
    ///
    /// The previous balance is ignored. Accounts without operations keep
    /// their balance.
    pub fn recalculate_balance(&self, id: AccountId) -> FinTrackResult<BalanceRecalc> {
        let mut account = self.require(id)?;

        let operations: Vec<_> = self
            .storage
            .operations
            .get_all()?
            .into_iter()
            .filter(|op| op.account_id() == id)
            .collect();

        if operations.is_empty() {
            return Ok(BalanceRecalc::NoOperations);
        }

        let mut income = Money::zero();
        let mut expense = Money::zero();
        for op in &operations {
            match op.flow_type() {
                MoneyFlowType::Income => income = income.checked_add(op.amount())?,
                MoneyFlowType::Expense => expense = expense.checked_add(op.amount())?,
            }
        }

        let old = account.balance();
        let new = income.checked_sub(expense)?;
        if !account.adjust_to(new)? {
            return Ok(BalanceRecalc::Unchanged(old));
        }

        self.storage.accounts.update(account)?;
        tracing::info!(account = %id, %old, %new, "balance recalculated");
        Ok(BalanceRecalc::Updated { old, new })
    }

    fn require(&self, id: AccountId) -> FinTrackResult<BankAccount> {
        self.storage
            .accounts
            .get(id)?
            .ok_or_else(|| FinTrackError::account_not_found(id.to_string()))
    }
}
