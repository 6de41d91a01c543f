//! Domain factory
//!
//! Mints fresh identifiers and builds validated entities from primitive
//! fields. Invariant violations come back as validation errors.

use chrono::NaiveDate;

use super::{
    AccountId, BankAccount, Category, CategoryId, Money, MoneyFlowType, Operation, OperationId,
};
use crate::error::FinTrackResult;

/// Creates new entities with freshly generated IDs
#[derive(Debug, Clone, Copy, Default)]
pub struct DomainFactory;

impl DomainFactory {
    pub fn new() -> Self {
        Self
    }

    /// Create a bank account with an opening balance
    pub fn create_bank_account(&self, name: &str, initial_balance: Money) -> FinTrackResult<BankAccount> {
        BankAccount::new(AccountId::new(), name, initial_balance)
    }

    /// Create an income or expense category
    pub fn create_category(&self, flow_type: MoneyFlowType, name: &str) -> FinTrackResult<Category> {
        Category::new(CategoryId::new(), flow_type, name)
    }

    /// Create an operation
    pub fn create_operation(
        &self,
        flow_type: MoneyFlowType,
        account_id: AccountId,
        amount: Money,
        date: NaiveDate,
        category_id: CategoryId,
        description: Option<&str>,
    ) -> FinTrackResult<Operation> {
        Operation::new(
            OperationId::new(),
            flow_type,
            account_id,
            amount,
            date,
            category_id,
            description,
        )
    }
}
