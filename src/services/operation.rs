//! Operation service
//!
//! Creates and manages income/expense operations. The store has no notion
//! of references, so account and category existence is checked here before
//! anything is written.

use chrono::NaiveDate;

use crate::error::{FinTrackError, FinTrackResult};
use crate::models::{
    AccountId, CategoryId, DomainFactory, Money, MoneyFlowType, Operation, OperationId,
};
use crate::storage::{Repository, Storage};

/// Service for operation management
pub struct OperationService<'a> {
    storage: &'a Storage,
    factory: DomainFactory,
}

impl<'a> OperationService<'a> {
    /// Create a new operation service
    pub fn new(storage: &'a Storage) -> Self {
        Self {
            storage,
            factory: DomainFactory::new(),
        }
    }

    /// Create and store an operation
    ///
    /// Fails with a not-found error if the account or category is missing.
    pub fn create(
        &self,
        flow_type: MoneyFlowType,
        account_id: AccountId,
        amount: Money,
        date: NaiveDate,
        category_id: CategoryId,
        description: Option<&str>,
    ) -> FinTrackResult<Operation> {
        if self.storage.accounts.get(account_id)?.is_none() {
            return Err(FinTrackError::account_not_found(account_id.to_string()));
        }
        if self.storage.categories.get(category_id)?.is_none() {
            return Err(FinTrackError::category_not_found(category_id.to_string()));
        }

        let operation = self.factory.create_operation(
            flow_type,
            account_id,
            amount,
            date,
            category_id,
            description,
        )?;
        self.storage.operations.add(operation.clone())?;
        Ok(operation)
    }

    /// Get an operation by ID
    pub fn get(&self, id: OperationId) -> FinTrackResult<Option<Operation>> {
        self.storage.operations.get(id)
    }

    /// Get all operations, oldest first
    pub fn list(&self) -> FinTrackResult<Vec<Operation>> {
        let mut operations = self.storage.operations.get_all()?;
        operations.sort_by_key(|op| op.date());
        Ok(operations)
    }

    /// Get the operations of one account, oldest first
    pub fn list_for_account(&self, account_id: AccountId) -> FinTrackResult<Vec<Operation>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|op| op.account_id() == account_id)
            .collect())
    }

    /// Replace the description of an operation; blank clears it
    pub fn update_description(
        &self,
        id: OperationId,
        description: Option<&str>,
    ) -> FinTrackResult<Operation> {
        let mut operation = self
            .get(id)?
            .ok_or_else(|| FinTrackError::operation_not_found(id.to_string()))?;
        operation.update_description(description);
        self.storage.operations.update(operation.clone())?;
        Ok(operation)
    }

    /// Delete an operation; missing IDs are ignored
    pub fn delete(&self, id: OperationId) -> FinTrackResult<()> {
        self.storage.operations.delete(id)
    }
}
