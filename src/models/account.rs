//! Bank account model
//!
//! Represents a named account holding a balance. The balance only moves
//! through `credit` and `debit` with strictly positive amounts.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::AccountId;
use super::money::Money;
use crate::error::{FinTrackError, FinTrackResult};

/// A bank account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccount {
    /// Unique identifier
    pub id: AccountId,

    /// Account name (e.g., "Main", "Savings")
    name: String,

    /// Current balance
    balance: Money,
}

impl BankAccount {
    /// Create an account with an existing ID
    ///
    /// The name is trimmed; a blank name or a negative opening balance is rejected.
    pub fn new(id: AccountId, name: &str, balance: Money) -> FinTrackResult<Self> {
        let name = validate_name(name)?;
        if balance.is_negative() {
            return Err(FinTrackError::Validation(
                "Initial balance cannot be negative".into(),
            ));
        }

        Ok(Self { id, name, balance })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Rename the account
    pub fn rename(&mut self, new_name: &str) -> FinTrackResult<()> {
        self.name = validate_name(new_name)?;
        Ok(())
    }

    /// Add funds to the balance
    pub fn credit(&mut self, amount: Money) -> FinTrackResult<()> {
        if !amount.is_positive() {
            return Err(FinTrackError::Validation(
                "Credit amount must be positive".into(),
            ));
        }
        self.balance = self.balance.checked_add(amount)?;
        Ok(())
    }

    /// Remove funds from the balance
    pub fn debit(&mut self, amount: Money) -> FinTrackResult<()> {
        if !amount.is_positive() {
            return Err(FinTrackError::Validation(
                "Debit amount must be positive".into(),
            ));
        }
        self.balance = self.balance.checked_sub(amount)?;
        Ok(())
    }

    /// Move the balance to `target` through a single credit or debit
    ///
    /// Returns `false` when the balance already equals the target.
    pub fn adjust_to(&mut self, target: Money) -> FinTrackResult<bool> {
        let delta = target.checked_sub(self.balance)?;
        if delta.is_zero() {
            return Ok(false);
        }

        if delta.is_positive() {
            self.credit(delta)?;
        } else {
            self.debit(-delta)?;
        }
        Ok(true)
    }
}

fn validate_name(name: &str) -> FinTrackResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(FinTrackError::Validation(
            "Account name cannot be empty".into(),
        ));
    }
    Ok(name.to_string())
}

impl fmt::Display for BankAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.balance)
    }
}
