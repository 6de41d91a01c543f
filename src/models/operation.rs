//! Operation model
//!
//! An operation is a single income or expense movement on an account,
//! classified by a category. Everything except the description is fixed
//! once the operation is created.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::flow::MoneyFlowType;
use super::ids::{AccountId, CategoryId, OperationId};
use super::money::Money;
use crate::error::{FinTrackError, FinTrackResult};

/// An income or expense operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    /// Unique identifier
    pub id: OperationId,

    /// Income or expense
    #[serde(rename = "type")]
    flow_type: MoneyFlowType,

    /// The account this operation belongs to
    account_id: AccountId,

    /// Amount (always positive, the flow type carries the direction)
    amount: Money,

    /// Date of the operation
    date: NaiveDate,

    /// Category classifying the operation
    category_id: CategoryId,

    /// Optional free-text description
    description: Option<String>,
}

impl Operation {
    /// Create an operation with an existing ID
    pub fn new(
        id: OperationId,
        flow_type: MoneyFlowType,
        account_id: AccountId,
        amount: Money,
        date: NaiveDate,
        category_id: CategoryId,
        description: Option<&str>,
    ) -> FinTrackResult<Self> {
        if !amount.is_positive() {
            return Err(FinTrackError::Validation("Amount must be positive".into()));
        }

        Ok(Self {
            id,
            flow_type,
            account_id,
            amount,
            date,
            category_id,
            description: normalize_description(description),
        })
    }

    pub fn flow_type(&self) -> MoneyFlowType {
        self.flow_type
    }

    pub fn account_id(&self) -> AccountId {
        self.account_id
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn category_id(&self) -> CategoryId {
        self.category_id
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Replace the description; blank clears it
    pub fn update_description(&mut self, description: Option<&str>) {
        self.description = normalize_description(description);
    }

    /// Amount with sign applied: positive for income, negative for expense
    pub fn signed_amount(&self) -> Money {
        match self.flow_type {
            MoneyFlowType::Income => self.amount,
            MoneyFlowType::Expense => -self.amount,
        }
    }
}

fn normalize_description(description: Option<&str>) -> Option<String> {
    description
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string)
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} on {}", self.flow_type, self.amount, self.date)?;
        if let Some(desc) = &self.description {
            write!(f, " - {}", desc)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    fn operation(flow_type: MoneyFlowType, amount: Money, desc: Option<&str>) -> FinTrackResult<Operation> {
        Operation::new(
            OperationId::new(),
            flow_type,
            AccountId::new(),
            amount,
            date(),
            CategoryId::new(),
            desc,
        )
    }

    #[test]
    fn test_amount_must_be_positive() {
        assert!(operation(MoneyFlowType::Income, Money::zero(), None).is_err());
        assert!(operation(MoneyFlowType::Expense, Money::new(dec!(-3)), None).is_err());
        assert!(operation(MoneyFlowType::Expense, Money::new(dec!(0.01)), None).is_ok());
    }

    #[test]
    fn test_blank_description_is_absent() {
        let op = operation(MoneyFlowType::Income, Money::new(dec!(5)), Some("   ")).unwrap();
        assert_eq!(op.description(), None);

        let mut op = operation(MoneyFlowType::Income, Money::new(dec!(5)), Some(" bonus ")).unwrap();
        assert_eq!(op.description(), Some("bonus"));

        op.update_description(Some(""));
        assert_eq!(op.description(), None);
    }

    #[test]
    fn test_signed_amount() {
        let income = operation(MoneyFlowType::Income, Money::new(dec!(5)), None).unwrap();
        let expense = operation(MoneyFlowType::Expense, Money::new(dec!(5)), None).unwrap();
        assert_eq!(income.signed_amount(), Money::new(dec!(5)));
        assert_eq!(expense.signed_amount(), Money::new(dec!(-5)));
    }

    #[test]
    fn test_display() {
        let op = operation(MoneyFlowType::Expense, Money::new(dec!(12.5)), Some("lunch")).unwrap();
        assert_eq!(op.to_string(), "[Expense] 12.5 on 2025-03-14 - lunch");
    }
}
