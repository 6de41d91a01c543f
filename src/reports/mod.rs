//! Reports module for FinTrack
//!
//! Period summaries and per-category totals, plus the sort strategies used
//! to order category reports.

pub mod sort;

use chrono::NaiveDate;

use crate::models::{CategoryId, Money};

pub use sort::{AmountDescSort, NameAscSort, ReportSortStrategy, SortRegistry};

/// Income, expense and net for an inclusive date range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodSummary {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub income: Money,
    pub expense: Money,
    pub net: Money,
}

/// Total of all operations in one category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category_id: CategoryId,
    pub total: Money,
}

/// One named line of a category report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub category_name: String,
    pub amount: Money,
}

impl ReportRow {
    pub fn new(category_name: impl Into<String>, amount: Money) -> Self {
        Self {
            category_name: category_name.into(),
            amount,
        }
    }
}
