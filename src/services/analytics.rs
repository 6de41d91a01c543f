//! Analytics service
//!
//! Aggregates operations over an inclusive date range.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::error::{FinTrackError, FinTrackResult};
use crate::models::{CategoryId, Money, MoneyFlowType, Operation};
use crate::reports::{CategoryTotal, PeriodSummary, ReportRow, ReportSortStrategy};
use crate::storage::{Repository, Storage};

/// Service for period reports
pub struct AnalyticsService<'a> {
    storage: &'a Storage,
}

impl<'a> AnalyticsService<'a> {
    /// Create a new analytics service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Total income, total expense and their difference
    pub fn summary(&self, from: NaiveDate, to: NaiveDate) -> FinTrackResult<PeriodSummary> {
        let mut income = Money::zero();
        let mut expense = Money::zero();

        for op in self.in_range(from, to)? {
            match op.flow_type() {
                MoneyFlowType::Income => income = income.checked_add(op.amount())?,
                MoneyFlowType::Expense => expense = expense.checked_add(op.amount())?,
            }
        }

        Ok(PeriodSummary {
            from,
            to,
            income,
            expense,
            net: income.checked_sub(expense)?,
        })
    }

    /// Sum of operation amounts per category, largest first
    ///
    /// Amounts are added regardless of flow type.
    pub fn by_category(&self, from: NaiveDate, to: NaiveDate) -> FinTrackResult<Vec<CategoryTotal>> {
        let mut totals: HashMap<CategoryId, Money> = HashMap::new();
        for op in self.in_range(from, to)? {
            let total = totals.entry(op.category_id()).or_insert_with(Money::zero);
            *total = total.checked_add(op.amount())?;
        }

        let mut rows: Vec<CategoryTotal> = totals
            .into_iter()
            .map(|(category_id, total)| CategoryTotal { category_id, total })
            .collect();
        rows.sort_by(|a, b| b.total.cmp(&a.total));
        Ok(rows)
    }

    /// Per-category totals with names resolved, ordered by `strategy`
    ///
    /// Categories that no longer exist are shown by their ID.
    pub fn category_report(
        &self,
        from: NaiveDate,
        to: NaiveDate,
        strategy: &dyn ReportSortStrategy,
    ) -> FinTrackResult<Vec<ReportRow>> {
        let rows = self
            .by_category(from, to)?
            .into_iter()
            .map(|t| {
                let name = match self.storage.categories.get(t.category_id)? {
                    Some(category) => category.name().to_string(),
                    None => t.category_id.to_string(),
                };
                Ok(ReportRow::new(name, t.total))
            })
            .collect::<FinTrackResult<Vec<_>>>()?;

        Ok(strategy.sort(&rows))
    }

    fn in_range(&self, from: NaiveDate, to: NaiveDate) -> FinTrackResult<Vec<Operation>> {
        if from > to {
            return Err(FinTrackError::InvalidArgument(format!(
                "start date {} is after end date {}",
                from, to
            )));
        }

        Ok(self
            .storage
            .operations
            .get_all()?
            .into_iter()
            .filter(|op| op.date() >= from && op.date() <= to)
            .collect())
    }
}
