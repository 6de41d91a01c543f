//! Operation display formatting
//!
//! Operations are listed with the account and category names resolved from
//! lookups supplied by the caller; IDs missing from the lookup print as
//! short IDs.

use std::collections::HashMap;

use crate::models::{AccountId, CategoryId, Operation};

/// Format operations as a register-style table
pub fn format_operation_list(
    operations: &[Operation],
    account_names: &HashMap<AccountId, String>,
    category_names: &HashMap<CategoryId, String>,
) -> String {
    if operations.is_empty() {
        return "No operations found.\n".to_string();
    }

    let account_label = |id: &AccountId| {
        account_names
            .get(id)
            .cloned()
            .unwrap_or_else(|| id.short())
    };
    let category_label = |id: &CategoryId| {
        category_names
            .get(id)
            .cloned()
            .unwrap_or_else(|| id.short())
    };

    let account_width = operations
        .iter()
        .map(|op| account_label(&op.account_id()).chars().count())
        .max()
        .unwrap_or(7)
        .max(7);
    let category_width = operations
        .iter()
        .map(|op| category_label(&op.category_id()).chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<36}  {:<10}  {:<7}  {:<aw$}  {:<cw$}  {:>12}  {}\n",
        "ID",
        "Date",
        "Type",
        "Account",
        "Category",
        "Amount",
        "Description",
        aw = account_width,
        cw = category_width,
    ));
    output.push_str(&format!(
        "{:-<36}  {:-<10}  {:-<7}  {:-<aw$}  {:-<cw$}  {:->12}  {:-<11}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        "",
        aw = account_width,
        cw = category_width,
    ));

    for op in operations {
        output.push_str(&format!(
            "{:<36}  {:<10}  {:<7}  {:<aw$}  {:<cw$}  {:>12}  {}\n",
            op.id.to_string(),
            op.date().format("%Y-%m-%d").to_string(),
            op.flow_type().to_string(),
            account_label(&op.account_id()),
            category_label(&op.category_id()),
            op.amount().to_string(),
            op.description().unwrap_or(""),
            aw = account_width,
            cw = category_width,
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DomainFactory, Money, MoneyFlowType};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    #[test]
    fn test_names_resolved_or_shortened() {
        let factory = DomainFactory::new();
        let account = factory.create_bank_account("Main", Money::zero()).unwrap();
        let category = factory
            .create_category(MoneyFlowType::Expense, "Food")
            .unwrap();
        let op = factory
            .create_operation(
                MoneyFlowType::Expense,
                account.id,
                Money::new(dec!(9.99)),
                NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
                category.id,
                Some("snacks"),
            )
            .unwrap();

        let accounts = HashMap::from([(account.id, "Main".to_string())]);
        let output = format_operation_list(&[op], &accounts, &HashMap::new());

        let row = output.lines().nth(2).unwrap();
        assert!(row.contains("2025-05-01"));
        assert!(row.contains("Main"));
        assert!(row.contains(&category.id.short()));
        assert!(row.contains("9.99"));
        assert!(row.ends_with("snacks"));
    }

    #[test]
    fn test_empty() {
        let output = format_operation_list(&[], &HashMap::new(), &HashMap::new());
        assert_eq!(output, "No operations found.\n");
    }
}
