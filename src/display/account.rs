//! Account display formatting
//!
//! Formats accounts for terminal output as a table.

use crate::error::FinTrackResult;
use crate::models::{BankAccount, Money};

/// Format a list of accounts with balances as a table
///
/// Fails only when the total of all balances is out of range.
pub fn format_account_list(accounts: &[BankAccount]) -> FinTrackResult<String> {
    if accounts.is_empty() {
        return Ok("No accounts found.\n".to_string());
    }

    let name_width = accounts
        .iter()
        .map(|a| a.name().chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<36}  {:<name_width$}  {:>12}\n",
        "ID",
        "Name",
        "Balance",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<36}  {:-<name_width$}  {:->12}\n",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for account in accounts {
        output.push_str(&format!(
            "{:<36}  {:<name_width$}  {:>12}\n",
            account.id.to_string(),
            account.name(),
            account.balance().to_string(),
            name_width = name_width,
        ));
    }

    let total = Money::checked_sum(accounts.iter().map(|a| a.balance()))?;
    output.push_str(&format!(
        "{:<36}  {:<name_width$}  {:>12}\n",
        "",
        "Total",
        total.to_string(),
        name_width = name_width,
    ));

    Ok(output)
}
