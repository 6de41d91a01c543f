//! Account shell commands
//!
//! Implements the prompts for account management and balance recalculation.

use std::io::{BufRead, Write};

use super::Console;
use crate::display::format_account_list;
use crate::error::{FinTrackError, FinTrackResult};
use crate::models::{AccountId, Money};
use crate::services::{AccountService, BalanceRecalc};
use crate::storage::Storage;

/// `add-account`
pub fn add_account<R: BufRead, W: Write>(
    storage: &Storage,
    console: &mut Console<R, W>,
) -> FinTrackResult<()> {
    let name = console.ask("Account name: ")?;
    let balance = match console.ask_optional("Initial balance [0]: ")? {
        Some(text) => Money::parse(&text).map_err(|e| FinTrackError::Validation(e.to_string()))?,
        None => Money::zero(),
    };

    let account = AccountService::new(storage).create(&name, balance)?;

    writeln!(
        console.out(),
        "Account '{}' created with balance {}.",
        account.name(),
        account.balance()
    )?;
    writeln!(console.out(), "  ID: {}", account.id)?;
    Ok(())
}

/// `list-accounts`
pub fn list_accounts<R: BufRead, W: Write>(
    storage: &Storage,
    console: &mut Console<R, W>,
) -> FinTrackResult<()> {
    let accounts = AccountService::new(storage).list()?;
    write!(console.out(), "{}", format_account_list(&accounts)?)?;
    Ok(())
}

/// `edit-account`: new name and/or balance, Enter keeps the current value
pub fn edit_account<R: BufRead, W: Write>(
    storage: &Storage,
    console: &mut Console<R, W>,
) -> FinTrackResult<()> {
    let service = AccountService::new(storage);
    let id: AccountId = console.ask_id("Account ID: ")?;
    let mut account = service
        .get(id)?
        .ok_or_else(|| FinTrackError::account_not_found(id.to_string()))?;

    let new_name = console.ask_optional(&format!(
        "New name [{}] (Enter to keep): ",
        account.name()
    ))?;
    let new_balance = console.ask_optional(&format!(
        "New balance [{}] (Enter to keep): ",
        account.balance()
    ))?;

    let mut changed = false;
    if let Some(name) = new_name.filter(|n| n != account.name()) {
        account.rename(&name)?;
        changed = true;
    }
    if let Some(text) = new_balance {
        let target = Money::parse(&text).map_err(|e| FinTrackError::Validation(e.to_string()))?;
        changed |= account.adjust_to(target)?;
    }

    if !changed {
        writeln!(console.out(), "No changes made.")?;
        return Ok(());
    }

    service.update(account)?;
    writeln!(console.out(), "Account updated.")?;
    Ok(())
}

/// `delete-account`
pub fn delete_account<R: BufRead, W: Write>(
    storage: &Storage,
    console: &mut Console<R, W>,
) -> FinTrackResult<()> {
    let service = AccountService::new(storage);
    let id: AccountId = console.ask_id("Account ID: ")?;
    let account = service
        .get(id)?
        .ok_or_else(|| FinTrackError::account_not_found(id.to_string()))?;

    if !console.confirm(&format!("Delete account '{}'?", account.name()))? {
        writeln!(console.out(), "Cancelled.")?;
        return Ok(());
    }

    service.delete(id)?;
    writeln!(console.out(), "Account deleted.")?;
    Ok(())
}

/// `recalc-balance`
pub fn recalc_balance<R: BufRead, W: Write>(
    storage: &Storage,
    console: &mut Console<R, W>,
) -> FinTrackResult<()> {
    let id: AccountId = console.ask_id("Account ID: ")?;

    match AccountService::new(storage).recalculate_balance(id)? {
        BalanceRecalc::NoOperations => writeln!(
            console.out(),
            "No operations found for this account. Balance not changed."
        )?,
        BalanceRecalc::Unchanged(balance) => writeln!(
            console.out(),
            "Balance already matches operations: {}",
            balance
        )?,
        BalanceRecalc::Updated { old, new } => {
            writeln!(console.out(), "Balance recalculated: {} -> {}", old, new)?
        }
    }
    Ok(())
}
