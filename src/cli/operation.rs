//! Operation shell commands
//!
//! Only the description of a recorded operation can change; everything else
//! is fixed once it is created.

use std::collections::HashMap;
use std::io::{BufRead, Write};

use super::Console;
use crate::display::format_operation_list;
use crate::error::{FinTrackError, FinTrackResult};
use crate::models::{AccountId, CategoryId, OperationId};
use crate::services::{AccountService, CategoryService, OperationService};
use crate::storage::Storage;

/// Typed at the description prompt to remove the description
const CLEAR_MARKER: &str = "-";

/// `add-operation`
pub fn add_operation<R: BufRead, W: Write>(
    storage: &Storage,
    console: &mut Console<R, W>,
) -> FinTrackResult<()> {
    let flow_type = console.ask_flow("Type (Income/Expense): ")?;
    let account_id: AccountId = console.ask_id("Account ID: ")?;
    let category_id: CategoryId = console.ask_id("Category ID: ")?;
    let amount = console.ask_money("Amount: ")?;
    let date = console.ask_date("Date (YYYY-MM-DD): ")?;
    let description = console.ask_optional("Description (optional): ")?;

    let op = OperationService::new(storage).create(
        flow_type,
        account_id,
        amount,
        date,
        category_id,
        description.as_deref(),
    )?;

    writeln!(console.out(), "Operation added: {}", op)?;
    writeln!(console.out(), "  ID: {}", op.id)?;
    Ok(())
}

/// `list-operations`, optionally for one account
pub fn list_operations<R: BufRead, W: Write>(
    storage: &Storage,
    console: &mut Console<R, W>,
) -> FinTrackResult<()> {
    let service = OperationService::new(storage);
    let operations = match console.ask_optional("Account ID (Enter for all): ")? {
        Some(text) => {
            let account_id: AccountId = text.parse().map_err(|e| {
                FinTrackError::Validation(format!("Invalid ID '{}': {}", text, e))
            })?;
            service.list_for_account(account_id)?
        }
        None => service.list()?,
    };

    let account_names: HashMap<_, _> = AccountService::new(storage)
        .list()?
        .into_iter()
        .map(|a| (a.id, a.name().to_string()))
        .collect();
    let category_names: HashMap<_, _> = CategoryService::new(storage)
        .list()?
        .into_iter()
        .map(|c| (c.id, c.name().to_string()))
        .collect();

    write!(
        console.out(),
        "{}",
        format_operation_list(&operations, &account_names, &category_names)
    )?;
    Ok(())
}

/// `edit-operation`: Enter keeps the description, "-" clears it
pub fn edit_operation<R: BufRead, W: Write>(
    storage: &Storage,
    console: &mut Console<R, W>,
) -> FinTrackResult<()> {
    let service = OperationService::new(storage);
    let id: OperationId = console.ask_id("Operation ID: ")?;
    let op = service
        .get(id)?
        .ok_or_else(|| FinTrackError::operation_not_found(id.to_string()))?;

    let label = format!(
        "New description [{}] (Enter to keep, '{}' to clear): ",
        op.description().unwrap_or(""),
        CLEAR_MARKER
    );
    let updated = match console.ask_optional(&label)? {
        None => {
            writeln!(console.out(), "No changes made.")?;
            return Ok(());
        }
        Some(text) if text == CLEAR_MARKER => service.update_description(id, None)?,
        Some(text) => service.update_description(id, Some(&text))?,
    };

    writeln!(console.out(), "Operation updated: {}", updated)?;
    Ok(())
}

/// `delete-operation`
pub fn delete_operation<R: BufRead, W: Write>(
    storage: &Storage,
    console: &mut Console<R, W>,
) -> FinTrackResult<()> {
    let service = OperationService::new(storage);
    let id: OperationId = console.ask_id("Operation ID: ")?;
    let op = service
        .get(id)?
        .ok_or_else(|| FinTrackError::operation_not_found(id.to_string()))?;

    if !console.confirm(&format!("Delete operation {}?", op))? {
        writeln!(console.out(), "Cancelled.")?;
        return Ok(());
    }

    service.delete(id)?;
    writeln!(console.out(), "Operation deleted.")?;
    Ok(())
}
