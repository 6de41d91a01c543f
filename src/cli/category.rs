//! Category shell commands

use std::io::{BufRead, Write};

use super::Console;
use crate::display::format_category_list;
use crate::error::{FinTrackError, FinTrackResult};
use crate::models::CategoryId;
use crate::services::CategoryService;
use crate::storage::Storage;

/// `add-category`
pub fn add_category<R: BufRead, W: Write>(
    storage: &Storage,
    console: &mut Console<R, W>,
) -> FinTrackResult<()> {
    let flow_type = console.ask_flow("Type (Income/Expense): ")?;
    let name = console.ask("Category name: ")?;

    let category = CategoryService::new(storage).create(flow_type, &name)?;

    writeln!(
        console.out(),
        "Category '{}' ({}) created.",
        category.name(),
        category.flow_type()
    )?;
    writeln!(console.out(), "  ID: {}", category.id)?;
    Ok(())
}

/// `list-categories`
pub fn list_categories<R: BufRead, W: Write>(
    storage: &Storage,
    console: &mut Console<R, W>,
) -> FinTrackResult<()> {
    let categories = CategoryService::new(storage).list()?;
    write!(console.out(), "{}", format_category_list(&categories))?;
    Ok(())
}

/// `edit-category`: rename only, the flow type is fixed at creation
pub fn edit_category<R: BufRead, W: Write>(
    storage: &Storage,
    console: &mut Console<R, W>,
) -> FinTrackResult<()> {
    let service = CategoryService::new(storage);
    let id: CategoryId = console.ask_id("Category ID: ")?;
    let category = service
        .get(id)?
        .ok_or_else(|| FinTrackError::category_not_found(id.to_string()))?;

    match console.ask_optional(&format!("New name [{}] (Enter to keep): ", category.name()))? {
        Some(name) if name != category.name() => {
            service.rename(id, &name)?;
            writeln!(console.out(), "Category updated.")?;
        }
        _ => writeln!(console.out(), "No changes made.")?,
    }
    Ok(())
}

/// `delete-category`
pub fn delete_category<R: BufRead, W: Write>(
    storage: &Storage,
    console: &mut Console<R, W>,
) -> FinTrackResult<()> {
    let service = CategoryService::new(storage);
    let id: CategoryId = console.ask_id("Category ID: ")?;
    let category = service
        .get(id)?
        .ok_or_else(|| FinTrackError::category_not_found(id.to_string()))?;

    if !console.confirm(&format!("Delete category '{}'?", category.name()))? {
        writeln!(console.out(), "Cancelled.")?;
        return Ok(());
    }

    service.delete(id)?;
    writeln!(console.out(), "Category deleted.")?;
    Ok(())
}
