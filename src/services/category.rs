//! Category service
//!
//! CRUD for income and expense categories.

use crate::error::{FinTrackError, FinTrackResult};
use crate::models::{Category, CategoryId, DomainFactory, MoneyFlowType};
use crate::storage::{Repository, Storage};

/// Service for category management
pub struct CategoryService<'a> {
    storage: &'a Storage,
    factory: DomainFactory,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(storage: &'a Storage) -> Self {
        Self {
            storage,
            factory: DomainFactory::new(),
        }
    }

    /// Create and store a new category
    pub fn create(&self, flow_type: MoneyFlowType, name: &str) -> FinTrackResult<Category> {
        let category = self.factory.create_category(flow_type, name)?;
        self.storage.categories.add(category.clone())?;
        Ok(category)
    }

    /// Get a category by ID
    pub fn get(&self, id: CategoryId) -> FinTrackResult<Option<Category>> {
        self.storage.categories.get(id)
    }

    /// Get all categories, income first, then by name
    pub fn list(&self) -> FinTrackResult<Vec<Category>> {
        let mut categories = self.storage.categories.get_all()?;
        categories.sort_by(|a, b| {
            let rank = |c: &Category| c.flow_type() == MoneyFlowType::Expense;
            rank(a).cmp(&rank(b)).then_with(|| a.name().cmp(b.name()))
        });
        Ok(categories)
    }

    /// Rename a category
    pub fn rename(&self, id: CategoryId, new_name: &str) -> FinTrackResult<Category> {
        let mut category = self
            .get(id)?
            .ok_or_else(|| FinTrackError::category_not_found(id.to_string()))?;
        category.rename(new_name)?;
        self.storage.categories.update(category.clone())?;
        Ok(category)
    }

    /// Delete a category; missing IDs are ignored
    pub fn delete(&self, id: CategoryId) -> FinTrackResult<()> {
        self.storage.categories.delete(id)
    }
}
