//! In-memory entity store
//!
//! Holds one entity type in a map keyed by identifier. It knows nothing about
//! references between entities; callers check those before writing.

use std::collections::HashMap;
use std::sync::RwLock;

use super::{read_lock, write_lock, Entity, Repository};
use crate::error::FinTrackResult;

/// Authoritative store for one entity type
pub struct MemoryRepository<T: Entity> {
    data: RwLock<HashMap<T::Id, T>>,
}

impl<T: Entity> MemoryRepository<T> {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Count stored entities
    pub fn count(&self) -> FinTrackResult<usize> {
        Ok(read_lock(&self.data)?.len())
    }
}

impl<T: Entity> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> Repository<T> for MemoryRepository<T> {
    fn add(&self, entity: T) -> FinTrackResult<()> {
        write_lock(&self.data)?.insert(entity.id(), entity);
        Ok(())
    }

    fn update(&self, entity: T) -> FinTrackResult<()> {
        self.add(entity)
    }

    fn delete(&self, id: T::Id) -> FinTrackResult<()> {
        write_lock(&self.data)?.remove(&id);
        Ok(())
    }

    fn get(&self, id: T::Id) -> FinTrackResult<Option<T>> {
        Ok(read_lock(&self.data)?.get(&id).cloned())
    }

    fn get_all(&self) -> FinTrackResult<Vec<T>> {
        Ok(read_lock(&self.data)?.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BankAccount, DomainFactory, Money};

    fn create_test_repo() -> MemoryRepository<BankAccount> {
        MemoryRepository::new()
    }

    fn account(name: &str) -> BankAccount {
        DomainFactory::new()
            .create_bank_account(name, Money::zero())
            .unwrap()
    }

    #[test]
    fn test_empty_repo() {
        let repo = create_test_repo();
        assert_eq!(repo.count().unwrap(), 0);
        assert!(repo.get_all().unwrap().is_empty());
    }

    #[test]
    fn test_add_and_get() {
        let repo = create_test_repo();
        let acc = account("Checking");
        let id = acc.id;

        repo.add(acc.clone()).unwrap();

        assert_eq!(repo.get(id).unwrap(), Some(acc));
    }

    #[test]
    fn test_add_overwrites_same_id() {
        let repo = create_test_repo();
        let mut acc = account("Checking");
        repo.add(acc.clone()).unwrap();

        acc.rename("Renamed").unwrap();
        repo.add(acc.clone()).unwrap();

        assert_eq!(repo.count().unwrap(), 1);
        assert_eq!(repo.get(acc.id).unwrap().unwrap().name(), "Renamed");
    }

    #[test]
    fn test_update_is_upsert() {
        let repo = create_test_repo();
        let acc = account("Fresh");
        repo.update(acc.clone()).unwrap();
        assert_eq!(repo.get(acc.id).unwrap(), Some(acc));
    }

    #[test]
    fn test_delete() {
        let repo = create_test_repo();
        let acc = account("Test");
        let id = acc.id;

        repo.add(acc).unwrap();
        repo.delete(id).unwrap();
        assert!(repo.get(id).unwrap().is_none());

        // Deleting again is a no-op
        repo.delete(id).unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }
}
