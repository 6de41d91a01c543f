//! Storage layer for FinTrack
//!
//! Every entity type is held by the same pair of components: a
//! [`MemoryRepository`] that owns the data and a [`CachedRepository`] proxy in
//! front of it. [`Storage`] wires one pair per entity type; nothing outside the
//! proxy touches the inner store.

pub mod cached;
pub mod memory;

pub use cached::CachedRepository;
pub use memory::MemoryRepository;

use std::fmt;
use std::hash::Hash;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{FinTrackError, FinTrackResult};
use crate::models::{AccountId, BankAccount, Category, CategoryId, Operation, OperationId};

/// Anything that can be stored by identifier
pub trait Entity: Clone {
    type Id: Copy + Eq + Hash + fmt::Display;

    fn id(&self) -> Self::Id;
}

impl Entity for BankAccount {
    type Id = AccountId;

    fn id(&self) -> AccountId {
        self.id
    }
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> CategoryId {
        self.id
    }
}

impl Entity for Operation {
    type Id = OperationId;

    fn id(&self) -> OperationId {
        self.id
    }
}

/// Keyed storage for one entity type
///
/// `add` and `update` both insert-or-overwrite; `delete` of a missing ID is a
/// no-op; `get` reports absence as `None`.
pub trait Repository<T: Entity> {
    fn add(&self, entity: T) -> FinTrackResult<()>;

    fn update(&self, entity: T) -> FinTrackResult<()>;

    fn delete(&self, id: T::Id) -> FinTrackResult<()>;

    fn get(&self, id: T::Id) -> FinTrackResult<Option<T>>;

    /// Snapshot of every entity, in no particular order
    fn get_all(&self) -> FinTrackResult<Vec<T>>;
}

pub type AccountRepository = CachedRepository<BankAccount, MemoryRepository<BankAccount>>;
pub type CategoryRepository = CachedRepository<Category, MemoryRepository<Category>>;
pub type OperationRepository = CachedRepository<Operation, MemoryRepository<Operation>>;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    pub accounts: AccountRepository,
    pub categories: CategoryRepository,
    pub operations: OperationRepository,
}

impl Storage {
    /// Create empty in-memory storage, each store wrapped in its cache
    pub fn in_memory() -> Self {
        Self {
            accounts: CachedRepository::new(MemoryRepository::new()),
            categories: CachedRepository::new(MemoryRepository::new()),
            operations: CachedRepository::new(MemoryRepository::new()),
        }
    }
}

impl Default for Storage {
    fn default() -> Self {
        Self::in_memory()
    }
}

pub(crate) fn read_lock<T>(lock: &RwLock<T>) -> FinTrackResult<RwLockReadGuard<'_, T>> {
    lock.read()
        .map_err(|e| FinTrackError::Storage(format!("Failed to acquire read lock: {}", e)))
}

pub(crate) fn write_lock<T>(lock: &RwLock<T>) -> FinTrackResult<RwLockWriteGuard<'_, T>> {
    lock.write()
        .map_err(|e| FinTrackError::Storage(format!("Failed to acquire write lock: {}", e)))
}
