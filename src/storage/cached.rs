//! Caching proxy for any [`Repository`]
//!
//! Keeps a per-ID cache and one snapshot of "all entities". Writes go through
//! to the inner store first, then refresh the per-ID entry and drop the
//! snapshot, so reads after a mutation never see data from before it.
//! The per-ID lock is held across the inner write, so concurrent writers to
//! one ID leave the cache and the store agreeing on the last of them.
//!
//! The two caches are updated in separate steps. A concurrent reader may see
//! the old snapshot next to an already refreshed per-ID entry; each cache is
//! consistent on its own.

use std::collections::HashMap;
use std::sync::RwLock;

use super::{read_lock, write_lock, Entity, Repository};
use crate::error::FinTrackResult;

/// Read-through, write-through cache in front of an inner repository
pub struct CachedRepository<T: Entity, R> {
    inner: R,
    by_id: RwLock<HashMap<T::Id, T>>,
    all: RwLock<Option<Vec<T>>>,
}

impl<T: Entity, R: Repository<T>> CachedRepository<T, R> {
    /// Wrap an inner repository
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            by_id: RwLock::new(HashMap::new()),
            all: RwLock::new(None),
        }
    }

    /// Number of entries currently held in the per-ID cache
    pub fn cached_len(&self) -> FinTrackResult<usize> {
        Ok(read_lock(&self.by_id)?.len())
    }

    /// Whether an "all entities" snapshot is currently cached
    pub fn has_snapshot(&self) -> FinTrackResult<bool> {
        Ok(read_lock(&self.all)?.is_some())
    }

    fn invalidate_snapshot(&self) -> FinTrackResult<()> {
        *write_lock(&self.all)? = None;
        tracing::trace!("snapshot invalidated");
        Ok(())
    }
}

impl<T: Entity, R: Repository<T>> Repository<T> for CachedRepository<T, R> {
    fn add(&self, entity: T) -> FinTrackResult<()> {
        {
            let mut by_id = write_lock(&self.by_id)?;
            self.inner.add(entity.clone())?;
            by_id.insert(entity.id(), entity);
        }
        self.invalidate_snapshot()
    }

    fn update(&self, entity: T) -> FinTrackResult<()> {
        {
            let mut by_id = write_lock(&self.by_id)?;
            self.inner.update(entity.clone())?;
            by_id.insert(entity.id(), entity);
        }
        self.invalidate_snapshot()
    }

    fn delete(&self, id: T::Id) -> FinTrackResult<()> {
        {
            let mut by_id = write_lock(&self.by_id)?;
            self.inner.delete(id)?;
            by_id.remove(&id);
        }
        self.invalidate_snapshot()
    }

    fn get(&self, id: T::Id) -> FinTrackResult<Option<T>> {
        if let Some(cached) = read_lock(&self.by_id)?.get(&id) {
            tracing::trace!(%id, "cache hit");
            return Ok(Some(cached.clone()));
        }

        // Fill under the write lock so a concurrent delete cannot be undone
        let mut by_id = write_lock(&self.by_id)?;
        if let Some(cached) = by_id.get(&id) {
            return Ok(Some(cached.clone()));
        }

        tracing::trace!(%id, "cache miss");
        let item = self.inner.get(id)?;
        if let Some(item) = &item {
            by_id.insert(id, item.clone());
        }
        Ok(item)
    }

    fn get_all(&self) -> FinTrackResult<Vec<T>> {
        if let Some(snapshot) = read_lock(&self.all)?.as_ref() {
            return Ok(snapshot.clone());
        }

        // Refresh under the write lock so a concurrent invalidation lands after it
        let mut all = write_lock(&self.all)?;
        if let Some(snapshot) = all.as_ref() {
            return Ok(snapshot.clone());
        }

        let items = self.inner.get_all()?;
        tracing::trace!(count = items.len(), "snapshot refreshed");
        *all = Some(items.clone());
        Ok(items)
    }
}
