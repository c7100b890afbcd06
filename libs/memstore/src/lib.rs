//! Generic in-memory entity store keyed by a store-assigned integer id.
//!
//! The store owns a dedicated monotonic counter for id assignment, so ids
//! are never recomputed from the current contents and never reused. All
//! access goes through a single `parking_lot::RwLock`, which makes every
//! operation (including the closure-based mutators) atomic with respect to
//! concurrent request handlers.

use parking_lot::RwLock;
use std::collections::BTreeMap;
use thiserror::Error;

/// Stored record with a store-assigned identity.
pub trait Entity: Clone + Send + Sync + 'static {
    fn id(&self) -> i64;
    fn set_id(&mut self, id: i64);
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("entity with id = {id} not found")]
    NotFound { id: i64 },
}

struct Inner<T> {
    items: BTreeMap<i64, T>,
    next_id: i64,
}

/// In-memory map from id to entity with create/read/update/existence-check.
pub struct MemStore<T> {
    inner: RwLock<Inner<T>>,
}

impl<T: Entity> MemStore<T> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                items: BTreeMap::new(),
                next_id: 0,
            }),
        }
    }

    /// Snapshot of all stored entities. Order is incidental (ascending id)
    /// and not part of the contract.
    pub fn find_all(&self) -> Vec<T> {
        self.inner.read().items.values().cloned().collect()
    }

    /// Look up an entity by id. A missing id is not an error.
    pub fn find_by_id(&self, id: i64) -> Option<T> {
        self.inner.read().items.get(&id).cloned()
    }

    /// Linear scan for the first entity matching the predicate.
    pub fn find_first(&self, pred: impl Fn(&T) -> bool) -> Option<T> {
        self.inner.read().items.values().find(|e| pred(e)).cloned()
    }

    /// Assign the next id, store the entity, and return it with the id set.
    /// Ids start at 1 and increase monotonically for the lifetime of the
    /// store.
    pub fn save(&self, mut entity: T) -> T {
        let mut inner = self.inner.write();
        inner.next_id += 1;
        let id = inner.next_id;
        entity.set_id(id);
        inner.items.insert(id, entity.clone());
        entity
    }

    /// Replace the stored value wholesale. The entity's id must already
    /// exist.
    pub fn update(&self, entity: T) -> Result<T, StoreError> {
        let mut inner = self.inner.write();
        let id = entity.id();
        if !inner.items.contains_key(&id) {
            return Err(StoreError::NotFound { id });
        }
        inner.items.insert(id, entity.clone());
        Ok(entity)
    }

    pub fn exists_by_id(&self, id: i64) -> bool {
        self.inner.read().items.contains_key(&id)
    }

    /// Mutate a single stored entity in place under the write lock.
    /// Returns the closure result, or `None` when the id is absent.
    pub fn modify<R>(&self, id: i64, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        let mut inner = self.inner.write();
        inner.items.get_mut(&id).map(f)
    }

    /// Mutate two stored entities under one write-lock acquisition: the
    /// closure is applied as `f(entity_a, b)` then `f(entity_b, a)`, so a
    /// symmetric relationship edge is written on both endpoints without any
    /// window for interleaved writers. Returns `false` (and mutates
    /// nothing) when either id is absent.
    pub fn modify_pair(&self, a: i64, b: i64, f: impl Fn(&mut T, i64)) -> bool {
        let mut inner = self.inner.write();
        if !inner.items.contains_key(&a) || !inner.items.contains_key(&b) {
            return false;
        }
        if let Some(ea) = inner.items.get_mut(&a) {
            f(ea, b);
        }
        if let Some(eb) = inner.items.get_mut(&b) {
            f(eb, a);
        }
        true
    }

    pub fn len(&self) -> usize {
        self.inner.read().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().items.is_empty()
    }
}

impl<T: Entity> Default for MemStore<T> {
    fn default() -> Self {
        Self::new()
    }
}
