//! In-memory entity stores.
//!
//! # Responsibility
//! - Hold one ordered collection of records per entity type.
//! - Assign identifiers and apply mutations atomically under a lock.
//!
//! # Invariants
//! - Insertion order is iteration order (notification stores insert at the
//!   front, everything else appends).
//! - New ids are `high_water + 1`, where `high_water` is the largest id the
//!   store has ever held. Deleted ids are never handed out again.
//! - Once `high_water` reaches `u64::MAX` inserts are refused; an id is
//!   never assigned twice.
//! - Insert position lives with the records, so every handle agrees on it.
//! - Every accessor returns owned clones; no reference escapes the lock.
//! - The lock is never held across an await point.

use crate::model::id::RecordId;
use crate::model::Record;
use parking_lot::Mutex;
use std::sync::Arc;

/// Where `insert_with` places a new record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InsertPosition {
    #[default]
    Back,
    Front,
}

struct StoreInner<T> {
    records: Vec<T>,
    high_water: u64,
    insert_position: InsertPosition,
}

impl<T: Record> StoreInner<T> {
    fn position(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|record| record.id() == id)
    }
}

/// Shared handle to one entity type's backing collection.
///
/// Cloning the handle shares the same records.
pub struct EntityStore<T> {
    inner: Arc<Mutex<StoreInner<T>>>,
}

impl<T> Clone for EntityStore<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Record> EntityStore<T> {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::seeded(Vec::new())
    }

    /// Creates a store pre-populated with `records`, in the given order.
    pub fn seeded(records: Vec<T>) -> Self {
        let high_water = records
            .iter()
            .map(|record| record.id().get())
            .max()
            .unwrap_or(0);
        Self {
            inner: Arc::new(Mutex::new(StoreInner {
                records,
                high_water,
                insert_position: InsertPosition::Back,
            })),
        }
    }

    /// Sets where newly created records are placed, for every handle
    /// sharing this store.
    pub fn with_insert_position(self, position: InsertPosition) -> Self {
        self.inner.lock().insert_position = position;
        self
    }

    pub fn insert_position(&self) -> InsertPosition {
        self.inner.lock().insert_position
    }

    pub fn len(&self) -> usize {
        self.inner.lock().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clones every record in store order.
    pub fn snapshot(&self) -> Vec<T> {
        self.inner.lock().records.clone()
    }

    pub fn find(&self, id: RecordId) -> Option<T> {
        let inner = self.inner.lock();
        inner.records.iter().find(|record| record.id() == id).cloned()
    }

    /// Clones the records matching `predicate`, in store order.
    pub fn filter<P>(&self, mut predicate: P) -> Vec<T>
    where
        P: FnMut(&T) -> bool,
    {
        let inner = self.inner.lock();
        inner
            .records
            .iter()
            .filter(|record| predicate(record))
            .cloned()
            .collect()
    }

    /// Assigns the next id, builds the record with `build` and inserts it.
    ///
    /// `build` must return a record carrying the id it was given. Returns
    /// `None` without calling `build` once the id space is exhausted.
    pub fn insert_with<F>(&self, build: F) -> Option<T>
    where
        F: FnOnce(RecordId) -> T,
    {
        let mut inner = self.inner.lock();
        let id = next_id(inner.high_water)?;
        let record = build(id);
        debug_assert_eq!(record.id(), id);
        inner.high_water = inner.high_water.max(record.id().get());
        match inner.insert_position {
            InsertPosition::Back => inner.records.push(record.clone()),
            InsertPosition::Front => inner.records.insert(0, record.clone()),
        }
        Some(record)
    }

    /// Runs `mutate` against the stored record and returns its result.
    ///
    /// Returns `None` without calling `mutate` when `id` is absent.
    pub fn modify<F, R>(&self, id: RecordId, mutate: F) -> Option<R>
    where
        F: FnOnce(&mut T) -> R,
    {
        let mut inner = self.inner.lock();
        let index = inner.position(id)?;
        Some(mutate(&mut inner.records[index]))
    }

    /// Applies `mutate` to every record and returns the resulting store.
    pub fn modify_all<F>(&self, mut mutate: F) -> Vec<T>
    where
        F: FnMut(&mut T),
    {
        let mut inner = self.inner.lock();
        inner.records.iter_mut().for_each(|record| mutate(record));
        inner.records.clone()
    }

    /// Removes and returns the record with `id`.
    pub fn remove(&self, id: RecordId) -> Option<T> {
        let mut inner = self.inner.lock();
        let index = inner.position(id)?;
        Some(inner.records.remove(index))
    }
}

impl<T: Record> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn next_id(high_water: u64) -> Option<RecordId> {
    match RecordId::new(high_water) {
        Ok(current) => current.next(),
        Err(_) => Some(RecordId::FIRST),
    }
}
