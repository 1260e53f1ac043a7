//! # Storage Layer
//!
//! The [`DataStore`] trait is the authoritative home of committed records.
//! Commands only ever reach records through it, so business logic stays
//! independent of how rows are held.
//!
//! ## Contract
//!
//! - Iteration order is insertion order. Replacing a record keeps its slot.
//! - Ids come from [`DataStore::allocate_id`], a counter that only moves
//!   forward. An id is never handed out twice, even after its record is
//!   removed.
//! - Every mutation takes `&mut self`, so at most one mutation is in flight
//!   and a reader never sees a half-applied change.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: the session-scoped store. Nothing is
//!   persisted; the collection lives as long as the store value.

use crate::error::Result;
use crate::model::{Record, RecordId};

pub mod memory;

pub trait DataStore {
    /// Reserve the next unused id.
    fn allocate_id(&mut self) -> RecordId;

    /// Append a record at the end of the collection.
    fn insert(&mut self, record: Record) -> Result<()>;

    /// Get a record by id
    fn get(&self, id: RecordId) -> Result<Record>;

    /// Replace the record with the same id in place.
    fn replace(&mut self, record: Record) -> Result<()>;

    /// Remove a record, returning it.
    fn remove(&mut self, id: RecordId) -> Result<Record>;

    /// All records in store order.
    fn records(&self) -> Vec<Record>;

    fn len(&self) -> usize {
        self.records().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
