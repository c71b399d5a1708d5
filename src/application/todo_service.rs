//! Record use cases: create, update, delete, list
//!
//! Every mutation loads the full collection, applies the change in memory
//! and saves the whole collection back.

use crate::domain::{ListQuery, NewRecord, Record, RecordPatch};
use crate::error::{TodoError, Result};
use crate::infrastructure::RecordStore;
use chrono::Utc;
use tracing::info;

/// Service wrapping a record store
pub struct TodoService<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> TodoService<S> {
    /// Create a new todo service
    pub fn new(store: S) -> Self {
        TodoService { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn next_id(records: &[Record]) -> Result<u64> {
        records
            .iter()
            .map(|r| r.id)
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or(TodoError::IdExhausted)
    }

    fn position(records: &[Record], id: u64) -> Result<usize> {
        records
            .iter()
            .position(|r| r.id == id)
            .ok_or(TodoError::NotFound(id))
    }

    /// Validate and append a new record
    pub fn create(&self, new: NewRecord) -> Result<Record> {
        let report = new.validate();
        if !report.is_valid() {
            return Err(TodoError::Validation(report.errors));
        }

        let mut records = self.store.load()?;
        let record = new.into_record(Self::next_id(&records)?, Utc::now());
        records.push(record.clone());
        self.store.save(&records)?;

        info!(id = record.id, "created record");
        Ok(record)
    }

    pub fn get(&self, id: u64) -> Result<Record> {
        let records = self.store.load()?;
        let idx = Self::position(&records, id)?;
        Ok(records[idx].clone())
    }

    /// Apply a patch, revalidate the merged record and persist it
    pub fn update(&self, id: u64, patch: RecordPatch) -> Result<Record> {
        let mut records = self.store.load()?;
        let idx = Self::position(&records, id)?;

        if patch.is_empty() {
            return Ok(records[idx].clone());
        }

        let mut updated = patch.apply_to(&records[idx]);
        let report = updated.validate();
        if !report.is_valid() {
            return Err(TodoError::Validation(report.errors));
        }

        updated.updated_at = Some(Utc::now());
        records[idx] = updated.clone();
        self.store.save(&records)?;

        info!(id, "updated record");
        Ok(updated)
    }

    /// Set the completed flag
    pub fn set_completed(&self, id: u64, completed: bool) -> Result<Record> {
        self.update(
            id,
            RecordPatch {
                completed: Some(completed),
                ..Default::default()
            },
        )
    }

    /// Flip the completed flag
    pub fn toggle(&self, id: u64) -> Result<Record> {
        let current = self.get(id)?;
        self.set_completed(id, !current.completed)
    }

    /// Remove a record, returning it
    pub fn delete(&self, id: u64) -> Result<Record> {
        let mut records = self.store.load()?;
        let idx = Self::position(&records, id)?;
        let removed = records.remove(idx);
        self.store.save(&records)?;

        info!(id, "deleted record");
        Ok(removed)
    }

    pub fn list(&self, query: &ListQuery) -> Result<Vec<Record>> {
        let records = self.store.load()?;
        Ok(query.apply(&records))
    }

    /// Remove every completed record. Saves only when something was removed.
    pub fn clear_completed(&self) -> Result<usize> {
        let mut records = self.store.load()?;
        let before = records.len();
        records.retain(|r| !r.completed);
        let removed = before - records.len();

        if removed > 0 {
            self.store.save(&records)?;
            info!(removed, "cleared completed records");
        }

        Ok(removed)
    }
}
