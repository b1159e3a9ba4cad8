use std::sync::{Arc, RwLock};

use stockroom_core::{DomainError, DomainResult, Entity};

/// Repository abstraction for one record collection.
///
/// `list` returns records in insertion order.
pub trait RecordStore<T: Entity>: Send + Sync {
    fn list(&self) -> Vec<T>;
    /// Append a record; an existing record with the same id is a conflict.
    fn add(&self, record: T) -> DomainResult<()>;
    fn find(&self, id: &T::Id) -> Option<T>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T, S> RecordStore<T> for Arc<S>
where
    T: Entity,
    S: RecordStore<T> + ?Sized,
{
    fn list(&self) -> Vec<T> {
        (**self).list()
    }

    fn add(&self, record: T) -> DomainResult<()> {
        (**self).add(record)
    }

    fn find(&self, id: &T::Id) -> Option<T> {
        (**self).find(id)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

/// In-memory store for tests/dev and for the default (non-persistent) workspace.
#[derive(Debug)]
pub struct InMemoryRecordStore<T> {
    inner: RwLock<Vec<T>>,
}

impl<T> InMemoryRecordStore<T> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Vec::new()),
        }
    }

    /// Store seeded with `records`, kept in the given order.
    pub fn with_records(records: Vec<T>) -> Self {
        Self {
            inner: RwLock::new(records),
        }
    }
}

impl<T> Default for InMemoryRecordStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RecordStore<T> for InMemoryRecordStore<T>
where
    T: Entity + Clone + Send + Sync,
{
    fn list(&self) -> Vec<T> {
        match self.inner.read() {
            Ok(records) => records.clone(),
            Err(_) => vec![],
        }
    }

    fn add(&self, record: T) -> DomainResult<()> {
        let mut records = self
            .inner
            .write()
            .map_err(|_| DomainError::conflict("record store lock poisoned"))?;

        if records.iter().any(|existing| existing.id() == record.id()) {
            return Err(DomainError::conflict(format!(
                "record {:?} already exists",
                record.id()
            )));
        }

        tracing::debug!(id = ?record.id(), "record added");
        records.push(record);
        Ok(())
    }

    fn find(&self, id: &T::Id) -> Option<T> {
        let records = self.inner.read().ok()?;
        records.iter().find(|record| record.id() == id).cloned()
    }

    fn len(&self) -> usize {
        self.inner.read().map(|records| records.len()).unwrap_or(0)
    }
}
