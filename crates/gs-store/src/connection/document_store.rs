//! The embedded document store engine.
//!
//! Collections of schemaless JSON documents, each carrying a version that
//! bumps on every write. Plain reads serve committed state. Transactions run
//! their body against a committed snapshot, buffer writes, and validate at
//! commit time (under the write lock) that everything the body read or
//! queried is unchanged; a failed validation discards the buffer and the
//! body runs again after a backoff delay.

use std::collections::BTreeMap;
use std::panic::Location;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use gs_core::ErrorLocation;
use serde_json::Value;
use uuid::Uuid;

use crate::connection::transaction::{Transaction, TransactionFootprint, WriteOp};
use crate::document::Document;
use crate::error::{Result, StoreError};
use crate::retry::RetryConfig;

pub(crate) struct VersionedDocument {
    pub data: Document,
    pub version: u64,
}

#[derive(Default)]
pub(crate) struct StoreState {
    collections: BTreeMap<String, BTreeMap<String, VersionedDocument>>,
}

/// Commit validation failed; the transaction body must run again.
pub(crate) struct Conflict;

/// The store engine. Cheap to clone; every clone shares the same state.
#[derive(Clone)]
pub struct DocumentStore {
    project_id: String,
    state: Arc<RwLock<StoreState>>,
    retry: RetryConfig,
}

impl DocumentStore {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self::with_retry(project_id, RetryConfig::default())
    }

    pub fn with_retry(project_id: impl Into<String>, retry: RetryConfig) -> Self {
        Self {
            project_id: project_id.into(),
            state: Arc::new(RwLock::new(StoreState::default())),
            retry,
        }
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Fetch one document by id.
    pub fn get(&self, collection: &str, id: &str) -> Option<Document> {
        self.read_state()
            .document(collection, id)
            .map(|doc| doc.data.clone())
    }

    /// All documents whose fields equal every `(field, value)` filter,
    /// with their ids, in id order.
    pub fn find_eq(&self, collection: &str, filters: &[(&str, Value)]) -> Vec<(String, Document)> {
        let filters = owned_filters(filters);
        self.read_state()
            .matching(collection, &filters)
            .map(|(id, doc)| (id.clone(), doc.data.clone()))
            .collect()
    }

    /// Store a new document under a generated id and return the id.
    pub fn insert(&self, collection: &str, data: Document) -> String {
        let id = new_document_id();
        self.write_state().put(collection, id.clone(), data);
        id
    }

    /// Create or replace the document at a caller-chosen id.
    pub fn set(&self, collection: &str, id: &str, data: Document) {
        self.write_state().put(collection, id.to_string(), data);
    }

    /// Merge fields into an existing document.
    pub fn update(&self, collection: &str, id: &str, fields: Document) -> Result<()> {
        self.write_state().merge(collection, id, fields)
    }

    /// Run `body` transactionally. The body may run several times; it must
    /// not carry side effects beyond the transaction it is handed. Returns
    /// the body's value once its writes commit, or
    /// [`StoreError::TransactionConflict`] when contention outlasts the
    /// retry budget.
    pub async fn run_transaction<T, F>(&self, mut body: F) -> Result<T>
    where
        F: FnMut(&mut Transaction<'_>) -> Result<T>,
    {
        let mut attempt: u32 = 0;
        loop {
            attempt += 1;

            let (value, footprint) = {
                let state = self.read_state();
                let mut tx = Transaction::new(&state);
                let value = body(&mut tx)?;
                (value, tx.into_footprint())
            };

            match self.try_commit(footprint) {
                Ok(()) => {
                    if attempt > 1 {
                        log::debug!("transaction committed after {attempt} attempts");
                    }
                    return Ok(value);
                }
                Err(Conflict) if attempt < self.retry.max_attempts => {
                    let delay = self.retry.delay_before_retry(attempt);
                    log::debug!(
                        "transaction conflict on attempt {attempt}, retrying in {delay:?}"
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(Conflict) => {
                    return Err(StoreError::TransactionConflict {
                        attempts: attempt,
                        location: ErrorLocation::from(Location::caller()),
                    });
                }
            }
        }
    }

    /// Validate the footprint against current state and, if nothing moved,
    /// apply its writes. Runs entirely under the write lock.
    fn try_commit(&self, footprint: TransactionFootprint) -> std::result::Result<(), Conflict> {
        let mut state = self.write_state();

        for read in &footprint.reads {
            if state.version_of(&read.collection, &read.id) != read.observed {
                return Err(Conflict);
            }
        }

        for query in &footprint.queries {
            let current: Vec<(String, u64)> = state
                .matching(&query.collection, &query.filters)
                .map(|(id, doc)| (id.clone(), doc.version))
                .collect();
            if current != query.observed {
                return Err(Conflict);
            }
        }

        // Check every write before applying any, so a conflicting write
        // never leaves part of the buffer behind.
        for write in &footprint.writes {
            match write {
                WriteOp::Insert { collection, id, .. } => {
                    if state.version_of(collection, id).is_some() {
                        return Err(Conflict);
                    }
                }
                WriteOp::Update { collection, id, .. } => {
                    if state.version_of(collection, id).is_none() {
                        return Err(Conflict);
                    }
                }
                WriteOp::Set { .. } => {}
            }
        }

        for write in footprint.writes {
            match write {
                WriteOp::Insert { collection, id, data }
                | WriteOp::Set { collection, id, data } => {
                    state.put(&collection, id, data);
                }
                WriteOp::Update { collection, id, fields } => {
                    state.merge(&collection, &id, fields).map_err(|_| Conflict)?;
                }
            }
        }

        Ok(())
    }

    fn read_state(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl StoreState {
    pub(crate) fn document(&self, collection: &str, id: &str) -> Option<&VersionedDocument> {
        self.collections.get(collection).and_then(|col| col.get(id))
    }

    pub(crate) fn version_of(&self, collection: &str, id: &str) -> Option<u64> {
        self.document(collection, id).map(|doc| doc.version)
    }

    pub(crate) fn matching<'s>(
        &'s self,
        collection: &str,
        filters: &'s [(String, Value)],
    ) -> impl Iterator<Item = (&'s String, &'s VersionedDocument)> + 's {
        self.collections
            .get(collection)
            .into_iter()
            .flat_map(|col| col.iter())
            .filter(move |(_, doc)| {
                filters
                    .iter()
                    .all(|(field, expected)| doc.data.get(field) == Some(expected))
            })
    }

    fn put(&mut self, collection: &str, id: String, data: Document) {
        let col = self.collections.entry(collection.to_string()).or_default();
        let version = col.get(&id).map(|doc| doc.version).unwrap_or(0) + 1;
        col.insert(id, VersionedDocument { data, version });
    }

    fn merge(&mut self, collection: &str, id: &str, fields: Document) -> Result<()> {
        let doc = self
            .collections
            .get_mut(collection)
            .and_then(|col| col.get_mut(id))
            .ok_or_else(|| StoreError::DocumentNotFound {
                collection: collection.to_string(),
                id: id.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        for (field, value) in fields {
            doc.data.insert(field, value);
        }
        doc.version += 1;
        Ok(())
    }
}

pub(crate) fn owned_filters(filters: &[(&str, Value)]) -> Vec<(String, Value)> {
    filters
        .iter()
        .map(|(field, value)| (field.to_string(), value.clone()))
        .collect()
}

/// Store-assigned document ids: random, unordered, collision-free in
/// practice.
pub(crate) fn new_document_id() -> String {
    Uuid::new_v4().simple().to_string()
}
