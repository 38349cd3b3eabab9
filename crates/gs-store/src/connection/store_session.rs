//! One logical connection to the store.
//!
//! Sessions are never reopened: once closed, every call through them fails
//! with [`StoreError::SessionClosed`] and the owning handle replaces the
//! session instead.

use std::panic::Location;
use std::sync::atomic::{AtomicBool, Ordering};

use gs_core::ErrorLocation;
use serde_json::Value;

use crate::connection::document_store::DocumentStore;
use crate::connection::transaction::Transaction;
use crate::document::Document;
use crate::error::{Result, StoreError};

pub struct StoreSession {
    id: u64,
    store: DocumentStore,
    closed: AtomicBool,
}

impl StoreSession {
    pub(crate) fn open(id: u64, store: DocumentStore) -> Self {
        Self {
            id,
            store,
            closed: AtomicBool::new(false),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Invalidate this session. In-flight calls finish; later calls fail
    /// with [`StoreError::SessionClosed`].
    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    pub async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>> {
        self.ensure_open()?;
        Ok(self.store.get(collection, id))
    }

    pub async fn find_eq(
        &self,
        collection: &str,
        filters: &[(&str, Value)],
    ) -> Result<Vec<(String, Document)>> {
        self.ensure_open()?;
        Ok(self.store.find_eq(collection, filters))
    }

    pub async fn insert(&self, collection: &str, data: Document) -> Result<String> {
        self.ensure_open()?;
        Ok(self.store.insert(collection, data))
    }

    pub async fn set(&self, collection: &str, id: &str, data: Document) -> Result<()> {
        self.ensure_open()?;
        self.store.set(collection, id, data);
        Ok(())
    }

    pub async fn update(&self, collection: &str, id: &str, fields: Document) -> Result<()> {
        self.ensure_open()?;
        self.store.update(collection, id, fields)
    }

    pub async fn run_transaction<T, F>(&self, body: F) -> Result<T>
    where
        F: FnMut(&mut Transaction<'_>) -> Result<T>,
    {
        self.ensure_open()?;
        self.store.run_transaction(body).await
    }

    fn ensure_open(&self) -> Result<()> {
        if self.is_closed() {
            return Err(StoreError::SessionClosed {
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }
}
