//! Process-wide store lifecycle.
//!
//! The handle owns the engine, the credentials it was opened with, and the
//! current [`StoreSession`]. Callers go through the handle; when the session
//! turns out to be closed, the handle opens a replacement and replays the
//! failed call exactly once. Any other failure surfaces unchanged.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use gs_config::StoreCredentials;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::connection::document_store::DocumentStore;
use crate::connection::store_session::StoreSession;
use crate::connection::transaction::Transaction;
use crate::document::Document;
use crate::error::Result;

pub struct StoreHandle {
    credentials: StoreCredentials,
    store: DocumentStore,
    session: RwLock<Arc<StoreSession>>,
    next_session_id: AtomicU64,
}

impl StoreHandle {
    /// Open the store with credentials resolved by configuration. Called
    /// once at startup; the credentials stay with the handle so later
    /// session replacements reuse them.
    pub fn connect(credentials: StoreCredentials) -> Self {
        let store = DocumentStore::new(credentials.project_id.clone());
        let session = Arc::new(StoreSession::open(1, store.clone()));
        log::info!(
            "store connected: project={}, session=1",
            credentials.project_id
        );

        Self {
            credentials,
            store,
            session: RwLock::new(session),
            next_session_id: AtomicU64::new(2),
        }
    }

    pub fn project_id(&self) -> &str {
        self.store.project_id()
    }

    pub async fn current_session(&self) -> Arc<StoreSession> {
        self.session.read().await.clone()
    }

    /// Close the current session. The next call through the handle opens a
    /// replacement.
    pub async fn close(&self) {
        let session = self.current_session().await;
        session.close();
        log::info!("store session {} closed", session.id());
    }

    pub async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>> {
        self.with_session_retry(|session| async move { session.get(collection, id).await })
            .await
    }

    pub async fn find_eq(
        &self,
        collection: &str,
        filters: &[(&str, Value)],
    ) -> Result<Vec<(String, Document)>> {
        self.with_session_retry(|session| async move { session.find_eq(collection, filters).await })
            .await
    }

    pub async fn insert(&self, collection: &str, data: Document) -> Result<String> {
        self.with_session_retry(|session| {
            let data = data.clone();
            async move { session.insert(collection, data).await }
        })
        .await
    }

    pub async fn set(&self, collection: &str, id: &str, data: Document) -> Result<()> {
        self.with_session_retry(|session| {
            let data = data.clone();
            async move { session.set(collection, id, data).await }
        })
        .await
    }

    pub async fn update(&self, collection: &str, id: &str, fields: Document) -> Result<()> {
        self.with_session_retry(|session| {
            let fields = fields.clone();
            async move { session.update(collection, id, fields).await }
        })
        .await
    }

    /// Transactional counterpart of [`Self::with_session_retry`]; spelled
    /// out because the body is `FnMut` and cannot pass through an `Fn`
    /// closure.
    pub async fn run_transaction<T, F>(&self, mut body: F) -> Result<T>
    where
        F: FnMut(&mut Transaction<'_>) -> Result<T>,
    {
        let session = self.current_session().await;
        match session.run_transaction(&mut body).await {
            Err(error) if error.is_session_closed() => {
                let fresh = self.replace_session(&session).await;
                fresh.run_transaction(&mut body).await
            }
            other => other,
        }
    }

    /// Run `op` on the current session; if the session is closed, open a
    /// fresh one and replay exactly once.
    async fn with_session_retry<T, F, Fut>(&self, op: F) -> Result<T>
    where
        F: Fn(Arc<StoreSession>) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let session = self.current_session().await;
        match op(session.clone()).await {
            Err(error) if error.is_session_closed() => {
                let fresh = self.replace_session(&session).await;
                op(fresh).await
            }
            other => other,
        }
    }

    /// Swap in a fresh session unless another caller already did.
    async fn replace_session(&self, stale: &Arc<StoreSession>) -> Arc<StoreSession> {
        log::warn!(
            "store session {} is closed, opening a replacement",
            stale.id()
        );

        let mut slot = self.session.write().await;
        if Arc::ptr_eq(&slot, stale) {
            let id = self.next_session_id.fetch_add(1, Ordering::SeqCst);
            let fresh = Arc::new(StoreSession::open(id, self.store.clone()));
            *slot = fresh.clone();
            log::info!(
                "store session {} opened (project={})",
                id,
                self.credentials.project_id
            );
            fresh
        } else {
            slot.clone()
        }
    }
}
