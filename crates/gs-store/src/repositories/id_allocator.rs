//! Transactional counter for user ids.

use std::sync::Arc;

use serde_json::Value;

use crate::connection::store_handle::StoreHandle;
use crate::connection::transaction::Transaction;
use crate::document::Document;
use crate::error::Result;

const COUNTERS: &str = "counters";
const USERS_COUNTER: &str = "users";
const LAST_ID_FIELD: &str = "lastId";

/// Allocates strictly increasing user ids from the `counters/users`
/// document. An allocated id is never handed out twice; if the caller fails
/// before using it, the id becomes a gap.
pub struct IdAllocator {
    store: Arc<StoreHandle>,
}

impl IdAllocator {
    pub fn new(store: Arc<StoreHandle>) -> Self {
        Self { store }
    }

    /// Allocate the next user id.
    ///
    /// One transaction per call: read `lastId` (a missing counter counts as
    /// 0), write back `lastId + 1`, return it. Commit validation guarantees
    /// two concurrent calls never observe the same `lastId`; conflicts are
    /// retried inside the store.
    pub async fn next_user_id(&self) -> Result<i64> {
        self.store
            .run_transaction(|tx: &mut Transaction| {
                let last = tx
                    .get(COUNTERS, USERS_COUNTER)
                    .and_then(|doc| doc.get(LAST_ID_FIELD).and_then(Value::as_i64))
                    .unwrap_or(0);
                let next = last + 1;

                let mut counter = Document::new();
                counter.insert(LAST_ID_FIELD.to_string(), Value::from(next));
                tx.set(COUNTERS, USERS_COUNTER, counter);

                Ok(next)
            })
            .await
    }
}
