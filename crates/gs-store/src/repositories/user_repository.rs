//! User directory over the `users` collection.
//!
//! User documents are keyed by the decimal form of their allocated id and
//! carry the id inside the document as well, so lookups by id never need a
//! query.

use std::sync::Arc;

use gs_core::{NewUser, User};
use serde_json::Value;

use crate::connection::store_handle::StoreHandle;
use crate::document::{from_document, to_document};
use crate::error::Result;
use crate::repositories::id_allocator::IdAllocator;

const USERS: &str = "users";

pub struct UserRepository {
    store: Arc<StoreHandle>,
    allocator: IdAllocator,
}

impl UserRepository {
    pub fn new(store: Arc<StoreHandle>) -> Self {
        Self {
            allocator: IdAllocator::new(store.clone()),
            store,
        }
    }

    /// Allocate an id and persist the account under it. A failure between
    /// the two steps leaves an unused id behind, never a duplicate.
    pub async fn create(&self, new_user: NewUser) -> Result<User> {
        let id = self.allocator.next_user_id().await?;
        let user = new_user.into_user(id);

        let doc = to_document(&user)?;
        self.store.set(USERS, &id.to_string(), doc).await?;
        Ok(user)
    }

    /// Create an account for an externally verified email.
    pub async fn create_from_external_identity(&self, email: &str) -> Result<User> {
        self.create(NewUser::from_external_identity(email)).await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        match self.store.get(USERS, &id.to_string()).await? {
            Some(doc) => Ok(Some(from_document(doc)?)),
            None => Ok(None),
        }
    }

    /// Exact-match lookup; an unknown email is a normal `None`, not an
    /// error.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let matches = self
            .store
            .find_eq(USERS, &[("email", Value::from(email))])
            .await?;

        match matches.into_iter().next() {
            Some((_, doc)) => Ok(Some(from_document(doc)?)),
            None => Ok(None),
        }
    }
}
