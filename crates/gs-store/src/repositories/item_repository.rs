//! Item catalog over the `items` collection.

use std::sync::Arc;

use gs_core::{Item, NewItem, RedeemCode};
use serde_json::Value;

use crate::connection::store_handle::StoreHandle;
use crate::document::{Document, from_document, to_document};
use crate::error::Result;

const ITEMS: &str = "items";

pub struct ItemRepository {
    store: Arc<StoreHandle>,
}

impl ItemRepository {
    pub fn new(store: Arc<StoreHandle>) -> Self {
        Self { store }
    }

    /// Persist a catalog entry. The store-assigned document id becomes the
    /// item id; an unspecified `active` defaults to true.
    pub async fn create(&self, new_item: NewItem) -> Result<Item> {
        let item = new_item.into_item("");
        let doc = to_document(&item)?;
        let id = self.store.insert(ITEMS, doc).await?;
        Ok(Item { id, ..item })
    }

    /// The active item carrying `code`, or `None`. Codes normalize to
    /// uppercase on the way in, so the lookup is case-insensitive.
    pub async fn find_by_redeem_code(&self, code: &RedeemCode) -> Result<Option<Item>> {
        let matches = self
            .store
            .find_eq(
                ITEMS,
                &[
                    ("redeemCode", Value::from(code.as_str())),
                    ("active", Value::Bool(true)),
                ],
            )
            .await?;

        match matches.into_iter().next() {
            Some((id, doc)) => Ok(Some(hydrate(id, doc)?)),
            None => Ok(None),
        }
    }

    /// Every active catalog entry. Retired items stay in the collection but
    /// never leave it through this call.
    pub async fn find_all_active(&self) -> Result<Vec<Item>> {
        self.store
            .find_eq(ITEMS, &[("active", Value::Bool(true))])
            .await?
            .into_iter()
            .map(|(id, doc)| hydrate(id, doc))
            .collect()
    }
}

fn hydrate(id: String, doc: Document) -> Result<Item> {
    let mut item: Item = from_document(doc)?;
    item.id = id;
    Ok(item)
}
