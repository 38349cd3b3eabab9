//! Inventory ledger over the `inventory` collection.
//!
//! One document per `(user, item)` pair, holding a quantity and a snapshot
//! of the item's display fields taken at first acquisition.

use std::sync::Arc;

use gs_core::{InventoryEntry, RedeemCode};
use serde_json::Value;

use crate::connection::store_handle::StoreHandle;
use crate::connection::transaction::Transaction;
use crate::document::{Document, from_document, to_document};
use crate::error::Result;
use crate::repositories::item_repository::ItemRepository;

const INVENTORY: &str = "inventory";

pub struct InventoryRepository {
    store: Arc<StoreHandle>,
    items: ItemRepository,
}

impl InventoryRepository {
    pub fn new(store: Arc<StoreHandle>) -> Self {
        Self {
            items: ItemRepository::new(store.clone()),
            store,
        }
    }

    /// Redeem `code` for `user_id`, returning the entry as it stands after
    /// the grant, or `None` when no active item carries the code.
    ///
    /// The existing-entry lookup and the increment-or-insert write share one
    /// transaction, so two concurrent redemptions of the same pair resolve
    /// to a single entry whose quantity counts both.
    pub async fn redeem(&self, user_id: i64, code: &RedeemCode) -> Result<Option<InventoryEntry>> {
        let Some(item) = self.items.find_by_redeem_code(code).await? else {
            return Ok(None);
        };

        let entry = self
            .store
            .run_transaction(|tx: &mut Transaction| {
                let existing = tx
                    .find_eq(
                        INVENTORY,
                        &[
                            ("userId", Value::from(user_id)),
                            ("itemId", Value::from(item.id.as_str())),
                        ],
                    )
                    .into_iter()
                    .next();

                match existing {
                    Some((id, doc)) => {
                        let mut entry: InventoryEntry = from_document(doc)?;
                        entry.id = id.clone();
                        entry.quantity += 1;

                        let mut fields = Document::new();
                        fields.insert("quantity".to_string(), Value::from(entry.quantity));
                        tx.update(INVENTORY, &id, fields);

                        Ok(entry)
                    }
                    None => {
                        let mut entry = InventoryEntry::first_acquisition(user_id, &item);
                        let doc = to_document(&entry)?;
                        entry.id = tx.insert(INVENTORY, doc);
                        Ok(entry)
                    }
                }
            })
            .await?;

        Ok(Some(entry))
    }

    /// Every entry owned by `user_id`, empty for users who own nothing.
    pub async fn find_by_user(&self, user_id: i64) -> Result<Vec<InventoryEntry>> {
        self.store
            .find_eq(INVENTORY, &[("userId", Value::from(user_id))])
            .await?
            .into_iter()
            .map(|(id, doc)| {
                let mut entry: InventoryEntry = from_document(doc)?;
                entry.id = id;
                Ok(entry)
            })
            .collect()
    }
}
