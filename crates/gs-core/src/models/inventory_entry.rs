//! Inventory entry - the per-user, per-item ownership record.

use crate::Item;

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Tracks how many units of one item a user owns. At most one entry exists
/// per (user, item) pair; repeated redemption increments `quantity` instead
/// of inserting a second entry.
///
/// The `item_*` fields are a snapshot of the item's display fields taken at
/// first acquisition and are not re-synced if the catalog entry changes
/// later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryEntry {
    /// Store-assigned document id. Not persisted inside the document itself.
    #[serde(skip_serializing, default)]
    pub id: String,
    pub user_id: i64,
    pub item_id: String,
    pub item_name: String,
    pub item_description: Option<String>,
    pub item_category: Option<String>,
    pub item_rarity: Option<String>,
    pub item_icon: Option<String>,
    pub quantity: i32,
    /// Epoch milliseconds of the first acquisition.
    pub acquired_at: i64,
}

impl InventoryEntry {
    /// Build the entry recorded the first time `user_id` redeems `item`:
    /// quantity 1, display fields snapshotted, acquisition stamped now.
    pub fn first_acquisition(user_id: i64, item: &Item) -> Self {
        Self {
            id: String::new(),
            user_id,
            item_id: item.id.clone(),
            item_name: item.name.clone(),
            item_description: item.description.clone(),
            item_category: item.category.clone(),
            item_rarity: item.rarity.clone(),
            item_icon: item.icon.clone(),
            quantity: 1,
            acquired_at: Utc::now().timestamp_millis(),
        }
    }
}
