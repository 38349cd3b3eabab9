use gs_core::InventoryEntry;

use serde::Serialize;

/// Inventory entry DTO for JSON serialization
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryEntryDto {
    pub id: String,
    pub user_id: i64,
    pub item_id: String,
    pub item_name: String,
    pub item_description: Option<String>,
    pub item_category: Option<String>,
    pub item_rarity: Option<String>,
    pub item_icon: Option<String>,
    pub quantity: i32,
    /// Epoch milliseconds of the first acquisition
    pub acquired_at: i64,
}

impl From<InventoryEntry> for InventoryEntryDto {
    fn from(e: InventoryEntry) -> Self {
        Self {
            id: e.id,
            user_id: e.user_id,
            item_id: e.item_id,
            item_name: e.item_name,
            item_description: e.item_description,
            item_category: e.item_category,
            item_rarity: e.item_rarity,
            item_icon: e.item_icon,
            quantity: e.quantity,
            acquired_at: e.acquired_at,
        }
    }
}
