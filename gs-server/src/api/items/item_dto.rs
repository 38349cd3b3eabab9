use gs_core::{Item, RedeemCode};

use serde::Serialize;

/// Catalog item DTO for JSON serialization
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDto {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub rarity: Option<String>,
    pub value: i32,
    pub icon: Option<String>,
    pub redeem_code: Option<RedeemCode>,
    pub active: bool,
}

impl From<Item> for ItemDto {
    fn from(i: Item) -> Self {
        Self {
            id: i.id,
            name: i.name,
            description: i.description,
            category: i.category,
            rarity: i.rarity,
            value: i.value,
            icon: i.icon,
            redeem_code: i.redeem_code,
            active: i.active,
        }
    }
}
