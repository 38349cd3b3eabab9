use gs_core::{NewItem, RedeemCode};

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemRequest {
    /// Display name (required)
    #[serde(default)]
    pub name: String,

    /// Optional description
    #[serde(default)]
    pub description: Option<String>,

    /// Optional category, e.g., "weapon"
    #[serde(default)]
    pub category: Option<String>,

    /// Optional rarity tier, e.g., "legendary"
    #[serde(default)]
    pub rarity: Option<String>,

    /// In-game value
    #[serde(default)]
    pub value: i32,

    /// Optional icon asset name
    #[serde(default)]
    pub icon: Option<String>,

    /// Redeem code; normalized to uppercase on the way in
    #[serde(default)]
    pub redeem_code: Option<RedeemCode>,

    /// Defaults to true when unset
    #[serde(default)]
    pub active: Option<bool>,
}

impl From<CreateItemRequest> for NewItem {
    fn from(r: CreateItemRequest) -> Self {
        Self {
            name: r.name,
            description: r.description,
            category: r.category,
            rarity: r.rarity,
            value: r.value,
            icon: r.icon,
            redeem_code: r.redeem_code,
            active: r.active,
        }
    }
}
