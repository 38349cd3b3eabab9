//! Catalog item - an unlockable definition, not an owned instance.

use crate::RedeemCode;

use serde::{Deserialize, Serialize};

/// A catalog entry that a redeem code can unlock. Redemption never mutates
/// an item; per-user ownership lives in
/// [`InventoryEntry`](crate::InventoryEntry).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Store-assigned document id. Not persisted inside the document itself;
    /// the repository folds it back in on read.
    #[serde(skip_serializing, default)]
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub rarity: Option<String>,
    pub value: i32,
    pub icon: Option<String>,
    /// Items without a code exist in the catalog but cannot be redeemed.
    pub redeem_code: Option<RedeemCode>,
    pub active: bool,
}

/// A catalog entry before the store has assigned it an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct NewItem {
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub rarity: Option<String>,
    pub value: i32,
    pub icon: Option<String>,
    pub redeem_code: Option<RedeemCode>,
    /// Defaults to true when unset.
    pub active: Option<bool>,
}

impl Item {
    /// True when this item can currently be unlocked with `code`.
    pub fn is_redeemable_with(&self, code: &RedeemCode) -> bool {
        self.active && self.redeem_code.as_ref() == Some(code)
    }
}

impl NewItem {
    /// Resolve defaults and attach the assigned id. The redeem code is
    /// already normalized by [`RedeemCode`].
    pub fn into_item(self, id: impl Into<String>) -> Item {
        Item {
            id: id.into(),
            name: self.name,
            description: self.description,
            category: self.category,
            rarity: self.rarity,
            value: self.value,
            icon: self.icon,
            redeem_code: self.redeem_code,
            active: self.active.unwrap_or(true),
        }
    }
}
