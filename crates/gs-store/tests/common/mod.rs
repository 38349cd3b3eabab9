#![allow(dead_code)]

use std::sync::Arc;

use gs_config::StoreCredentials;
use gs_core::{NewItem, NewUser, RedeemCode};
use gs_store::StoreHandle;

/// Opens a fresh, empty store for one test
pub fn create_test_store() -> Arc<StoreHandle> {
    Arc::new(StoreHandle::connect(test_credentials()))
}

pub fn test_credentials() -> StoreCredentials {
    StoreCredentials {
        project_id: "game-service-test".to_string(),
        client_email: None,
    }
}

/// Creates a redeemable test item; `active` left to its default
pub fn sword_item() -> NewItem {
    NewItem {
        name: "Iron Sword".to_string(),
        description: Some("A dependable starter blade".to_string()),
        category: Some("weapon".to_string()),
        rarity: Some("common".to_string()),
        icon: Some("sword.png".to_string()),
        value: 150,
        redeem_code: Some(RedeemCode::new("sword01")),
        active: None,
    }
}

/// Creates a second redeemable test item
pub fn potion_item() -> NewItem {
    NewItem {
        name: "Healing Potion".to_string(),
        description: Some("Restores a little health".to_string()),
        category: Some("consumable".to_string()),
        rarity: None,
        icon: None,
        value: 25,
        redeem_code: Some(RedeemCode::new("pocao01")),
        active: Some(true),
    }
}

/// Creates an item that cannot be redeemed
pub fn trophy_item() -> NewItem {
    NewItem {
        name: "Golden Trophy".to_string(),
        description: None,
        category: Some("cosmetic".to_string()),
        rarity: Some("legendary".to_string()),
        icon: None,
        value: 1000,
        redeem_code: None,
        active: Some(true),
    }
}

/// Creates a password-based test account
pub fn new_test_user(email: &str) -> NewUser {
    NewUser {
        email: email.to_string(),
        password: "hunter2".to_string(),
        nickname: "Tester".to_string(),
    }
}
