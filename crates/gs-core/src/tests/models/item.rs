use crate::{NewItem, RedeemCode};

fn sword() -> NewItem {
    NewItem {
        name: "Sword".to_string(),
        description: Some("A sharp blade".to_string()),
        category: Some("weapon".to_string()),
        rarity: Some("common".to_string()),
        value: 100,
        icon: Some("sword.png".to_string()),
        redeem_code: Some(RedeemCode::new("sword01")),
        active: None,
    }
}

#[test]
fn test_into_item_defaults_active_to_true() {
    let item = sword().into_item("doc-1");

    assert_eq!(item.id, "doc-1");
    assert!(item.active);
}

#[test]
fn test_into_item_keeps_explicit_active_flag() {
    let mut new_item = sword();
    new_item.active = Some(false);

    let item = new_item.into_item("doc-2");

    assert!(!item.active);
}

#[test]
fn test_is_redeemable_with_matches_normalized_code() {
    let item = sword().into_item("doc-3");

    assert!(item.is_redeemable_with(&RedeemCode::new("SWORD01")));
    assert!(item.is_redeemable_with(&RedeemCode::new("sword01")));
    assert!(!item.is_redeemable_with(&RedeemCode::new("axe01")));
}

#[test]
fn test_inactive_item_is_not_redeemable() {
    let mut item = sword().into_item("doc-4");
    item.active = false;

    assert!(!item.is_redeemable_with(&RedeemCode::new("sword01")));
}

#[test]
fn test_item_document_omits_id_and_uses_camel_case() {
    let item = sword().into_item("doc-5");

    let json = serde_json::to_value(&item).unwrap();

    assert!(json.get("id").is_none());
    assert_eq!(json["redeemCode"], "SWORD01");
    assert_eq!(json["name"], "Sword");
    assert_eq!(json["active"], true);
}

#[test]
fn test_new_item_deserializes_from_sparse_body() {
    let new_item: NewItem =
        serde_json::from_str(r#"{"redeemCode":"sword01","name":"Sword"}"#).unwrap();

    assert_eq!(new_item.name, "Sword");
    assert_eq!(new_item.redeem_code, Some(RedeemCode::new("SWORD01")));
    assert_eq!(new_item.value, 0);
    assert_eq!(new_item.active, None);
}
