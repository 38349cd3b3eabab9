use crate::{InventoryEntry, NewItem, RedeemCode};

#[test]
fn test_first_acquisition_snapshots_item_fields() {
    let item = NewItem {
        name: "Potion".to_string(),
        description: Some("Restores health".to_string()),
        category: Some("consumable".to_string()),
        rarity: Some("rare".to_string()),
        value: 50,
        icon: Some("potion.png".to_string()),
        redeem_code: Some(RedeemCode::new("pocao01")),
        active: Some(true),
    }
    .into_item("item-1");

    let entry = InventoryEntry::first_acquisition(9, &item);

    assert_eq!(entry.user_id, 9);
    assert_eq!(entry.item_id, "item-1");
    assert_eq!(entry.item_name, "Potion");
    assert_eq!(entry.item_description.as_deref(), Some("Restores health"));
    assert_eq!(entry.item_category.as_deref(), Some("consumable"));
    assert_eq!(entry.item_rarity.as_deref(), Some("rare"));
    assert_eq!(entry.item_icon.as_deref(), Some("potion.png"));
    assert_eq!(entry.quantity, 1);
    assert!(entry.acquired_at > 0);
}

#[test]
fn test_entry_document_omits_id_and_uses_camel_case() {
    let item = NewItem {
        name: "Potion".to_string(),
        ..NewItem::default()
    }
    .into_item("item-2");

    let entry = InventoryEntry::first_acquisition(3, &item);
    let json = serde_json::to_value(&entry).unwrap();

    assert!(json.get("id").is_none());
    assert_eq!(json["userId"], 3);
    assert_eq!(json["itemId"], "item-2");
    assert_eq!(json["itemName"], "Potion");
    assert_eq!(json["quantity"], 1);
    assert!(json["acquiredAt"].as_i64().unwrap() > 0);
}
