use uuid::Uuid;
use wardrobe_core::{ItemStatus, ItemValidationError, NewItem, WardrobeItem};

fn sample_fields() -> NewItem {
    NewItem {
        name: "Blue Shirt".to_string(),
        category: "Tops".to_string(),
        style: "Casual".to_string(),
        description: "A stylish blue shirt.".to_string(),
        colors: vec!["Blue".to_string(), "White".to_string()],
        image_paths: vec!["blue_shirt.jpg".to_string()],
    }
}

#[test]
fn new_item_sets_defaults() {
    let item = WardrobeItem::new(sample_fields(), 1_700_000_000_000);

    assert!(!item.id.is_nil());
    assert_eq!(item.name, "Blue Shirt");
    assert_eq!(item.category, "Tops");
    assert_eq!(item.date_added, 1_700_000_000_000);
    assert_eq!(item.status, ItemStatus::Available);
    assert_eq!(item.last_action, None);
    assert_eq!(item.last_action_date, None);
    assert_eq!(item.last_used, None);
}

#[test]
fn colors_keep_insertion_order_and_duplicates() {
    let mut fields = sample_fields();
    fields.colors = vec![
        "Blue".to_string(),
        "White".to_string(),
        "Blue".to_string(),
    ];

    let item = WardrobeItem::new(fields, 0);
    assert_eq!(item.colors, ["Blue", "White", "Blue"]);
}

#[test]
fn validate_rejects_blank_name() {
    let mut fields = sample_fields();
    fields.name = "   ".to_string();

    let item = WardrobeItem::new(fields, 0);
    assert_eq!(item.validate().unwrap_err(), ItemValidationError::BlankName);
}

#[test]
fn validate_rejects_blank_category() {
    let mut fields = sample_fields();
    fields.category = String::new();

    let item = WardrobeItem::new(fields, 0);
    assert_eq!(
        item.validate().unwrap_err(),
        ItemValidationError::BlankCategory
    );
}

#[test]
fn validate_rejects_empty_colors() {
    let mut fields = sample_fields();
    fields.colors = Vec::new();

    let item = WardrobeItem::new(fields, 0);
    assert_eq!(item.validate().unwrap_err(), ItemValidationError::NoColors);
}

#[test]
fn empty_description_and_images_are_allowed() {
    let mut fields = sample_fields();
    fields.description = String::new();
    fields.image_paths = Vec::new();

    let item = WardrobeItem::new(fields, 0);
    assert!(item.validate().is_ok());
}

#[test]
fn item_serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let item = WardrobeItem::with_id(id, sample_fields(), 1_700_000_000_000);

    let json = serde_json::to_value(&item).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["name"], "Blue Shirt");
    assert_eq!(json["category"], "Tops");
    assert_eq!(json["colors"], serde_json::json!(["Blue", "White"]));
    assert_eq!(json["image_paths"], serde_json::json!(["blue_shirt.jpg"]));
    assert_eq!(json["date_added"], 1_700_000_000_000_i64);
    assert_eq!(json["status"], "available");
    assert_eq!(json["last_action"], serde_json::Value::Null);
    assert_eq!(json["last_used"], serde_json::Value::Null);

    let decoded: WardrobeItem = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, item);
}

#[test]
fn status_and_action_wire_names_are_snake_case() {
    use wardrobe_core::ItemAction;

    assert_eq!(
        serde_json::to_value(ItemStatus::RarelyUsed).unwrap(),
        serde_json::json!("rarely_used")
    );
    assert_eq!(
        serde_json::to_value(ItemAction::Use).unwrap(),
        serde_json::json!("use")
    );
    assert_eq!(
        serde_json::to_value(ItemAction::Laundry).unwrap(),
        serde_json::json!("laundry")
    );
}
