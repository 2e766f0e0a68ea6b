use chrono::{TimeZone, Utc};
use std::cell::RefCell;
use wardrobe_core::db::open_db_in_memory;
use wardrobe_core::{
    FsImageStore, ImageStore, ItemAction, ItemPatch, ItemService, ItemStatus, NewItem, Notifier,
    RepoError, ServiceError, SqliteItemRepository, SqliteReminderLogRepository, StatusFacet,
};

const HOUR_MS: i64 = 60 * 60 * 1000;

fn ms(year: i32, month: u32, day: u32) -> i64 {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0)
        .unwrap()
        .timestamp_millis()
}

fn fields(name: &str, category: &str) -> NewItem {
    NewItem {
        name: name.to_string(),
        category: category.to_string(),
        style: "Casual".to_string(),
        description: String::new(),
        colors: vec!["Blue".to_string()],
        image_paths: Vec::new(),
    }
}

/// Test double capturing schedule requests instead of delivering them.
struct RecordingNotifier {
    requests: RefCell<Vec<(String, String, i64)>>,
}

impl RecordingNotifier {
    fn new() -> Self {
        Self {
            requests: RefCell::new(Vec::new()),
        }
    }
}

impl Notifier for RecordingNotifier {
    fn schedule(&self, title: &str, body: &str, delay_ms: i64) {
        self.requests
            .borrow_mut()
            .push((title.to_string(), body.to_string(), delay_ms));
    }
}

#[test]
fn create_patch_and_reload() {
    let conn = open_db_in_memory().unwrap();
    let service = ItemService::new(SqliteItemRepository::new(&conn));

    let created = service
        .create_item(fields("Blue Shirt", "Tops"), ms(2025, 1, 1))
        .unwrap();
    assert_eq!(created.status, ItemStatus::Available);

    let patch = ItemPatch {
        name: Some("Linen Shirt".to_string()),
        colors: Some(vec!["White".to_string(), "Blue".to_string()]),
        ..ItemPatch::default()
    };
    let patched = service.update_item(created.id, &patch).unwrap();
    assert_eq!(patched.name, "Linen Shirt");
    assert_eq!(patched.colors, ["White", "Blue"]);
    // untouched fields survive the patch
    assert_eq!(patched.category, "Tops");
    assert_eq!(patched.date_added, ms(2025, 1, 1));

    let reloaded = service.get_item(created.id).unwrap();
    assert_eq!(reloaded, patched);
}

#[test]
fn patch_cannot_make_an_item_invalid() {
    let conn = open_db_in_memory().unwrap();
    let service = ItemService::new(SqliteItemRepository::new(&conn));

    let created = service
        .create_item(fields("Blue Shirt", "Tops"), ms(2025, 1, 1))
        .unwrap();

    let patch = ItemPatch {
        colors: Some(Vec::new()),
        ..ItemPatch::default()
    };
    let err = service.update_item(created.id, &patch).unwrap_err();
    assert!(matches!(err, ServiceError::Repo(RepoError::Validation(_))));

    let reloaded = service.get_item(created.id).unwrap();
    assert_eq!(reloaded.colors, ["Blue"]);
}

#[test]
fn get_missing_item_is_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = ItemService::new(SqliteItemRepository::new(&conn));

    let ghost = wardrobe_core::WardrobeItem::new(fields("Ghost", "Tops"), 0);
    let err = service.get_item(ghost.id).unwrap_err();
    assert!(matches!(err, ServiceError::Repo(RepoError::NotFound(id)) if id == ghost.id));
}

#[test]
fn named_action_flows_through_to_storage() {
    let conn = open_db_in_memory().unwrap();
    let service = ItemService::new(SqliteItemRepository::new(&conn));

    let created = service
        .create_item(fields("Blue Shirt", "Tops"), ms(2025, 1, 1))
        .unwrap();

    let worn = service
        .apply_action_named(created.id, "use", ms(2025, 1, 10))
        .unwrap();
    assert_eq!(worn.status, ItemStatus::Unavailable);

    let reloaded = service.get_item(created.id).unwrap();
    assert_eq!(reloaded.status, ItemStatus::Unavailable);
    assert_eq!(reloaded.last_action, Some(ItemAction::Use));
    assert_eq!(reloaded.last_used, Some(ms(2025, 1, 10)));
}

#[test]
fn unknown_action_name_fails_before_storage_is_touched() {
    let conn = open_db_in_memory().unwrap();
    let service = ItemService::new(SqliteItemRepository::new(&conn));

    let created = service
        .create_item(fields("Blue Shirt", "Tops"), ms(2025, 1, 1))
        .unwrap();

    let err = service
        .apply_action_named(created.id, "ironing", ms(2025, 1, 10))
        .unwrap_err();
    assert!(matches!(err, ServiceError::Lifecycle(_)));

    let reloaded = service.get_item(created.id).unwrap();
    assert_eq!(reloaded.status, ItemStatus::Available);
    assert_eq!(reloaded.last_action, None);
}

#[test]
fn dashboard_refreshes_and_persists_rarely_used_statuses() {
    let conn = open_db_in_memory().unwrap();
    let service = ItemService::new(SqliteItemRepository::new(&conn));

    let shirt = service
        .create_item(fields("Blue Shirt", "Tops"), ms(2025, 1, 1))
        .unwrap();
    service
        .apply_action(shirt.id, ItemAction::Use, ms(2025, 1, 5))
        .unwrap();
    service
        .apply_action(shirt.id, ItemAction::Available, ms(2025, 1, 6))
        .unwrap();

    let rarely_used = service
        .dashboard("", StatusFacet::RarelyUsed, ms(2025, 3, 10))
        .unwrap();
    assert_eq!(rarely_used.len(), 1);
    assert_eq!(rarely_used[0].id, shirt.id);

    // the re-derived status is persisted, not display-only
    let reloaded = service.get_item(shirt.id).unwrap();
    assert_eq!(reloaded.status, ItemStatus::RarelyUsed);
}

#[test]
fn dashboard_combines_text_and_facet() {
    let conn = open_db_in_memory().unwrap();
    let service = ItemService::new(SqliteItemRepository::new(&conn));

    service
        .create_item(fields("Blue Shirt", "Tops"), ms(2025, 1, 1))
        .unwrap();
    let jeans = service
        .create_item(fields("Black Jeans", "Bottoms"), ms(2025, 1, 2))
        .unwrap();
    service
        .apply_action(jeans.id, ItemAction::Laundry, ms(2025, 1, 3))
        .unwrap();

    let hits = service
        .dashboard("black", StatusFacet::Unavailable, ms(2025, 1, 4))
        .unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, jeans.id);

    let misses = service
        .dashboard("black", StatusFacet::Available, ms(2025, 1, 4))
        .unwrap();
    assert!(misses.is_empty());
}

#[test]
fn reminders_fire_once_then_respect_the_cooldown() {
    let conn = open_db_in_memory().unwrap();
    let service = ItemService::new(SqliteItemRepository::new(&conn));
    let ledger = SqliteReminderLogRepository::new(&conn);
    let notifier = RecordingNotifier::new();

    // never acted on and never worn: both rules select it
    service
        .create_item(fields("Blue Shirt", "Tops"), ms(2025, 1, 1))
        .unwrap();

    let now = ms(2025, 6, 1);
    let delivered = service.evaluate_reminders(&ledger, &notifier, now).unwrap();
    assert_eq!(delivered.len(), 2);
    assert_eq!(notifier.requests.borrow().len(), 2);

    let again = service.evaluate_reminders(&ledger, &notifier, now + HOUR_MS).unwrap();
    assert!(again.is_empty());
    assert_eq!(notifier.requests.borrow().len(), 2);

    let later = service
        .evaluate_reminders(&ledger, &notifier, now + 25 * HOUR_MS)
        .unwrap();
    assert_eq!(later.len(), 2);
    assert_eq!(notifier.requests.borrow().len(), 4);
}

#[test]
fn delete_releases_stored_images() {
    let dir = tempfile::tempdir().unwrap();
    let images = FsImageStore::new(dir.path()).unwrap();
    let conn = open_db_in_memory().unwrap();
    let service = ItemService::new(SqliteItemRepository::new(&conn));

    let reference = images.store(b"jpeg bytes").unwrap();
    let mut fields = fields("Blue Shirt", "Tops");
    fields.image_paths = vec![reference.clone()];
    let created = service.create_item(fields, ms(2025, 1, 1)).unwrap();

    service.delete_item(created.id, &images).unwrap();

    assert!(matches!(
        service.get_item(created.id).unwrap_err(),
        ServiceError::Repo(RepoError::NotFound(_))
    ));
    assert!(!dir.path().join(&reference).exists());
}

#[test]
fn delete_tolerates_already_released_images() {
    let dir = tempfile::tempdir().unwrap();
    let images = FsImageStore::new(dir.path()).unwrap();
    let conn = open_db_in_memory().unwrap();
    let service = ItemService::new(SqliteItemRepository::new(&conn));

    let mut fields = fields("Blue Shirt", "Tops");
    fields.image_paths = vec!["long-gone.jpg".to_string()];
    let created = service.create_item(fields, ms(2025, 1, 1)).unwrap();

    service.delete_item(created.id, &images).unwrap();
}
