//! Core domain logic for the wardrobe tracker.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod images;
pub mod lifecycle;
pub mod logging;
pub mod model;
pub mod query;
pub mod reminder;
pub mod repo;
pub mod service;

pub use images::store::{FsImageStore, ImageResult, ImageStore, ImageStoreError};
pub use lifecycle::{
    apply_action, apply_action_named, parse_action_name, refresh_status, refresh_statuses,
    LifecycleError, RARELY_USED_AFTER_MONTHS,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::item::{ItemAction, ItemId, ItemStatus, ItemValidationError, NewItem, WardrobeItem};
pub use query::dashboard::{filter_items, StatusFacet};
pub use reminder::notifier::{LogNotifier, Notifier};
pub use reminder::policy::{
    due_after_cooldown, evaluate_reminders, inactivity_reminder, rarely_used_reminder, Reminder,
    ReminderKind, INACTIVITY_THRESHOLD_DAYS, RARELY_USED_THRESHOLD_DAYS, REMINDER_COOLDOWN_MS,
};
pub use repo::item_repo::{
    ItemListQuery, ItemRepository, RepoError, RepoResult, SqliteItemRepository,
};
pub use repo::reminder_repo::{ReminderLogRepository, SqliteReminderLogRepository};
pub use service::item_service::{
    ItemPatch, ItemService, ServiceError, ServiceResult, REMINDER_DELIVERY_DELAY_MS,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
