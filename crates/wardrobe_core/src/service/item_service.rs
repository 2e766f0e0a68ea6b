//! Wardrobe use-case service.
//!
//! # Responsibility
//! - Provide stable entry points for item CRUD, lifecycle actions,
//!   dashboard queries and reminder evaluation.
//! - Delegate persistence to repository implementations and delivery to
//!   the notifier collaborator.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/persistence contracts.
//! - Errors propagate to the caller unchanged; nothing is logged-and-
//!   swallowed.
//! - Collaborators are passed in explicitly; the service holds no global
//!   state.

use crate::images::store::{ImageStore, ImageStoreError};
use crate::lifecycle::{self, LifecycleError};
use crate::model::item::{ItemAction, ItemId, NewItem, WardrobeItem};
use crate::query::dashboard::{filter_items, StatusFacet};
use crate::reminder::notifier::Notifier;
use crate::reminder::policy::{self, Reminder};
use crate::repo::item_repo::{ItemListQuery, ItemRepository, RepoError};
use crate::repo::reminder_repo::ReminderLogRepository;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Delay handed to the notifier, matching the short grace period the
/// original client used before showing a notification.
pub const REMINDER_DELIVERY_DELAY_MS: i64 = 5_000;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Use-case level error unioning the layers a service call can touch.
#[derive(Debug)]
pub enum ServiceError {
    Repo(RepoError),
    Lifecycle(LifecycleError),
    Images(ImageStoreError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::Lifecycle(err) => write!(f, "{err}"),
            Self::Images(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::Lifecycle(err) => Some(err),
            Self::Images(err) => Some(err),
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<LifecycleError> for ServiceError {
    fn from(value: LifecycleError) -> Self {
        Self::Lifecycle(value)
    }
}

impl From<ImageStoreError> for ServiceError {
    fn from(value: ImageStoreError) -> Self {
        Self::Images(value)
    }
}

/// Partial edit of the caller-editable item fields.
///
/// Status and action timestamps are deliberately absent: the lifecycle
/// engine is their only writer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub style: Option<String>,
    pub description: Option<String>,
    pub colors: Option<Vec<String>>,
    pub image_paths: Option<Vec<String>>,
}

/// Use-case service wrapper over an item repository.
pub struct ItemService<R: ItemRepository> {
    repo: R,
}

impl<R: ItemRepository> ItemService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a new item and persists it.
    ///
    /// # Contract
    /// - `date_added` is stamped from `now` and never changes afterwards.
    /// - Returns the stored item value.
    pub fn create_item(&self, fields: NewItem, now: i64) -> ServiceResult<WardrobeItem> {
        let item = WardrobeItem::new(fields, now);
        self.repo.create_item(&item)?;
        Ok(item)
    }

    /// Gets one item by stable ID.
    ///
    /// # Errors
    /// - `RepoError::NotFound` when no such item exists.
    pub fn get_item(&self, id: ItemId) -> ServiceResult<WardrobeItem> {
        self.repo
            .get_item(id)?
            .ok_or(ServiceError::Repo(RepoError::NotFound(id)))
    }

    /// Lists items using filter and pagination options.
    pub fn list_items(&self, query: &ItemListQuery) -> ServiceResult<Vec<WardrobeItem>> {
        Ok(self.repo.list_items(query)?)
    }

    /// Applies a partial edit to the caller-editable fields.
    ///
    /// Returns repository-level not-found or validation errors unchanged.
    pub fn update_item(&self, id: ItemId, patch: &ItemPatch) -> ServiceResult<WardrobeItem> {
        let mut item = self.get_item(id)?;

        if let Some(name) = &patch.name {
            item.name = name.clone();
        }
        if let Some(category) = &patch.category {
            item.category = category.clone();
        }
        if let Some(style) = &patch.style {
            item.style = style.clone();
        }
        if let Some(description) = &patch.description {
            item.description = description.clone();
        }
        if let Some(colors) = &patch.colors {
            item.colors = colors.clone();
        }
        if let Some(image_paths) = &patch.image_paths {
            item.image_paths = image_paths.clone();
        }

        self.repo.update_item(&item)?;
        Ok(item)
    }

    /// Deletes an item and releases its stored images.
    ///
    /// # Contract
    /// - The row is removed first; an image reference that is already gone
    ///   counts as released.
    pub fn delete_item(&self, id: ItemId, images: &dyn ImageStore) -> ServiceResult<()> {
        let item = self.get_item(id)?;
        self.repo.delete_item(id)?;

        for reference in &item.image_paths {
            match images.delete(reference) {
                Ok(()) | Err(ImageStoreError::NotFound(_)) => {}
                Err(err) => return Err(err.into()),
            }
        }

        Ok(())
    }

    /// Applies a lifecycle action to an item and persists the result.
    pub fn apply_action(
        &self,
        id: ItemId,
        action: ItemAction,
        now: i64,
    ) -> ServiceResult<WardrobeItem> {
        let mut item = self.get_item(id)?;
        lifecycle::apply_action(&mut item, action, now);
        self.repo.update_item(&item)?;
        Ok(item)
    }

    /// Applies a lifecycle action given by name.
    ///
    /// # Errors
    /// - `LifecycleError::InvalidAction` on unknown names, before any
    ///   storage access.
    pub fn apply_action_named(
        &self,
        id: ItemId,
        action: &str,
        now: i64,
    ) -> ServiceResult<WardrobeItem> {
        let parsed = lifecycle::parse_action_name(action)?;
        self.apply_action(id, parsed, now)
    }

    /// Loads the collection, re-derives statuses as of `now`, then filters
    /// for display.
    ///
    /// # Contract
    /// - Status re-derivation runs over the whole collection before the
    ///   filter, so returned statuses reflect query time.
    /// - Rows whose status changed are persisted.
    pub fn dashboard(
        &self,
        search_text: &str,
        facet: StatusFacet,
        now: i64,
    ) -> ServiceResult<Vec<WardrobeItem>> {
        let mut items = self.repo.list_items(&ItemListQuery::default())?;

        for item in &mut items {
            let before = item.status;
            lifecycle::refresh_status(item, now);
            if item.status != before {
                self.repo.update_item(item)?;
            }
        }

        Ok(filter_items(&items, search_text, facet))
    }

    /// Evaluates reminder rules and delivers what is due.
    ///
    /// # Contract
    /// - Statuses are refreshed before evaluation.
    /// - A kind inside its cooldown window is skipped without delivery.
    /// - Delivery is fire-and-forget; the ledger records the fire time.
    ///
    /// Returns the reminders that were actually delivered.
    pub fn evaluate_reminders<L: ReminderLogRepository>(
        &self,
        ledger: &L,
        notifier: &dyn Notifier,
        now: i64,
    ) -> ServiceResult<Vec<Reminder>> {
        let mut items = self.repo.list_items(&ItemListQuery::default())?;
        lifecycle::refresh_statuses(&mut items, now);

        let mut delivered = Vec::new();
        for reminder in policy::evaluate_reminders(&items, now) {
            let last_fired = ledger.last_fired(reminder.kind)?;
            if !policy::due_after_cooldown(last_fired, now) {
                info!(
                    "event=reminder_suppressed module=service status=ok kind={} count={}",
                    reminder.kind.as_str(),
                    reminder.count
                );
                continue;
            }

            notifier.schedule(&reminder.title, &reminder.body, REMINDER_DELIVERY_DELAY_MS);
            ledger.record_fired(reminder.kind, now)?;
            info!(
                "event=reminder_fired module=service status=ok kind={} count={}",
                reminder.kind.as_str(),
                reminder.count
            );
            delivered.push(reminder);
        }

        Ok(delivered)
    }
}
