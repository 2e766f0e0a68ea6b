//! Wardrobe item domain model.
//!
//! # Responsibility
//! - Define the canonical wardrobe item record and its enumerated states.
//! - Provide creation helpers and write-path validation.
//!
//! # Invariants
//! - `id` is stable and never reused for another item.
//! - `date_added` is set once at creation and never rewritten.
//! - `colors` is never null; "no colors" is the empty sequence, but every
//!   write path requires at least one entry.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a wardrobe item.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ItemId = Uuid;

/// Current wearability state of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    /// Ready to wear.
    Available,
    /// Being worn, washed or repaired.
    Unavailable,
    /// Not worn for at least two calendar months.
    RarelyUsed,
}

/// Explicit lifecycle event applied to an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemAction {
    /// The item was worn.
    Use,
    /// The item went into laundry.
    Laundry,
    /// The item was sent for repair.
    Repair,
    /// The item was put back into rotation.
    Available,
}

/// Required creation fields for a wardrobe item.
///
/// Identity, timestamps and status are assigned by the constructor, not by
/// the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub name: String,
    pub category: String,
    pub style: String,
    pub description: String,
    /// Ordered color names; duplicates are kept as given.
    pub colors: Vec<String>,
    /// Ordered references into the image store; may be empty.
    pub image_paths: Vec<String>,
}

/// Canonical wardrobe item record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WardrobeItem {
    /// Stable global ID used for lookups and image ownership.
    pub id: ItemId,
    pub name: String,
    pub category: String,
    pub style: String,
    pub description: String,
    /// Insertion order is display order; not deduplicated.
    pub colors: Vec<String>,
    /// References into the image store collaborator; contents are opaque here.
    pub image_paths: Vec<String>,
    /// Unix epoch milliseconds, immutable after creation.
    pub date_added: i64,
    pub status: ItemStatus,
    /// Most recent lifecycle action, unset until the first action.
    pub last_action: Option<ItemAction>,
    /// Unix epoch milliseconds of `last_action`.
    pub last_action_date: Option<i64>,
    /// Unix epoch milliseconds of the most recent `Use` action.
    /// Non-decreasing as long as the caller supplies non-decreasing clocks.
    pub last_used: Option<i64>,
}

impl WardrobeItem {
    /// Creates a new item with a generated stable ID.
    ///
    /// # Invariants
    /// - `status` starts as [`ItemStatus::Available`].
    /// - Action timestamps start unset.
    pub fn new(fields: NewItem, date_added: i64) -> Self {
        Self::with_id(Uuid::new_v4(), fields, date_added)
    }

    /// Creates a new item with a caller-provided stable ID.
    ///
    /// Used by import paths where identity already exists externally.
    /// Does not validate; call [`WardrobeItem::validate`] before persisting.
    pub fn with_id(id: ItemId, fields: NewItem, date_added: i64) -> Self {
        Self {
            id,
            name: fields.name,
            category: fields.category,
            style: fields.style,
            description: fields.description,
            colors: fields.colors,
            image_paths: fields.image_paths,
            date_added,
            status: ItemStatus::Available,
            last_action: None,
            last_action_date: None,
            last_used: None,
        }
    }

    /// Checks the required-field rules enforced on every write path.
    ///
    /// # Errors
    /// - [`ItemValidationError::BlankName`] when `name` is empty or whitespace.
    /// - [`ItemValidationError::BlankCategory`] likewise for `category`.
    /// - [`ItemValidationError::NoColors`] when `colors` is empty.
    pub fn validate(&self) -> Result<(), ItemValidationError> {
        if self.name.trim().is_empty() {
            return Err(ItemValidationError::BlankName);
        }
        if self.category.trim().is_empty() {
            return Err(ItemValidationError::BlankCategory);
        }
        if self.colors.is_empty() {
            return Err(ItemValidationError::NoColors);
        }
        Ok(())
    }
}

/// Required-field violation raised before any persistence happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemValidationError {
    BlankName,
    BlankCategory,
    NoColors,
}

impl Display for ItemValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankName => write!(f, "item name must not be blank"),
            Self::BlankCategory => write!(f, "item category must not be blank"),
            Self::NoColors => write!(f, "item must have at least one color"),
        }
    }
}

impl Error for ItemValidationError {}
