//! Item lifecycle engine.
//!
//! # Responsibility
//! - Apply explicit lifecycle actions to items.
//! - Re-derive the time-based rarely-used status.
//!
//! # Invariants
//! - All functions here are pure over item values; no I/O.
//! - `refresh_status` is idempotent for a fixed `now`.
//! - Unknown action names are rejected, never silently ignored.

use crate::model::item::{ItemAction, ItemStatus, WardrobeItem};
use chrono::{DateTime, Datelike, Utc};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Whole calendar months without a `Use` action before an item is
/// re-derived as rarely used.
pub const RARELY_USED_AFTER_MONTHS: i32 = 2;

/// Pure-logic error raised at the action-name boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleError {
    InvalidAction { value: String },
}

impl Display for LifecycleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidAction { value } => write!(
                f,
                "unknown lifecycle action `{value}`; expected use|laundry|repair|available"
            ),
        }
    }
}

impl Error for LifecycleError {}

/// Applies an explicit lifecycle action to an item.
///
/// # Contract
/// - Sets `last_action` and `last_action_date` for every action.
/// - Sets `last_used` only for [`ItemAction::Use`].
/// - `Use | Laundry | Repair` make the item unavailable; `Available` makes
///   it available again.
/// - The explicit status wins until the next [`refresh_status`] pass.
pub fn apply_action(item: &mut WardrobeItem, action: ItemAction, now: i64) {
    item.last_action = Some(action);
    item.last_action_date = Some(now);

    if action == ItemAction::Use {
        item.last_used = Some(now);
    }

    item.status = match action {
        ItemAction::Use | ItemAction::Laundry | ItemAction::Repair => ItemStatus::Unavailable,
        ItemAction::Available => ItemStatus::Available,
    };
}

/// Parses an action name and applies it.
///
/// # Errors
/// - [`LifecycleError::InvalidAction`] on unknown names; the item is left
///   unmodified in that case.
pub fn apply_action_named(
    item: &mut WardrobeItem,
    action: &str,
    now: i64,
) -> Result<(), LifecycleError> {
    let parsed = parse_action_name(action)?;
    apply_action(item, parsed, now);
    Ok(())
}

/// Parses a user-facing action name, case-insensitively.
pub fn parse_action_name(value: &str) -> Result<ItemAction, LifecycleError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "use" => Ok(ItemAction::Use),
        "laundry" => Ok(ItemAction::Laundry),
        "repair" => Ok(ItemAction::Repair),
        "available" => Ok(ItemAction::Available),
        _ => Err(LifecycleError::InvalidAction {
            value: value.to_string(),
        }),
    }
}

/// Re-derives the rarely-used status from elapsed time since last wear.
///
/// # Contract
/// - Items never worn (`last_used` unset) are left unchanged.
/// - Month difference uses calendar year/month fields in UTC, not elapsed
///   days: two instants in the same calendar month are 0 months apart.
/// - Idempotent: re-running with the same or later `now` never clears
///   `RarelyUsed`; only an explicit action does.
pub fn refresh_status(item: &mut WardrobeItem, now: i64) {
    let Some(last_used) = item.last_used else {
        return;
    };

    if whole_months_between(last_used, now) >= RARELY_USED_AFTER_MONTHS {
        item.status = ItemStatus::RarelyUsed;
    }
}

/// Applies [`refresh_status`] across a whole collection.
///
/// Run before any display query so callers always see statuses as of query
/// time.
pub fn refresh_statuses(items: &mut [WardrobeItem], now: i64) {
    for item in items {
        refresh_status(item, now);
    }
}

fn whole_months_between(earlier_ms: i64, later_ms: i64) -> i32 {
    let earlier = utc_from_epoch_ms(earlier_ms);
    let later = utc_from_epoch_ms(later_ms);
    (later.year() - earlier.year()) * 12 + later.month() as i32 - earlier.month() as i32
}

fn utc_from_epoch_ms(epoch_ms: i64) -> DateTime<Utc> {
    // Out-of-range values clamp to the epoch rather than panic.
    DateTime::from_timestamp_millis(epoch_ms).unwrap_or(DateTime::UNIX_EPOCH)
}
