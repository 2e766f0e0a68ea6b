//! Threshold-based reminder rules.
//!
//! # Responsibility
//! - Decide which reminders are warranted for a collection at a point in
//!   time, and shape their messages.
//!
//! # Invariants
//! - Rules are pure: they produce reminder requests, never deliver them.
//! - The two rules are independent and may both fire in one pass.
//! - Cooldown state lives outside this module; `due_after_cooldown` only
//!   interprets it.

use crate::model::item::WardrobeItem;

/// Whole days without any lifecycle action before an item counts as
/// inactive.
pub const INACTIVITY_THRESHOLD_DAYS: i64 = 14;

/// Whole days without a `Use` action before an item counts as rarely worn.
pub const RARELY_USED_THRESHOLD_DAYS: i64 = 60;

/// Minimum gap between two deliveries of the same reminder kind.
///
/// The source behavior re-notified on every evaluation pass; this window
/// closes that gap.
pub const REMINDER_COOLDOWN_MS: i64 = 24 * 60 * 60 * 1000;

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// The two independent reminder rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReminderKind {
    Inactivity,
    RarelyUsed,
}

impl ReminderKind {
    /// Stable name used for persistence and logging.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Inactivity => "inactivity",
            Self::RarelyUsed => "rarely_used",
        }
    }
}

/// A policy-derived request to notify the user, decoupled from delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    pub kind: ReminderKind,
    pub title: String,
    pub body: String,
    /// How many items triggered the rule.
    pub count: usize,
}

/// Selects items with no recorded action, or whose last action is at least
/// [`INACTIVITY_THRESHOLD_DAYS`] whole days old.
///
/// Returns one reminder carrying the count when the selection is non-empty.
pub fn inactivity_reminder(items: &[WardrobeItem], now: i64) -> Option<Reminder> {
    let count = items
        .iter()
        .filter(|item| match item.last_action_date {
            None => true,
            Some(at) => whole_days_between(at, now) >= INACTIVITY_THRESHOLD_DAYS,
        })
        .count();

    (count > 0).then(|| Reminder {
        kind: ReminderKind::Inactivity,
        title: "Don't Forget Your Wardrobe".to_string(),
        body: format!(
            "{count} items have been inactive for some time. They may need your attention."
        ),
        count,
    })
}

/// Selects items never worn, or last worn at least
/// [`RARELY_USED_THRESHOLD_DAYS`] whole days ago.
///
/// Returns one reminder carrying the count when the selection is non-empty.
pub fn rarely_used_reminder(items: &[WardrobeItem], now: i64) -> Option<Reminder> {
    let count = items
        .iter()
        .filter(|item| match item.last_used {
            None => true,
            Some(at) => whole_days_between(at, now) >= RARELY_USED_THRESHOLD_DAYS,
        })
        .count();

    (count > 0).then(|| Reminder {
        kind: ReminderKind::RarelyUsed,
        title: "Time to Wear Your Clothes!".to_string(),
        body: format!("{count} clothes haven't been worn in a while. Check your wardrobe!"),
        count,
    })
}

/// Evaluates both rules over the collection.
pub fn evaluate_reminders(items: &[WardrobeItem], now: i64) -> Vec<Reminder> {
    [inactivity_reminder(items, now), rarely_used_reminder(items, now)]
        .into_iter()
        .flatten()
        .collect()
}

/// Decides whether a reminder kind may fire again given its last recorded
/// fire time.
pub fn due_after_cooldown(last_fired: Option<i64>, now: i64) -> bool {
    match last_fired {
        None => true,
        Some(at) => now - at >= REMINDER_COOLDOWN_MS,
    }
}

fn whole_days_between(earlier_ms: i64, later_ms: i64) -> i64 {
    (later_ms - earlier_ms).div_euclid(DAY_MS)
}
