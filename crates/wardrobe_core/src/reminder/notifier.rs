//! Notification delivery contract.
//!
//! # Responsibility
//! - Define the boundary through which reminder requests leave the core.
//!
//! # Invariants
//! - Delivery is fire-and-forget; the core never awaits confirmation.

use log::info;

/// External delivery collaborator for scheduled notifications.
pub trait Notifier {
    /// Requests a notification after `delay_ms` milliseconds.
    fn schedule(&self, title: &str, body: &str, delay_ms: i64);
}

/// Notifier that only records the request in the structured log.
///
/// Used by the CLI probe and anywhere a real delivery channel is absent.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn schedule(&self, title: &str, body: &str, delay_ms: i64) {
        info!(
            "event=notification_scheduled module=reminder status=ok delay_ms={delay_ms} title={title} body={body}"
        );
    }
}
