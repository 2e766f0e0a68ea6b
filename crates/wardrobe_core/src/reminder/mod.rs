//! Reminder policy and delivery boundary.
//!
//! # Responsibility
//! - Derive threshold-based reminder requests from the item collection.
//! - Keep actual delivery behind the `Notifier` contract.

pub mod notifier;
pub mod policy;
