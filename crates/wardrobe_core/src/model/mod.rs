//! Domain model for the wardrobe tracker.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep one item-centric shape shared by every layer above storage.
//!
//! # Invariants
//! - Every domain object is identified by a stable `ItemId`.
//! - Items are hard-deleted; image blobs are released by the caller through
//!   the image store collaborator.

pub mod item;
