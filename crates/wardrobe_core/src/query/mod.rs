//! Display-oriented query entry points.
//!
//! # Responsibility
//! - Shape loaded item collections for dashboard consumption.
//! - Keep filtering logic pure and storage-agnostic.

pub mod dashboard;
