//! Image storage boundary.
//!
//! # Responsibility
//! - Keep image bytes outside the relational store, addressed by opaque
//!   references carried on items.

pub mod store;
