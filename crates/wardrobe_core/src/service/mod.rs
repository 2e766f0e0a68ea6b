//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository, lifecycle, query and reminder calls into
//!   use-case level APIs.
//! - Keep callers decoupled from storage details.

pub mod item_service;
