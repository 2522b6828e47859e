//! Shared Utilities
//!
//! Common utilities used across all layers.

pub mod book_id;
pub mod error;
