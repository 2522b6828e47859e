//! Infrastructure Layer
//!
//! Storage implementations behind the domain repository traits.

pub mod repositories;
