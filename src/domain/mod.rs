//! # Domain Layer
//!
//! Core business types of the bookshelf catalog. Independent of any
//! framework or storage concern.
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Repository traits define data access contracts
//! - Entities keep their derived fields consistent

pub mod entities;

pub use entities::*;
