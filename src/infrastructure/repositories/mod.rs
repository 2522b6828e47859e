//! Repository Implementations
//!
//! Concrete implementations of the repository traits defined in the domain
//! layer.
//!
//! ## Available Repositories
//!
//! - **InMemoryBookRepository** - Book collection held in process memory
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use bookshelf::infrastructure::repositories::InMemoryBookRepository;
//!
//! let book_repo = Arc::new(InMemoryBookRepository::new());
//! ```

mod book_repository;

pub use book_repository::InMemoryBookRepository;
