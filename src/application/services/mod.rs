//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **BookService**: Book catalog create, list, get, update, delete

pub mod book_service;

pub use book_service::{BookError, BookInputDto, BookService, BookServiceImpl};
