//! Data Transfer Objects
//!
//! Request and response bodies of the HTTP API.

pub mod request;
pub mod response;

pub use request::BookRequest;
pub use response::{ApiResponse, BookData, BookIdData, BooksData, ResponseStatus};
