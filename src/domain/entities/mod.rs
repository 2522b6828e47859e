//! # Domain Entities
//!
//! The catalog has a single entity, the **Book**, together with its listing
//! projection (**BookSummary**) and the repository trait that defines data
//! access. The trait is implemented in the infrastructure layer, following
//! the dependency inversion principle.

mod book;

pub use book::{is_finished, Book, BookRepository, BookSummary, BookUpdate};
