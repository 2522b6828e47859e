//! Book ID Generator
//!
//! Short random identifiers for book records.

/// Length of every generated book id
pub const BOOK_ID_LENGTH: usize = 16;

/// Generate a new book id.
///
/// Ids are drawn from the URL-safe alphabet `A-Za-z0-9_-`, which gives
/// 96 bits of randomness at this length.
pub fn generate_book_id() -> String {
    nanoid::nanoid!(BOOK_ID_LENGTH)
}
