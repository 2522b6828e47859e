//! Book entity and repository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// A book on the shelf.
///
/// `finished` is derived from the page counts and is recomputed by every
/// constructor and mutator; nothing outside this module sets it directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Random 16-character id, immutable after creation
    pub id: String,

    pub name: String,

    pub year: Option<i32>,

    pub author: Option<String>,

    pub summary: Option<String>,

    pub publisher: Option<String>,

    pub page_count: u32,

    /// Never greater than `page_count`
    pub read_page: u32,

    pub reading: bool,

    pub finished: bool,

    /// Creation timestamp, never changes
    pub inserted_at: DateTime<Utc>,

    /// Last successful write, never earlier than `inserted_at`
    pub updated_at: DateTime<Utc>,
}

/// The mutable fields of a book, already validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookUpdate {
    pub name: String,
    pub year: Option<i32>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    pub page_count: u32,
    pub read_page: u32,
    pub reading: bool,
}

impl Book {
    /// Create a new book stamped with `now` for both timestamps.
    pub fn new(id: String, fields: BookUpdate, now: DateTime<Utc>) -> Self {
        let finished = is_finished(fields.page_count, fields.read_page);
        Self {
            id,
            name: fields.name,
            year: fields.year,
            author: fields.author,
            summary: fields.summary,
            publisher: fields.publisher,
            page_count: fields.page_count,
            read_page: fields.read_page,
            reading: fields.reading,
            finished,
            inserted_at: now,
            updated_at: now,
        }
    }

    /// Replace every mutable field, leaving `id` and `inserted_at` alone.
    pub fn apply(&mut self, fields: BookUpdate, now: DateTime<Utc>) {
        self.finished = is_finished(fields.page_count, fields.read_page);
        self.name = fields.name;
        self.year = fields.year;
        self.author = fields.author;
        self.summary = fields.summary;
        self.publisher = fields.publisher;
        self.page_count = fields.page_count;
        self.read_page = fields.read_page;
        self.reading = fields.reading;
        self.updated_at = now.max(self.inserted_at);
    }

    /// Reduced `{id, name, publisher}` projection used by listings.
    pub fn to_summary(&self) -> BookSummary {
        BookSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            publisher: self.publisher.clone(),
        }
    }
}

/// True once the reader has reached the last page.
pub fn is_finished(page_count: u32, read_page: u32) -> bool {
    read_page >= page_count
}

/// Book listing entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSummary {
    pub id: String,
    pub name: String,
    pub publisher: Option<String>,
}

/// Repository trait for Book data access operations.
///
/// Implementations must make `update` and `delete` atomic: the lookup and
/// the write happen without any other writer in between.
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// All books in insertion order.
    async fn find_all(&self) -> Result<Vec<Book>, AppError>;

    /// Find a book by its id.
    async fn find_by_id(&self, id: &str) -> Result<Option<Book>, AppError>;

    /// Append a new book. Fails if the id is live or was ever deleted.
    async fn insert(&self, book: Book) -> Result<(), AppError>;

    /// Apply an update in place. Returns `None` when no book has this id.
    async fn update(
        &self,
        id: &str,
        fields: BookUpdate,
        now: DateTime<Utc>,
    ) -> Result<Option<Book>, AppError>;

    /// Remove a book. Returns `false` when no book has this id.
    async fn delete(&self, id: &str) -> Result<bool, AppError>;

    /// Number of stored books.
    async fn count(&self) -> Result<usize, AppError>;
}
