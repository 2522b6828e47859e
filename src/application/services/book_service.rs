//! Book Service
//!
//! Validation and catalog operations for books.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{Book, BookRepository, BookSummary, BookUpdate};
use crate::shared::book_id::generate_book_id;
use crate::shared::error::AppError;

/// Book service trait
#[async_trait]
pub trait BookService: Send + Sync {
    /// Validate and store a new book, returning its id
    async fn create_book(&self, input: BookInputDto) -> Result<String, BookError>;

    /// `{id, name, publisher}` of every book, in insertion order
    async fn list_summaries(&self) -> Result<Vec<BookSummary>, BookError>;

    /// Get a book by id
    async fn get_book(&self, id: &str) -> Result<Book, BookError>;

    /// Replace every mutable field of a book
    async fn update_book(&self, id: &str, input: BookInputDto) -> Result<Book, BookError>;

    /// Delete a book
    async fn delete_book(&self, id: &str) -> Result<(), BookError>;
}

/// Unvalidated book fields as submitted by a client
#[derive(Debug, Clone, Default)]
pub struct BookInputDto {
    pub name: Option<String>,
    pub year: Option<i32>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    pub page_count: u32,
    pub read_page: u32,
    pub reading: bool,
}

impl BookInputDto {
    /// Check the payload rules in order: name first, then page counts.
    pub fn validate(self) -> Result<BookUpdate, BookError> {
        let name = self.name.ok_or(BookError::MissingName)?;

        if self.read_page > self.page_count {
            return Err(BookError::PageCountExceeded);
        }

        Ok(BookUpdate {
            name,
            year: self.year,
            author: self.author,
            summary: self.summary,
            publisher: self.publisher,
            page_count: self.page_count,
            read_page: self.read_page,
            reading: self.reading,
        })
    }
}

/// Book service errors
#[derive(Debug, thiserror::Error)]
pub enum BookError {
    #[error("Book name is required")]
    MissingName,

    #[error("readPage must not be greater than pageCount")]
    PageCountExceeded,

    #[error("Book not found")]
    NotFound,

    #[error("Book could not be stored")]
    InternalInsertFailure,

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<AppError> for BookError {
    fn from(e: AppError) -> Self {
        BookError::Storage(e.to_string())
    }
}

/// BookService implementation
pub struct BookServiceImpl<R>
where
    R: BookRepository,
{
    book_repo: Arc<R>,
}

impl<R> BookServiceImpl<R>
where
    R: BookRepository,
{
    pub fn new(book_repo: Arc<R>) -> Self {
        Self { book_repo }
    }
}

#[async_trait]
impl<R> BookService for BookServiceImpl<R>
where
    R: BookRepository + 'static,
{
    async fn create_book(&self, input: BookInputDto) -> Result<String, BookError> {
        let fields = input.validate()?;

        let id = generate_book_id();
        let book = Book::new(id.clone(), fields, Utc::now());

        self.book_repo.insert(book).await.map_err(|e| {
            tracing::error!(book_id = %id, error = %e, "Failed to insert book");
            BookError::InternalInsertFailure
        })?;

        // The new id must resolve before we hand it back
        if self.book_repo.find_by_id(&id).await?.is_none() {
            tracing::error!(book_id = %id, "Inserted book is not retrievable");
            return Err(BookError::InternalInsertFailure);
        }

        tracing::info!(book_id = %id, "Book created");
        Ok(id)
    }

    async fn list_summaries(&self) -> Result<Vec<BookSummary>, BookError> {
        let books = self.book_repo.find_all().await?;
        Ok(books.iter().map(Book::to_summary).collect())
    }

    async fn get_book(&self, id: &str) -> Result<Book, BookError> {
        self.book_repo
            .find_by_id(id)
            .await?
            .ok_or(BookError::NotFound)
    }

    async fn update_book(&self, id: &str, input: BookInputDto) -> Result<Book, BookError> {
        // Payload errors are reported before a missing id
        let fields = input.validate()?;

        let book = self
            .book_repo
            .update(id, fields, Utc::now())
            .await?
            .ok_or(BookError::NotFound)?;

        tracing::info!(book_id = %id, finished = book.finished, "Book updated");
        Ok(book)
    }

    async fn delete_book(&self, id: &str) -> Result<(), BookError> {
        if !self.book_repo.delete(id).await? {
            return Err(BookError::NotFound);
        }

        tracing::info!(book_id = %id, "Book deleted");
        Ok(())
    }
}
