//! Book Repository Implementation
//!
//! In-memory implementation of book operations. The whole collection sits
//! behind one `RwLock`: reads share it, writes take it exclusively.

use std::collections::HashSet;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use crate::domain::{Book, BookRepository, BookUpdate};
use crate::shared::error::AppError;

/// In-memory book repository
#[derive(Debug, Default)]
pub struct InMemoryBookRepository {
    shelf: RwLock<Shelf>,
}

#[derive(Debug, Default)]
struct Shelf {
    /// Live books in insertion order
    books: Vec<Book>,
    /// Ids of deleted books; never handed out again
    retired: HashSet<String>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn find_all(&self) -> Result<Vec<Book>, AppError> {
        Ok(self.shelf.read().books.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Book>, AppError> {
        Ok(self.shelf.read().books.iter().find(|b| b.id == id).cloned())
    }

    async fn insert(&self, book: Book) -> Result<(), AppError> {
        let mut shelf = self.shelf.write();

        if shelf.retired.contains(&book.id) || shelf.books.iter().any(|b| b.id == book.id) {
            return Err(AppError::Internal(format!("Book id {} was already issued", book.id)));
        }

        shelf.books.push(book);
        Ok(())
    }

    async fn update(
        &self,
        id: &str,
        fields: BookUpdate,
        now: DateTime<Utc>,
    ) -> Result<Option<Book>, AppError> {
        let mut shelf = self.shelf.write();

        Ok(shelf.books.iter_mut().find(|b| b.id == id).map(|book| {
            book.apply(fields, now);
            book.clone()
        }))
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let mut shelf = self.shelf.write();

        match shelf.books.iter().position(|b| b.id == id) {
            Some(index) => {
                // `remove` keeps the insertion order of the remaining books
                let book = shelf.books.remove(index);
                shelf.retired.insert(book.id);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.shelf.read().books.len())
    }
}
