//! Request DTOs
//!
//! Data structures for API request bodies.

use serde::Deserialize;

use crate::application::services::BookInputDto;

/// Create / update book request.
///
/// Server-managed fields (`id`, `finished`, `insertedAt`, `updatedAt`) are
/// not part of the request and are ignored if a client sends them.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRequest {
    pub name: Option<String>,
    pub year: Option<i32>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    pub page_count: Option<u32>,
    pub read_page: Option<u32>,
    pub reading: Option<bool>,
}

impl From<BookRequest> for BookInputDto {
    fn from(body: BookRequest) -> Self {
        Self {
            name: body.name,
            year: body.year,
            author: body.author,
            summary: body.summary,
            publisher: body.publisher,
            page_count: body.page_count.unwrap_or(0),
            read_page: body.read_page.unwrap_or(0),
            reading: body.reading.unwrap_or(false),
        }
    }
}
