//! Response DTOs
//!
//! Every endpoint answers with the same envelope:
//! `{status, message?, data?}`.

use serde::Serialize;

use crate::domain::{Book, BookSummary};

/// Envelope status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    /// Client-correctable failure (4xx)
    Fail,
    /// Server-side failure (5xx)
    Error,
}

/// Response envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize = ()> {
    pub status: ResponseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Success carrying data only
    pub fn success(data: T) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: None,
            data: Some(data),
        }
    }

    /// Success carrying a message and data
    pub fn success_with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: Some(message.into()),
            data: Some(data),
        }
    }
}

impl ApiResponse {
    /// Success carrying a message only
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: Some(message.into()),
            data: None,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Fail,
            message: Some(message.into()),
            data: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            message: Some(message.into()),
            data: None,
        }
    }
}

/// `data` of a successful create
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookIdData {
    pub book_id: String,
}

/// `data` of a successful get
#[derive(Debug, Serialize)]
pub struct BookData {
    pub book: Book,
}

/// `data` of a listing
#[derive(Debug, Serialize)]
pub struct BooksData {
    pub books: Vec<BookSummary>,
}
