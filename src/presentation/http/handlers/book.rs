//! Book Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::request::BookRequest;
use crate::application::dto::response::{ApiResponse, BookData, BookIdData, BooksData};
use crate::application::services::{BookError, BookService, BookServiceImpl};
use crate::infrastructure::repositories::InMemoryBookRepository;
use crate::presentation::http::extractors::ApiJson;
use crate::shared::error::AppError;
use crate::startup::AppState;

// Client-facing messages
const CREATED: &str = "Buku berhasil ditambahkan";
const CREATE_MISSING_NAME: &str = "Gagal menambahkan buku. Mohon isi nama buku";
const CREATE_PAGE_EXCEEDED: &str =
    "Gagal menambahkan buku. readPage tidak boleh lebih besar dari pageCount";
const CREATE_FAILED: &str = "Buku gagal ditambahkan";
const NOT_FOUND: &str = "Buku tidak ditemukan";
const UPDATED: &str = "Buku berhasil diperbarui";
const UPDATE_MISSING_NAME: &str = "Gagal memperbarui buku. Mohon isi nama buku";
const UPDATE_PAGE_EXCEEDED: &str =
    "Gagal memperbarui buku. readPage tidak boleh lebih besar dari pageCount";
const UPDATE_NOT_FOUND: &str = "Gagal memperbarui buku. Id tidak ditemukan";
const DELETED: &str = "Buku berhasil dihapus";
const DELETE_NOT_FOUND: &str = "Buku gagal dihapus. Id tidak ditemukan";
const STORAGE_FAILED: &str = "Terjadi kegagalan pada server";

fn book_service(state: &AppState) -> BookServiceImpl<InMemoryBookRepository> {
    BookServiceImpl::new(state.books.clone())
}

/// Add a book
pub async fn create_book(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<BookRequest>,
) -> Result<(StatusCode, Json<ApiResponse<BookIdData>>), AppError> {
    let book_id = book_service(&state)
        .create_book(body.into())
        .await
        .map_err(|e| match e {
            BookError::MissingName => AppError::BadRequest(CREATE_MISSING_NAME.into()),
            BookError::PageCountExceeded => AppError::BadRequest(CREATE_PAGE_EXCEEDED.into()),
            e => {
                tracing::error!(error = %e, "Book creation failed");
                AppError::Internal(CREATE_FAILED.into())
            }
        })?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(CREATED, BookIdData { book_id })),
    ))
}

/// List `{id, name, publisher}` of every book
pub async fn list_books(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<BooksData>>, AppError> {
    let books = book_service(&state).list_summaries().await.map_err(|e| {
        tracing::error!(error = %e, "Listing books failed");
        AppError::Internal(STORAGE_FAILED.into())
    })?;

    Ok(Json(ApiResponse::success(BooksData { books })))
}

/// Get a book by id
pub async fn get_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
) -> Result<Json<ApiResponse<BookData>>, AppError> {
    let book = book_service(&state)
        .get_book(&book_id)
        .await
        .map_err(|e| match e {
            BookError::NotFound => AppError::NotFound(NOT_FOUND.into()),
            e => {
                tracing::error!(book_id = %book_id, error = %e, "Fetching book failed");
                AppError::Internal(STORAGE_FAILED.into())
            }
        })?;

    Ok(Json(ApiResponse::success(BookData { book })))
}

/// Replace a book's fields
pub async fn update_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
    ApiJson(body): ApiJson<BookRequest>,
) -> Result<Json<ApiResponse>, AppError> {
    book_service(&state)
        .update_book(&book_id, body.into())
        .await
        .map_err(|e| match e {
            BookError::MissingName => AppError::BadRequest(UPDATE_MISSING_NAME.into()),
            BookError::PageCountExceeded => AppError::BadRequest(UPDATE_PAGE_EXCEEDED.into()),
            BookError::NotFound => AppError::NotFound(UPDATE_NOT_FOUND.into()),
            e => {
                tracing::error!(book_id = %book_id, error = %e, "Updating book failed");
                AppError::Internal(STORAGE_FAILED.into())
            }
        })?;

    Ok(Json(ApiResponse::message(UPDATED)))
}

/// Delete a book
pub async fn delete_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
) -> Result<Json<ApiResponse>, AppError> {
    book_service(&state)
        .delete_book(&book_id)
        .await
        .map_err(|e| match e {
            BookError::NotFound => AppError::NotFound(DELETE_NOT_FOUND.into()),
            e => {
                tracing::error!(book_id = %book_id, error = %e, "Deleting book failed");
                AppError::Internal(STORAGE_FAILED.into())
            }
        })?;

    Ok(Json(ApiResponse::message(DELETED)))
}
