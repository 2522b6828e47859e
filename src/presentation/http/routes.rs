//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{routing::get, Router};

use super::handlers;
use crate::presentation::middleware::cors;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(collection_routes(&state))
        .route(
            "/books/{book_id}",
            get(handlers::book::get_book)
                .put(handlers::book::update_book)
                .delete(handlers::book::delete_book),
        )
        .with_state(state)
}

/// Collection routes, open to cross-origin callers
fn collection_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::book::list_books))
        .route(
            "/books",
            get(handlers::book::list_books).post(handlers::book::create_book),
        )
        .layer(cors::create_cors_layer(&state.settings.cors))
}
