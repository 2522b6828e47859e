//! # Bookshelf Library
//!
//! A book catalog service exposing create, list, get, update and delete
//! operations over a JSON HTTP API, backed by an in-memory collection.
//!
//! ## Architecture
//!
//! - **Domain Layer**: The `Book` entity and the repository trait
//! - **Application Layer**: Validation, the book service and DTOs
//! - **Infrastructure Layer**: The in-memory repository
//! - **Presentation Layer**: HTTP handlers, routes and middleware
//!
//! ## Module Structure
//!
//! ```text
//! bookshelf/
//! +-- config/         Configuration management
//! +-- domain/         Book entity and repository trait
//! +-- application/    Book service and DTOs
//! +-- infrastructure/ In-memory repository
//! +-- presentation/   HTTP routes and handlers
//! +-- shared/         Errors and id generation
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - Storage implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
