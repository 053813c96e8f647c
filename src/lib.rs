//! # Kinothek Backend Library
//!
//! Kinothek is a small movie catalog service: three related entities
//! (movies, directors, genres) stored in SQLite and exposed over a JSON
//! HTTP API with equality filtering on the movie listing.
//!
//! ## Architecture
//!
//! The application is built using:
//! - **Axum**: HTTP server and routing
//! - **SQLx**: Asynchronous database operations with SQLite
//! - **Tokio**: Async runtime
//! - **Serde**: JSON serialization/deserialization
//!
//! ## Core Components
//!
//! - [`config`]: Application configuration management
//! - [`db`]: Database schema initialization
//! - [`error`]: Centralized error handling and HTTP error responses
//! - [`metrics`]: Operation counters
//! - [`routes`]: HTTP API endpoint handlers
//! - [`state`]: Shared application state
//! - [`store`]: Entity store (all SQL lives here)
//! - [`types`]: Data transfer objects and request bodies

pub mod config;
pub mod db;
pub mod error;
pub mod metrics;
pub mod routes;
pub mod state;
pub mod store;
pub mod types;

#[cfg(test)]
mod tests;
