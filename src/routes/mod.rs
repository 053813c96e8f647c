//! HTTP route handlers for the Kinothek API.
//!
//! Each sub-module handles one resource:
//!
//! - `movies`: listing with filters, creation, point lookup, deletion
//! - `directors`: point lookup, rename, deletion
//! - `genres`: point lookup, rename, deletion
//! - `health`: health check, readiness, metrics and version endpoints

use axum::{
    routing::get,
    Router,
};

use crate::state::AppState;

pub mod directors;
pub mod genres;
pub mod health;
pub mod movies;

/// Builds the API router. Shared between `main` and the tests so both
/// exercise the same route table.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health::healthz))
        .route("/readyz", get(health::readyz))
        .route("/metrics", get(health::metrics))
        .route("/metrics/prometheus", get(health::metrics_prometheus))
        .route("/version", get(health::version))
        // The collection route is registered with and without the trailing
        // slash; upstream clients use the slash-terminated form.
        .route("/movies", get(movies::list_movies).post(movies::create_movie))
        .route("/movies/", get(movies::list_movies).post(movies::create_movie))
        .route("/movies/{id}", get(movies::get_movie).delete(movies::delete_movie))
        .route(
            "/directors/{id}",
            get(directors::get_director).put(directors::update_director).delete(directors::delete_director),
        )
        .route(
            "/genres/{id}",
            get(genres::get_genre).put(genres::update_genre).delete(genres::delete_genre),
        )
        .with_state(state)
}
