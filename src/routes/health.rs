use crate::state::AppState;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

// Health check endpoint - lightweight, no DB round-trip
pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

// Readiness probe: checks DB connectivity with timeout protection
pub async fn readyz(State(state): State<AppState>) -> impl IntoResponse {
    let query = sqlx::query("SELECT 1").fetch_one(&state.db);
    match tokio::time::timeout(std::time::Duration::from_secs(5), query).await {
        Ok(Ok(_)) => (StatusCode::OK, "ready").into_response(),
        Ok(Err(e)) => (StatusCode::SERVICE_UNAVAILABLE, format!("not ready: {}", e)).into_response(),
        Err(_) => (StatusCode::SERVICE_UNAVAILABLE, "not ready: timeout").into_response(),
    }
}

// Metrics endpoint: returns JSON snapshot
pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    let snapshot = state.metrics.get_snapshot();
    Json(snapshot)
}

// Prometheus-compatible text exposition format
pub async fn metrics_prometheus(State(state): State<AppState>) -> impl IntoResponse {
    let m = state.metrics.get_snapshot();
    let body = format!(
        "# HELP kinothek_movies_created Total movies created\n# TYPE kinothek_movies_created counter\nkinothek_movies_created {}\n\
# HELP kinothek_movies_deleted Total movies deleted\n# TYPE kinothek_movies_deleted counter\nkinothek_movies_deleted {}\n\
# HELP kinothek_directors_updated Total director renames\n# TYPE kinothek_directors_updated counter\nkinothek_directors_updated {}\n\
# HELP kinothek_directors_deleted Total directors deleted\n# TYPE kinothek_directors_deleted counter\nkinothek_directors_deleted {}\n\
# HELP kinothek_genres_updated Total genre renames\n# TYPE kinothek_genres_updated counter\nkinothek_genres_updated {}\n\
# HELP kinothek_genres_deleted Total genres deleted\n# TYPE kinothek_genres_deleted counter\nkinothek_genres_deleted {}\n\
# HELP kinothek_uptime_seconds Uptime seconds\n# TYPE kinothek_uptime_seconds gauge\nkinothek_uptime_seconds {}\n",
        m.movies_created,
        m.movies_deleted,
        m.directors_updated,
        m.directors_deleted,
        m.genres_updated,
        m.genres_deleted,
        m.uptime_seconds,
    );
    ([(header::CONTENT_TYPE, "text/plain; version=0.0.4")], body)
}

// Version/Build info endpoint (JSON)
pub async fn version() -> impl IntoResponse {
    let body = serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "package": {
            "description": env!("CARGO_PKG_DESCRIPTION"),
            "authors": env!("CARGO_PKG_AUTHORS"),
            "license": env!("CARGO_PKG_LICENSE"),
        },
        "build": {
            "profile": if cfg!(debug_assertions) { "debug" } else { "release" },
            "os": std::env::consts::OS,
            "arch": std::env::consts::ARCH,
        }
    });
    (StatusCode::OK, Json(body))
}
