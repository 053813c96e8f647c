use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    error::{AppError, AppResult, OptionExt},
    state::AppState,
    store,
    types::{MovieFilter, NewMovie},
};

/// GET /movies - all movies, optionally restricted to a director and/or a
/// genre. Both filters together return the intersection. An unknown filter
/// id is not an error; it simply matches nothing.
pub async fn list_movies(
    State(state): State<AppState>,
    Query(filter): Query<MovieFilter>,
) -> AppResult<impl IntoResponse> {
    let items = store::list_movies(&state.db, filter.director_id, filter.genre_id).await?;
    Ok(Json(items))
}

/// POST /movies - inserts the body fields verbatim. Responds 201 with an
/// empty body; the assigned id is exposed via the Location header.
pub async fn create_movie(
    State(state): State<AppState>,
    Json(new): Json<NewMovie>,
) -> AppResult<Response> {
    let id = store::insert_movie(&state.db, &new).await?;
    state.metrics.inc_movies_created();
    tracing::debug!(movie_id = id, "movie created");
    Ok((StatusCode::CREATED, [(header::LOCATION, format!("/movies/{}", id))]).into_response())
}

pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<impl IntoResponse> {
    let movie = store::get_movie(&state.db, id).await?.ok_or_not_found("movie")?;
    Ok(Json(movie))
}

pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<impl IntoResponse> {
    let affected = store::delete_movie(&state.db, id).await?;
    if affected == 0 {
        return Err(AppError::NotFound("movie not found".into()));
    }
    state.metrics.inc_movies_deleted();
    Ok(StatusCode::NO_CONTENT)
}
