use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::{AppError, AppResult, OptionExt},
    state::AppState,
    store,
    types::Rename,
};

pub async fn get_genre(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<impl IntoResponse> {
    let genre = store::get_genre(&state.db, id).await?.ok_or_not_found("genre")?;
    Ok(Json(genre))
}

/// PUT /genres/{id} - sets the name of an existing genre.
pub async fn update_genre(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<Rename>,
) -> AppResult<impl IntoResponse> {
    let affected = store::update_genre_name(&state.db, id, &body.name).await?;
    if affected == 0 {
        return Err(AppError::NotFound("genre not found".into()));
    }
    state.metrics.inc_genres_updated();
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /genres/{id}. Does not cascade: movies referencing this genre
/// keep their genre_id.
pub async fn delete_genre(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<impl IntoResponse> {
    let affected = store::delete_genre(&state.db, id).await?;
    if affected == 0 {
        return Err(AppError::NotFound("genre not found".into()));
    }
    state.metrics.inc_genres_deleted();
    Ok(StatusCode::NO_CONTENT)
}
