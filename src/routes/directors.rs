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

pub async fn get_director(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<impl IntoResponse> {
    let director = store::get_director(&state.db, id).await?.ok_or_not_found("director")?;
    Ok(Json(director))
}

/// PUT /directors/{id} - sets the name of an existing director.
pub async fn update_director(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<Rename>,
) -> AppResult<impl IntoResponse> {
    let affected = store::update_director_name(&state.db, id, &body.name).await?;
    if affected == 0 {
        return Err(AppError::NotFound("director not found".into()));
    }
    state.metrics.inc_directors_updated();
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /directors/{id}. Does not cascade: movies referencing this
/// director keep their director_id.
pub async fn delete_director(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<impl IntoResponse> {
    let affected = store::delete_director(&state.db, id).await?;
    if affected == 0 {
        return Err(AppError::NotFound("director not found".into()));
    }
    state.metrics.inc_directors_deleted();
    Ok(StatusCode::NO_CONTENT)
}
