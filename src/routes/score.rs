use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};

use crate::{
    dto::score::{HighScoresQuery, ScoresResponse},
    error::AppError,
    services::score_service,
    state::SharedState,
};

/// Routes exposing score history and leaderboards.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/scores", get(get_scores))
        .route("/scores/high", get(get_high_scores))
        .route("/scores/user/{name}", get(get_user_scores))
}

#[utoipa::path(
    get,
    path = "/scores",
    tag = "score",
    responses((status = 200, description = "All recorded scores", body = ScoresResponse))
)]
/// Return every recorded score in completion order.
pub async fn get_scores(
    State(state): State<SharedState>,
) -> Result<Json<ScoresResponse>, AppError> {
    let response = score_service::get_scores(&state).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/scores/high",
    tag = "score",
    params(HighScoresQuery),
    responses((status = 200, description = "Winning scores with fewest guesses first", body = ScoresResponse))
)]
/// Return winning scores ordered by fewest guesses.
pub async fn get_high_scores(
    State(state): State<SharedState>,
    Query(query): Query<HighScoresQuery>,
) -> Result<Json<ScoresResponse>, AppError> {
    let response = score_service::get_high_scores(&state, query.limit).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/scores/user/{name}",
    tag = "score",
    params(("name" = String, Path, description = "Name of the owning player")),
    responses(
        (status = 200, description = "Scores recorded for the player", body = ScoresResponse),
        (status = 404, description = "Unknown user")
    )
)]
/// Return every score recorded for the named player.
pub async fn get_user_scores(
    State(state): State<SharedState>,
    Path(name): Path<String>,
) -> Result<Json<ScoresResponse>, AppError> {
    let response = score_service::get_user_scores(&state, &name).await?;
    Ok(Json(response))
}
