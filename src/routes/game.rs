use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post, put},
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::{
        common::MessageResponse,
        game::{GameStateResponse, GamesResponse, GuessRequest, NewGameRequest},
    },
    error::AppError,
    services::{game_service, stats_service},
    state::SharedState,
};

/// Routes handling the game lifecycle and guesses.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/games", post(new_game))
        .route("/games/average_attempts", get(get_average_attempts))
        .route("/games/user/{name}", get(get_user_games))
        .route("/games/{id}", get(get_game).delete(cancel_game))
        .route("/games/{id}/character", put(guess_character))
        .route("/games/{id}/answer", put(guess_answer))
        .route("/games/{id}/history", get(get_game_history))
}

#[utoipa::path(
    post,
    path = "/games",
    tag = "game",
    request_body = NewGameRequest,
    responses(
        (status = 200, description = "Game created", body = GameStateResponse),
        (status = 404, description = "Unknown user")
    )
)]
/// Start a new game with a randomly chosen answer.
pub async fn new_game(
    State(state): State<SharedState>,
    Json(payload): Json<NewGameRequest>,
) -> Result<Json<GameStateResponse>, AppError> {
    payload.validate()?;
    let response = game_service::new_game(&state, payload).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/games/{id}",
    tag = "game",
    params(("id" = Uuid, Path, description = "Identifier of the game")),
    responses(
        (status = 200, description = "Current game state", body = GameStateResponse),
        (status = 404, description = "Unknown game")
    )
)]
/// Return the current state of a game.
pub async fn get_game(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<GameStateResponse>, AppError> {
    let response = game_service::get_game(&state, id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    put,
    path = "/games/{id}/character",
    tag = "game",
    params(("id" = Uuid, Path, description = "Identifier of the game")),
    request_body = GuessRequest,
    responses(
        (status = 200, description = "Updated game state", body = GameStateResponse),
        (status = 404, description = "Unknown game")
    )
)]
/// Guess a single character of the answer.
pub async fn guess_character(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<GuessRequest>,
) -> Result<Json<GameStateResponse>, AppError> {
    let response = game_service::guess_character(&state, id, payload).await?;
    Ok(Json(response))
}

#[utoipa::path(
    put,
    path = "/games/{id}/answer",
    tag = "game",
    params(("id" = Uuid, Path, description = "Identifier of the game")),
    request_body = GuessRequest,
    responses(
        (status = 200, description = "Updated game state", body = GameStateResponse),
        (status = 404, description = "Unknown game")
    )
)]
/// Guess the full answer.
pub async fn guess_answer(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<GuessRequest>,
) -> Result<Json<GameStateResponse>, AppError> {
    let response = game_service::guess_answer(&state, id, payload).await?;
    Ok(Json(response))
}

#[utoipa::path(
    delete,
    path = "/games/{id}",
    tag = "game",
    params(("id" = Uuid, Path, description = "Identifier of the game")),
    responses(
        (status = 200, description = "Game deleted or already over", body = MessageResponse),
        (status = 404, description = "Unknown game")
    )
)]
/// Delete a game that has not concluded yet.
pub async fn cancel_game(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    let response = game_service::cancel_game(&state, id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/games/{id}/history",
    tag = "game",
    params(("id" = Uuid, Path, description = "Identifier of the game")),
    responses(
        (status = 200, description = "Flattened guess log", body = MessageResponse),
        (status = 404, description = "Unknown game")
    )
)]
/// Return the ordered guess log of a game as one string.
pub async fn get_game_history(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    let response = game_service::get_game_history(&state, id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/games/average_attempts",
    tag = "game",
    responses((status = 200, description = "Cached average attempts remaining", body = MessageResponse))
)]
/// Return the cached average of attempts remaining over active games.
pub async fn get_average_attempts(
    State(state): State<SharedState>,
) -> Json<MessageResponse> {
    Json(stats_service::get_average_attempts(&state).await)
}

#[utoipa::path(
    get,
    path = "/games/user/{name}",
    tag = "game",
    params(("name" = String, Path, description = "Name of the owning player")),
    responses(
        (status = 200, description = "Games owned by the player", body = GamesResponse),
        (status = 404, description = "Unknown user")
    )
)]
/// Return every game owned by the named player.
pub async fn get_user_games(
    State(state): State<SharedState>,
    Path(name): Path<String>,
) -> Result<Json<GamesResponse>, AppError> {
    let response = game_service::get_user_games(&state, &name).await?;
    Ok(Json(response))
}
