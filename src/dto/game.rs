use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::validation::validate_user_name,
    state::game::Game,
};

/// Payload used to start a brand-new game for a registered player.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct NewGameRequest {
    /// Name of the player the game belongs to.
    #[validate(custom(function = validate_user_name))]
    pub user_name: String,
    /// Attempt budget; the configured default applies when omitted.
    #[serde(default)]
    #[validate(range(min = 1))]
    pub attempts: Option<u32>,
}

/// A character or full-answer guess submitted against a game.
///
/// Over-long character guesses are not rejected here: the game answers them
/// with an in-band message, so the field carries any string.
#[derive(Debug, Deserialize, ToSchema)]
pub struct GuessRequest {
    /// The guessed character or answer.
    pub guess: String,
}

/// Game state view returned by every game operation.
#[derive(Debug, Serialize, ToSchema)]
pub struct GameStateResponse {
    /// Identifier of the game.
    pub id: Uuid,
    /// Name of the owning player.
    pub user_name: String,
    /// Attempts left before the game is lost.
    pub attempts_remaining: u32,
    /// Whether the game reached a terminal state.
    pub game_over: bool,
    /// Message describing the result of the requested operation.
    pub message: String,
}

impl GameStateResponse {
    /// Project a game into its public view with the given message.
    pub fn from_game(game: &Game, message: impl Into<String>) -> Self {
        Self {
            id: game.id,
            user_name: game.user_name.clone(),
            attempts_remaining: game.attempts_remaining,
            game_over: game.game_over,
            message: message.into(),
        }
    }
}

/// List of game views returned by the per-user game listing.
#[derive(Debug, Serialize, ToSchema)]
pub struct GamesResponse {
    /// The games, in creation order.
    pub items: Vec<GameStateResponse>,
}
