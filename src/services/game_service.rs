use std::sync::Arc;
use std::time::SystemTime;

use tracing::info;
use uuid::Uuid;

use crate::{
    dao::{game_store::GameStore, models::ScoreEntity},
    dto::{
        common::MessageResponse,
        game::{GameStateResponse, GamesResponse, GuessRequest, NewGameRequest},
    },
    error::ServiceError,
    state::{
        SharedState,
        game::{Game, GuessOutcome, GuessResult},
    },
};

/// Start a new game for a registered player.
///
/// The answer is drawn uniformly at random from the configured word list and
/// the owner's active-game counter is bumped. The average-attempts cache
/// refresh is triggered fire-and-forget: creating the game does not depend
/// on the cache being fresh.
pub async fn new_game(
    state: &SharedState,
    request: NewGameRequest,
) -> Result<GameStateResponse, ServiceError> {
    let store = state.store();

    let mut user = store
        .find_user(&request.user_name)
        .await?
        .ok_or_else(|| user_not_found(&request.user_name))?;

    let attempts = request
        .attempts
        .unwrap_or_else(|| state.config().default_attempts());
    if attempts == 0 {
        return Err(ServiceError::InvalidInput(
            "attempts must be strictly positive".into(),
        ));
    }

    let answer = state.config().random_word().to_owned();
    let game = Game::new(user.name.clone(), answer, attempts);

    user.active_games += 1;
    store.save_game(game.clone().into()).await?;
    store.save_user(user).await?;

    state.schedule_stats_refresh();

    info!(game = %game.id, user = %game.user_name, attempts, "created new game");
    Ok(GameStateResponse::from_game(&game, "Good luck playing Hangman!"))
}

/// Current state of a game.
pub async fn get_game(state: &SharedState, id: Uuid) -> Result<GameStateResponse, ServiceError> {
    let game = find_game(state, id).await?;
    Ok(GameStateResponse::from_game(&game, "Time to do a move!"))
}

/// Apply a single-character guess to a game.
pub async fn guess_character(
    state: &SharedState,
    id: Uuid,
    request: GuessRequest,
) -> Result<GameStateResponse, ServiceError> {
    apply_guess(state, id, &request.guess, Game::guess_character).await
}

/// Apply a full-answer guess to a game.
pub async fn guess_answer(
    state: &SharedState,
    id: Uuid,
    request: GuessRequest,
) -> Result<GameStateResponse, ServiceError> {
    apply_guess(state, id, &request.guess, Game::guess_answer).await
}

/// Delete a game that has not concluded yet.
///
/// A terminal game is left untouched and answered with an informational
/// message; deleting an active one also releases the owner's active-game
/// slot so the counter keeps matching the games that remain.
pub async fn cancel_game(state: &SharedState, id: Uuid) -> Result<MessageResponse, ServiceError> {
    let store = state.store();
    let game = find_game(state, id).await?;

    if game.game_over {
        return Ok(MessageResponse::new("Game already over!"));
    }

    store.delete_game(id).await?;
    if let Some(mut user) = store.find_user(&game.user_name).await? {
        user.active_games = user.active_games.saturating_sub(1);
        store.save_user(user).await?;
    }

    info!(game = %id, user = %game.user_name, "cancelled game");
    Ok(MessageResponse::new("Game deleted!"))
}

/// Ordered guess log of a game flattened into one string.
pub async fn get_game_history(
    state: &SharedState,
    id: Uuid,
) -> Result<MessageResponse, ServiceError> {
    let game = find_game(state, id).await?;
    Ok(MessageResponse::new(game.history_summary()))
}

/// All games owned by the named player.
pub async fn get_user_games(
    state: &SharedState,
    user_name: &str,
) -> Result<GamesResponse, ServiceError> {
    let store = state.store();
    store
        .find_user(user_name)
        .await?
        .ok_or_else(|| user_not_found(user_name))?;

    let games = store.list_user_games(user_name).await?;
    let items = games
        .into_iter()
        .map(|entity| {
            let game: Game = entity.into();
            GameStateResponse::from_game(&game, "")
        })
        .collect();
    Ok(GamesResponse { items })
}

/// Run one guess against a stored game and persist the consequences.
///
/// Terminal and rejected guesses change nothing and skip persistence. A
/// concluding guess writes the game, its score record, and the updated
/// owner through one atomic store call.
async fn apply_guess<F>(
    state: &SharedState,
    id: Uuid,
    guess: &str,
    apply: F,
) -> Result<GameStateResponse, ServiceError>
where
    F: FnOnce(&mut Game, &str) -> GuessResult,
{
    let store = state.store();
    let mut game = find_game(state, id).await?;

    let result = apply(&mut game, guess);
    match result.outcome {
        GuessOutcome::AlreadyOver | GuessOutcome::Rejected => {}
        GuessOutcome::Ongoing => store.save_game(game.clone().into()).await?,
        GuessOutcome::Lost | GuessOutcome::Won => conclude_game(&store, &game).await?,
    }

    Ok(GameStateResponse::from_game(&game, result.message))
}

/// Persist a game that just reached a terminal state.
async fn conclude_game(store: &Arc<dyn GameStore>, game: &Game) -> Result<(), ServiceError> {
    let mut user = store
        .find_user(&game.user_name)
        .await?
        .ok_or_else(|| user_not_found(&game.user_name))?;

    user.score += if game.won { 1 } else { -1 };
    user.active_games = user.active_games.saturating_sub(1);

    let score = ScoreEntity {
        user_name: game.user_name.clone(),
        date: SystemTime::now(),
        won: game.won,
        guesses: game.guesses_used(),
    };

    store.complete_game(game.clone().into(), score, user).await?;

    info!(game = %game.id, user = %game.user_name, won = game.won, "game concluded");
    Ok(())
}

async fn find_game(state: &SharedState, id: Uuid) -> Result<Game, ServiceError> {
    state
        .store()
        .find_game(id)
        .await?
        .map(Game::from)
        .ok_or_else(|| ServiceError::NotFound(format!("game `{id}` not found")))
}

fn user_not_found(name: &str) -> ServiceError {
    ServiceError::NotFound(format!("user `{name}` does not exist"))
}
