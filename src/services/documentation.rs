use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for the hangman backend.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::user::create_user,
        crate::routes::user::get_users,
        crate::routes::user::get_user_rankings,
        crate::routes::game::new_game,
        crate::routes::game::get_game,
        crate::routes::game::guess_character,
        crate::routes::game::guess_answer,
        crate::routes::game::cancel_game,
        crate::routes::game::get_game_history,
        crate::routes::game::get_average_attempts,
        crate::routes::game::get_user_games,
        crate::routes::score::get_scores,
        crate::routes::score::get_high_scores,
        crate::routes::score::get_user_scores,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::common::MessageResponse,
            crate::dto::user::CreateUserRequest,
            crate::dto::user::UserSummary,
            crate::dto::user::UsersResponse,
            crate::dto::game::NewGameRequest,
            crate::dto::game::GuessRequest,
            crate::dto::game::GameStateResponse,
            crate::dto::game::GamesResponse,
            crate::dto::score::ScoreSummary,
            crate::dto::score::ScoresResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "user", description = "Player registration and rankings"),
        (name = "game", description = "Game lifecycle and guesses"),
        (name = "score", description = "Score history and leaderboards"),
    )
)]
pub struct ApiDoc;
