/// OpenAPI documentation generation.
pub mod documentation;
/// Game lifecycle and guess handling.
pub mod game_service;
/// Health check service.
pub mod health_service;
/// Periodic reminder notifications for players with active games.
pub mod reminder;
/// Score and leaderboard queries.
pub mod score_service;
/// Average-attempts cache recomputation and query.
pub mod stats_service;
/// Player registration and listings.
pub mod user_service;
