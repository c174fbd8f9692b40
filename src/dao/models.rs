use serde::{Deserialize, Serialize};
use std::time::SystemTime;
use uuid::Uuid;

/// Player profile persisted by the storage layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserEntity {
    /// Unique player name chosen at registration.
    pub name: String,
    /// Optional contact address used by the reminder job.
    pub email: Option<String>,
    /// Cumulative score (wins minus losses).
    pub score: i64,
    /// Number of games the player currently has in progress.
    pub active_games: u32,
    /// Registration timestamp for auditing/debugging.
    pub created_at: SystemTime,
}

/// One guess and the message it produced, kept in game order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistoryEntryEntity {
    /// Outcome message returned to the player for this guess.
    pub message: String,
    /// The raw guess that was submitted.
    pub guess: String,
}

/// Aggregate game entity persisted by the storage layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameEntity {
    /// Primary key of the game.
    pub id: Uuid,
    /// Name of the player who owns this game.
    pub user_name: String,
    /// The secret word the player has to find.
    pub answer: String,
    /// Attempt budget fixed at creation.
    pub attempts_allowed: u32,
    /// Attempts left before the game is lost.
    pub attempts_remaining: u32,
    /// Whether the game reached a terminal state.
    pub game_over: bool,
    /// Whether a terminal game ended in a win.
    pub won: bool,
    /// Ordered log of guesses and their outcome messages.
    pub history: Vec<HistoryEntryEntity>,
    /// Creation timestamp for auditing/debugging.
    pub created_at: SystemTime,
    /// Last time the game entity was updated.
    pub updated_at: SystemTime,
}

/// Immutable record of a concluded game.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreEntity {
    /// Name of the player the score belongs to.
    pub user_name: String,
    /// When the game concluded.
    pub date: SystemTime,
    /// Whether the player won the game.
    pub won: bool,
    /// Attempts consumed before the game concluded.
    pub guesses: u32,
}
