use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{dao::models::ScoreEntity, dto::format_date};

/// Query parameters accepted by the high-score listing.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct HighScoresQuery {
    /// Maximum number of results; unlimited when omitted.
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Public projection of a concluded game's score.
#[derive(Debug, Serialize, ToSchema)]
pub struct ScoreSummary {
    /// Name of the player the score belongs to.
    pub user_name: String,
    /// Calendar date the game concluded on.
    pub date: String,
    /// Whether the player won the game.
    pub won: bool,
    /// Attempts consumed before the game concluded.
    pub guesses: u32,
}

/// List of scores returned by the score listing routes.
#[derive(Debug, Serialize, ToSchema)]
pub struct ScoresResponse {
    /// The scores, in the order requested.
    pub items: Vec<ScoreSummary>,
}

impl From<ScoreEntity> for ScoreSummary {
    fn from(value: ScoreEntity) -> Self {
        Self {
            user_name: value.user_name,
            date: format_date(value.date),
            won: value.won,
            guesses: value.guesses,
        }
    }
}

impl From<Vec<ScoreEntity>> for ScoresResponse {
    fn from(value: Vec<ScoreEntity>) -> Self {
        Self {
            items: value.into_iter().map(Into::into).collect(),
        }
    }
}
