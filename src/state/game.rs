use std::fmt;
use std::time::SystemTime;

use uuid::Uuid;

use crate::dao::models::{GameEntity, HistoryEntryEntity};

/// One guess and the message it produced, in submission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Outcome message returned to the player for this guess.
    pub message: String,
    /// The raw guess that was submitted.
    pub guess: String,
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(message='{}', guess='{}')", self.message, self.guess)
    }
}

/// How a guess changed the game, alongside the message shown to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResult {
    /// Transition taken by the game.
    pub outcome: GuessOutcome,
    /// Message describing the result of the guess.
    pub message: String,
}

/// Transition taken by a game when a guess is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The game was already terminal; nothing changed.
    AlreadyOver,
    /// The guess was malformed; nothing changed and no attempt was charged.
    Rejected,
    /// An attempt was consumed and the game continues.
    Ongoing,
    /// The attempt budget ran out; the game is lost.
    Lost,
    /// The full answer was found; the game is won.
    Won,
}

/// Runtime state of one played round.
///
/// The guess methods implement the whole state machine: a game is ACTIVE
/// until its attempt budget runs out (lost) or the full answer is guessed
/// (won), and every guess on an active game costs one attempt regardless of
/// correctness. Score and active-game bookkeeping on the owner is left to
/// the service layer, driven by the returned [`GuessOutcome`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
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
    pub history: Vec<HistoryEntry>,
    /// Creation timestamp.
    pub created_at: SystemTime,
    /// Last mutation timestamp.
    pub updated_at: SystemTime,
}

impl Game {
    /// Build a fresh game for `user_name` with the given answer and budget.
    pub fn new(user_name: String, answer: String, attempts: u32) -> Self {
        let timestamp = SystemTime::now();
        Self {
            id: Uuid::new_v4(),
            user_name,
            answer,
            attempts_allowed: attempts,
            attempts_remaining: attempts,
            game_over: false,
            won: false,
            history: Vec::new(),
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Attempts consumed so far; on a terminal game this is the `guesses`
    /// value recorded on its score.
    pub fn guesses_used(&self) -> u32 {
        self.attempts_allowed - self.attempts_remaining
    }

    /// Apply a single-character guess.
    ///
    /// A guess that is not exactly one character is rejected in-band without
    /// charging an attempt. Every accepted guess costs one attempt, found or
    /// not; positions in the message are 1-based.
    pub fn guess_character(&mut self, guess: &str) -> GuessResult {
        if self.game_over {
            return GuessResult {
                outcome: GuessOutcome::AlreadyOver,
                message: "Game already over!".into(),
            };
        }

        let mut chars = guess.chars();
        let (Some(needle), None) = (chars.next(), chars.next()) else {
            return GuessResult {
                outcome: GuessOutcome::Rejected,
                message: "One character per turn".into(),
            };
        };

        self.attempts_remaining -= 1;

        let positions: Vec<String> = self
            .answer
            .chars()
            .enumerate()
            .filter(|(_, c)| *c == needle)
            .map(|(index, _)| (index + 1).to_string())
            .collect();

        let mut message = if positions.is_empty() {
            format!("No '{guess}' here!")
        } else {
            format!(
                "Character is found on position {}.",
                positions.join(" and ")
            )
        };

        let outcome = if self.attempts_remaining == 0 {
            message.push_str(" Game over!");
            self.finish(false);
            GuessOutcome::Lost
        } else {
            GuessOutcome::Ongoing
        };

        self.push_history(&message, guess);
        GuessResult { outcome, message }
    }

    /// Apply a full-answer guess.
    ///
    /// The attempt is charged before the answer is compared, so a correct
    /// guess on the last attempt still loses the game.
    pub fn guess_answer(&mut self, guess: &str) -> GuessResult {
        if self.game_over {
            return GuessResult {
                outcome: GuessOutcome::AlreadyOver,
                message: "Game already over!".into(),
            };
        }

        self.attempts_remaining -= 1;

        let (outcome, message) = if self.attempts_remaining == 0 {
            self.finish(false);
            (GuessOutcome::Lost, "Game over!".to_string())
        } else if guess == self.answer {
            self.finish(true);
            (GuessOutcome::Won, "You win!".to_string())
        } else {
            (GuessOutcome::Ongoing, "Wrong answer, try again".to_string())
        };

        self.push_history(&message, guess);
        GuessResult { outcome, message }
    }

    /// Render the history as one flat string, oldest entry first.
    pub fn history_summary(&self) -> String {
        self.history
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn finish(&mut self, won: bool) {
        self.game_over = true;
        self.won = won;
    }

    fn push_history(&mut self, message: &str, guess: &str) {
        self.history.push(HistoryEntry {
            message: message.to_string(),
            guess: guess.to_string(),
        });
        self.updated_at = SystemTime::now();
    }
}

impl From<HistoryEntryEntity> for HistoryEntry {
    fn from(value: HistoryEntryEntity) -> Self {
        Self {
            message: value.message,
            guess: value.guess,
        }
    }
}

impl From<HistoryEntry> for HistoryEntryEntity {
    fn from(value: HistoryEntry) -> Self {
        Self {
            message: value.message,
            guess: value.guess,
        }
    }
}

impl From<GameEntity> for Game {
    fn from(value: GameEntity) -> Self {
        Self {
            id: value.id,
            user_name: value.user_name,
            answer: value.answer,
            attempts_allowed: value.attempts_allowed,
            attempts_remaining: value.attempts_remaining,
            game_over: value.game_over,
            won: value.won,
            history: value.history.into_iter().map(Into::into).collect(),
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl From<Game> for GameEntity {
    fn from(value: Game) -> Self {
        Self {
            id: value.id,
            user_name: value.user_name,
            answer: value.answer,
            attempts_allowed: value.attempts_allowed,
            attempts_remaining: value.attempts_remaining,
            game_over: value.game_over,
            won: value.won,
            history: value.history.into_iter().map(Into::into).collect(),
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh(answer: &str, attempts: u32) -> Game {
        Game::new("alice".into(), answer.into(), attempts)
    }

    #[test]
    fn fresh_game_is_active_with_full_budget() {
        let game = fresh("hangman", 5);
        assert!(!game.game_over);
        assert_eq!(game.attempts_remaining, 5);
        assert_eq!(game.guesses_used(), 0);
        assert!(game.history.is_empty());
    }

    #[test]
    fn each_character_guess_costs_one_attempt() {
        let mut game = fresh("hangman", 5);

        for (n, guess) in ["a", "b", "c"].iter().enumerate() {
            game.guess_character(guess);
            assert_eq!(game.attempts_remaining, 5 - (n as u32 + 1));
        }
        assert!(!game.game_over);
        assert_eq!(game.guesses_used(), 3);
    }

    #[test]
    fn correct_character_guess_still_costs_an_attempt() {
        let mut game = fresh("hangman", 5);

        let result = game.guess_character("h");
        assert_eq!(result.outcome, GuessOutcome::Ongoing);
        assert_eq!(game.attempts_remaining, 4);
    }

    #[test]
    fn character_positions_are_one_based_and_joined_with_and() {
        let mut game = fresh("hangman", 5);

        let result = game.guess_character("a");
        assert_eq!(result.message, "Character is found on position 2 and 6.");

        let result = game.guess_character("g");
        assert_eq!(result.message, "Character is found on position 4.");
    }

    #[test]
    fn character_match_is_case_sensitive() {
        let mut game = fresh("hangman", 5);

        let result = game.guess_character("H");
        assert_eq!(result.message, "No 'H' here!");
    }

    #[test]
    fn absent_characters_exhaust_the_budget_and_lose() {
        let mut game = fresh("cat", 5);

        for guess in ["x", "y", "z", "w"] {
            let result = game.guess_character(guess);
            assert_eq!(result.outcome, GuessOutcome::Ongoing);
            assert_eq!(result.message, format!("No '{guess}' here!"));
        }

        let result = game.guess_character("v");
        assert_eq!(result.outcome, GuessOutcome::Lost);
        assert!(result.message.ends_with("Game over!"));
        assert_eq!(game.attempts_remaining, 0);
        assert!(game.game_over);
        assert!(!game.won);
        assert_eq!(game.guesses_used(), 5);
        assert_eq!(game.history.len(), 5);
    }

    #[test]
    fn multi_character_guess_is_rejected_without_mutation() {
        let mut game = fresh("cat", 5);

        let result = game.guess_character("ca");
        assert_eq!(result.outcome, GuessOutcome::Rejected);
        assert_eq!(result.message, "One character per turn");
        assert_eq!(game.attempts_remaining, 5);
        assert!(game.history.is_empty());
    }

    #[test]
    fn empty_guess_is_rejected_without_mutation() {
        let mut game = fresh("cat", 5);

        let result = game.guess_character("");
        assert_eq!(result.outcome, GuessOutcome::Rejected);
        assert_eq!(game.attempts_remaining, 5);
    }

    #[test]
    fn correct_answer_wins_before_budget_runs_out() {
        let mut game = fresh("cat", 5);

        let result = game.guess_answer("cat");
        assert_eq!(result.outcome, GuessOutcome::Won);
        assert_eq!(result.message, "You win!");
        assert_eq!(game.attempts_remaining, 4);
        assert!(game.game_over);
        assert!(game.won);
        assert_eq!(game.guesses_used(), 1);
    }

    #[test]
    fn wrong_answer_keeps_the_game_going() {
        let mut game = fresh("cat", 5);

        let result = game.guess_answer("dog");
        assert_eq!(result.outcome, GuessOutcome::Ongoing);
        assert_eq!(result.message, "Wrong answer, try again");
        assert_eq!(game.attempts_remaining, 4);
        assert!(!game.game_over);
    }

    #[test]
    fn correct_answer_on_last_attempt_still_loses() {
        let mut game = fresh("cat", 1);

        let result = game.guess_answer("cat");
        assert_eq!(result.outcome, GuessOutcome::Lost);
        assert_eq!(result.message, "Game over!");
        assert!(game.game_over);
        assert!(!game.won);
    }

    #[test]
    fn answer_guesses_exhaust_the_budget_and_lose() {
        let mut game = fresh("cat", 2);

        assert_eq!(game.guess_answer("dog").outcome, GuessOutcome::Ongoing);
        let result = game.guess_answer("bird");
        assert_eq!(result.outcome, GuessOutcome::Lost);
        assert_eq!(game.attempts_remaining, 0);
    }

    #[test]
    fn terminal_game_ignores_further_guesses() {
        let mut game = fresh("cat", 1);
        game.guess_answer("cat");
        let snapshot = game.clone();

        for result in [
            game.guess_character("c"),
            game.guess_answer("cat"),
            game.guess_character("ca"),
        ] {
            assert_eq!(result.outcome, GuessOutcome::AlreadyOver);
            assert_eq!(result.message, "Game already over!");
        }
        assert_eq!(game, snapshot);
    }

    #[test]
    fn game_over_flag_flips_exactly_when_budget_reaches_zero() {
        let mut game = fresh("hangman", 3);

        game.guess_character("x");
        assert!(!game.game_over);
        game.guess_character("y");
        assert!(!game.game_over);
        game.guess_character("z");
        assert!(game.game_over);
        assert_eq!(game.attempts_remaining, 0);
    }

    #[test]
    fn history_records_messages_and_guesses_in_order() {
        let mut game = fresh("cat", 5);
        game.guess_character("c");
        game.guess_answer("dog");

        assert_eq!(
            game.history,
            vec![
                HistoryEntry {
                    message: "Character is found on position 1.".into(),
                    guess: "c".into(),
                },
                HistoryEntry {
                    message: "Wrong answer, try again".into(),
                    guess: "dog".into(),
                },
            ]
        );
        assert_eq!(
            game.history_summary(),
            "(message='Character is found on position 1.', guess='c') \
             (message='Wrong answer, try again', guess='dog')"
        );
    }

    #[test]
    fn entity_round_trip_preserves_the_game() {
        let mut game = fresh("hangman", 5);
        game.guess_character("a");

        let entity: GameEntity = game.clone().into();
        let restored: Game = entity.into();
        assert_eq!(restored, game);
    }
}
