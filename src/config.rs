//! Application-level configuration loading, including the runtime word list.

use std::{env, fs, io::ErrorKind, path::PathBuf, time::Duration};

use rand::seq::IndexedRandom;
use serde::Deserialize;
use tracing::{info, warn};

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "HANGMAN_BACK_CONFIG_PATH";
/// Attempt budget used when a new-game request does not specify one.
const DEFAULT_ATTEMPTS: u32 = 5;
/// How often the reminder job wakes up by default.
const DEFAULT_REMINDER_INTERVAL_SECS: u64 = 3_600;
/// Answer used in the unreachable case of an exhausted word list.
const FALLBACK_WORD: &str = "hangman";

#[derive(Debug, Clone)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    words: Vec<String>,
    default_attempts: u32,
    reminder_interval: Duration,
}

impl AppConfig {
    /// Load the application configuration from disk, falling back to the
    /// baked-in word list and defaults.
    pub fn load() -> Self {
        let path = resolve_config_path();
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<RawConfig>(&contents) {
                Ok(raw) => {
                    let app_config: Self = raw.into();
                    info!(
                        path = %path.display(),
                        words = app_config.words.len(),
                        "loaded word list from config"
                    );
                    app_config
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        }
    }

    /// Candidate answers a new game picks from.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Pick an answer uniformly at random from the word list.
    ///
    /// The list is never empty (loading substitutes the built-in words), so
    /// the fallback only guards the `choose` contract.
    pub fn random_word(&self) -> &str {
        self.words
            .choose(&mut rand::rng())
            .map(String::as_str)
            .unwrap_or(FALLBACK_WORD)
    }

    /// Attempt budget applied when the request leaves it out.
    pub fn default_attempts(&self) -> u32 {
        self.default_attempts
    }

    /// Pause between two reminder job runs.
    pub fn reminder_interval(&self) -> Duration {
        self.reminder_interval
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            words: default_words(),
            default_attempts: DEFAULT_ATTEMPTS,
            reminder_interval: Duration::from_secs(DEFAULT_REMINDER_INTERVAL_SECS),
        }
    }
}

#[derive(Debug, Deserialize)]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    #[serde(default)]
    words: Vec<String>,
    default_attempts: Option<u32>,
    reminder_interval_secs: Option<u64>,
}

impl From<RawConfig> for AppConfig {
    fn from(value: RawConfig) -> Self {
        let words = if value.words.is_empty() {
            warn!("config declares no words; using the built-in word list");
            default_words()
        } else {
            value.words
        };

        Self {
            words,
            default_attempts: value.default_attempts.unwrap_or(DEFAULT_ATTEMPTS),
            reminder_interval: Duration::from_secs(
                value
                    .reminder_interval_secs
                    .unwrap_or(DEFAULT_REMINDER_INTERVAL_SECS),
            ),
        }
    }
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Built-in word list shipped with the binary.
fn default_words() -> Vec<String> {
    ["python", "hangman", "easy", "difficult", "answer", "xylophone"]
        .into_iter()
        .map(str::to_owned)
        .collect()
}
