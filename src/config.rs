//! Configuration loading.
//!
//! Credentials and overrides come from the process environment, optionally
//! seeded from a `.env` file in the working directory. Nothing is written
//! back to disk.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;

use crate::constants;

/// Environment variables holding the API token, newest name first.
const PRACTICUM_TOKEN_VARS: &[&str] = &["PRACTICUM_TOKEN", "TOKEN_PRAKT"];
/// Environment variables holding the Telegram bot token.
const TELEGRAM_TOKEN_VARS: &[&str] = &["TELEGRAM_TOKEN", "TOKEN"];
/// Environment variables holding the target chat id.
const TELEGRAM_CHAT_ID_VARS: &[&str] = &["TELEGRAM_CHAT_ID", "MY_CHAD_ID"];

/// Runtime configuration for the bot.
#[derive(Clone)]
pub struct Config {
    /// OAuth token for the review API.
    pub practicum_token: String,
    /// Telegram bot token.
    pub telegram_token: String,
    /// Chat that receives notifications.
    pub telegram_chat_id: String,
    /// Homework status endpoint.
    pub endpoint: String,
    /// Telegram Bot API base URL.
    pub telegram_api_url: String,
    /// Seconds between poll cycles.
    pub retry_period: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            practicum_token: String::new(),
            telegram_token: String::new(),
            telegram_chat_id: String::new(),
            endpoint: constants::PRACTICUM_ENDPOINT.to_string(),
            telegram_api_url: constants::TELEGRAM_API_URL.to_string(),
            retry_period: constants::RETRY_PERIOD.as_secs(),
        }
    }
}

// Tokens must never reach the log.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("practicum_token", &redact(&self.practicum_token))
            .field("telegram_token", &redact(&self.telegram_token))
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("endpoint", &self.endpoint)
            .field("telegram_api_url", &self.telegram_api_url)
            .field("retry_period", &self.retry_period)
            .finish()
    }
}

/// Merges a `.env` file from the working directory into the environment.
///
/// Returns the file that was read, or `None` when there is none.
pub fn load_env_file() -> Result<Option<PathBuf>> {
    match dotenvy::dotenv() {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(anyhow::Error::new(e).context("Failed to read .env file")),
    }
}

/// Log file location. Read on its own because the logger starts before
/// [`Config`] is built.
pub fn log_file_from_env() -> PathBuf {
    log_file_from_lookup(|key| std::env::var(key).ok())
}

/// [`log_file_from_env`] over an arbitrary key lookup.
pub fn log_file_from_lookup<F>(lookup: F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    non_empty(&lookup, "HOMEWORK_BOT_LOG_FILE")
        .map_or_else(|| PathBuf::from(constants::DEFAULT_LOG_FILE), PathBuf::from)
}

// An empty override counts as unset.
fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).filter(|v| !v.is_empty())
}

fn redact(secret: &str) -> &'static str {
    if secret.is_empty() {
        "<unset>"
    } else {
        "<redacted>"
    }
}

impl Config {
    /// Reads the process environment; call [`load_env_file`] first to
    /// include `.env`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup.
    ///
    /// `from_env` passes `std::env::var`; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let first_of = |keys: &[&str]| -> String {
            keys.iter()
                .find_map(|key| non_empty(&lookup, key))
                .unwrap_or_default()
        };

        let mut config = Self {
            practicum_token: first_of(PRACTICUM_TOKEN_VARS),
            telegram_token: first_of(TELEGRAM_TOKEN_VARS),
            telegram_chat_id: first_of(TELEGRAM_CHAT_ID_VARS),
            ..Self::default()
        };

        if let Some(endpoint) = non_empty(&lookup, "HOMEWORK_BOT_ENDPOINT") {
            config.endpoint = endpoint;
        }

        if let Some(url) = non_empty(&lookup, "HOMEWORK_BOT_TELEGRAM_URL") {
            config.telegram_api_url = url;
        }

        if let Some(retry_period) = non_empty(&lookup, "HOMEWORK_BOT_RETRY_PERIOD") {
            match retry_period.parse::<u64>() {
                Ok(secs) => config.retry_period = secs,
                Err(e) => log::warn!(
                    "Ignoring HOMEWORK_BOT_RETRY_PERIOD={retry_period:?}: {e}"
                ),
            }
        }

        config
    }

    /// Returns `true` iff all three credentials are present.
    pub fn check_tokens(&self) -> bool {
        !self.practicum_token.is_empty()
            && !self.telegram_token.is_empty()
            && !self.telegram_chat_id.is_empty()
    }

    /// Names of the credentials that are missing, for the startup log.
    pub fn missing_tokens(&self) -> Vec<&'static str> {
        [
            (PRACTICUM_TOKEN_VARS[0], &self.practicum_token),
            (TELEGRAM_TOKEN_VARS[0], &self.telegram_token),
            (TELEGRAM_CHAT_ID_VARS[0], &self.telegram_chat_id),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    /// Delay between poll cycles.
    pub fn retry_period(&self) -> Duration {
        Duration::from_secs(self.retry_period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.endpoint, constants::PRACTICUM_ENDPOINT);
        assert_eq!(config.telegram_api_url, "https://api.telegram.org");
        assert_eq!(config.retry_period, 600);
        assert!(!config.check_tokens());
    }

    #[test]
    fn test_check_tokens_requires_all_three() {
        let full = [
            ("PRACTICUM_TOKEN", "p"),
            ("TELEGRAM_TOKEN", "t"),
            ("TELEGRAM_CHAT_ID", "42"),
        ];
        assert!(Config::from_lookup(lookup_from(&full)).check_tokens());

        for skip in 0..full.len() {
            let partial: Vec<_> = full
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != skip)
                .map(|(_, pair)| *pair)
                .collect();
            let config = Config::from_lookup(lookup_from(&partial));
            assert!(!config.check_tokens(), "missing {} must fail", full[skip].0);
            assert_eq!(config.missing_tokens(), vec![full[skip].0]);
        }
    }

    #[test]
    fn test_empty_token_counts_as_missing() {
        let config = Config::from_lookup(lookup_from(&[
            ("PRACTICUM_TOKEN", ""),
            ("TELEGRAM_TOKEN", "t"),
            ("TELEGRAM_CHAT_ID", "42"),
        ]));
        assert!(!config.check_tokens());
    }

    #[test]
    fn test_legacy_variable_names() {
        let config = Config::from_lookup(lookup_from(&[
            ("TOKEN_PRAKT", "p"),
            ("TOKEN", "t"),
            ("MY_CHAD_ID", "42"),
        ]));
        assert!(config.check_tokens());
        assert_eq!(config.practicum_token, "p");
        assert_eq!(config.telegram_token, "t");
        assert_eq!(config.telegram_chat_id, "42");
    }

    #[test]
    fn test_new_names_win_over_legacy() {
        let config = Config::from_lookup(lookup_from(&[
            ("PRACTICUM_TOKEN", "new"),
            ("TOKEN_PRAKT", "old"),
        ]));
        assert_eq!(config.practicum_token, "new");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("HOMEWORK_BOT_ENDPOINT", "http://localhost:9000/statuses/"),
            ("HOMEWORK_BOT_TELEGRAM_URL", "http://localhost:9001"),
            ("HOMEWORK_BOT_RETRY_PERIOD", "5"),
        ]));
        assert_eq!(config.endpoint, "http://localhost:9000/statuses/");
        assert_eq!(config.telegram_api_url, "http://localhost:9001");
        assert_eq!(config.retry_period(), Duration::from_secs(5));
    }

    #[test]
    fn test_empty_overrides_keep_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("HOMEWORK_BOT_ENDPOINT", ""),
            ("HOMEWORK_BOT_TELEGRAM_URL", ""),
            ("HOMEWORK_BOT_RETRY_PERIOD", ""),
        ]));
        assert_eq!(config.endpoint, constants::PRACTICUM_ENDPOINT);
        assert_eq!(config.telegram_api_url, constants::TELEGRAM_API_URL);
        assert_eq!(config.retry_period, 600);
    }

    #[test]
    fn test_log_file_location() {
        assert_eq!(
            log_file_from_lookup(lookup_from(&[])),
            PathBuf::from("program.log")
        );
        assert_eq!(
            log_file_from_lookup(lookup_from(&[("HOMEWORK_BOT_LOG_FILE", "")])),
            PathBuf::from("program.log")
        );
        assert_eq!(
            log_file_from_lookup(lookup_from(&[("HOMEWORK_BOT_LOG_FILE", "/tmp/bot.log")])),
            PathBuf::from("/tmp/bot.log")
        );
    }

    #[test]
    fn test_invalid_retry_period_keeps_default() {
        let config =
            Config::from_lookup(lookup_from(&[("HOMEWORK_BOT_RETRY_PERIOD", "soon")]));
        assert_eq!(config.retry_period, 600);
    }

    #[test]
    fn test_debug_redacts_tokens() {
        let config = Config::from_lookup(lookup_from(&[
            ("PRACTICUM_TOKEN", "secret_practicum"),
            ("TELEGRAM_TOKEN", "secret_telegram"),
            ("TELEGRAM_CHAT_ID", "42"),
        ]));
        let debug = format!("{config:?}");
        assert!(!debug.contains("secret_practicum"));
        assert!(!debug.contains("secret_telegram"));
        assert!(debug.contains("<redacted>"));
    }
}
