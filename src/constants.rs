//! Application-wide constants for homework-bot.
//!
//! Endpoint defaults, timing and the canned chat texts live here so the
//! rest of the crate never hardcodes them.
//!
//! # Categories
//!
//! - **Endpoints**: default URLs for the review API and Telegram
//! - **Timing**: poll interval and HTTP timeout
//! - **Messages**: fixed texts sent to the chat or the log

use std::time::Duration;

// ============================================================================
// Endpoints
// ============================================================================

/// Homework status endpoint of the Practicum review API.
pub const PRACTICUM_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Base URL of the Telegram Bot API.
pub const TELEGRAM_API_URL: &str = "https://api.telegram.org";

// ============================================================================
// Timing
// ============================================================================

/// Delay between the end of one poll cycle and the start of the next.
pub const RETRY_PERIOD: Duration = Duration::from_secs(600);

/// Per-request timeout for both the review API and Telegram.
///
/// Matches reqwest's blocking default; set explicitly so a hung endpoint
/// cannot park the poll loop forever.
pub const HTTP_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Default log file, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "program.log";

// ============================================================================
// Messages
// ============================================================================

/// Printed and logged when a required credential is missing.
pub const MISSING_CREDENTIALS_MESSAGE: &str =
    "Отсутствуют обязательные переменные окружения: Программа принудительно остановлена";

/// Prefix of the chat message sent when a cycle faults.
pub const CYCLE_FAILURE_PREFIX: &str = "Сбой в работе программы";

/// Debug line for a cycle that produced nothing new to report.
pub const NO_UPDATES_MESSAGE: &str = "Нет обновлений статуса домашней работы";
