//! homework-bot - relays homework review status changes to Telegram.
//!
//! The bot polls the Practicum review API on a fixed interval, turns the
//! status of the most recent submission into a chat message and posts it
//! to a single Telegram chat.
//!
//! # Architecture
//!
//! Everything runs on one thread, in this order:
//!
//! - **Config** - credentials gate and overrides
//! - **Practicum** - status query, reply validation, status text
//! - **Telegram** - best-effort delivery
//! - **Bot** - the poll loop that owns the cursor
//!
//! # Modules
//!
//! - [`bot`] - poll loop and cycle outcome
//! - [`practicum`] - review API client and reply handling
//! - [`telegram`] - Bot API client and notifier
//! - [`config`] - configuration loading
//! - [`error`] - fault taxonomy

pub mod bot;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod practicum;
pub mod telegram;

// Re-export commonly used types
pub use bot::{Bot, CycleOutcome, PollState};
pub use config::Config;
pub use error::BotError;
pub use practicum::{ApiClient, HomeworkStatus, StatusSource};
pub use telegram::{Messenger, Notifier, TelegramClient};
