//! Fault taxonomy for a poll cycle.
//!
//! Every stage below the poll loop returns [`BotError`]; the loop matches on
//! the variant to decide whether the fault is worth a chat notification.

use thiserror::Error;

/// A fault raised while fetching, validating, formatting or delivering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BotError {
    /// Transport failure, non-200 reply or unparseable body from the review API.
    #[error("{0}")]
    Api(String),

    /// The API reply does not have the expected shape.
    #[error("{0}")]
    Shape(String),

    /// A homework record lacks a required key.
    #[error("Словарь ответа API не содержит ключа {0}")]
    MissingField(&'static str),

    /// The homework status is not one of the known review states.
    #[error("{0}")]
    Status(String),

    /// Telegram refused or never received the message.
    #[error("{0}")]
    Delivery(String),
}

impl BotError {
    /// Returns `true` for faults that should be reported to the chat.
    ///
    /// Delivery faults are excluded: reporting them would go through the same
    /// broken channel.
    pub fn should_notify(&self) -> bool {
        !matches!(self, Self::Delivery(_))
    }
}

/// Result alias for poll-cycle stages.
pub type Result<T> = std::result::Result<T, BotError>;
