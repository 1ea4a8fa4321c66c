//! Review states and the chat text for each.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::error::{BotError, Result};

/// Review state of a homework submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HomeworkStatus {
    /// Reviewer accepted the work.
    Approved,
    /// Reviewer has picked the work up.
    Reviewing,
    /// Reviewer sent the work back with remarks.
    Rejected,
}

impl HomeworkStatus {
    /// Canned verdict shown in the chat.
    pub fn verdict(self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }

    /// Wire name used by the API.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Reviewing => "reviewing",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HomeworkStatus {
    type Err = BotError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "approved" => Ok(Self::Approved),
            "reviewing" => Ok(Self::Reviewing),
            "rejected" => Ok(Self::Rejected),
            other => Err(unknown_status(other)),
        }
    }
}

fn unknown_status(status: impl fmt::Display) -> BotError {
    BotError::Status(format!("Статус {status} неизвестен"))
}

/// Builds the chat message for a homework record.
///
/// `homework_name` is checked before `status`, so a record missing both
/// reports the name.
pub fn parse_status(homework: &Value) -> Result<String> {
    let name = match homework.get("homework_name") {
        None | Some(Value::Null) => return Err(BotError::MissingField("homework_name")),
        Some(Value::String(name)) => name.clone(),
        Some(other) => other.to_string(),
    };

    let status = match homework.get("status") {
        None | Some(Value::Null) => return Err(BotError::MissingField("status")),
        Some(Value::String(status)) => status.parse::<HomeworkStatus>()?,
        Some(other) => return Err(unknown_status(other)),
    };

    let message = format!(
        "Изменился статус проверки работы \"{name}\". {}",
        status.verdict()
    );
    log::debug!("{message}");

    Ok(message)
}
