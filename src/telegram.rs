//! Telegram delivery.
//!
//! [`TelegramClient`] talks to the Bot API; [`Notifier`] wraps any
//! [`Messenger`] so that a failed send is logged and reported as `false`
//! instead of bubbling up into the poll loop.

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::{BotError, Result};

/// Something that can post a text message to a chat.
pub trait Messenger {
    /// Sends `text` to `chat_id`.
    fn send_text(&self, chat_id: &str, text: &str) -> Result<()>;
}

/// `sendMessage` request body.
#[derive(Debug, Serialize)]
struct SendMessagePayload<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// Envelope of every Bot API reply.
#[derive(Debug, Deserialize)]
struct BotApiReply {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

/// Blocking client for the Telegram Bot API.
#[derive(Debug, Clone)]
pub struct TelegramClient {
    client: Client,
    api_url: String,
    token: String,
}

impl TelegramClient {
    /// Creates a client for the bot identified by `token`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(api_url: String, token: String) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(constants::HTTP_REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            api_url,
            token,
        })
    }

    fn method_url(&self, method: &str) -> String {
        format!(
            "{}/bot{}/{method}",
            self.api_url.trim_end_matches('/'),
            self.token
        )
    }
}

impl Messenger for TelegramClient {
    fn send_text(&self, chat_id: &str, text: &str) -> Result<()> {
        let payload = SendMessagePayload { chat_id, text };

        // The URL embeds the bot token, so transport errors are stripped of it.
        let response = self
            .client
            .post(self.method_url("sendMessage"))
            .json(&payload)
            .send()
            .map_err(|e| BotError::Delivery(format!("Telegram недоступен: {}", e.without_url())))?;

        let status = response.status();
        let reply: Option<BotApiReply> = response.json().ok();

        match reply {
            Some(BotApiReply { ok: true, .. }) if status.is_success() => Ok(()),
            Some(BotApiReply { description, .. }) => Err(BotError::Delivery(format!(
                "Telegram отклонил сообщение ({}): {}",
                status.as_u16(),
                description.unwrap_or_default()
            ))),
            None => Err(BotError::Delivery(format!(
                "Telegram вернул некорректный ответ ({})",
                status.as_u16()
            ))),
        }
    }
}

/// Best-effort sender bound to a single chat.
#[derive(Debug)]
pub struct Notifier<M> {
    messenger: M,
    chat_id: String,
}

impl<M: Messenger> Notifier<M> {
    /// Creates a notifier posting to `chat_id`.
    pub fn new(messenger: M, chat_id: String) -> Self {
        Self { messenger, chat_id }
    }

    /// Returns the underlying messenger.
    pub fn messenger(&self) -> &M {
        &self.messenger
    }

    /// Sends `message`, returning whether Telegram accepted it.
    pub fn send_message(&self, message: &str) -> bool {
        log::info!("Попытка отправки сообщения {message}");
        match self.messenger.send_text(&self.chat_id, message) {
            Ok(()) => {
                log::debug!("Сообщение успешно отправлено");
                true
            }
            Err(e) => {
                log::error!("{e}");
                false
            }
        }
    }
}
