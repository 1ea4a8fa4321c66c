//! API client for the homework status endpoint.
//!
//! This module provides the [`ApiClient`] struct which performs the single
//! status query the bot needs, and the [`StatusSource`] trait the poll loop
//! depends on.

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde_json::Value;

use crate::constants;
use crate::error::{BotError, Result};

/// Anything that can answer "what changed since `cursor`".
pub trait StatusSource {
    /// Fetches the raw status snapshot starting at `cursor`.
    fn fetch_status(&self, cursor: i64) -> Result<Value>;
}

/// Client for the Practicum review API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    endpoint: String,
    token: String,
}

impl ApiClient {
    /// Creates a new API client.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - Full URL of the homework status endpoint
    /// * `token` - OAuth token sent in the `Authorization` header
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(endpoint: String, token: String) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(constants::HTTP_REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            endpoint,
            token,
        })
    }

    /// Returns the endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Queries the endpoint for statuses changed since `cursor`.
    ///
    /// A zero cursor means "now". The body is returned unvalidated.
    pub fn get_api_answer(&self, cursor: i64) -> Result<Value> {
        let from_date = if cursor == 0 {
            chrono::Utc::now().timestamp()
        } else {
            cursor
        };

        let response = self
            .client
            .get(&self.endpoint)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .map_err(|e| {
                api_fault(format!("Эндпоинт {} недоступен: {e}", self.endpoint))
            })?;

        if response.status() != StatusCode::OK {
            return Err(api_fault(format!(
                "Код ответа API: {}",
                response.status().as_u16()
            )));
        }

        response
            .json::<Value>()
            .map_err(|e| api_fault(format!("Ошибка преобразования в формат json: {e}")))
    }
}

impl StatusSource for ApiClient {
    fn fetch_status(&self, cursor: i64) -> Result<Value> {
        self.get_api_answer(cursor)
    }
}

fn api_fault(message: String) -> BotError {
    log::error!("{message}");
    BotError::Api(message)
}
