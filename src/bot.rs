use crate::error::SendError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use reqwest::StatusCode;

const API_HOSTNAME: &str = "https://api.telegram.org";

/// Delivers notification messages to the configured chat. The poller only
/// depends on this seam; [`TelegramBot`] is the production implementation.
#[async_trait]
pub trait Notifier {
    async fn send_message(&self, text: &str) -> Result<(), SendError>;
}

/// Minimal Telegram Bot API client. Only `sendMessage` is needed.
#[derive(Debug, Clone)]
pub struct TelegramBot {
    client: reqwest::Client,
    token: String,
    chat_id: String,
}

#[derive(Serialize, Debug)]
struct SendMessageParams<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// Envelope every Bot API method responds with.
#[derive(Deserialize, Debug)]
struct ApiResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

impl TelegramBot {
    pub fn new(token: String, chat_id: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            token,
            chat_id,
        }
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", API_HOSTNAME, self.token, method)
    }
}

#[async_trait]
impl Notifier for TelegramBot {
    /// Sends `text` to the configured chat. A failed send is never
    /// swallowed; an HTTP 400 surfaces as the distinct
    /// [`SendError::BadRequest`].
    async fn send_message(&self, text: &str) -> Result<(), SendError> {
        let response = self.client.post(self.method_url("sendMessage"))
            .json(&SendMessageParams {
                chat_id: &self.chat_id,
                text,
            })
            .send()
            .await?;
        let status = response.status();
        let body = response.bytes().await?;
        let body = serde_json::from_slice::<ApiResponse>(&body)?;

        if body.ok {
            tracing::debug!("Delivered message: {text}");
            return Ok(());
        }

        let description = body.description
            .unwrap_or_else(|| format!("Request failed with {status}"));

        if status == StatusCode::BAD_REQUEST {
            Err(SendError::BadRequest(description))
        } else {
            Err(SendError::Api(description))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_method_url() {
        let bot = TelegramBot::new("123:abc".into(), "42".into());

        assert_eq!(
            bot.method_url("sendMessage"),
            "https://api.telegram.org/bot123:abc/sendMessage",
        );
    }

    #[test]
    fn parses_error_envelope() {
        let body = r#"{"ok":false,"error_code":400,"description":"Bad Request: chat not found"}"#;
        let response = serde_json::from_str::<ApiResponse>(body).unwrap();

        assert!(!response.ok);
        assert_eq!(response.description.as_deref(), Some("Bad Request: chat not found"));
    }
}
