mod response;

pub use response::{check_response, HomeworkRecord, ReviewUpdates};

use crate::error::Error;
use async_trait::async_trait;
use reqwest::header;
use reqwest::StatusCode;
use serde_json::Value;

const ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";
const USER_AGENT_STRING: &str = concat!("homework-notifier/", env!("CARGO_PKG_VERSION"));

/// Something that can be asked for homework status updates since a given
/// date. Implemented by [`HomeworkApi`]; test doubles stand in for it when
/// driving the poller.
#[async_trait]
pub trait StatusSource {
    /// Fetches the raw status updates since `from_date` (Unix seconds).
    async fn homework_statuses(&self, from_date: i64) -> Result<Value, Error>;
}

/// Client for the Practicum homework statuses endpoint.
#[derive(Debug, Clone)]
pub struct HomeworkApi {
    client: reqwest::Client,
    token: String,
}

impl HomeworkApi {
    pub fn new(token: String) -> Self {
        let mut headers = header::HeaderMap::new();

        headers.insert(header::USER_AGENT, header::HeaderValue::from_static(USER_AGENT_STRING));

        let client = reqwest::ClientBuilder::new()
            .default_headers(headers)
            .build()
            .unwrap();

        Self {
            client,
            token,
        }
    }
}

#[async_trait]
impl StatusSource for HomeworkApi {
    /// Issues the GET request for updates since `from_date`. Only an HTTP
    /// 200 with a decodable JSON body counts as success; anything else is
    /// reported to the caller and aborts the current cycle.
    async fn homework_statuses(&self, from_date: i64) -> Result<Value, Error> {
        let response = self.client.get(ENDPOINT)
            .header(header::AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await?;
        let status = response.status();

        if status != StatusCode::OK {
            return Err(Error::Http(status));
        }

        let body = response.bytes().await?;
        let value = serde_json::from_slice::<Value>(&body)?;

        Ok(value)
    }
}
