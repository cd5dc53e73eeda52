use reqwest::Client;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::time::Duration;

use crate::logic::errors::{server_error_message, FetchError};

/// Default backend endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/fetch_news";

/// One article as returned by the backend
///
/// Text fields accept any JSON value so one odd field cannot sink the whole
/// response: numbers and booleans are stringified, null becomes empty.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Article {
    #[serde(default, deserialize_with = "deserialize_lenient_text")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_lenient_text")]
    pub summary: String,
    #[serde(default, deserialize_with = "deserialize_lenient_text")]
    pub url: String,
    #[serde(default, deserialize_with = "deserialize_image")]
    pub image: Option<String>,
}

#[derive(Debug, Serialize)]
struct FetchNewsRequest<'a> {
    country: &'a str,
}

/// Success body of `POST /fetch_news`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FetchNewsResponse {
    #[serde(default)]
    pub news: Option<Vec<Article>>,
}

/// Deserialize any JSON value as display text
fn deserialize_lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

/// Only a string is an image source; anything else means "no image"
fn deserialize_image<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

/// HTTP client for the news backend
#[derive(Clone)]
pub struct NewsClient {
    endpoint: String,
    client: Client,
}

impl NewsClient {
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            client: Client::new(),
        }
    }

    /// Build a client whose requests give up after `timeout`
    pub fn with_timeout(endpoint: String, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let Some(timeout) = timeout else {
            return Ok(Self::new(endpoint));
        };

        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { endpoint, client })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Request news for one country
    ///
    /// Non-success statuses become `FetchError::Server` carrying the backend's
    /// `detail` message when it sent one.
    pub async fn fetch_news(&self, country: &str) -> Result<FetchNewsResponse, FetchError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&FetchNewsRequest { country })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(FetchError::Server {
                status: status.as_u16(),
                message: server_error_message(status.as_u16(), &body),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}
