use super::types::{ResponsesRequest, CHAT_COMPLETIONS_PATH, RESPONSES_PATH};
use crate::config::Credentials;
use crate::domain::ChatRequest;
use serde::Serialize;
use serde_json::Value;
use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("invalid upstream url: {0}")]
    Url(#[from] url::ParseError),

    #[error("request to upstream failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("upstream returned non UTF-8 body: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("upstream returned invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Upstream status plus its body, both as the parsed JSON and as the exact
/// text received.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: Value,
    pub raw: String,
}

impl UpstreamReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub struct OpenAiClient {
    http_client: reqwest::Client,
    base_url: Url,
}

impl OpenAiClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url,
        }
    }

    pub async fn chat_completion(
        &self,
        credentials: &Credentials,
        request: &ChatRequest,
    ) -> Result<UpstreamReply, UpstreamError> {
        self.post_json(CHAT_COMPLETIONS_PATH, credentials, request)
            .await
    }

    pub async fn create_response(
        &self,
        credentials: &Credentials,
        request: &ResponsesRequest<'_>,
    ) -> Result<UpstreamReply, UpstreamError> {
        self.post_json(RESPONSES_PATH, credentials, request).await
    }

    async fn post_json<T: Serialize + ?Sized>(
        &self,
        path: &str,
        credentials: &Credentials,
        payload: &T,
    ) -> Result<UpstreamReply, UpstreamError> {
        let url = self.endpoint(path)?;
        tracing::debug!("POST {}", url);

        let response = self
            .http_client
            .post(url)
            .header("Authorization", credentials.bearer())
            .header("Content-Type", "application/json")
            .json(payload)
            .send()
            .await?;

        let status = response.status().as_u16();
        let raw = String::from_utf8(response.bytes().await?.to_vec())?;
        let body = serde_json::from_str(&raw)?;

        Ok(UpstreamReply { status, body, raw })
    }

    fn endpoint(&self, path: &str) -> Result<Url, url::ParseError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Url::parse(&format!("{}/{}", base, path))
    }
}
