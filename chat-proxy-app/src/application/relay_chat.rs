use crate::config::Credentials;
use crate::domain::ChatRequest;
use crate::infrastructure::openai::{OpenAiClient, UpstreamReply};
use chat_proxy_errors::ProxyError;
use std::sync::Arc;

/// Pass-through variant: forwards the full parameter set and hands the
/// upstream status and body back untouched.
pub struct RelayChat {
    client: Arc<OpenAiClient>,
    credentials: Option<Credentials>,
}

impl RelayChat {
    pub fn new(client: Arc<OpenAiClient>, credentials: Option<Credentials>) -> Self {
        Self {
            client,
            credentials,
        }
    }

    pub async fn execute(&self, body: &[u8]) -> Result<UpstreamReply, ProxyError> {
        let request = ChatRequest::from_slice(body)?;
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(ProxyError::MissingCredentials)?;

        let reply = self
            .client
            .chat_completion(credentials, &request)
            .await
            .map_err(|e| ProxyError::Internal(credentials.redact(&e.to_string())))?;

        if !reply.is_success() {
            return Err(ProxyError::Upstream {
                status: reply.status,
                body: reply.raw,
            });
        }

        Ok(reply)
    }
}
