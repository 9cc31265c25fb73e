use crate::config::Credentials;
use crate::domain::{ChatInput, FlattenedReply};
use crate::infrastructure::openai::{OpenAiClient, ResponsesRequest};
use chat_proxy_errors::ProxyError;
use std::sync::Arc;

/// Flattened-output variant: fixed model, messages sent as `input`, and the
/// reply collapsed into a single `output_text`.
pub struct FlattenChat {
    client: Arc<OpenAiClient>,
    credentials: Option<Credentials>,
}

impl FlattenChat {
    pub fn new(client: Arc<OpenAiClient>, credentials: Option<Credentials>) -> Self {
        Self {
            client,
            credentials,
        }
    }

    pub async fn execute(&self, body: &[u8]) -> Result<FlattenedReply, ProxyError> {
        let input = ChatInput::from_slice(body)?;
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(ProxyError::MissingCredentials)?;

        let reply = self
            .client
            .create_response(credentials, &ResponsesRequest::new(&input.messages))
            .await
            .map_err(|e| ProxyError::AiServer(credentials.redact(&e.to_string())))?;

        // No status relay on this route: any upstream failure is ours.
        if !reply.is_success() {
            return Err(ProxyError::AiServer(format!(
                "upstream returned {}",
                reply.status
            )));
        }

        Ok(FlattenedReply::from_upstream(&reply.body))
    }
}
