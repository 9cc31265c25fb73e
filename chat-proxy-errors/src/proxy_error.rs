use serde::Serialize;

/// Every way a proxied chat request can end other than a successful relay.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProxyError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Invalid JSON body: {0}")]
    InvalidJson(String),

    #[error("Messages array is required")]
    MissingMessages,

    #[error("Server configuration error")]
    MissingCredentials,

    /// Non-success answer from the upstream API. `body` holds the upstream
    /// JSON text exactly as received.
    #[error("Upstream returned {status}")]
    Upstream { status: u16, body: String },

    #[error("Internal server error: {0}")]
    Internal(String),

    /// Failure on the flattened route. The detail is for logs only.
    #[error("AI server error: {0}")]
    AiServer(String),
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl ErrorResponse {
    fn new(error: &'static str) -> Self {
        Self {
            error,
            message: None,
        }
    }
}

impl ProxyError {
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MethodNotAllowed => 405,
            Self::InvalidJson(_) | Self::MissingMessages => 400,
            Self::Upstream { status, .. } => *status,
            Self::MissingCredentials | Self::Internal(_) | Self::AiServer(_) => 500,
        }
    }

    /// JSON text sent to the caller.
    pub fn body(&self) -> String {
        let response = match self {
            Self::Upstream { body, .. } => return body.clone(),
            Self::MethodNotAllowed => ErrorResponse::new("Method not allowed"),
            Self::InvalidJson(_) => ErrorResponse::new("Invalid JSON body"),
            Self::MissingMessages => ErrorResponse::new("Messages array is required"),
            Self::MissingCredentials => ErrorResponse::new("Server configuration error"),
            Self::Internal(message) => ErrorResponse {
                error: "Internal server error",
                message: Some(message.clone()),
            },
            Self::AiServer(_) => ErrorResponse::new("AI server error"),
        };
        serde_json::to_string(&response).unwrap_or_default()
    }
}

#[cfg(feature = "axum")]
mod axum_impl {
    use super::ProxyError;
    use axum::http::header::CONTENT_TYPE;
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};

    impl IntoResponse for ProxyError {
        fn into_response(self) -> Response {
            let status = StatusCode::from_u16(self.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, [(CONTENT_TYPE, "application/json")], self.body()).into_response()
        }
    }
}
