use crate::AppContext;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chat_proxy_errors::ProxyError;
use tracing::Instrument;
use uuid::Uuid;

pub async fn relay_chat(State(ctx): State<AppContext>, body: Bytes) -> Response {
    let span = tracing::info_span!("chat", route = "relay", request_id = %Uuid::new_v4());
    async move {
        match ctx.relay_chat.execute(&body).await {
            Ok(reply) => raw_json_response(reply.status, reply.raw),
            Err(err) => error_response(err),
        }
    }
    .instrument(span)
    .await
}

pub async fn flatten_chat(State(ctx): State<AppContext>, body: Bytes) -> Response {
    let span = tracing::info_span!("chat", route = "flatten", request_id = %Uuid::new_v4());
    async move {
        match ctx.flatten_chat.execute(&body).await {
            Ok(reply) => (StatusCode::OK, Json(reply)).into_response(),
            Err(err) => error_response(err),
        }
    }
    .instrument(span)
    .await
}

pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

pub async fn method_not_allowed() -> ProxyError {
    ProxyError::MethodNotAllowed
}

fn raw_json_response(status: u16, body: String) -> Response {
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
    (status, [(CONTENT_TYPE, "application/json")], body).into_response()
}

fn error_response(err: ProxyError) -> Response {
    match &err {
        ProxyError::MissingCredentials => tracing::error!("OPENAI_API_KEY not configured"),
        ProxyError::Upstream { status, .. } => tracing::warn!("Upstream returned {}", status),
        ProxyError::Internal(detail) | ProxyError::AiServer(detail) => {
            tracing::error!("Chat proxy error: {}", detail)
        }
        _ => tracing::debug!("Rejected request: {}", err),
    }
    err.into_response()
}
