use super::handlers;
use crate::AppContext;
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
};
use axum::http::HeaderValue;
use axum::routing::post;
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::set_header::SetResponseHeaderLayer;

/// `/` and `/v1/chat` relay upstream replies verbatim and answer CORS
/// preflights. `/v2/chat` returns a flattened `output_text` and has no CORS.
pub fn build_router(ctx: AppContext) -> Router {
    let relay = post(handlers::relay_chat)
        .options(handlers::preflight)
        .fallback(handlers::method_not_allowed);
    let flatten = post(handlers::flatten_chat).fallback(handlers::method_not_allowed);

    let relay_routes = with_cors(
        Router::new()
            .route("/", relay.clone())
            .route("/v1/chat", relay),
    );

    Router::new()
        .merge(relay_routes)
        .route("/v2/chat", flatten)
        .layer(CompressionLayer::new())
        .with_state(ctx)
}

fn with_cors(routes: Router<AppContext>) -> Router<AppContext> {
    routes
        .route_layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .route_layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("POST, OPTIONS"),
        ))
        .route_layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
}
