use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::response::Response;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::any::Any;
use std::time::Duration;
use tower_http::{
    catch_panic::CatchPanicLayer, cors::CorsLayer, set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use crate::api::handlers::{self, AppState};
use crate::config::ServerConfig;
use crate::error::error_body;

/// Create the router with all endpoints
pub fn create_router(state: AppState, server: &ServerConfig) -> Router {
    let api_routes = Router::new()
        .route(
            "/summarize",
            post(handlers::summarize).fallback(handlers::method_not_allowed),
        )
        .with_state(state);

    let health_routes = Router::new()
        .route("/", get(handlers::home).fallback(handlers::method_not_allowed))
        .route(
            "/health",
            get(handlers::health_check).fallback(handlers::method_not_allowed),
        );

    Router::new()
        .merge(health_routes)
        .merge(api_routes)
        .fallback(handlers::not_found)
        .layer(
            // Oversized bodies surface as a JsonRejection, so they keep the error envelope
            DefaultBodyLimit::max(server.max_request_body_size),
        )
        .layer(
            CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
                .allow_origin(tower_http::cors::Any)
                .max_age(Duration::from_secs(3600)),
        )
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(
            // Panics become the same JSON envelope as any other 500
            CatchPanicLayer::custom(handle_panic),
        )
        .layer(TraceLayer::new_for_http())
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!("Handler panicked: {}", detail);

    error_body(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
}
