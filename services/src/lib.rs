use crate::config::Config;
use crate::users::{AppState, UserDirectory};
use axum::{
    Router,
    extract::{Extension, Request},
    http::{HeaderName, HeaderValue, StatusCode},
    response::IntoResponse,
    routing::{any, get},
};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod telemetry;
pub mod users;

/// Creates the service router over `directory`.
pub fn routes<D>(directory: D, config: Config) -> Router
where
    D: UserDirectory,
{
    let state = AppState::new(directory);

    Router::new()
        .route("/is-health", get(health_check))
        .route(
            "/api/users",
            get(users::routes::list_users::<D>)
                .head(users::routes::method_not_allowed)
                .fallback(users::routes::method_not_allowed),
        )
        .fallback(any(catch_all))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                tracing::info_span!(
                    "http_request",
                    http_request.method = ?request.method(),
                    http_request.uri = ?request.uri(),
                    http_request.version = ?request.version(),
                    http_request.user_agent = ?request.headers().get(axum::http::header::USER_AGENT),
                )
            }),
        )
        .layer(Extension(config))
        .with_state(state)
}

async fn health_check(Extension(config): Extension<Config>) -> impl IntoResponse {
    let mut response = (StatusCode::OK, "OK").into_response();

    // Env names are static ASCII.
    let env_value = HeaderValue::from_static(match config.environment() {
        config::Env::Local => "local",
        config::Env::Prod => "prod",
        config::Env::Test => "test",
    });
    response
        .headers_mut()
        .insert(HeaderName::from_static("x-service-env"), env_value);

    response
}

async fn catch_all() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "nothing to see here")
}
