mod config;
mod error;
mod handler;
mod middleware;
mod model;
mod response;
mod route;
mod service;
mod util;

use std::env;
use std::sync::Arc;
use std::time::Duration;

use axum::http::{
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
    HeaderValue, Method,
};
use route::create_router;

use tower::ServiceBuilder;
use tower_http::{
    classify::ServerErrorsFailureClass,
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use sentry::{ClientOptions, IntoDsn};
use sentry_tower::NewSentryLayer;

use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::middleware::process_time_middleware;
use crate::service::{SharedProfileSource, TikTokSource};

pub struct AppState {
    pub config: Config,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let config = Config::init();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .init();

    let _dsn = env::var("SENTRY_DSN").unwrap_or_else(|_| "".to_string());
    let _guard = sentry::init((
        _dsn.into_dsn().unwrap(),
        ClientOptions {
            release: sentry::release_name!(),
            traces_sample_rate: 0.2,
            ..Default::default()
        },
    ));

    let cors = match &config.cors_host {
        Some(host) => CorsLayer::new()
            .allow_origin(
                host.parse::<HeaderValue>()
                    .expect("CORS_HOST must be a valid origin"),
            )
            .allow_credentials(true)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([ACCEPT, AUTHORIZATION, CONTENT_TYPE]),
        None => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([ACCEPT, AUTHORIZATION, CONTENT_TYPE]),
    };

    let compression_layer: CompressionLayer = CompressionLayer::new().gzip(true);

    let trace_layer = TraceLayer::new_for_http().on_failure(
        |error: ServerErrorsFailureClass, latency: Duration, _span: &tracing::Span| {
            tracing::error!(
                "Error request processing (latency: {:?}): {:?}",
                latency,
                error
            );
        },
    );

    let middleware_stack = ServiceBuilder::new()
        .layer(NewSentryLayer::new_from_top())
        .layer(trace_layer)
        .layer(cors)
        .layer(tower::limit::ConcurrencyLimitLayer::new(1000))
        .layer(axum::middleware::from_fn(process_time_middleware));

    let bind = format!("0.0.0.0:{}", config.port);

    let app_state = Arc::new(AppState { config });
    let source: SharedProfileSource = Arc::new(TikTokSource::new());

    let app = create_router(app_state, source)
        .layer(middleware_stack)
        .layer(compression_layer);

    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .expect("Failed to bind listener");

    println!("🚀 Server started successfully on {}", bind);

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}
