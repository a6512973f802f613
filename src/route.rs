use std::sync::Arc;

use axum::{
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
    Extension, Router,
};

use crate::{
    handler::{health_checker_handler, scrape_handler_post},
    middleware::{bearer_auth_middleware, request_id_middleware},
    service::SharedProfileSource,
    AppState,
};

pub fn create_router(state: Arc<AppState>, source: SharedProfileSource) -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_checker_handler));

    let scrape_routes = Router::new()
        .route("/scrape", post(scrape_handler_post))
        .route_layer(from_fn_with_state(state, bearer_auth_middleware));

    Router::new()
        .merge(public_routes)
        .merge(scrape_routes)
        .layer(from_fn(request_id_middleware))
        .layer(Extension(source))
}
