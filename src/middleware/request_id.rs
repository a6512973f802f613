use axum::{
    body::Body,
    http::{HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use hostname::get;
use sentry::Scope;
use tracing::{debug_span, Instrument};
use uuid::Uuid;

use crate::error::RequestCtx;

pub async fn request_id_middleware(
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .map_or_else(|| Uuid::new_v4().to_string(), String::from);

    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    let instance = get()
        .ok()
        .and_then(|h| h.into_string().ok())
        .unwrap_or_else(|| "unknown".to_string());

    request.extensions_mut().insert(RequestCtx {
        id: request_id.clone(),
        method: method.clone(),
        path: path.clone(),
        instance: instance.clone(),
    });

    sentry::configure_scope(|scope: &mut Scope| {
        scope.set_tag("request_id", &request_id);
        scope.set_tag("http.method", &method);
        scope.set_tag("http.url", &path);
        scope.set_tag("instance", &instance);
    });

    let span = debug_span!(
        "request",
        request_id = %request_id,
        method = %method,
        path = %path,
        instance = %instance
    );

    let mut response = next.run(request).instrument(span).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert("x-request-id", value);
    }
    if let Ok(value) = HeaderValue::from_str(&instance) {
        response.headers_mut().insert("x-instance", value);
    }

    response
}
