use std::time::Instant;

use axum::{
    body::Body,
    http::{HeaderValue, Request},
    middleware::Next,
    response::Response,
};

pub async fn process_time_middleware(
    request: Request<Body>,
    next: Next,
) -> Response {
    let start_time = Instant::now();

    let mut response = next.run(request).await;

    let process_time_ms = start_time.elapsed().as_secs_f64() * 1000.0;
    if let Ok(value) = HeaderValue::from_str(&format!("{:.2} ms", process_time_ms)) {
        response.headers_mut().insert("x-process-time", value);
    }

    response
}
