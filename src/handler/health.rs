use axum::{response::IntoResponse, Json};

use crate::response::HealthResponseData;

pub async fn health_checker_handler() -> impl IntoResponse {
    Json(HealthResponseData {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
