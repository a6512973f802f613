use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};

use crate::{
    api_error,
    error::{ApiError, RequestCtx},
    model::ScrapeBody,
    response::{ApiResponse, ScrapeResponseData},
    service::{aggregate_views, extract_username, SharedProfileSource},
};

/// How many videos a single scrape asks the collaborator for.
const VIDEO_FETCH_COUNT: usize = 30;

pub async fn scrape_handler_post(
    Extension(ctx): Extension<RequestCtx>,
    Extension(source): Extension<SharedProfileSource>,
    body: Result<Json<ScrapeBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = body.map_err(|e| ApiError::from(e).with_ctx(ctx.clone()))?;

    if !body.url.contains('@') {
        return Err(api_error!(BadRequest, "Invalid TikTok URL").with_ctx(ctx));
    }

    let username = extract_username(&body.url)
        .map_err(|e| api_error!(BadRequest, e.to_string()).with_ctx(ctx.clone()))?;

    tracing::info!("Scraping TikTok profile for user: @{}", username);

    // Single attempt per request; a collaborator fault is terminal.
    let payload = source
        .fetch_profile(&username, VIDEO_FETCH_COUNT)
        .await
        .map_err(|e| e.with_ctx(ctx.clone()))?;

    let totals = aggregate_views(&payload.videos);
    let followers = payload.info.followers();

    tracing::info!(
        "Scraped data for @{}: followers={}, recent_views={}, total_views={}",
        username,
        followers,
        totals.recent,
        totals.total
    );

    let response = ApiResponse::success(ScrapeResponseData {
        followers,
        recent_views: totals.recent,
        total_views: totals.total,
    });

    Ok((StatusCode::OK, Json(response)))
}
