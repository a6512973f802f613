use serde::Serialize;

#[derive(Serialize)]
pub struct ScrapeResponseData {
    pub followers: i64,
    pub recent_views: i64,
    pub total_views: i64,
}

#[derive(Serialize)]
pub struct HealthResponseData {
    pub status: &'static str,
    pub version: &'static str,
}
