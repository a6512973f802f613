mod generic;
mod models;

pub use generic::ApiResponse;
pub use models::{HealthResponseData, ScrapeResponseData};
