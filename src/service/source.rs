use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::OnceCell;

use crate::error::ApiError;
use crate::model::ProfilePayload;

use super::tiktok::{ProfilePageParser, TikTokRequest};

/// Boundary to the scraping collaborator. The router injects a shared
/// implementation so tests can substitute a fake.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    /// Fetches profile info plus at most `video_limit` of the newest videos.
    async fn fetch_profile(
        &self,
        username: &str,
        video_limit: usize,
    ) -> Result<ProfilePayload, ApiError>;
}

pub type SharedProfileSource = Arc<dyn ProfileSource>;

/// The real collaborator handle. The underlying HTTP client is built on first
/// use and shared for the process lifetime; if construction fails the cell
/// stays empty and the next request attempts it again.
pub struct TikTokSource {
    client: OnceCell<TikTokRequest>,
}

impl TikTokSource {
    pub fn new() -> Self {
        Self {
            client: OnceCell::new(),
        }
    }

    async fn client(&self) -> Result<&TikTokRequest, ApiError> {
        self.client
            .get_or_try_init(|| async {
                tracing::info!("Creating new TikTok client");
                TikTokRequest::with_defaults()
            })
            .await
    }
}

impl Default for TikTokSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProfileSource for TikTokSource {
    async fn fetch_profile(
        &self,
        username: &str,
        video_limit: usize,
    ) -> Result<ProfilePayload, ApiError> {
        let client = self.client().await?;
        let document = client.get_profile_page(username).await?;

        let mut payload = ProfilePageParser::new().parse(&document)?;
        payload.videos.truncate(video_limit);

        Ok(payload)
    }
}
