use std::time::Duration;

use reqwest::{Client, ClientBuilder, StatusCode};
use scraper::Html;

use crate::api_error;
use crate::error::ApiError;

/// Without a browser user agent TikTok serves a bot interstitial instead of
/// the profile page.
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
                          AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

#[derive(Debug, Clone)]
pub struct TikTokRequest {
    http_client: Client,
    base_url: String,
    timeout: Duration,
}

impl TikTokRequest {
    pub fn new(
        http_client: Client,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            http_client,
            base_url: base_url.into(),
            timeout,
        }
    }

    /// Builds the client against the real site. Construction can fail, which
    /// callers surface as an initialization fault.
    pub fn with_defaults() -> Result<Self, ApiError> {
        let http_client = ClientBuilder::new()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(USER_AGENT)
            .gzip(true)
            .build()?;

        Ok(Self::new(
            http_client,
            "https://www.tiktok.com/",
            Duration::from_secs(30),
        ))
    }

    async fn fetch(&self, endpoint: &str) -> Result<Html, ApiError> {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self.http_client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(api_error!(
                Upstream,
                format!("Unexpected status code: {}", response.status())
            ));
        }

        let response_text = response.text().await?;

        if !response_text.trim_start().starts_with("<!DOCTYPE html>")
            && !response_text.trim_start().starts_with("<html") {
            return Err(api_error!(Upstream, "Response is not HTML"));
        }

        Ok(Html::parse_document(&response_text))
    }

    pub async fn get_profile_page(&self, username: &str) -> Result<Html, ApiError> {
        self.fetch(&format!("@{}", username)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::tiktok::ProfilePageParser;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str) -> TikTokRequest {
        TikTokRequest::new(
            Client::new(),
            format!("{}/", base_url),
            Duration::from_secs(5),
        )
    }

    fn profile_page_body() -> String {
        let blob = serde_json::json!({
            "__DEFAULT_SCOPE__": {
                "webapp.user-detail": {
                    "userInfo": { "stats": { "followerCount": "1.2K" } },
                    "itemList": [ { "stats": { "playCount": "3K" } } ]
                }
            }
        });
        format!(
            "<!DOCTYPE html><html><head></head><body>\
             <script id=\"__UNIVERSAL_DATA_FOR_REHYDRATION__\" type=\"application/json\">{}</script>\
             </body></html>",
            blob
        )
    }

    #[tokio::test]
    async fn get_profile_page_returns_parsed_document() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/@alice"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(profile_page_body(), "text/html"),
            )
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let document = client.get_profile_page("alice").await.expect("should fetch page");

        let payload = ProfilePageParser::new().parse(&document).expect("should parse");
        assert_eq!(payload.info.followers(), 1_200);
        assert_eq!(payload.videos.len(), 1);
        assert_eq!(payload.videos[0].play_count(), 3_000);
    }

    #[tokio::test]
    async fn get_profile_page_rejects_upstream_failure() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/@ghost"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client.get_profile_page("ghost").await.unwrap_err();
        assert_eq!(err.status_code(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn get_profile_page_rejects_non_html_response() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/@json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"not\":\"html\"}"))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        assert!(client.get_profile_page("json").await.is_err());
    }
}
