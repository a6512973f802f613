use std::panic::Location;

use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use serde_json::Value;

use crate::error::{ApiError, ApiErrorType};
use crate::model::{ProfileInfo, ProfilePayload, VideoRecord};

/// TikTok profile pages ship their state as a JSON blob inside this script
/// tag; the user detail scope carries the profile info and the item list.
static UNIVERSAL_DATA_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(r#"script[id="__UNIVERSAL_DATA_FOR_REHYDRATION__"]"#).unwrap()
});

const USER_DETAIL_POINTER: &str = "/__DEFAULT_SCOPE__/webapp.user-detail";

#[derive(thiserror::Error, Debug)]
pub enum ParserError {
    #[error("Embedded data not found: {0}")]
    DataNotFound(String),

    #[error("Malformed embedded data: {0}")]
    MalformedData(#[from] serde_json::Error),
}

impl From<ParserError> for ApiError {
    #[track_caller]
    fn from(err: ParserError) -> Self {
        ApiError {
            inner: ApiErrorType::Upstream {
                message: err.to_string(),
                location: Location::caller(),
                module: module_path!().to_string(),
            },
            ctx: None,
        }
    }
}

pub struct ProfilePageParser;

impl ProfilePageParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, document: &Html) -> Result<ProfilePayload, ParserError> {
        let script = document
            .select(&UNIVERSAL_DATA_SELECTOR)
            .next()
            .ok_or_else(|| {
                ParserError::DataNotFound("Could not find embedded profile data".to_string())
            })?;

        let raw = script.text().collect::<String>();
        let data: Value = serde_json::from_str(&raw)?;

        let detail = data.pointer(USER_DETAIL_POINTER).ok_or_else(|| {
            ParserError::DataNotFound("Profile detail scope missing".to_string())
        })?;

        let info: ProfileInfo = detail
            .get("userInfo")
            .map(|value| serde_json::from_value(value.clone()))
            .transpose()?
            .ok_or_else(|| ParserError::DataNotFound("User info missing".to_string()))?;

        // A profile with no uploads simply has no item list.
        let videos: Vec<VideoRecord> = match detail.get("itemList") {
            Some(value) => serde_json::from_value(value.clone())?,
            None => Vec::new(),
        };

        Ok(ProfilePayload { info, videos })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_page(scope: serde_json::Value) -> Html {
        let blob = serde_json::json!({
            "__DEFAULT_SCOPE__": { "webapp.user-detail": scope }
        });
        Html::parse_document(&format!(
            "<!DOCTYPE html><html><head></head><body>\
             <script id=\"__UNIVERSAL_DATA_FOR_REHYDRATION__\" type=\"application/json\">{}</script>\
             </body></html>",
            blob
        ))
    }

    #[test]
    fn test_parse_profile_with_videos() {
        let document = profile_page(serde_json::json!({
            "userInfo": { "stats": { "followerCount": "2.5M" } },
            "itemList": [
                { "stats": { "playCount": "1K" } },
                { "stats": { "playCount": 250 } }
            ]
        }));

        let payload = ProfilePageParser::new().parse(&document).unwrap();
        assert_eq!(payload.info.followers(), 2_500_000);
        assert_eq!(payload.videos.len(), 2);
        assert_eq!(payload.videos[0].play_count(), 1_000);
        assert_eq!(payload.videos[1].play_count(), 250);
    }

    #[test]
    fn test_parse_profile_without_item_list() {
        let document = profile_page(serde_json::json!({
            "userInfo": { "stats": { "followerCount": 42 } }
        }));

        let payload = ProfilePageParser::new().parse(&document).unwrap();
        assert_eq!(payload.info.followers(), 42);
        assert!(payload.videos.is_empty());
    }

    #[test]
    fn test_parse_rejects_page_without_embedded_data() {
        let document = Html::parse_document("<!DOCTYPE html><html><body></body></html>");
        let err = ProfilePageParser::new().parse(&document).unwrap_err();
        assert!(matches!(err, ParserError::DataNotFound(_)));
    }
}
