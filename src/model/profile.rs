use serde::{Deserialize, Serialize};

use crate::util::count::{normalize_count, CountValue};

use super::VideoRecord;

/// Public profile info as found in the embedded profile data.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProfileInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<ProfileStats>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProfileStats {
    #[serde(rename = "followerCount", skip_serializing_if = "Option::is_none")]
    pub follower_count: Option<CountValue>,
}

impl ProfileInfo {
    /// Normalized follower count, 0 when the stats block or the field is absent.
    pub fn followers(&self) -> i64 {
        self.stats
            .as_ref()
            .and_then(|stats| stats.follower_count.as_ref())
            .map(normalize_count)
            .unwrap_or(0)
    }
}

/// Everything a single profile fetch yields: the profile info plus the videos
/// listed on the page, most recent first.
#[derive(Debug, Clone, Default)]
pub struct ProfilePayload {
    pub info: ProfileInfo,
    pub videos: Vec<VideoRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_followers_defaults_to_zero() {
        assert_eq!(ProfileInfo::default().followers(), 0);
    }

    #[test]
    fn test_followers_normalizes() {
        let info = ProfileInfo {
            stats: Some(ProfileStats {
                follower_count: Some(CountValue::Text("2.5M".to_string())),
            }),
        };
        assert_eq!(info.followers(), 2_500_000);
    }
}
