use serde::{Deserialize, Serialize};

use crate::util::count::{normalize_count, CountValue};

/// A single video as found in the embedded profile data. Only the play count
/// is read; everything else the page carries is ignored.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VideoRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<VideoStats>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VideoStats {
    #[serde(rename = "playCount", skip_serializing_if = "Option::is_none")]
    pub play_count: Option<CountValue>,
}

impl VideoRecord {
    /// Normalized play count, 0 when the stats block or the field is absent.
    pub fn play_count(&self) -> i64 {
        self.stats
            .as_ref()
            .and_then(|stats| stats.play_count.as_ref())
            .map(normalize_count)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_count_defaults_to_zero() {
        assert_eq!(VideoRecord::default().play_count(), 0);

        let no_count = VideoRecord {
            stats: Some(VideoStats { play_count: None }),
        };
        assert_eq!(no_count.play_count(), 0);
    }

    #[test]
    fn test_play_count_normalizes() {
        let video = VideoRecord {
            stats: Some(VideoStats {
                play_count: Some(CountValue::Text("10K".to_string())),
            }),
        };
        assert_eq!(video.play_count(), 10_000);
    }
}
