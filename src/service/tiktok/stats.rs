use crate::model::VideoRecord;

/// How many of the newest videos count towards the "recent" total.
const RECENT_WINDOW: usize = 2;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewTotals {
    pub recent: i64,
    pub total: i64,
}

/// Sums normalized play counts over a video list received most recent first.
/// `recent` covers the first two entries, or fewer if the profile has fewer
/// videos. Records without stats contribute 0.
pub fn aggregate_views(videos: &[VideoRecord]) -> ViewTotals {
    ViewTotals {
        recent: videos
            .iter()
            .take(RECENT_WINDOW)
            .map(VideoRecord::play_count)
            .sum(),
        total: videos.iter().map(VideoRecord::play_count).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::VideoStats;
    use crate::util::count::CountValue;

    fn video(play_count: &str) -> VideoRecord {
        VideoRecord {
            stats: Some(VideoStats {
                play_count: Some(CountValue::Text(play_count.to_string())),
            }),
        }
    }

    #[test]
    fn test_aggregate_empty() {
        assert_eq!(aggregate_views(&[]), ViewTotals { recent: 0, total: 0 });
    }

    #[test]
    fn test_aggregate_single_video() {
        let totals = aggregate_views(&[video("10K")]);
        assert_eq!(totals.recent, 10_000);
        assert_eq!(totals.total, 10_000);
    }

    #[test]
    fn test_aggregate_recent_covers_first_two() {
        let totals = aggregate_views(&[video("1K"), video("2K"), video("3K")]);
        assert_eq!(totals.recent, 3_000);
        assert_eq!(totals.total, 6_000);
    }

    #[test]
    fn test_aggregate_skips_missing_stats() {
        let totals = aggregate_views(&[VideoRecord::default(), video("2K"), video("3K")]);
        assert_eq!(totals.recent, 2_000);
        assert_eq!(totals.total, 5_000);
    }
}
