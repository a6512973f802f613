mod source;
mod tiktok;

pub use source::{ProfileSource, SharedProfileSource, TikTokSource};
pub use tiktok::{
    aggregate_views,
    extract_username,
    //
    ProfilePageParser,
    TikTokRequest,
    ViewTotals,
};
