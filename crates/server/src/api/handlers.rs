mod embed;

pub use embed::{index, reel, share_reel, share_video, watch};

pub(crate) const HOMEPAGE_URL: &str = "https://github.com/seriaati/fxfacebook";
