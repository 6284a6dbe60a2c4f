use serde::{Deserialize, Serialize};

/// One downloadable media variant offered for a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDownload {
    pub url: String,
    /// Resolver-assigned identifier, opaque except as a selection key.
    pub format_id: String,
    pub ext: String,
}

/// Post metadata as returned by the resolver.
///
/// A non-empty `error` marks the whole record as a resolution failure
/// regardless of the other fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostInfo {
    pub title: Option<String>,
    pub description: Option<String>,
    pub source: String,
    pub thumbnail: Option<String>,
    pub error: Option<String>,
    #[serde(default)]
    pub downloads: Vec<PostDownload>,
}

/// Resolver responses wrap the post in a `data` object.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope {
    pub data: PostInfo,
}
