use thiserror::Error;

/// Failures of the embed pipeline. None of these surface as HTTP error
/// statuses; the handlers convert every one into a passthrough redirect to
/// the canonical URL.
#[derive(Debug, Error)]
pub enum EmbedError {
    /// Resolver unreachable, timed out, or returned an unparseable payload.
    #[error("resolver error: {0}")]
    Upstream(#[from] vkr::VkrError),

    /// Shortener unreachable or returned a malformed response.
    #[error("shortener error: {0}")]
    Shorten(#[from] shortener::ShortenError),

    /// Resolver responded but flagged the post as errored, or offered no
    /// qualifying download variant.
    #[error("{0}")]
    Resolution(String),
}

pub type EmbedResult<T> = Result<T, EmbedError>;
