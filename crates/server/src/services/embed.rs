use std::sync::Arc;
use std::time::Duration;

use shortener::ShortenerClient;
use vkr::{select_variant, PostDownload, PostInfo, VkrClient};

use crate::error::{EmbedError, EmbedResult};
use crate::services::{document, ResponseCache};

/// Substituted when the resolver returns no description.
pub const DEFAULT_DESCRIPTION: &str = "Facebook Video";

/// User-Agent substrings identifying link-preview crawlers.
const PREVIEW_CRAWLERS: &[&str] = &[
    "Discordbot",
    "Telegrambot",
    "Twitterbot",
    "Slackbot",
    "WhatsApp",
];

const RESOLVE_CACHE_TTL: Duration = Duration::from_secs(600);
const SHORTEN_CACHE_TTL: Duration = Duration::from_secs(86_400);

/// The embed pipeline: resolve metadata, pick a variant, shorten its URL and
/// synthesize the Open-Graph document. Every failure is reported as an
/// `EmbedError` for the handler to turn into a passthrough redirect.
pub struct EmbedService {
    http: reqwest::Client,
    vkr: Arc<VkrClient>,
    shortener: Arc<ShortenerClient>,
    post_cache: ResponseCache<PostInfo>,
    short_cache: ResponseCache<String>,
}

impl EmbedService {
    pub fn new(
        http: reqwest::Client,
        vkr: Arc<VkrClient>,
        shortener: Arc<ShortenerClient>,
    ) -> Self {
        Self {
            http,
            vkr,
            shortener,
            post_cache: ResponseCache::new(RESOLVE_CACHE_TTL),
            short_cache: ResponseCache::new(SHORTEN_CACHE_TTL),
        }
    }

    /// True when the request comes from a known link-preview crawler rather
    /// than a browser.
    pub fn is_preview_crawler(user_agent: &str) -> bool {
        PREVIEW_CRAWLERS.iter().any(|bot| user_agent.contains(bot))
    }

    /// Follow the platform-side redirector behind a share/v link and return
    /// the landed URL.
    pub async fn resolve_indirection(&self, url: &str) -> Result<String, reqwest::Error> {
        let response = self.http.get(url).send().await?;
        Ok(response.url().to_string())
    }

    /// Run the full pipeline for a canonical URL and return the embed document.
    pub async fn build_embed(&self, canonical_url: &str) -> EmbedResult<String> {
        let post = self.resolve_post(canonical_url).await?;
        let download = choose_download(&post)?;
        let description = post.description.as_deref().unwrap_or(DEFAULT_DESCRIPTION);
        let video_url = self.shorten(&download.url).await?;

        tracing::debug!("Embedding {} as {}", post.source, video_url);
        Ok(document::render_embed(description, &post.source, &video_url))
    }

    async fn resolve_post(&self, url: &str) -> EmbedResult<PostInfo> {
        let key = format!("vkr:{}", url);
        if let Some(post) = self.post_cache.get(&key) {
            return Ok(post);
        }

        let post = self.vkr.resolve(url).await?;
        self.post_cache.set(key, post.clone());
        Ok(post)
    }

    async fn shorten(&self, url: &str) -> EmbedResult<String> {
        let key = format!("shorten:{}", url);
        if let Some(short) = self.short_cache.get(&key) {
            return Ok(short);
        }

        let short = self.shortener.shorten(url).await?;
        self.short_cache.set(key, short.clone());
        Ok(short)
    }
}

/// Vet a resolved post and pick the download to embed. Pure; every rejection
/// happens here, before any shortener call.
fn choose_download(post: &PostInfo) -> EmbedResult<&PostDownload> {
    if let Some(error) = post.error.as_deref().filter(|e| !e.is_empty()) {
        return Err(EmbedError::Resolution(format!(
            "resolver flagged post: {}",
            error
        )));
    }

    select_variant(&post.downloads)
        .ok_or_else(|| EmbedError::Resolution("no hd mp4 variant available".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(error: Option<&str>, downloads: Vec<PostDownload>) -> PostInfo {
        PostInfo {
            title: None,
            description: None,
            source: "https://www.facebook.com/reel/123".to_string(),
            thumbnail: None,
            error: error.map(str::to_string),
            downloads,
        }
    }

    fn hd_mp4() -> PostDownload {
        PostDownload {
            url: "https://cdn/x.mp4".to_string(),
            format_id: "hd-720".to_string(),
            ext: "mp4".to_string(),
        }
    }

    #[test]
    fn test_crawler_detection_is_substring() {
        assert!(EmbedService::is_preview_crawler(
            "Mozilla/5.0 (compatible; Discordbot/2.0; +https://discordapp.com)"
        ));
        assert!(EmbedService::is_preview_crawler("Telegrambot (like TwitterBot)"));
    }

    #[test]
    fn test_browsers_are_not_crawlers() {
        assert!(!EmbedService::is_preview_crawler(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) Chrome/124.0.0.0"
        ));
        assert!(!EmbedService::is_preview_crawler(""));
    }

    #[test]
    fn test_crawler_match_is_case_sensitive() {
        assert!(!EmbedService::is_preview_crawler("discordbot/2.0"));
    }

    #[test]
    fn test_errored_post_is_rejected_before_shortening() {
        // A resolver-flagged error wins even when playable downloads exist.
        let post = post(Some("private post"), vec![hd_mp4()]);
        assert!(matches!(
            choose_download(&post),
            Err(EmbedError::Resolution(_))
        ));
    }

    #[test]
    fn test_empty_error_string_is_not_a_failure() {
        let post = post(Some(""), vec![hd_mp4()]);
        assert_eq!(choose_download(&post).unwrap().url, "https://cdn/x.mp4");
    }

    #[test]
    fn test_no_downloads_is_rejected() {
        let post = post(None, vec![]);
        assert!(matches!(
            choose_download(&post),
            Err(EmbedError::Resolution(_))
        ));
    }

    #[test]
    fn test_qualifying_download_is_chosen() {
        let post = post(None, vec![hd_mp4()]);
        assert_eq!(choose_download(&post).unwrap().url, "https://cdn/x.mp4");
    }

    #[test]
    fn test_pipeline_defaults_description() {
        // Mirrors the end of the pipeline for a post without a description.
        let post = post(None, vec![hd_mp4()]);
        let download = choose_download(&post).unwrap();
        let description = post.description.as_deref().unwrap_or(DEFAULT_DESCRIPTION);
        let html = document::render_embed(description, &post.source, download.url.as_str());
        assert!(html.contains(r#"<meta property="og:title" content="Facebook Video">"#));
    }
}
