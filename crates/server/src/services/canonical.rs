//! Canonical Facebook URLs for each inbound route shape. Path parameters are
//! accepted as opaque strings; the resolver is the arbiter of validity.

const PLATFORM_BASE: &str = "https://www.facebook.com";

pub fn share_reel(reel_id: &str) -> String {
    format!("{}/share/r/{}", PLATFORM_BASE, reel_id)
}

pub fn reel(reel_id: &str) -> String {
    format!("{}/reel/{}", PLATFORM_BASE, reel_id)
}

/// share/v links are platform-side redirectors; this URL still needs
/// indirection resolution before it names the real post.
pub fn share_video(video_id: &str) -> String {
    format!("{}/share/v/{}", PLATFORM_BASE, video_id)
}

/// Re-encode the forwarded query pairs in their original order.
pub fn watch(params: &[(String, String)]) -> String {
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    query.extend_pairs(params);
    format!("{}/watch/?{}", PLATFORM_BASE, query.finish())
}
