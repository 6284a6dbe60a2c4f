use axum::{
    extract::{Path, Query, State},
    http::{header::USER_AGENT, HeaderMap},
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::services::{canonical, EmbedService};
use crate::state::AppState;

use super::HOMEPAGE_URL;

/// Redirect to the project homepage.
pub async fn index() -> Redirect {
    Redirect::temporary(HOMEPAGE_URL)
}

pub async fn share_reel(
    State(state): State<AppState>,
    Path(reel_id): Path<String>,
    headers: HeaderMap,
) -> Response {
    embed_or_redirect(&state, canonical::share_reel(&reel_id), &headers).await
}

pub async fn reel(
    State(state): State<AppState>,
    Path(reel_id): Path<String>,
    headers: HeaderMap,
) -> Response {
    embed_or_redirect(&state, canonical::reel(&reel_id), &headers).await
}

/// share/v links are platform-side redirectors, so the landed URL has to be
/// fetched before it can serve as the canonical URL.
pub async fn share_video(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
    headers: HeaderMap,
) -> Response {
    let constructed = canonical::share_video(&video_id);
    let canonical_url = match state.embed.resolve_indirection(&constructed).await {
        Ok(url) => url,
        Err(e) => {
            tracing::warn!("Failed to resolve share link {}: {}", constructed, e);
            return Redirect::temporary(&constructed).into_response();
        }
    };

    embed_or_redirect(&state, canonical_url, &headers).await
}

pub async fn watch(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
    headers: HeaderMap,
) -> Response {
    embed_or_redirect(&state, canonical::watch(&params), &headers).await
}

/// Crawlers get the synthesized embed document; browsers, and every pipeline
/// failure, get a redirect to the canonical URL. Non-crawler requests never
/// touch the resolver or shortener.
async fn embed_or_redirect(state: &AppState, canonical_url: String, headers: &HeaderMap) -> Response {
    let user_agent = headers
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    if !EmbedService::is_preview_crawler(user_agent) {
        return Redirect::temporary(&canonical_url).into_response();
    }

    match state.embed.build_embed(&canonical_url).await {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::warn!("Embed pipeline failed for {}: {}", canonical_url, e);
            Redirect::temporary(&canonical_url).into_response()
        }
    }
}
