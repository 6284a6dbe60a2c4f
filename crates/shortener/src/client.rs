use serde::{Deserialize, Serialize};

use crate::{Result, ShortenError};

const CUSTOM_API_URL: &str = "https://api.seria.moe/shorten";
const CUSTOM_SHORT_BASE: &str = "https://seria.moe";
const TINYURL_API_URL: &str = "https://tinyurl.com/api-create.php";

/// Shortening strategy, chosen once at startup from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Strategy {
    /// Bearer-authenticated custom shortener.
    Custom { token: String },
    /// Public TinyURL fallback.
    TinyUrl,
}

impl Strategy {
    /// Presence of a bearer token selects the custom shortener.
    pub fn from_token(token: Option<String>) -> Self {
        match token {
            Some(token) if !token.is_empty() => Self::Custom { token },
            _ => Self::TinyUrl,
        }
    }
}

#[derive(Serialize)]
struct ShortenRequest<'a> {
    url: &'a str,
}

#[derive(Deserialize)]
struct ShortenResponse {
    slug: String,
}

pub struct ShortenerClient {
    client: reqwest::Client,
    strategy: Strategy,
}

impl ShortenerClient {
    pub fn new(client: reqwest::Client, strategy: Strategy) -> Self {
        Self { client, strategy }
    }

    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    /// Shorten a URL with the configured strategy.
    pub async fn shorten(&self, long_url: &str) -> Result<String> {
        match &self.strategy {
            Strategy::Custom { token } => self.shorten_custom(long_url, token).await,
            Strategy::TinyUrl => self.shorten_tinyurl(long_url).await,
        }
    }

    async fn shorten_custom(&self, long_url: &str, token: &str) -> Result<String> {
        let response = self
            .client
            .post(CUSTOM_API_URL)
            .bearer_auth(token)
            .json(&ShortenRequest { url: long_url })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ShortenError::Api {
                status_code: status.as_u16(),
                message: body,
            });
        }

        let parsed: ShortenResponse =
            serde_json::from_str(&body).map_err(|e| ShortenError::Malformed(e.to_string()))?;
        Ok(short_url(&parsed.slug))
    }

    async fn shorten_tinyurl(&self, long_url: &str) -> Result<String> {
        let api_url = format!("{}?url={}", TINYURL_API_URL, urlencoding::encode(long_url));
        let response = self.client.get(&api_url).send().await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ShortenError::Api {
                status_code: status.as_u16(),
                message: body,
            });
        }

        let short = body.trim();
        if short.is_empty() || !short.starts_with("http") {
            return Err(ShortenError::Malformed(format!(
                "unexpected body: {:?}",
                short
            )));
        }
        Ok(short.to_string())
    }
}

fn short_url(slug: &str) -> String {
    format!("{}/{}", CUSTOM_SHORT_BASE, slug)
}
