#[derive(Debug, thiserror::Error)]
pub enum ShortenError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("shortener error {status_code}: {message}")]
    Api { status_code: u16, message: String },

    #[error("malformed shortener response: {0}")]
    Malformed(String),
}
