/// Port the original deployment listened on.
pub const DEFAULT_PORT: u16 = 8041;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Bearer token for the custom shortener; absence selects the TinyURL fallback.
    pub shortener_token: Option<String>,
}

impl Config {
    pub fn new(port: u16, shortener_token: Option<String>) -> Self {
        Self {
            port,
            shortener_token,
        }
    }
}
