use std::sync::Arc;
use std::time::Duration;

use shortener::{ShortenerClient, Strategy};
use vkr::VkrClient;

use crate::config::Config;
use crate::services::EmbedService;

// The resolver proxies our request to Facebook, which rejects default
// library clients, so every outbound call identifies as a real browser.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub embed: Arc<EmbedService>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        let vkr = Arc::new(VkrClient::new(http_client.clone()));
        let strategy = Strategy::from_token(config.shortener_token.clone());
        let shortener = Arc::new(ShortenerClient::new(http_client.clone(), strategy));
        let embed = Arc::new(EmbedService::new(http_client, vkr, shortener));

        Ok(Self {
            config: Arc::new(config),
            embed,
        })
    }
}
