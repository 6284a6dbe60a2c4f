use crate::{
    models::{Envelope, PostInfo},
    Result, VkrError,
};

const BASE_URL: &str = "https://vkrdownloader.xyz";
const API_KEY: &str = "vkrdownloader";

pub struct VkrClient {
    client: reqwest::Client,
    base_url: String,
}

impl VkrClient {
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Resolve a source-platform URL into post metadata.
    pub async fn resolve(&self, source_url: &str) -> Result<PostInfo> {
        let url = self.resolve_url(source_url);
        let response = self.client.get(&url).send().await?;
        let envelope: Envelope = self.handle_response(response).await?;
        Ok(envelope.data)
    }

    fn resolve_url(&self, source_url: &str) -> String {
        format!(
            "{}/server/?api_key={}&vkr={}",
            self.base_url,
            API_KEY,
            urlencoding::encode(source_url)
        )
    }

    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(VkrError::Api {
                status_code: status.as_u16(),
                message: body,
            });
        }
        let deserializer = &mut serde_json::Deserializer::from_str(&body);
        serde_path_to_error::deserialize(deserializer).map_err(|e| VkrError::Json {
            path: e.path().to_string(),
            source: e.into_inner(),
        })
    }
}
