pub mod fallback;
pub mod image_client;
pub mod response;
pub mod text_client;

use crate::error::{GatewayError, Result};
use crate::config::GatewayConfig;
use reqwest::Client;
use serde::de::DeserializeOwned;

pub use image_client::ImageClient;
pub use text_client::TextClient;

pub const DEFAULT_BASE_URL: &str = "https://ai.gateway.lovable.dev";

/// Dedicated inference endpoint model used for text-to-image generation.
pub const IMAGE_MODEL: &str = "stabilityai/stable-diffusion-xl-base-1.0";
/// Multimodal model used for image editing and remixing.
pub const MULTIMODAL_MODEL: &str = "google/gemini-2.5-flash-image-preview";
/// Default text/vision completion model.
pub const TEXT_MODEL: &str = "google/gemini-2.5-flash";
/// Model used for prompt enhancement.
pub const ENHANCE_MODEL: &str = "google/gemini-2.5-pro";

#[derive(Clone)]
pub struct GatewayClient {
    image_client: ImageClient,
    text_client: TextClient,
}

impl GatewayClient {
    /// Builds the umbrella client. Missing credentials are not fatal at
    /// construction; each request fails with a configuration error instead.
    pub fn new(config: GatewayConfig) -> Self {
        let credentials = config.credentials();
        if credentials.is_empty() {
            log::warn!("No gateway API credentials configured; requests will fail");
        }

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let http = Client::new();

        Self {
            image_client: ImageClient::new(http.clone(), base_url.clone(), credentials.clone()),
            text_client: TextClient::new(http, base_url, credentials),
        }
    }

    pub fn image(&self) -> &ImageClient {
        &self.image_client
    }

    pub fn text(&self) -> &TextClient {
        &self.text_client
    }
}

/// One attempt with one credential: a single outbound POST, no internal
/// retry. Retrying is the fallback coordinator's job.
pub(crate) async fn post_json<T: DeserializeOwned>(
    http: &Client,
    url: &str,
    api_key: &str,
    payload: &serde_json::Value,
) -> Result<T> {
    let response = http
        .post(url)
        .bearer_auth(api_key)
        .json(payload)
        .send()
        .await
        .map_err(|e| GatewayError::RequestError(format!("Provider call failed: {}", e)))?;

    let status = response.status();
    if !status.is_success() {
        let error_text = response.text().await.unwrap_or_default();
        log::error!("Provider returned {}: {}", status, error_text);
        return Err(match status.as_u16() {
            429 => GatewayError::RateLimited(format!("status {}", status)),
            402 => GatewayError::QuotaExhausted(format!("status {}", status)),
            _ => GatewayError::UpstreamError(format!("status {}: {}", status, error_text)),
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| GatewayError::ResponseError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GenerateImageRequest;

    #[tokio::test]
    async fn requests_fail_with_a_config_error_when_no_key_is_set() {
        let client = GatewayClient::new(GatewayConfig::new().with_base_url("http://127.0.0.1:1"));

        let request = GenerateImageRequest {
            prompt: "a lighthouse at dusk".into(),
            style: None,
            aspect_ratio: None,
            quality: None,
            seed: None,
            negative_prompt: None,
        };

        let err = client.image().generate(request).await.unwrap_err();
        assert!(matches!(err, GatewayError::ConfigError(_)));
    }
}
