//! Image-generations client for cover and page illustrations.

use crate::BackendConfig;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use storyloom_core::ImageOptions;
use storyloom_error::{ImageError, ImageErrorKind, StoryloomResult};
use storyloom_interface::ImageGenerator;
use tracing::{debug, error, instrument};

/// Image-synthesis API client.
///
/// Makes exactly one attempt per call and reports HTTP 429 as a retryable
/// [`ImageErrorKind::RateLimited`]. Wrap it in [`crate::Retrying`] for the
/// pipeline's bounded backoff behavior.
#[derive(Debug, Clone)]
pub struct ImageClient {
    client: Client,
    config: BackendConfig,
}

#[derive(Debug, Serialize)]
struct ImageGenerationRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    image_size: &'a str,
    batch_size: u32,
    num_inference_steps: u32,
    guidance_scale: f32,
}

#[derive(Debug, Deserialize)]
struct ImageGenerationResponse {
    #[serde(default)]
    images: Vec<ImageData>,
}

#[derive(Debug, Deserialize)]
struct ImageData {
    url: String,
}

impl ImageClient {
    /// Create a new image client. No network I/O happens here.
    pub fn new(config: BackendConfig) -> Self {
        debug!(model = %config.image_model, "Creating new image client");
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl ImageGenerator for ImageClient {
    #[instrument(skip(self, prompt), fields(model = %self.config.image_model))]
    async fn generate_image(
        &self,
        prompt: &str,
        options: &ImageOptions,
    ) -> StoryloomResult<String> {
        let url = format!("{}/images/generations", self.config.base_url);
        let request = ImageGenerationRequest {
            model: &self.config.image_model,
            prompt,
            image_size: &options.image_size,
            batch_size: options.batch_size,
            num_inference_steps: options.num_inference_steps,
            guidance_scale: options.guidance_scale,
        };
        debug!(url = %url, prompt_chars = prompt.len(), "Sending image generation request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send image generation request");
                ImageError::new(ImageErrorKind::Http(e.to_string()))
            })?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            let body = response.text().await.unwrap_or_default();
            debug!(body = %body, "Image backend rate limited");
            return Err(ImageError::new(ImageErrorKind::RateLimited(body)).into());
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Image backend returned error");
            return Err(ImageError::new(ImageErrorKind::Api {
                status: status.as_u16(),
                body,
            })
            .into());
        }

        let parsed: ImageGenerationResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse image generation response");
            ImageError::new(ImageErrorKind::MalformedResponse(e.to_string()))
        })?;

        let first = parsed
            .images
            .into_iter()
            .next()
            .ok_or_else(|| ImageError::new(ImageErrorKind::EmptyResult))?;
        debug!(url = %first.url, "Received image reference");
        Ok(first.url)
    }

    fn provider_name(&self) -> &'static str {
        "siliconflow"
    }

    fn model_name(&self) -> &str {
        &self.config.image_model
    }
}
