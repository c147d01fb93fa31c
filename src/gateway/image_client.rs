use crate::{
    config::Credential,
    error::Result,
    gateway::{fallback::run_with_fallback, post_json, response, IMAGE_MODEL, MULTIMODAL_MODEL},
    logger,
    models::{
        ChatCompletionResponse, EditImageRequest, GenerateImageRequest, ImageResult,
        ImagesResponse, RemixImagesRequest,
    },
    params, validate,
};
use reqwest::Client;
use serde_json::json;

#[derive(Clone)]
pub struct ImageClient {
    http: Client,
    base_url: String,
    credentials: Vec<Credential>,
}

impl ImageClient {
    pub fn new(http: Client, base_url: String, credentials: Vec<Credential>) -> Self {
        Self {
            http,
            base_url,
            credentials,
        }
    }

    /// Text-to-image against the dedicated inference endpoint. Abstract
    /// style/quality/aspect tags are mapped onto vendor parameters before
    /// the call goes out.
    pub async fn generate(&self, request: GenerateImageRequest) -> Result<ImageResult> {
        validate::prompt(&request.prompt)?;

        let prompt = params::apply_style(&request.prompt, request.style.as_deref());
        let steps = params::inference_steps(request.quality.as_deref().unwrap_or_default());
        let (width, height) = params::dimensions(request.aspect_ratio.as_deref().unwrap_or_default());

        let mut payload = json!({
            "model": IMAGE_MODEL,
            "prompt": prompt,
            "width": width,
            "height": height,
            "steps": steps,
        });
        if let Some(seed) = request.seed {
            payload["seed"] = json!(seed);
        }
        if let Some(negative) = request
            .negative_prompt
            .as_deref()
            .filter(|n| !n.trim().is_empty())
        {
            payload["negative_prompt"] = json!(negative);
        }

        log::info!(
            "Generating image: {}x{}, {} steps, model {}",
            width,
            height,
            steps,
            IMAGE_MODEL
        );
        let _timer = logger::timer("generate-image");

        let url = format!("{}/v1/images/generations", self.base_url);
        let envelope: ImagesResponse =
            run_with_fallback(&self.credentials, "generate-image", |credential| {
                let http = self.http.clone();
                let url = url.clone();
                let payload = payload.clone();
                let key = credential.key.clone();
                Box::pin(async move { post_json(&http, &url, &key, &payload).await })
            })
            .await?;

        Ok(ImageResult {
            image_url: response::image_from_data(&envelope)?,
            model: IMAGE_MODEL.to_string(),
        })
    }

    /// Instruction-driven edit of a caller-supplied image, via the
    /// multimodal chat endpoint.
    pub async fn edit(&self, request: EditImageRequest) -> Result<ImageResult> {
        validate::prompt(&request.prompt)?;
        validate::image_payload(&request.image_base64)?;

        let payload = json!({
            "model": MULTIMODAL_MODEL,
            "messages": [{
                "role": "user",
                "content": [
                    {"type": "text", "text": request.prompt},
                    {"type": "image_url", "image_url": {
                        "url": format!("data:image/png;base64,{}", request.image_base64)
                    }}
                ]
            }],
            "modalities": ["image", "text"]
        });

        log::info!("Editing image with model {}", MULTIMODAL_MODEL);
        let _timer = logger::timer("edit-image");

        let envelope = self.chat_image_call("edit-image", payload).await?;

        Ok(ImageResult {
            image_url: response::image_from_chat(&envelope)?,
            model: MULTIMODAL_MODEL.to_string(),
        })
    }

    /// Fuses one to four image references into a single artifact. A caller
    /// prompt replaces the stock remix instruction when present.
    pub async fn remix(&self, request: RemixImagesRequest) -> Result<ImageResult> {
        validate::image_refs(&request.images)?;

        let base = request
            .prompt
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .unwrap_or(params::DEFAULT_REMIX_PROMPT);
        validate::prompt(base)?;

        let instruction = if request.images.len() == 1 {
            params::remix_prompt_single(base)
        } else {
            params::remix_prompt_multi(base, request.images.len())
        };

        let mut content = vec![json!({"type": "text", "text": instruction})];
        content.extend(
            request
                .images
                .iter()
                .map(|image| json!({"type": "image_url", "image_url": {"url": image}})),
        );

        let payload = json!({
            "model": MULTIMODAL_MODEL,
            "messages": [{"role": "user", "content": content}],
            "modalities": ["image", "text"]
        });

        log::info!("Remixing {} image(s)", request.images.len());
        let _timer = logger::timer("remix-images");

        let envelope = self.chat_image_call("remix-images", payload).await?;

        Ok(ImageResult {
            image_url: response::image_from_chat(&envelope)?,
            model: MULTIMODAL_MODEL.to_string(),
        })
    }

    async fn chat_image_call(
        &self,
        operation: &str,
        payload: serde_json::Value,
    ) -> Result<ChatCompletionResponse> {
        let url = format!("{}/v1/chat/completions", self.base_url);
        run_with_fallback(&self.credentials, operation, |credential| {
            let http = self.http.clone();
            let url = url.clone();
            let payload = payload.clone();
            let key = credential.key.clone();
            Box::pin(async move { post_json(&http, &url, &key, &payload).await })
        })
        .await
    }
}
