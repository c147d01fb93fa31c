use crate::{
    config::Credential,
    error::{GatewayError, Result},
    gateway::{fallback::run_with_fallback, post_json, response, ENHANCE_MODEL, TEXT_MODEL},
    logger,
    models::{
        ChatCompletionResponse, ChatMessage, ChatReply, ChatRequest, EnhancePromptRequest,
        EnhancedPrompt, PromptPack, PromptPackRequest,
    },
    params::{self, PurposeTag},
    validate,
};
use reqwest::Client;
use serde_json::json;

#[derive(Clone)]
pub struct TextClient {
    http: Client,
    base_url: String,
    credentials: Vec<Credential>,
}

impl TextClient {
    pub fn new(http: Client, base_url: String, credentials: Vec<Credential>) -> Self {
        Self {
            http,
            base_url,
            credentials,
        }
    }

    /// Rewrites a rough prompt into a detailed one. The purpose tag picks
    /// which instruction template frames the rewrite.
    pub async fn enhance(&self, request: EnhancePromptRequest) -> Result<EnhancedPrompt> {
        validate::prompt(&request.prompt)?;
        let purpose = PurposeTag::parse(request.purpose.as_deref())?;

        log::info!("Enhancing prompt for purpose: {}", purpose.as_str());
        let _timer = logger::timer("enhance-prompt");

        let payload = json!({
            "model": ENHANCE_MODEL,
            "messages": [
                {"role": "system", "content": purpose.instruction_template()},
                {"role": "user", "content": request.prompt}
            ]
        });

        let envelope = self.chat_call("enhance-prompt", payload).await?;
        Ok(EnhancedPrompt {
            enhanced_prompt: response::text_from_chat(&envelope)?,
            model: ENHANCE_MODEL.to_string(),
        })
    }

    /// Conversational assistant. The caller's messages are sent behind a
    /// fixed platform persona; the caller may pick the model.
    pub async fn chat(&self, request: ChatRequest) -> Result<ChatReply> {
        let model = request
            .model
            .clone()
            .unwrap_or_else(|| TEXT_MODEL.to_string());

        let mut messages = vec![ChatMessage::system(params::CHAT_SYSTEM_PROMPT)];
        messages.extend(request.messages.iter().cloned());

        let _timer = logger::timer("chat");

        let payload = json!({
            "model": model,
            "messages": messages,
            "stream": false,
        });

        let envelope = self.chat_call("chat", payload).await?;
        Ok(ChatReply {
            message: response::text_from_chat(&envelope)?,
            model,
        })
    }

    /// Two-step prompt-pack pipeline: derive a base description from an
    /// uploaded image (vision analysis) or a rough text idea (elaboration),
    /// then ask for per-vendor prompt variants as strict JSON.
    pub async fn prompt_pack(&self, request: PromptPackRequest) -> Result<PromptPack> {
        let _timer = logger::timer("image-to-prompt");

        let description = if let Some(image) = request
            .image_base64
            .as_deref()
            .filter(|i| !i.is_empty())
        {
            validate::image_payload(image)?;
            log::info!("Deriving base description from image");
            let payload = json!({
                "model": TEXT_MODEL,
                "messages": [{
                    "role": "user",
                    "content": [
                        {"type": "text", "text": params::IMAGE_ANALYSIS_PROMPT},
                        {"type": "image_url", "image_url": {
                            "url": format!("data:image/jpeg;base64,{}", image)
                        }}
                    ]
                }]
            });
            let envelope = self.chat_call("image-to-prompt:analyze", payload).await?;
            response::text_from_chat(&envelope)?
        } else if let Some(idea) = request
            .text_input
            .as_deref()
            .filter(|t| !t.trim().is_empty())
        {
            validate::prompt(idea)?;
            log::info!("Deriving base description from text idea");
            let payload = json!({
                "model": TEXT_MODEL,
                "messages": [{
                    "role": "user",
                    "content": params::idea_elaboration_prompt(
                        idea,
                        request.style.as_deref(),
                        request.mood.as_deref(),
                    )
                }]
            });
            let envelope = self.chat_call("image-to-prompt:elaborate", payload).await?;
            response::text_from_chat(&envelope)?
        } else {
            return Err(GatewayError::ValidationError(
                "An image or a text idea is required".into(),
            ));
        };

        let payload = json!({
            "model": TEXT_MODEL,
            "messages": [{
                "role": "user",
                "content": params::prompt_pack_instruction(
                    &description,
                    request.negative_prompt.as_deref(),
                )
            }],
            "response_format": {"type": "json_object"}
        });

        let envelope = self.chat_call("image-to-prompt:pack", payload).await?;
        let content = response::text_from_chat(&envelope)?;

        serde_json::from_str(&content).map_err(|e| {
            GatewayError::ResponseError(format!("Prompt pack was not valid JSON: {}", e))
        })
    }

    async fn chat_call(
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
