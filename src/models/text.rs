use crate::models::common::ChatMessage;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancePromptRequest {
    pub prompt: String,
    /// Purpose tag: "generate", "edit" or "prompt-to-prompt". Defaults to
    /// "generate" when absent.
    #[serde(rename = "type")]
    pub purpose: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedPrompt {
    pub enhanced_prompt: String,
    pub model: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    pub model: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    pub message: String,
    pub model: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptPackRequest {
    pub image_base64: Option<String>,
    pub text_input: Option<String>,
    pub style: Option<String>,
    pub mood: Option<String>,
    pub negative_prompt: Option<String>,
}

/// Per-vendor prompt variants produced by the prompt-pack pipeline. Fields
/// the model omits deserialize as empty strings rather than failing the
/// whole pack.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptPack {
    #[serde(default)]
    pub general: String,
    #[serde(default)]
    pub kling_ai: String,
    #[serde(default)]
    pub ideogram: String,
    #[serde(default)]
    pub leonardo_ai: LeonardoPrompt,
    #[serde(default)]
    pub midjourney: String,
    #[serde(default)]
    pub flux: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeonardoPrompt {
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub negative_prompt: String,
}
