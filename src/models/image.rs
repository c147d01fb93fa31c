use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateImageRequest {
    pub prompt: String,
    pub style: Option<String>,
    pub aspect_ratio: Option<String>,
    pub quality: Option<String>,
    pub seed: Option<i64>,
    pub negative_prompt: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditImageRequest {
    pub prompt: String,
    pub image_base64: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemixImagesRequest {
    pub images: Vec<String>,
    pub prompt: Option<String>,
}

/// Normalized image artifact handed back to the caller. The reference is
/// either an upstream URL or a data URI wrapping inline base64.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageResult {
    pub image_url: String,
    pub model: String,
}

/// Images-API envelope: `data[0].url` or `data[0].b64_json`.
#[derive(Debug, Deserialize)]
pub struct ImagesResponse {
    #[serde(default)]
    pub data: Vec<ImageDatum>,
}

#[derive(Debug, Deserialize)]
pub struct ImageDatum {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub b64_json: Option<String>,
}
