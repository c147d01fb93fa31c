//! Extraction of normalized artifacts from the known provider envelopes.
//!
//! One function per response shape; the caller picks the function matching
//! the endpoint it actually hit. A missing field path means the provider
//! returned no artifact (content refused, or the envelope drifted) and is
//! reported as a response error.

use crate::{
    error::{GatewayError, Result},
    models::{ChatCompletionResponse, ImagesResponse},
};

/// `choices[0].message.images[0].image_url.url` from a multimodal
/// chat-completions envelope.
pub fn image_from_chat(response: &ChatCompletionResponse) -> Result<String> {
    response
        .choices
        .first()
        .and_then(|choice| choice.message.images.as_ref())
        .and_then(|images| images.first())
        .map(|image| image.image_url.url.clone())
        .ok_or_else(|| GatewayError::ResponseError("No image data in response".into()))
}

/// `data[0].url` or `data[0].b64_json` from an images-API envelope. A URL is
/// preferred; inline base64 is wrapped as a data URI.
pub fn image_from_data(response: &ImagesResponse) -> Result<String> {
    let datum = response
        .data
        .first()
        .ok_or_else(|| GatewayError::ResponseError("No image data in response".into()))?;

    if let Some(url) = &datum.url {
        return Ok(url.clone());
    }
    if let Some(b64) = &datum.b64_json {
        return Ok(data_uri(b64));
    }
    Err(GatewayError::ResponseError(
        "No image data in response".into(),
    ))
}

/// `choices[0].message.content` from a text chat-completions envelope.
pub fn text_from_chat(response: &ChatCompletionResponse) -> Result<String> {
    response
        .choices
        .first()
        .and_then(|choice| choice.message.content.clone())
        .filter(|content| !content.trim().is_empty())
        .ok_or_else(|| GatewayError::ResponseError("No text content in response".into()))
}

pub fn data_uri(b64: &str) -> String {
    format!("data:image/png;base64,{}", b64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chat_envelope(json: serde_json::Value) -> ChatCompletionResponse {
        serde_json::from_value(json).unwrap()
    }

    fn images_envelope(json: serde_json::Value) -> ImagesResponse {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn extracts_the_image_url_from_a_multimodal_envelope() {
        let response = chat_envelope(serde_json::json!({
            "choices": [{
                "message": {
                    "content": "Here you go",
                    "images": [{"image_url": {"url": "https://cdn.example/img.png"}}]
                }
            }]
        }));
        assert_eq!(
            image_from_chat(&response).unwrap(),
            "https://cdn.example/img.png"
        );
    }

    #[test]
    fn missing_images_in_chat_envelope_is_a_response_error() {
        let response = chat_envelope(serde_json::json!({
            "choices": [{"message": {"content": "I cannot help with that"}}]
        }));
        assert!(matches!(
            image_from_chat(&response),
            Err(GatewayError::ResponseError(_))
        ));
    }

    #[test]
    fn prefers_the_url_over_inline_base64() {
        let response = images_envelope(serde_json::json!({
            "data": [{"url": "https://cdn.example/out.png", "b64_json": "aGVsbG8="}]
        }));
        assert_eq!(
            image_from_data(&response).unwrap(),
            "https://cdn.example/out.png"
        );
    }

    #[test]
    fn wraps_inline_base64_as_a_data_uri() {
        let response = images_envelope(serde_json::json!({
            "data": [{"b64_json": "aGVsbG8="}]
        }));
        assert_eq!(
            image_from_data(&response).unwrap(),
            format!("data:image/png;base64,{}", "aGVsbG8=")
        );
    }

    #[test]
    fn empty_data_array_is_a_response_error() {
        let response = images_envelope(serde_json::json!({"data": []}));
        assert!(matches!(
            image_from_data(&response),
            Err(GatewayError::ResponseError(_))
        ));
    }

    #[test]
    fn extracts_text_content() {
        let response = chat_envelope(serde_json::json!({
            "choices": [{"message": {"content": "an enhanced prompt"}}]
        }));
        assert_eq!(text_from_chat(&response).unwrap(), "an enhanced prompt");
    }

    #[test]
    fn blank_text_content_is_a_response_error() {
        let response = chat_envelope(serde_json::json!({
            "choices": [{"message": {"content": "   "}}]
        }));
        assert!(matches!(
            text_from_chat(&response),
            Err(GatewayError::ResponseError(_))
        ));
    }
}
