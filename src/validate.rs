use crate::error::{GatewayError, Result};
use base64::Engine as _;

pub const MAX_PROMPT_CHARS: usize = 5000;
pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;
pub const MAX_REMIX_IMAGES: usize = 4;

/// Prompt must be present and within the length limit.
pub fn prompt(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(GatewayError::ValidationError("Prompt is required".into()));
    }
    if text.chars().count() > MAX_PROMPT_CHARS {
        return Err(GatewayError::ValidationError(format!(
            "Prompt exceeds maximum length of {} characters",
            MAX_PROMPT_CHARS
        )));
    }
    Ok(())
}

/// Base64 image payload: standard alphabet, decoded size within the byte
/// limit. Decoding here doubles as the charset check.
pub fn image_payload(encoded: &str) -> Result<()> {
    if encoded.is_empty() {
        return Err(GatewayError::ValidationError("Image is required".into()));
    }

    let decoded = base64::engine::general_purpose::STANDARD
        .decode(encoded)
        .map_err(|_| GatewayError::ValidationError("Invalid image format".into()))?;

    if decoded.len() > MAX_IMAGE_BYTES {
        return Err(GatewayError::ValidationError(
            "Image size exceeds 10MB limit".into(),
        ));
    }
    Ok(())
}

/// Remix input: between one and four non-empty image references.
pub fn image_refs(images: &[String]) -> Result<()> {
    if images.is_empty() {
        return Err(GatewayError::ValidationError(
            "At least one image is required".into(),
        ));
    }
    if images.len() > MAX_REMIX_IMAGES {
        return Err(GatewayError::ValidationError(format!(
            "Maximum {} images can be remixed at once",
            MAX_REMIX_IMAGES
        )));
    }
    if images.iter().any(|image| image.trim().is_empty()) {
        return Err(GatewayError::ValidationError(
            "Image references must not be empty".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;

    #[test]
    fn accepts_a_normal_prompt() {
        assert!(prompt("a cat in space").is_ok());
    }

    #[test]
    fn rejects_an_empty_prompt() {
        assert!(matches!(
            prompt("   "),
            Err(GatewayError::ValidationError(_))
        ));
    }

    #[test]
    fn rejects_a_prompt_over_the_length_limit() {
        let long = "x".repeat(MAX_PROMPT_CHARS + 1);
        let err = prompt(&long).unwrap_err();
        assert!(err.to_string().contains("maximum length"));
    }

    #[test]
    fn accepts_a_prompt_exactly_at_the_limit() {
        let edge = "x".repeat(MAX_PROMPT_CHARS);
        assert!(prompt(&edge).is_ok());
    }

    #[test]
    fn rejects_non_base64_image_data() {
        let err = image_payload("not base64!!").unwrap_err();
        assert!(err.to_string().contains("Invalid image format"));
    }

    #[test]
    fn accepts_a_small_valid_payload() {
        let encoded = base64::engine::general_purpose::STANDARD.encode([0u8; 64]);
        assert!(image_payload(&encoded).is_ok());
    }

    #[test]
    fn rejects_a_payload_over_the_byte_limit() {
        let encoded =
            base64::engine::general_purpose::STANDARD.encode(vec![0u8; MAX_IMAGE_BYTES + 1]);
        let err = image_payload(&encoded).unwrap_err();
        assert!(err.to_string().contains("10MB"));
    }

    #[test]
    fn rejects_an_empty_remix_list() {
        let err = image_refs(&[]).unwrap_err();
        assert!(err.to_string().contains("At least one image"));
    }

    #[test]
    fn rejects_five_remix_images() {
        let images: Vec<String> = (0..5).map(|i| format!("https://img/{}", i)).collect();
        let err = image_refs(&images).unwrap_err();
        assert!(err.to_string().contains("Maximum 4"));
    }

    #[test]
    fn accepts_four_remix_images() {
        let images: Vec<String> = (0..4).map(|i| format!("https://img/{}", i)).collect();
        assert!(image_refs(&images).is_ok());
    }
}
