//! Lookup tables translating abstract UI choices into vendor parameters.
//!
//! Style, quality and aspect-ratio tags are total mappings: an unknown tag
//! falls through to the neutral default instead of failing. Purpose tags are
//! the one strict input, since they select which instruction template is
//! sent upstream.

use crate::error::{GatewayError, Result};

pub const BASELINE_STEPS: u32 = 30;
pub const DEFAULT_DIMENSIONS: (u32, u32) = (1024, 1024);

/// Literal suffix appended to the prompt for a known style tag.
pub fn style_suffix(style: &str) -> Option<&'static str> {
    match style {
        "photorealistic" => {
            Some("photorealistic, ultra detailed, 8k resolution, professional photography")
        }
        "anime" => Some("anime style, vibrant colors, detailed line art, studio quality"),
        "fantasy" => Some("fantasy art, magical atmosphere, epic scene, concept art quality"),
        "vintage" => Some("vintage style, retro aesthetic, film grain, classic composition"),
        "cinematic" => Some("cinematic lighting, dramatic atmosphere, movie quality, epic scene"),
        "abstract" => Some("abstract art, creative interpretation, artistic style, unique perspective"),
        "watercolor" => {
            Some("watercolor painting, soft colors, artistic brushstrokes, traditional art")
        }
        "oil-painting" => Some("oil painting style, rich textures, classical art, museum quality"),
        _ => None,
    }
}

/// `"{prompt}, {suffix}"` for a known style, the prompt unchanged otherwise.
pub fn apply_style(prompt: &str, style: Option<&str>) -> String {
    match style.and_then(style_suffix) {
        Some(suffix) => format!("{}, {}", prompt, suffix),
        None => prompt.to_string(),
    }
}

/// Inference step count for a quality tier.
pub fn inference_steps(quality: &str) -> u32 {
    match quality {
        "low" => 20,
        "medium" => BASELINE_STEPS,
        "high" => 40,
        "ultra" => 50,
        _ => BASELINE_STEPS,
    }
}

/// Pixel dimensions for an aspect-ratio tag.
pub fn dimensions(aspect_ratio: &str) -> (u32, u32) {
    match aspect_ratio {
        "1:1" => (1024, 1024),
        "16:9" => (1344, 768),
        "9:16" => (768, 1344),
        "4:3" => (1152, 896),
        "3:4" => (896, 1152),
        _ => DEFAULT_DIMENSIONS,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurposeTag {
    Generate,
    Edit,
    PromptToPrompt,
}

impl PurposeTag {
    /// Absent purpose defaults to `Generate`; an unknown purpose is a
    /// validation failure.
    pub fn parse(purpose: Option<&str>) -> Result<Self> {
        match purpose {
            None => Ok(PurposeTag::Generate),
            Some("generate") => Ok(PurposeTag::Generate),
            Some("edit") => Ok(PurposeTag::Edit),
            Some("prompt-to-prompt") => Ok(PurposeTag::PromptToPrompt),
            Some(_) => Err(GatewayError::ValidationError(
                "Invalid type parameter".into(),
            )),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PurposeTag::Generate => "generate",
            PurposeTag::Edit => "edit",
            PurposeTag::PromptToPrompt => "prompt-to-prompt",
        }
    }

    /// Instruction template sent as the system message for this purpose.
    pub fn instruction_template(&self) -> &'static str {
        match self {
            PurposeTag::Generate => GENERATE_TEMPLATE,
            PurposeTag::Edit => EDIT_TEMPLATE,
            PurposeTag::PromptToPrompt => PROMPT_TO_PROMPT_TEMPLATE,
        }
    }
}

const GENERATE_TEMPLATE: &str = r#"You are an expert prompt engineer for AI image generation. Transform simple user prompts into highly detailed, vivid, and professional prompts that will produce stunning AI-generated images.

Follow these guidelines:
- Expand simple ideas into rich, detailed descriptions
- Include artistic style, lighting, composition, and mood
- Add technical photography terms when relevant (e.g., "shot on 35mm", "bokeh", "golden hour")
- Specify colors, textures, and atmospheric details
- Keep the enhanced prompt concise but impactful (2-3 sentences max)
- Focus on visual details that will improve image quality
- Do not include negative prompts or what to avoid

Example:
Input: "a cat in space"
Output: "A majestic orange tabby cat floating gracefully in the cosmos, surrounded by vibrant nebulae in purple and blue hues, with distant galaxies twinkling in the background. Shot with cinematic lighting, capturing the ethereal glow of stardust particles around the cat's whiskers, creating a dreamlike sci-fi atmosphere with rich color depth and sharp focus.""#;

const EDIT_TEMPLATE: &str = r#"You are an expert prompt engineer for AI image editing. Transform simple editing instructions into precise, detailed prompts that will guide the AI to make exactly the changes the user wants.

Follow these guidelines:
- Expand simple edit requests into specific, actionable instructions
- Describe the desired changes with visual precision
- Include details about style consistency and blending
- Specify lighting, color, and mood adjustments
- Keep the enhanced prompt focused and clear (2-3 sentences max)
- Ensure the edit maintains the original image's coherence

Example:
Input: "make it sunny"
Output: "Transform the scene into a bright sunny day with warm golden sunlight casting soft shadows, clear blue skies with few wispy clouds, and enhanced warm color tones throughout. Increase the overall brightness while maintaining natural contrast, add subtle lens flare effects, and adjust the atmosphere to feel cheerful and inviting.""#;

const PROMPT_TO_PROMPT_TEMPLATE: &str = r#"You are an expert at analyzing images and creating detailed prompts. Based on the user's rough idea or the image they provide, create a comprehensive, detailed prompt that captures all the visual elements, style, composition, and atmosphere.

Follow these guidelines:
- Describe all key visual elements in the scene
- Include artistic style, medium, and technique
- Specify lighting, colors, and mood
- Add composition and framing details
- Include technical details that enhance quality
- Create a prompt that would recreate the essence of the image
- Keep it detailed but focused (3-4 sentences max)

Example:
Input: "cyberpunk city"
Output: "A sprawling neon-lit cyberpunk metropolis at night, with towering skyscrapers adorned with holographic advertisements in vibrant pink, cyan, and purple. Rain-slicked streets reflect the glowing signs while flying vehicles zip between buildings, creating light trails. Shot in cinematic widescreen with a moody, atmospheric style reminiscent of Blade Runner, featuring dramatic lighting contrasts and a misty, futuristic ambiance.""#;

/// System persona for the conversational assistant endpoint.
pub const CHAT_SYSTEM_PROMPT: &str = "You are a helpful AI assistant specializing in creative content, image generation, and digital art. You can help users with questions about their projects, provide creative suggestions, and assist with any questions they have about using this AI-powered platform.";

/// Vision instruction used to turn an uploaded image into a base description.
pub const IMAGE_ANALYSIS_PROMPT: &str = "Analyze this image in extreme detail. Describe the subject, composition, lighting, colors, mood, style, textures, and artistic elements. Create a comprehensive, vivid description suitable for AI image generation.";

/// Default instruction when the remix caller supplies no prompt of their own.
pub const DEFAULT_REMIX_PROMPT: &str = "Creatively blend and fuse these images together into a single stunning, cohesive artwork. Maintain the best elements of each image while creating smooth transitions and a unified composition. The result should be visually striking and artistically impressive.";

/// Remix instruction for a single input image.
pub fn remix_prompt_single(base: &str) -> String {
    format!(
        "{} Ultra high resolution, stunning details, professional quality.",
        base
    )
}

/// Remix instruction when several images are fused at once.
pub fn remix_prompt_multi(base: &str, image_count: usize) -> String {
    format!(
        "{} Create an artistic fusion combining elements from {} different images. Ultra high resolution, stunning composition, professional artistic quality, seamless blending.",
        base, image_count
    )
}

/// Elaboration instruction for a rough text idea, with optional style and
/// mood hints interpolated.
pub fn idea_elaboration_prompt(idea: &str, style: Option<&str>, mood: Option<&str>) -> String {
    let style_text = style
        .map(|s| format!("Style: {}.", s))
        .unwrap_or_default();
    let mood_text = mood.map(|m| format!("Mood: {}.", m)).unwrap_or_default();
    format!(
        "You are a prompt engineering expert. Transform this idea into a hyper-detailed, vivid description for AI image generation. Elaborate on the scene, environment, lighting, colors, textures, and atmosphere. {} {}\n\nIdea: \"{}\"",
        style_text, mood_text, idea
    )
}

/// Instruction asking the model for the per-vendor prompt pack, as strict
/// JSON.
pub fn prompt_pack_instruction(description: &str, negative_prompt: Option<&str>) -> String {
    let negative_text = negative_prompt
        .map(|n| format!("User wants to avoid: \"{}\".", n))
        .unwrap_or_default();
    format!(
        r#"Based on the following detailed description, generate optimized prompts for different AI models. Return ONLY valid JSON.

Description: "{}"
{}

Generate prompts for these models:
- general: Universal detailed prompt (max 1000 chars)
- kling_ai: Cinematic focus with camera movements (max 1000 chars)
- ideogram: Natural language with style keywords (max 450 chars)
- leonardo_ai: Object with "prompt" and "negative_prompt" fields (max 1000 chars each)
- midjourney: Descriptive with parameters like --ar 16:9 (max 1500 chars)
- flux: Clear, highly descriptive (max 1000 chars)

JSON format:
{{
  "general": "...",
  "kling_ai": "...",
  "ideogram": "...",
  "leonardo_ai": {{"prompt": "...", "negative_prompt": "..."}},
  "midjourney": "...",
  "flux": "..."
}}"#,
        description, negative_text
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_style_appends_its_suffix() {
        let shaped = apply_style("a lighthouse", Some("cinematic"));
        assert_eq!(
            shaped,
            "a lighthouse, cinematic lighting, dramatic atmosphere, movie quality, epic scene"
        );
    }

    #[test]
    fn unknown_style_leaves_the_prompt_unchanged() {
        assert_eq!(apply_style("a lighthouse", Some("cubist")), "a lighthouse");
        assert_eq!(apply_style("a lighthouse", None), "a lighthouse");
    }

    #[test]
    fn quality_tiers_map_to_step_counts() {
        assert_eq!(inference_steps("low"), 20);
        assert_eq!(inference_steps("medium"), 30);
        assert_eq!(inference_steps("high"), 40);
        assert_eq!(inference_steps("ultra"), 50);
    }

    #[test]
    fn unknown_quality_falls_back_to_the_baseline() {
        assert_eq!(inference_steps("cosmic"), BASELINE_STEPS);
    }

    #[test]
    fn aspect_ratios_map_to_pixel_dimensions() {
        assert_eq!(dimensions("16:9"), (1344, 768));
        assert_eq!(dimensions("9:16"), (768, 1344));
        assert_eq!(dimensions("4:3"), (1152, 896));
    }

    #[test]
    fn unknown_aspect_ratio_falls_back_to_square() {
        assert_eq!(dimensions("7:5"), DEFAULT_DIMENSIONS);
    }

    #[test]
    fn purpose_defaults_to_generate_when_absent() {
        assert_eq!(PurposeTag::parse(None).unwrap(), PurposeTag::Generate);
    }

    #[test]
    fn unknown_purpose_is_rejected() {
        assert!(matches!(
            PurposeTag::parse(Some("remix")),
            Err(GatewayError::ValidationError(_))
        ));
    }

    #[test]
    fn each_purpose_selects_a_distinct_template() {
        let templates = [
            PurposeTag::Generate.instruction_template(),
            PurposeTag::Edit.instruction_template(),
            PurposeTag::PromptToPrompt.instruction_template(),
        ];
        assert_ne!(templates[0], templates[1]);
        assert_ne!(templates[1], templates[2]);
    }

    #[test]
    fn multi_remix_prompt_mentions_the_image_count() {
        let prompt = remix_prompt_multi(DEFAULT_REMIX_PROMPT, 3);
        assert!(prompt.contains("3 different images"));
    }
}
