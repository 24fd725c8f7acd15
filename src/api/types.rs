//! Façade API wire types
//!
//! Request and response shapes for the content endpoints. Every request
//! field carries a default, so any JSON object is accepted; responses are
//! assembled fresh per request and dropped after serialization.

use serde::{Deserialize, Serialize};

/// Content generation request
///
/// Tags (`audience`, `content_type`, ...) are passed through untouched;
/// the façade validates nothing beyond presence-with-default.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerationRequest {
    pub topic: String,
    pub audience: String,
    pub content_type: String,
    pub key_points: Vec<String>,
    pub tone_of_voice: String,
    pub llm_target: String,
    pub enable_image_generation: bool,
    pub enable_text_to_speech: bool,
    pub image_style: String,
    pub voice_settings: VoiceSettings,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            topic: "Sample Topic".to_string(),
            audience: "b2b".to_string(),
            content_type: "blog_post".to_string(),
            key_points: Vec::new(),
            tone_of_voice: "professional".to_string(),
            llm_target: "general".to_string(),
            enable_image_generation: false,
            enable_text_to_speech: false,
            image_style: "professional".to_string(),
            voice_settings: VoiceSettings::default(),
        }
    }
}

/// Text-to-speech voice settings, echoed back in the audio sub-object
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct VoiceSettings {
    pub voice: String,
    pub speed: f64,
    pub stability: f64,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            voice: "alloy".to_string(),
            speed: 1.0,
            stability: 0.75,
        }
    }
}

/// One generated content section
#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub title: String,
    pub content: String,
}

/// Synthetic quality scores and derived counts
///
/// `word_count`, `estimated_token_count`, and `reading_time` are derived
/// from the section bodies; the scores are fixed placeholder values.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentMetadata {
    pub optimized_for: String,
    pub estimated_token_count: usize,
    pub llm_quality_score: f64,
    pub semantic_score: f64,
    pub word_count: usize,
    pub reading_time: usize,
    pub flesch_reading_ease: u32,
    pub reading_level: String,
    pub has_image: bool,
    pub has_audio: bool,
    pub image_style: Option<String>,
    pub voice_used: Option<String>,
    pub quality_score: u32,
    pub seo_optimized: bool,
    pub ai_enhanced: bool,
}

/// Inline vector image attachment
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageGeneration {
    pub image_url: String,
    pub prompt: String,
    pub style: String,
    pub generated_at: String,
    pub ai_provider: String,
    pub dimensions: String,
}

/// Canned audio attachment
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioGeneration {
    pub audio_data: String,
    pub audio_url: String,
    pub audio_format: String,
    pub voice_id: String,
    pub voice_profile: String,
    pub voice_settings: VoiceSettings,
    pub text_length: usize,
    pub generated_at: String,
    pub ai_provider: String,
    pub duration: String,
}

/// The assembled generation result
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedContent {
    pub content_id: String,
    pub title: String,
    pub summary: String,
    pub sections: Vec<Section>,
    pub content_type: String,
    pub audience: String,
    pub tone_of_voice: String,
    pub metadata: ContentMetadata,
    pub generated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_generation: Option<ImageGeneration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_generation: Option<AudioGeneration>,
}

/// Success envelope for the generate endpoint
#[derive(Debug, Serialize)]
pub struct GenerationResponse {
    pub success: bool,
    pub data: GeneratedContent,
    pub message: &'static str,
}

/// Failure envelope shared by the content endpoints
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub message: &'static str,
}
