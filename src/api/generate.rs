//! Content synthesis module
//!
//! Builds the placeholder generation payload from string templates. All
//! functions are pure over the request and a supplied timestamp, so the
//! derived counts can be checked without a running server.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::{DateTime, Utc};

use super::types::{
    AudioGeneration, ContentMetadata, GeneratedContent, GenerationRequest, ImageGeneration,
    Section,
};

/// Fixed placeholder audio payload; never derived from the input text
const CANNED_AUDIO_DATA_URI: &str = "data:audio/wav;base64,UklGRnoGAABXQVZFZm10IBAAAAABAAEAQB8AAEAfAAABAAgAZGF0YQoGAACBhYqFbF1fdJivrJBhNjVgodDbq2EcBj+a2/LDciUFLIHO8tiJNwgZaLvt559NEAxQp+PwtmMcBjiR1/LMeSwFJHfH8N2QQAoUXrTp66hVFApGn+DyvmwhBSuBzvLZiTYIG2m98OScTgwOUarm7blmGgU7k9n1unEiBC13yO/eizEIHWq+8+OWT";

/// Format a timestamp the way the wire format expects: UTC ISO-8601 with
/// millisecond precision
pub fn iso_millis(t: DateTime<Utc>) -> String {
    t.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

/// Assemble the full generation payload for a request
pub fn synthesize(req: &GenerationRequest, now: DateTime<Utc>) -> GeneratedContent {
    let sections = build_sections(&req.topic, &req.audience, &req.key_points);

    let word_count = total_word_count(&sections);
    let token_count = estimated_token_count(&sections);
    let text_length = total_char_count(&sections);
    let generated_at = iso_millis(now);

    let image_generation = req.enable_image_generation.then(|| ImageGeneration {
        image_url: render_image_data_uri(&req.image_style, &req.topic, &req.audience),
        prompt: format!(
            "Professional {} illustration about {} for {} audience",
            req.image_style, req.topic, req.audience
        ),
        style: req.image_style.clone(),
        generated_at: generated_at.clone(),
        ai_provider: "DALL-E".to_string(),
        dimensions: "800x600".to_string(),
    });

    let audio_generation = req.enable_text_to_speech.then(|| AudioGeneration {
        audio_data: CANNED_AUDIO_DATA_URI.to_string(),
        audio_url: CANNED_AUDIO_DATA_URI.to_string(),
        audio_format: "wav".to_string(),
        voice_id: req.voice_settings.voice.clone(),
        voice_profile: req.voice_settings.voice.clone(),
        voice_settings: req.voice_settings.clone(),
        text_length,
        generated_at: generated_at.clone(),
        ai_provider: "ElevenLabs".to_string(),
        duration: "3:45".to_string(),
    });

    GeneratedContent {
        content_id: format!("ai_content_{}", now.timestamp_millis()),
        title: format!(
            "{}: A Comprehensive Guide for {} Success",
            req.topic,
            req.audience.to_uppercase()
        ),
        summary: format!(
            "This comprehensive guide explores {} for {} audiences, providing AI-enhanced \
             insights, actionable strategies, and practical implementation guidance.",
            req.topic, req.audience
        ),
        sections,
        content_type: req.content_type.clone(),
        audience: req.audience.clone(),
        tone_of_voice: req.tone_of_voice.clone(),
        metadata: ContentMetadata {
            optimized_for: req.llm_target.clone(),
            estimated_token_count: token_count,
            llm_quality_score: 0.92,
            semantic_score: 0.88,
            word_count,
            reading_time: reading_time_minutes(word_count),
            flesch_reading_ease: 72,
            reading_level: "Standard".to_string(),
            has_image: req.enable_image_generation,
            has_audio: req.enable_text_to_speech,
            image_style: req
                .enable_image_generation
                .then(|| req.image_style.clone()),
            voice_used: req
                .enable_text_to_speech
                .then(|| req.voice_settings.voice.clone()),
            quality_score: 92,
            seo_optimized: true,
            ai_enhanced: true,
        },
        generated_at,
        image_generation,
        audio_generation,
    }
}

/// Build the section list in its fixed order
///
/// Introduction and Key Concepts always open; key points become one
/// section each, or two fixed fallback sections stand in when none were
/// supplied; Conclusion always closes.
fn build_sections(topic: &str, audience: &str, key_points: &[String]) -> Vec<Section> {
    let mut sections = vec![
        Section {
            title: "Introduction".to_string(),
            content: format!(
                "Welcome to this comprehensive guide on {topic}. This content has been \
                 generated with AI-enhanced features for {audience} audience, providing \
                 valuable insights and actionable strategies."
            ),
        },
        Section {
            title: "Key Concepts and Fundamentals".to_string(),
            content: format!(
                "Understanding {topic} is essential for {audience} success. This section \
                 covers fundamental concepts, best practices, and emerging trends that will \
                 help you stay ahead in your field."
            ),
        },
    ];

    if key_points.is_empty() {
        sections.push(Section {
            title: "Implementation Strategy".to_string(),
            content: format!(
                "A practical approach to implementing {topic} in your organization, with \
                 step-by-step guidance, proven methodologies, and expert recommendations \
                 for maximum impact."
            ),
        });
        sections.push(Section {
            title: "Best Practices & Recommendations".to_string(),
            content: format!(
                "Industry-leading practices for {topic} implementation, including common \
                 pitfalls to avoid, success metrics to track, and optimization strategies \
                 for long-term success."
            ),
        });
    } else {
        for (i, point) in key_points.iter().enumerate() {
            sections.push(Section {
                title: format!("Key Focus Area {}: {point}", i + 1),
                content: format!(
                    "**{point}** represents a critical aspect of {topic} implementation. \
                     This section provides detailed insights, practical applications, and \
                     proven strategies for maximizing impact in this area."
                ),
            });
        }
    }

    sections.push(Section {
        title: "Conclusion and Next Steps".to_string(),
        content: format!(
            "In conclusion, {topic} represents a significant opportunity for {audience} \
             organizations to drive meaningful results. By implementing the strategies and \
             best practices outlined in this guide, you can achieve sustainable success."
        ),
    });

    sections
}

/// Whitespace-delimited token count over all section bodies
fn total_word_count(sections: &[Section]) -> usize {
    sections
        .iter()
        .map(|s| s.content.split_whitespace().count())
        .sum()
}

/// Character count over all section bodies
fn total_char_count(sections: &[Section]) -> usize {
    sections.iter().map(|s| s.content.chars().count()).sum()
}

/// Rough token estimate: floor(chars / 4) per section, summed
fn estimated_token_count(sections: &[Section]) -> usize {
    sections
        .iter()
        .map(|s| s.content.chars().count() / 4)
        .sum()
}

/// Whole minutes at 200 words per minute, never below one
const fn reading_time_minutes(word_count: usize) -> usize {
    let minutes = word_count / 200;
    if minutes == 0 {
        1
    } else {
        minutes
    }
}

/// Render the placeholder illustration and wrap it in a data URI
fn render_image_data_uri(style: &str, topic: &str, audience: &str) -> String {
    let svg = render_image_svg(style, topic, audience);
    format!("data:image/svg+xml;base64,{}", BASE64.encode(svg))
}

/// Deterministic 800x600 vector template parameterized by style, topic,
/// and audience
fn render_image_svg(style: &str, topic: &str, audience: &str) -> String {
    format!(
        r##"<svg width="800" height="600" xmlns="http://www.w3.org/2000/svg">
  <defs>
    <linearGradient id="bg" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" style="stop-color:#3b82f6;stop-opacity:0.1" />
      <stop offset="100%" style="stop-color:#1e40af;stop-opacity:0.2" />
    </linearGradient>
  </defs>
  <rect width="100%" height="100%" fill="url(#bg)"/>
  <circle cx="400" cy="300" r="120" fill="#3b82f6" opacity="0.7"/>
  <rect x="320" y="220" width="160" height="160" fill="none" stroke="#1e40af" stroke-width="3" opacity="0.8"/>
  <text x="400" y="320" text-anchor="middle" font-family="Arial, sans-serif" font-size="24" font-weight="bold" fill="#1e40af">
    AI Generated
  </text>
  <text x="400" y="350" text-anchor="middle" font-family="Arial, sans-serif" font-size="18" fill="#64748b">
    {style} Style
  </text>
  <text x="400" y="380" text-anchor="middle" font-family="Arial, sans-serif" font-size="16" fill="#64748b">
    Topic: {topic}
  </text>
  <text x="400" y="410" text-anchor="middle" font-family="Arial, sans-serif" font-size="14" fill="#94a3b8">
    For {audience} audiences - Generated with DALL-E Integration
  </text>
</svg>
"##
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 7, 12, 30, 45).unwrap()
    }

    fn request_with(topic: &str, key_points: &[&str]) -> GenerationRequest {
        GenerationRequest {
            topic: topic.to_string(),
            key_points: key_points.iter().map(ToString::to_string).collect(),
            ..GenerationRequest::default()
        }
    }

    #[test]
    fn test_section_count_with_key_points() {
        let req = request_with("Observability", &["Tracing", "Metrics", "Logs"]);
        let content = synthesize(&req, fixed_now());
        // Introduction + Key Concepts + one per point + Conclusion
        assert_eq!(content.sections.len(), 2 + 3 + 1);
    }

    #[test]
    fn test_section_count_without_key_points() {
        let req = request_with("Observability", &[]);
        let content = synthesize(&req, fixed_now());
        assert_eq!(content.sections.len(), 5);
        assert_eq!(content.sections[2].title, "Implementation Strategy");
        assert_eq!(content.sections[3].title, "Best Practices & Recommendations");
    }

    #[test]
    fn test_section_order_is_fixed() {
        let req = request_with("Observability", &["Tracing", "Metrics"]);
        let content = synthesize(&req, fixed_now());
        let titles: Vec<&str> = content.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles[0], "Introduction");
        assert_eq!(titles[1], "Key Concepts and Fundamentals");
        assert!(titles[2].starts_with("Key Focus Area 1: Tracing"));
        assert!(titles[3].starts_with("Key Focus Area 2: Metrics"));
        assert_eq!(titles[4], "Conclusion and Next Steps");
    }

    #[test]
    fn test_title_uppercases_audience() {
        let req = request_with("Observability", &["Tracing", "Metrics"]);
        let content = synthesize(&req, fixed_now());
        assert_eq!(
            content.title,
            "Observability: A Comprehensive Guide for B2B Success"
        );
    }

    #[test]
    fn test_word_count_matches_sections() {
        let req = request_with("Edge Caching", &["Invalidation"]);
        let content = synthesize(&req, fixed_now());
        let expected: usize = content
            .sections
            .iter()
            .map(|s| s.content.split_whitespace().count())
            .sum();
        assert_eq!(content.metadata.word_count, expected);
        assert!(expected > 0);
    }

    #[test]
    fn test_token_estimate_matches_sections() {
        let req = request_with("Edge Caching", &[]);
        let content = synthesize(&req, fixed_now());
        let expected: usize = content
            .sections
            .iter()
            .map(|s| s.content.chars().count() / 4)
            .sum();
        assert_eq!(content.metadata.estimated_token_count, expected);
    }

    #[test]
    fn test_reading_time_floor() {
        assert_eq!(reading_time_minutes(0), 1);
        assert_eq!(reading_time_minutes(199), 1);
        assert_eq!(reading_time_minutes(200), 1);
        assert_eq!(reading_time_minutes(400), 2);
        assert_eq!(reading_time_minutes(1000), 5);
    }

    #[test]
    fn test_reading_time_in_payload() {
        let req = request_with("Observability", &[]);
        let content = synthesize(&req, fixed_now());
        assert_eq!(
            content.metadata.reading_time,
            reading_time_minutes(content.metadata.word_count)
        );
    }

    #[test]
    fn test_content_id_and_timestamp() {
        let now = fixed_now();
        let content = synthesize(&request_with("X", &[]), now);
        assert_eq!(
            content.content_id,
            format!("ai_content_{}", now.timestamp_millis())
        );
        assert_eq!(content.generated_at, "2026-08-07T12:30:45.000Z");
    }

    #[test]
    fn test_image_data_uri_decodes_to_topic() {
        let mut req = request_with("Observability", &[]);
        req.enable_image_generation = true;
        let content = synthesize(&req, fixed_now());

        let image = content.image_generation.expect("image requested");
        let encoded = image
            .image_url
            .strip_prefix("data:image/svg+xml;base64,")
            .expect("data URI prefix");
        let decoded = BASE64.decode(encoded).expect("valid base64");
        let svg = String::from_utf8(decoded).expect("utf-8 svg");
        assert!(svg.contains("Topic: Observability"));
        assert!(svg.contains("professional Style"));
        assert_eq!(image.ai_provider, "DALL-E");
        assert_eq!(image.dimensions, "800x600");
        assert_eq!(content.metadata.image_style.as_deref(), Some("professional"));
        assert!(content.metadata.has_image);
    }

    #[test]
    fn test_no_attachments_by_default() {
        let content = synthesize(&request_with("Observability", &[]), fixed_now());
        assert!(content.image_generation.is_none());
        assert!(content.audio_generation.is_none());
        assert!(!content.metadata.has_image);
        assert!(!content.metadata.has_audio);
        assert!(content.metadata.image_style.is_none());
        assert!(content.metadata.voice_used.is_none());
    }

    #[test]
    fn test_audio_attachment_is_canned() {
        let mut req = request_with("Observability", &[]);
        req.enable_text_to_speech = true;
        let content = synthesize(&req, fixed_now());

        let audio = content.audio_generation.expect("audio requested");
        assert!(audio.audio_data.starts_with("data:audio/wav;base64,"));
        assert_eq!(audio.audio_data, audio.audio_url);
        assert_eq!(audio.voice_id, "alloy");
        assert_eq!(audio.duration, "3:45");
        assert_eq!(audio.ai_provider, "ElevenLabs");
        // textLength reflects the actual section text, not the canned clip
        let expected: usize = content
            .sections
            .iter()
            .map(|s| s.content.chars().count())
            .sum();
        assert_eq!(audio.text_length, expected);
        assert_eq!(content.metadata.voice_used.as_deref(), Some("alloy"));
    }

    #[test]
    fn test_iso_millis_format() {
        let t = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(iso_millis(t), "2026-01-02T03:04:05.000Z");
    }
}
