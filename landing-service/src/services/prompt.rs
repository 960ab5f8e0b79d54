//! Prompt construction for landing page generation.

use crate::models::LandingBrief;
use crate::services::providers::{ChatMessage, GenerationParams};

pub const TEMPERATURE: f32 = 0.7;
pub const MAX_TOKENS: u32 = 3000;

/// Fixed instructions describing the required output document.
pub const SYSTEM_PROMPT: &str = "\
You are a senior web designer. Return ONLY a complete, single-file HTML5 document
for a modern landing page. Requirements:
- Self-contained: inline CSS and minimal vanilla JS; no external CSS/JS/fonts.
- Sections: header/nav, hero (catchy H1 + subheading + primary CTA), features, social proof/testimonials,
  pricing or value prop, FAQ, and footer.
- Design: clean, responsive, gradient accents (purple #6d28d9, indigo #4f46e5), soft shadows, rounded corners.
- Accessibility: semantic HTML, aria labels, color-contrast safe.
- Include meta tags + Open Graph + a tiny data-URL favicon.
- Add smooth scrolling for internal anchors.
- Output raw HTML only (no markdown/backticks).
";

pub fn user_prompt(brief: &LandingBrief) -> String {
    format!(
        "Build a landing page for a {category} called \"{idea}\".\n\
         Audience: people interested in {audience} tools.\n\
         Tone: confident and friendly.\n\
         Primary CTA text: \"Get Started\".\n\
         Use concise copy and make it feel like a real product website.\n",
        category = brief.category,
        idea = brief.idea,
        audience = brief.category.to_lowercase(),
    )
}

/// System prompt followed by the brief-specific user prompt.
pub fn build_messages(brief: &LandingBrief) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(user_prompt(brief)),
    ]
}

pub fn generation_params() -> GenerationParams {
    GenerationParams {
        temperature: TEMPERATURE,
        max_tokens: MAX_TOKENS,
    }
}
