//! Outfit-advice chat: message types, prompt assembly, and canned replies.
//!
//! The network call lives in `wardrobe_upstream::advice`; this module only
//! decides what to send and what to say when the model is unavailable.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const ROLE_SYSTEM: &str = "system";
pub const ROLE_USER: &str = "user";
pub const ROLE_ASSISTANT: &str = "assistant";

/// Only the most recent turns are forwarded to the model.
pub const MAX_HISTORY_MESSAGES: usize = 20;

/// Per-message cap on forwarded content, in characters.
pub const MAX_MESSAGE_CHARS: usize = 4000;

pub const SYSTEM_PROMPT: &str = "You are a friendly personal stylist. Suggest practical outfits \
built from everyday wardrobe staples, keep answers short, and explain briefly why each piece \
works. When weather is provided, make sure every suggestion suits it.";

/// Reply used whenever the model cannot be reached or returns nothing.
pub const FALLBACK_MESSAGE: &str = "I'm having trouble reaching my styling assistant right now. \
In the meantime, a safe bet is a neutral base (jeans or chinos with a plain top), a layer you \
can take off, and comfortable shoes. Ask me again in a moment for a more personal suggestion!";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// One chat turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: &str, content: impl Into<String>) -> Self {
        Self {
            role: role.to_string(),
            content: content.into(),
        }
    }
}

/// Weather facts embedded in the system prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherContext {
    /// Degrees Celsius.
    pub temperature: f64,
    pub condition: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub humidity: Option<f64>,
    #[serde(default)]
    pub wind_speed: Option<f64>,
    #[serde(default)]
    pub location: Option<String>,
}

// ---------------------------------------------------------------------------
// Prompt assembly
// ---------------------------------------------------------------------------

/// System prompt, with a weather paragraph when context is available.
pub fn build_system_prompt(weather: Option<&WeatherContext>) -> String {
    let Some(w) = weather else {
        return SYSTEM_PROMPT.to_string();
    };

    let mut prompt = String::from(SYSTEM_PROMPT);
    prompt.push_str("\n\nCurrent weather");
    if let Some(loc) = w.location.as_deref().filter(|l| !l.is_empty()) {
        prompt.push_str(" in ");
        prompt.push_str(loc);
    }
    prompt.push_str(&format!(": {:.0}°C, {}", w.temperature, w.condition));
    if !w.description.is_empty() {
        prompt.push_str(&format!(" ({})", w.description));
    }
    if let Some(h) = w.humidity {
        prompt.push_str(&format!(", humidity {h:.0}%"));
    }
    if let Some(ws) = w.wind_speed {
        prompt.push_str(&format!(", wind {ws:.1} m/s"));
    }
    prompt.push('.');
    prompt
}

/// Keep user/assistant turns only, drop empty ones, truncate long content,
/// and keep the last [`MAX_HISTORY_MESSAGES`].
pub fn sanitize_history(messages: &[ChatMessage]) -> Vec<ChatMessage> {
    let kept: Vec<ChatMessage> = messages
        .iter()
        .filter(|m| m.role == ROLE_USER || m.role == ROLE_ASSISTANT)
        .filter(|m| !m.content.trim().is_empty())
        .map(|m| ChatMessage {
            role: m.role.clone(),
            content: m.content.chars().take(MAX_MESSAGE_CHARS).collect(),
        })
        .collect();
    let skip = kept.len().saturating_sub(MAX_HISTORY_MESSAGES);
    kept.into_iter().skip(skip).collect()
}

/// Full message list for the model: system prompt then sanitized history.
pub fn build_conversation(
    messages: &[ChatMessage],
    weather: Option<&WeatherContext>,
) -> Vec<ChatMessage> {
    let mut out = vec![ChatMessage::new(ROLE_SYSTEM, build_system_prompt(weather))];
    out.extend(sanitize_history(messages));
    out
}

// ---------------------------------------------------------------------------
// Suggestions
// ---------------------------------------------------------------------------

/// Follow-up prompts offered under each reply.
pub fn suggestions_for(weather: Option<&WeatherContext>) -> Vec<String> {
    let list: &[&str] = match weather {
        Some(w) if is_wet(&w.condition) => &[
            "What should I wear to stay dry today?",
            "Which shoes work best in the rain?",
            "Suggest a waterproof layer from my wardrobe",
        ],
        Some(w) if w.temperature < 10.0 => &[
            "How do I layer for the cold?",
            "Suggest a warm outfit for work",
            "What accessories keep me warm?",
        ],
        Some(w) if w.temperature > 25.0 => &[
            "What's a cool outfit for hot weather?",
            "Which fabrics are best in the heat?",
            "Suggest a summer evening look",
        ],
        _ => &[
            "What should I wear today?",
            "Suggest an outfit for a date night",
            "Help me plan a work week of outfits",
        ],
    };
    list.iter().map(|s| s.to_string()).collect()
}

fn is_wet(condition: &str) -> bool {
    let c = condition.to_lowercase();
    ["rain", "drizzle", "thunderstorm", "snow"]
        .iter()
        .any(|w| c.contains(w))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
