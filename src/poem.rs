//! Poem generation through the Gemini REST API.
//!
//! Callers only ever see a string: every failure is logged and replaced by
//! one of the fixed fallback lines below.

use std::time::Duration;

use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use crate::config::PoemConfig;

pub const FALLBACK_MISSING_KEY: &str =
    "Our love is lovelier than words can say... (set API_KEY so the poet can write for you)";
pub const FALLBACK_EMPTY: &str = "Happy Valentine's Day, I love you more than anything!";
pub const FALLBACK_FAILED: &str =
    "Even if the system stumbles, my love for you never will :) Happy Valentine's Day";

/// Anything that can produce a poem.  Implementations must not fail.
pub trait PoemSource: Send + Sync {
    fn generate(&self) -> String;
}

#[derive(Debug, Error)]
pub enum PoemError {
    #[error("no API key configured")]
    MissingKey,
    #[error("request failed: {0}")]
    Transport(#[from] Box<ureq::Error>),
    #[error("could not decode response: {0}")]
    Decode(#[from] std::io::Error),
    #[error("response contained no text")]
    Empty,
}

impl PoemError {
    fn fallback(&self) -> &'static str {
        match self {
            PoemError::MissingKey => FALLBACK_MISSING_KEY,
            PoemError::Empty => FALLBACK_EMPTY,
            PoemError::Transport(_) | PoemError::Decode(_) => FALLBACK_FAILED,
        }
    }
}

// ── Wire types ────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

#[derive(Debug, Default, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Default, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateResponse {
    /// Text of the first candidate, parts concatenated and trimmed.
    fn text(&self) -> Option<String> {
        let text: String = self
            .candidates
            .first()?
            .content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        let text = text.trim();
        (!text.is_empty()).then(|| text.to_string())
    }
}

// ── Gemini client ─────────────────────────────────────────────────────────────

pub struct GeminiPoet {
    config: PoemConfig,
    agent: ureq::Agent,
}

impl GeminiPoet {
    pub fn new(config: PoemConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build();
        Self { config, agent }
    }

    fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.endpoint.trim_end_matches('/'),
            self.config.model
        )
    }

    fn request(&self) -> Result<String, PoemError> {
        let key = self
            .config
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(PoemError::MissingKey)?;

        let body = json!({
            "contents": [{ "parts": [{ "text": self.config.prompt }] }],
            "generationConfig": { "thinkingConfig": { "thinkingBudget": 0 } },
        });

        let response = self
            .agent
            .post(&self.url())
            .query("key", key)
            .send_json(body)
            .map_err(Box::new)?;
        let parsed: GenerateResponse = response.into_json()?;
        parsed.text().ok_or(PoemError::Empty)
    }
}

impl PoemSource for GeminiPoet {
    fn generate(&self) -> String {
        log::info!("requesting poem from {}", self.config.model);
        match self.request() {
            Ok(text) => text,
            Err(err @ PoemError::MissingKey) => {
                log::warn!("{err}");
                err.fallback().to_string()
            }
            Err(err) => {
                log::error!("poem generation failed: {err}");
                err.fallback().to_string()
            }
        }
    }
}
