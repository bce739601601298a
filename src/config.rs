use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::entities::Memory;

/// Environment variables that override `poem.api_key`, in priority order.
const API_KEY_VARS: [&str; 2] = ["API_KEY", "GEMINI_API_KEY"];
const CONFIG_PATH_VAR: &str = "VALENTINE_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Target frame time of the main loop.
    pub frame_ms: u64,
    pub poem: PoemConfig,
    /// Replaces the built-in timeline when non-empty.
    pub memories: Vec<Memory>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PoemConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub endpoint: String,
    pub prompt: String,
    pub timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            frame_ms: 16,
            poem: PoemConfig::default(),
            memories: Vec::new(),
        }
    }
}

impl Default for PoemConfig {
    fn default() -> Self {
        PoemConfig {
            api_key: None,
            model: "gemini-3-flash-preview".into(),
            endpoint: "https://generativelanguage.googleapis.com/v1beta".into(),
            prompt: "Write a short, heartfelt Valentine's poem of 4-6 lines about a love \
                     that lasts to infinity and how adorable my partner is."
                .into(),
            timeout_secs: 20,
        }
    }
}

impl AppConfig {
    /// Read the config file, falling back to defaults when it is missing or
    /// invalid, then apply environment overrides.
    pub fn load() -> Self {
        let path = Self::config_path();
        let mut config = match std::fs::read_to_string(&path) {
            Ok(json) => Self::from_json(&json).unwrap_or_else(|e| {
                log::warn!("invalid config {} ({e}), using defaults", path.display());
                Self::default()
            }),
            Err(_) => Self::default(),
        };
        config.apply_env(|name| std::env::var(name).ok());
        config
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Apply environment overrides through `lookup` so tests need not touch
    /// the process environment.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(key) = API_KEY_VARS
            .iter()
            .filter_map(|&name| lookup(name))
            .find(|value| !value.is_empty())
        {
            self.poem.api_key = Some(key);
        }
    }

    fn config_path() -> PathBuf {
        if let Ok(path) = std::env::var(CONFIG_PATH_VAR) {
            return PathBuf::from(path);
        }
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        let mut path = PathBuf::from(home);
        path.push(".config");
        path.push("valentine-journey");
        path.push("config.json");
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config = AppConfig::from_json(r#"{"poem":{"model":"other"}}"#).unwrap();
        assert_eq!(config.frame_ms, 16);
        assert_eq!(config.poem.model, "other");
        assert_eq!(config.poem.timeout_secs, 20);
        assert!(config.memories.is_empty());
    }

    #[test]
    fn memories_are_read_in_order() {
        let json = r#"{"memories":[
            {"date":"a","title":"t1","description":"d1","image":"1.jpg"},
            {"date":"b","title":"t2","description":"d2","image":"2.jpg"}
        ]}"#;
        let config = AppConfig::from_json(json).unwrap();
        let titles: Vec<_> = config.memories.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, ["t1", "t2"]);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(AppConfig::from_json("{ frame_ms: }").is_err());
    }

    #[test]
    fn env_key_overrides_file_key() {
        let mut config = AppConfig::default();
        config.poem.api_key = Some("from-file".into());
        config.apply_env(|name| (name == "GEMINI_API_KEY").then(|| "from-env".to_string()));
        assert_eq!(config.poem.api_key.as_deref(), Some("from-env"));
    }

    #[test]
    fn empty_env_key_is_ignored() {
        let mut config = AppConfig::default();
        config.poem.api_key = Some("from-file".into());
        config.apply_env(|_| Some(String::new()));
        assert_eq!(config.poem.api_key.as_deref(), Some("from-file"));
    }
}
