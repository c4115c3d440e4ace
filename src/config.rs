use serde::{Deserialize, Serialize};

use crate::error::{Result, SynthError};

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TIMEOUT_MS: u64 = 60_000;
pub const DEFAULT_NUM_CARDS: usize = 3;

/// Main configuration structure loaded from insight_synth.toml and environment variables
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub model: ModelConfig,
    pub synthesis: SynthesisConfig,
    /// Secrets and other values that only ever come from the environment
    #[serde(skip)]
    pub runtime: RuntimeConfig,
}

/// Generative model endpoint settings
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ModelConfig {
    pub model: String,
    pub base_url: String,
    pub timeout_ms: u64,
    /// Ask the provider for an `application/json` response body
    pub json_mode: bool,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            json_mode: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SynthesisConfig {
    pub num_cards: usize,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            num_cards: DEFAULT_NUM_CARDS,
        }
    }
}

/// Values given on the command line
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub num_cards: Option<usize>,
    pub model: Option<String>,
    pub disable_json_mode: bool,
}

/// Runtime configuration loaded from environment variables
#[derive(Debug, Clone, Default)]
pub struct RuntimeConfig {
    pub api_key: Option<String>,
}

impl RuntimeConfig {
    /// Load runtime configuration from environment variables
    pub fn load_from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        // GEMINI_API_KEY wins; GOOGLE_API_KEY is accepted for existing setups
        let api_key = ["GEMINI_API_KEY", "GOOGLE_API_KEY"]
            .iter()
            .filter_map(|k| lookup(*k))
            .find(|v| !is_placeholder(v))
            .map(|v| v.trim().to_string());
        Self { api_key }
    }
}

/// Treat empty, templated, or sample keys as unset
pub fn is_placeholder(value: &str) -> bool {
    let t = value.trim();
    t.is_empty()
        || t.contains("${")
        || t.eq_ignore_ascii_case("your-api-key-here")
        || t.eq_ignore_ascii_case("changeme")
}

impl Config {
    /// Load configuration from TOML file and environment variables
    /// Uses INSIGHT_SYNTH_CONFIG environment variable or defaults to "insight_synth.toml".
    /// Not validated here: callers apply CLI overrides first, then `validate()`.
    pub fn load() -> Result<Self> {
        if let Ok(env_path) = std::env::var("INSIGHT_ENV_FILE") {
            let _ = dotenvy::from_path(env_path);
        } else {
            let _ = dotenvy::from_path(".env");
        }

        let config_path = std::env::var("INSIGHT_SYNTH_CONFIG")
            .unwrap_or_else(|_| "insight_synth.toml".to_string());

        let content = std::fs::read_to_string(&config_path).ok();
        if content.is_some() {
            tracing::debug!("Loaded config file {}", config_path);
        } else {
            tracing::warn!("Config file {} not found, using defaults", config_path);
        }
        Self::resolve(content.as_deref(), |key| std::env::var(key).ok())
    }

    /// File contents (if any) layered under env lookups, without validation
    pub fn resolve(content: Option<&str>, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = match content {
            Some(content) => Self::from_toml(content)?,
            None => Self::default(),
        };
        config.apply_overrides(&lookup);
        config.runtime = RuntimeConfig::from_lookup(&lookup);
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply env-first overrides on top of file values
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(model) = lookup("GEMINI_MODEL").filter(|m| !m.trim().is_empty()) {
            tracing::debug!("GEMINI_MODEL env override applied");
            self.model.model = model;
        }
        if let Some(url) = lookup("GEMINI_BASE_URL").filter(|u| !u.trim().is_empty()) {
            tracing::debug!("GEMINI_BASE_URL env override applied");
            self.model.base_url = url;
        }
        if let Some(timeout) = lookup("GEMINI_TIMEOUT_MS").and_then(|v| v.parse().ok()) {
            self.model.timeout_ms = timeout;
        }
        if let Some(json_mode) = lookup("GEMINI_JSON_MODE") {
            self.model.json_mode = json_mode == "1" || json_mode.eq_ignore_ascii_case("true");
        }
        if let Some(n) = lookup("INSIGHT_NUM_CARDS").and_then(|v| v.parse().ok()) {
            self.synthesis.num_cards = n;
        }
    }

    /// Command-line flags win over both file and env values
    pub fn apply_cli_overrides(&mut self, cli: &CliOverrides) {
        if let Some(n) = cli.num_cards {
            self.synthesis.num_cards = n;
        }
        if let Some(model) = &cli.model {
            self.model.model = model.clone();
        }
        if cli.disable_json_mode {
            self.model.json_mode = false;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.synthesis.num_cards == 0 {
            return Err(SynthError::Config {
                message: "num_cards must be at least 1".to_string(),
            });
        }
        if self.model.timeout_ms == 0 {
            return Err(SynthError::Config {
                message: "GEMINI_TIMEOUT_MS must be > 0".to_string(),
            });
        }
        if !self.model.base_url.starts_with("http://")
            && !self.model.base_url.starts_with("https://")
        {
            return Err(SynthError::Config {
                message: format!(
                    "model base URL '{}' must start with http:// or https://",
                    self.model.base_url
                ),
            });
        }
        if self.model.model.trim().is_empty() {
            return Err(SynthError::Config {
                message: "model id must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// API key, or a config error naming the variables to set
    pub fn require_api_key(&self) -> Result<&str> {
        self.runtime
            .api_key
            .as_deref()
            .ok_or_else(|| SynthError::Config {
                message: "GEMINI_API_KEY is not set (GOOGLE_API_KEY is also accepted)".to_string(),
            })
    }
}
