use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::clients::traits::GenerativeModel;
use crate::error::{Result, SynthError};

/// Deterministic, local model for tests and offline replays (no network)
pub struct CannedModel {
    reply: String,
    last_prompt: Mutex<Option<String>>,
}

impl CannedModel {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            last_prompt: Mutex::new(None),
        }
    }

    /// Replay a reply saved from an earlier run
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reply = std::fs::read_to_string(path).map_err(|e| SynthError::Io {
            message: format!("failed to read reply file {}: {}", path.display(), e),
        })?;
        Ok(Self::new(reply))
    }

    /// Prompt passed to the most recent `generate` call
    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().ok().and_then(|p| p.clone())
    }
}

#[async_trait]
impl GenerativeModel for CannedModel {
    async fn generate(&self, prompt: &str) -> Result<String> {
        if let Ok(mut last) = self.last_prompt.lock() {
            *last = Some(prompt.to_string());
        }
        Ok(self.reply.clone())
    }

    fn model_name(&self) -> &str {
        "canned"
    }
}
