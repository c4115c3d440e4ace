use async_trait::async_trait;

use crate::error::Result;

/// A hosted generative-text model: one prompt in, one text reply out
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;

    fn model_name(&self) -> &str;
}
