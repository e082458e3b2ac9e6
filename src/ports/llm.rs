use super::BoxError;
use crate::domain::prompt::ContentBlock;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Send a single user prompt and return the reply's content blocks.
    async fn complete(&self, prompt: &str) -> Result<Vec<ContentBlock>, BoxError>;
}
