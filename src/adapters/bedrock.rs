//! AWS Bedrock adapter for the `LanguageModel` port.

use crate::domain::prompt::ContentBlock;
use crate::ports::llm::LanguageModel;
use crate::ports::BoxError;
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_bedrockruntime::config::Region;
use aws_sdk_bedrockruntime::error::DisplayErrorContext;
use aws_sdk_bedrockruntime::primitives::Blob;
use aws_sdk_bedrockruntime::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Messages API version expected by Anthropic models on Bedrock.
const ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";

#[derive(Serialize)]
struct InvokeBody<'a> {
    anthropic_version: &'a str,
    max_tokens: u32,
    messages: [Message<'a>; 1],
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct InvokeReply {
    #[serde(default)]
    content: Vec<ContentBlock>,
    #[serde(default)]
    stop_reason: Option<String>,
}

/// BedrockModel implements LanguageModel via the InvokeModel API.
#[derive(Clone)]
pub struct BedrockModel {
    client: Client,
    model_id: String,
    max_tokens: u32,
}

impl BedrockModel {
    pub fn new(client: Client, model_id: String, max_tokens: u32) -> Self {
        Self {
            client,
            model_id,
            max_tokens,
        }
    }

    /// Build a client from the default AWS credential chain for `region`.
    pub async fn from_region(region: &str, model_id: String, max_tokens: u32) -> Self {
        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .load()
            .await;
        Self::new(Client::new(&config), model_id, max_tokens)
    }
}

fn request_body(prompt: &str, max_tokens: u32) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(&InvokeBody {
        anthropic_version: ANTHROPIC_VERSION,
        max_tokens,
        messages: [Message {
            role: "user",
            content: prompt,
        }],
    })
}

#[async_trait]
impl LanguageModel for BedrockModel {
    async fn complete(&self, prompt: &str) -> Result<Vec<ContentBlock>, BoxError> {
        let body = request_body(prompt, self.max_tokens)?;

        let response = self
            .client
            .invoke_model()
            .model_id(&self.model_id)
            .content_type("application/json")
            .accept("application/json")
            .body(Blob::new(body))
            .send()
            .await
            .map_err(|e| format!("InvokeModel failed: {}", DisplayErrorContext(&e)))?;

        let reply: InvokeReply = serde_json::from_slice(response.body().as_ref())?;
        debug!(
            model = %self.model_id,
            blocks = reply.content.len(),
            stop_reason = reply.stop_reason.as_deref().unwrap_or("unknown"),
            "model replied"
        );
        Ok(reply.content)
    }
}
