//! Provider routing implementation with API key management and provider requests

use async_trait::async_trait;
use serde_json::{Value, json};
use shared::FreeFormMap;

use crate::config::{
    ANTHROPIC_MODEL, ANTHROPIC_VERSION, GatewayConfig, MAX_OUTPUT_TOKENS, OPENAI_MODEL, OPENAI_TEMPERATURE,
};
use crate::core::prompt::{ASSISTANT_SYSTEM_PROMPT, build_claude_prompt, build_gpt_user_message};
use crate::error::{GatewayResult, ProviderFailure};
use crate::traits::ProviderRouter;
use crate::types::{ProviderAvailability, ProviderKind};

/// Real provider router calling the Anthropic and OpenAI HTTP APIs
pub struct RealProviderRouter {
    client: reqwest::Client,
    config: GatewayConfig,
}

impl RealProviderRouter {
    /// Create new provider router; one HTTP client is reused for all requests
    pub fn new(config: GatewayConfig) -> GatewayResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl ProviderRouter for RealProviderRouter {
    async fn request_answer(
        &self,
        provider: ProviderKind,
        question: &str,
        context: &FreeFormMap,
    ) -> Result<String, ProviderFailure> {
        match provider {
            ProviderKind::Gpt => self.make_openai_request(question, context).await,
            ProviderKind::Claude => self.make_anthropic_request(question, context).await,
        }
    }

    fn availability(&self) -> ProviderAvailability {
        ProviderAvailability {
            claude: self.config.has_anthropic_key(),
            openai: self.config.has_openai_key(),
        }
    }
}

impl RealProviderRouter {
    /// Make Anthropic API request (private helper)
    async fn make_anthropic_request(&self, question: &str, context: &FreeFormMap) -> Result<String, ProviderFailure> {
        let api_key = self
            .config
            .anthropic_api_key
            .as_deref()
            .ok_or_else(|| ProviderFailure::MissingApiKey {
                provider: ProviderKind::Claude.to_string(),
            })?;

        let request_body = json!({
            "model": ANTHROPIC_MODEL,
            "max_tokens": MAX_OUTPUT_TOKENS,
            "messages": [
                {
                    "role": "user",
                    "content": build_claude_prompt(question, context)
                }
            ]
        });

        let response = self
            .client
            .post(&self.config.anthropic_url)
            .header("x-api-key", api_key)
            .header("Content-Type", "application/json")
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| ProviderFailure::NetworkError(e.to_string()))?;

        let response_json = read_success_json(response).await?;

        response_json
            .get("content")
            .and_then(|content| content.get(0))
            .and_then(|item| item.get("text"))
            .and_then(|text| text.as_str())
            .map(str::to_string)
            .ok_or_else(|| ProviderFailure::MalformedResponse("No content in response".to_string()))
    }

    /// Make OpenAI API request (private helper)
    async fn make_openai_request(&self, question: &str, context: &FreeFormMap) -> Result<String, ProviderFailure> {
        let api_key = self
            .config
            .openai_api_key
            .as_deref()
            .ok_or_else(|| ProviderFailure::MissingApiKey {
                provider: ProviderKind::Gpt.to_string(),
            })?;

        let request_body = json!({
            "model": OPENAI_MODEL,
            "messages": [
                {
                    "role": "system",
                    "content": ASSISTANT_SYSTEM_PROMPT
                },
                {
                    "role": "user",
                    "content": build_gpt_user_message(question, context)
                }
            ],
            "max_tokens": MAX_OUTPUT_TOKENS,
            "temperature": OPENAI_TEMPERATURE
        });

        let response = self
            .client
            .post(&self.config.openai_url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| ProviderFailure::NetworkError(e.to_string()))?;

        let response_json = read_success_json(response).await?;

        response_json
            .get("choices")
            .and_then(|choices| choices.get(0))
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(|content| content.as_str())
            .map(str::to_string)
            .ok_or_else(|| ProviderFailure::MalformedResponse("No content in response".to_string()))
    }
}

/// Only a 200 counts as success; anything else carries the body for logging
async fn read_success_json(response: reqwest::Response) -> Result<Value, ProviderFailure> {
    let status = response.status();
    if status != reqwest::StatusCode::OK {
        let body = response.text().await.unwrap_or_default();
        return Err(ProviderFailure::UpstreamStatus {
            status: status.as_u16(),
            body,
        });
    }

    response
        .json::<Value>()
        .await
        .map_err(|e| ProviderFailure::MalformedResponse(format!("Failed to parse response: {}", e)))
}
