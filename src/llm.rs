use async_openai::config::OpenAIConfig;
use async_openai::types::{ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs};
use async_openai::Client as OpenAIClient;
use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::ServiceError;
use crate::TARGET_LLM_REQUEST;

/// Per-call sampling controls. Temperature and budgets are chosen by the
/// generation pipeline; penalties are only set for the long article call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplingParams {
    pub max_tokens: u32,
    pub temperature: f32,
    pub presence_penalty: Option<f32>,
    pub frequency_penalty: Option<f32>,
}

impl SamplingParams {
    pub fn bounded(max_tokens: u32, temperature: f32) -> Self {
        SamplingParams {
            max_tokens,
            temperature,
            presence_penalty: None,
            frequency_penalty: None,
        }
    }

    pub fn with_penalties(mut self, presence: f32, frequency: f32) -> Self {
        self.presence_penalty = Some(presence);
        self.frequency_penalty = Some(frequency);
        self
    }
}

/// Capability: generate text from a single user-role prompt.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str, params: SamplingParams) -> Result<String, ServiceError>;
}

pub struct OpenAiGenerator {
    client: OpenAIClient<OpenAIConfig>,
    model: String,
}

impl OpenAiGenerator {
    pub fn new(api_key: &str, api_base: Option<&str>, model: &str) -> Self {
        let mut config = OpenAIConfig::new().with_api_key(api_key);
        if let Some(base) = api_base {
            config = config.with_api_base(base);
        }

        OpenAiGenerator {
            client: OpenAIClient::with_config(config),
            model: model.to_string(),
        }
    }
}

#[async_trait]
impl TextGenerator for OpenAiGenerator {
    async fn generate(&self, prompt: &str, params: SamplingParams) -> Result<String, ServiceError> {
        debug!(
            target: TARGET_LLM_REQUEST,
            "Sending generation request: model {}, prompt {} chars, max {} tokens",
            self.model,
            prompt.len(),
            params.max_tokens
        );

        let message = ChatCompletionRequestUserMessageArgs::default()
            .content(prompt)
            .build()
            .map_err(|err| ServiceError::generation(err.to_string()))?;

        let mut request = CreateChatCompletionRequestArgs::default();
        request
            .model(&self.model)
            .messages([message.into()])
            .max_tokens(params.max_tokens)
            .temperature(params.temperature);
        if let Some(presence) = params.presence_penalty {
            request.presence_penalty(presence);
        }
        if let Some(frequency) = params.frequency_penalty {
            request.frequency_penalty(frequency);
        }
        let request = request
            .build()
            .map_err(|err| ServiceError::generation(err.to_string()))?;

        let response = self.client.chat().create(request).await.map_err(|err| {
            warn!(target: TARGET_LLM_REQUEST, "Generation request failed: {}", err);
            ServiceError::generation(err.to_string())
        })?;

        let text = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| ServiceError::generation("no completion returned"))?;

        debug!(target: TARGET_LLM_REQUEST, "Generation response received: {} chars", text.len());

        Ok(text.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_params_carry_no_penalties() {
        let params = SamplingParams::bounded(60, 0.5);
        assert_eq!(params.max_tokens, 60);
        assert_eq!(params.presence_penalty, None);
        assert_eq!(params.frequency_penalty, None);
    }

    #[test]
    fn with_penalties_sets_both_controls() {
        let params = SamplingParams::bounded(1500, 0.5).with_penalties(0.6, 0.6);
        assert_eq!(params.presence_penalty, Some(0.6));
        assert_eq!(params.frequency_penalty, Some(0.6));
    }
}
