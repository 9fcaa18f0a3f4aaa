use super::ModelClient;
use crate::constants::{models, urls};
use crate::provider::Provider;

/// Handle for the Anthropic messages API.
#[derive(Debug, Clone)]
pub struct AnthropicClient {
    model: String,
    temperature: f64,
    base_url: String,
}

impl AnthropicClient {
    pub fn new(model: impl Into<String>, temperature: f64) -> Self {
        Self {
            model: model.into(),
            temperature,
            base_url: urls::ANTHROPIC_API_BASE.to_string(),
        }
    }

    pub fn with_default_model(temperature: f64) -> Self {
        Self::new(models::anthropic::DEFAULT_MODEL, temperature)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl ModelClient for AnthropicClient {
    fn provider(&self) -> Provider {
        Provider::Anthropic
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn temperature(&self) -> f64 {
        self.temperature
    }

    fn api_base(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_forwards_model_and_temperature() {
        let client = AnthropicClient::new("claude-sonnet-4-5", 0.0);
        assert_eq!(client.provider(), Provider::Anthropic);
        assert_eq!(client.model(), "claude-sonnet-4-5");
        assert_eq!(client.temperature(), 0.0);
    }
}
