use super::ModelClient;
use crate::constants::{models, urls};
use crate::provider::Provider;

/// Handle for the OpenAI chat completions API.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    model: String,
    temperature: f64,
    base_url: String,
}

impl OpenAiClient {
    pub fn new(model: impl Into<String>, temperature: f64) -> Self {
        Self {
            model: model.into(),
            temperature,
            base_url: urls::OPENAI_API_BASE.to_string(),
        }
    }

    pub fn with_default_model(temperature: f64) -> Self {
        Self::new(models::openai::DEFAULT_MODEL, temperature)
    }

    /// Point the handle at an OpenAI-compatible endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl ModelClient for OpenAiClient {
    fn provider(&self) -> Provider {
        Provider::OpenAi
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
        let client = OpenAiClient::new("gpt-5-mini", 0.3);
        assert_eq!(client.provider(), Provider::OpenAi);
        assert_eq!(client.model(), "gpt-5-mini");
        assert_eq!(client.temperature(), 0.3);
    }
}
