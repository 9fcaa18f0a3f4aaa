use super::ModelClient;
use crate::constants::{models, urls};
use crate::provider::Provider;

/// Handle for the Google Gemini generateContent API.
#[derive(Debug, Clone)]
pub struct GoogleClient {
    model: String,
    temperature: f64,
    base_url: String,
}

impl GoogleClient {
    pub fn new(model: impl Into<String>, temperature: f64) -> Self {
        Self {
            model: model.into(),
            temperature,
            base_url: urls::GOOGLE_API_BASE.to_string(),
        }
    }

    pub fn with_default_model(temperature: f64) -> Self {
        Self::new(models::google::DEFAULT_MODEL, temperature)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl ModelClient for GoogleClient {
    fn provider(&self) -> Provider {
        Provider::Google
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
        let client = GoogleClient::new("gemini-2.5-pro", 0.1);
        assert_eq!(client.provider(), Provider::Google);
        assert_eq!(client.model(), "gemini-2.5-pro");
        assert_eq!(client.temperature(), 0.1);
    }
}
