use super::ModelClient;
use crate::constants::{models, urls};
use crate::provider::Provider;

/// Handle for the X.AI Grok chat API.
#[derive(Debug, Clone)]
pub struct XaiClient {
    model: String,
    temperature: f64,
    base_url: String,
}

impl XaiClient {
    pub fn new(model: impl Into<String>, temperature: f64) -> Self {
        Self {
            model: model.into(),
            temperature,
            base_url: urls::XAI_API_BASE.to_string(),
        }
    }

    pub fn with_default_model(temperature: f64) -> Self {
        Self::new(models::xai::DEFAULT_MODEL, temperature)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl ModelClient for XaiClient {
    fn provider(&self) -> Provider {
        Provider::Xai
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
