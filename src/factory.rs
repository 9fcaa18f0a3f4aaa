//! Provider selection and model-client construction.
//!
//! [`ModelFactory`] holds one constructor per [`Provider`] and resolves a
//! [`Settings`] snapshot into exactly one vendor client. Selection order:
//!
//! 1. an explicit `settings.model_provider`;
//! 2. an explicit `vendor:` prefix on `settings.model_name`;
//! 3. the first entry of [`Provider::PRIORITY`] with an API key present —
//!    a bare family name never preempts this scan;
//! 4. otherwise [`ProviderError::NoProviderConfigured`].

use std::collections::HashMap;

use crate::clients::{AnthropicClient, GoogleClient, ModelClient, OpenAiClient, XaiClient};
use crate::detect::{detect_vendor_prefix, strip_vendor_prefix};
use crate::error::ProviderError;
use crate::provider::Provider;
use crate::settings::Settings;

type ClientFactory = Box<dyn Fn(ClientConfig) -> Box<dyn ModelClient> + Send + Sync>;

/// The two parameters forwarded to every vendor constructor.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub model: String,
    pub temperature: f64,
}

/// Outcome of a resolution: the constructed client plus a fresh settings
/// snapshot reporting the provider and model actually in use.
#[derive(Debug)]
pub struct ModelResolution {
    pub client: Box<dyn ModelClient>,
    pub settings: Settings,
}

/// Model client factory and registry
pub struct ModelFactory {
    clients: HashMap<Provider, ClientFactory>,
}

macro_rules! register_clients {
    ($factory:expr, $( $provider:expr => $client:ty ),+ $(,)?) => {
        $(
            $factory.register_client($provider, |config: ClientConfig| {
                Box::new(<$client>::new(config.model, config.temperature)) as Box<dyn ModelClient>
            });
        )+
    };
}

impl ModelFactory {
    pub fn new() -> Self {
        let mut factory = Self {
            clients: HashMap::new(),
        };

        register_clients!(
            factory,
            Provider::Xai => XaiClient,
            Provider::OpenAi => OpenAiClient,
            Provider::Anthropic => AnthropicClient,
            Provider::Google => GoogleClient,
        );

        factory
    }

    /// Register (or replace) the constructor for a provider.
    pub fn register_client<F>(&mut self, provider: Provider, build: F)
    where
        F: Fn(ClientConfig) -> Box<dyn ModelClient> + Send + Sync + 'static,
    {
        self.clients.insert(provider, Box::new(build));
    }

    /// Construct a client for an already-selected provider.
    pub fn create_client(
        &self,
        provider: Provider,
        config: ClientConfig,
    ) -> Result<Box<dyn ModelClient>, ProviderError> {
        let build = self
            .clients
            .get(&provider)
            .ok_or_else(|| ProviderError::InvalidProvider(provider.to_string()))?;
        Ok(build(config))
    }

    /// Providers with a registered constructor, in precedence order.
    pub fn list_providers(&self) -> Vec<Provider> {
        Provider::PRIORITY
            .iter()
            .copied()
            .filter(|provider| self.clients.contains_key(provider))
            .collect()
    }

    /// Pick exactly one provider for the snapshot. Deterministic: the same
    /// snapshot always selects the same provider.
    pub fn select_provider(&self, settings: &Settings) -> Result<Provider, ProviderError> {
        if let Some(provider) = settings.model_provider {
            return Ok(provider);
        }

        if let Some(name) = settings.model_name.as_deref()
            && let Some(provider) = detect_vendor_prefix(name)
        {
            return Ok(provider);
        }

        Provider::PRIORITY
            .iter()
            .copied()
            .find(|provider| settings.credentials.api_key(*provider).is_some())
            .ok_or(ProviderError::NoProviderConfigured)
    }

    /// Resolve the model name for a chosen provider: per-provider override,
    /// then the generic model name (vendor prefix stripped), then the
    /// provider default.
    pub fn resolve_model_name(&self, provider: Provider, settings: &Settings) -> String {
        if let Some(model) = settings.credentials.model_override(provider) {
            return model.to_string();
        }

        if let Some(name) = settings.model_name.as_deref() {
            let stripped = strip_vendor_prefix(name);
            if !stripped.is_empty() {
                return stripped.to_string();
            }
        }

        provider.default_model().to_string()
    }

    /// Resolve the snapshot into a vendor client.
    pub fn create_model(&self, settings: &Settings) -> Result<ModelResolution, ProviderError> {
        let provider = self.select_provider(settings)?;
        let model = self.resolve_model_name(provider, settings);

        tracing::debug!(
            provider = %provider,
            model = %model,
            temperature = settings.temperature,
            "resolved model provider"
        );

        let client = self.create_client(
            provider,
            ClientConfig {
                model: model.clone(),
                temperature: settings.temperature,
            },
        )?;

        let mut resolved = settings.clone();
        resolved.model_provider = Some(provider);
        resolved.model_name = Some(model);

        Ok(ModelResolution {
            client,
            settings: resolved,
        })
    }
}

impl Default for ModelFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve a snapshot with the built-in client constructors.
pub fn create_model(settings: &Settings) -> Result<ModelResolution, ProviderError> {
    ModelFactory::new().create_model(settings)
}
