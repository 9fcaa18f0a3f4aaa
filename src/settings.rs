//! Configuration snapshot for provider resolution.
//!
//! A [`Settings`] value is built once from the process environment (plus an
//! optional TOML settings file) and never mutated afterwards. Reload is
//! re-derivation: build a new snapshot and pass it to the factory again.
//! Environment values always win over file values.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use std::str::FromStr;

use crate::constants::env_vars;
use crate::error::ProviderError;
use crate::provider::Provider;

pub const DEFAULT_TEMPERATURE: f64 = 0.0;

/// Per-provider API keys and model-name overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderCredentials {
    pub xai_api_key: Option<String>,
    pub openai_api_key: Option<String>,
    pub anthropic_api_key: Option<String>,
    pub google_api_key: Option<String>,
    pub xai_model: Option<String>,
    pub openai_model: Option<String>,
    pub anthropic_model: Option<String>,
    pub google_model: Option<String>,
}

impl ProviderCredentials {
    /// Read credentials and overrides from the process environment.
    /// Empty values count as unset.
    pub fn from_env() -> Self {
        Self {
            xai_api_key: non_empty_env(env_vars::XAI_API_KEY),
            openai_api_key: non_empty_env(env_vars::OPENAI_API_KEY),
            anthropic_api_key: non_empty_env(env_vars::ANTHROPIC_API_KEY),
            // GEMINI_API_KEY is accepted as a legacy alias.
            google_api_key: non_empty_env(env_vars::GOOGLE_API_KEY)
                .or_else(|| non_empty_env(env_vars::GEMINI_API_KEY)),
            xai_model: non_empty_env(env_vars::XAI_MODEL),
            openai_model: non_empty_env(env_vars::OPENAI_MODEL),
            anthropic_model: non_empty_env(env_vars::ANTHROPIC_MODEL),
            google_model: non_empty_env(env_vars::GOOGLE_MODEL),
        }
    }

    pub fn api_key(&self, provider: Provider) -> Option<&str> {
        match provider {
            Provider::Xai => self.xai_api_key.as_deref(),
            Provider::OpenAi => self.openai_api_key.as_deref(),
            Provider::Anthropic => self.anthropic_api_key.as_deref(),
            Provider::Google => self.google_api_key.as_deref(),
        }
    }

    pub fn model_override(&self, provider: Provider) -> Option<&str> {
        match provider {
            Provider::Xai => self.xai_model.as_deref(),
            Provider::OpenAi => self.openai_model.as_deref(),
            Provider::Anthropic => self.anthropic_model.as_deref(),
            Provider::Google => self.google_model.as_deref(),
        }
    }

    pub fn any_key_present(&self) -> bool {
        Provider::PRIORITY
            .iter()
            .any(|provider| self.api_key(*provider).is_some())
    }

    fn set_api_key_if_absent(&mut self, provider: Provider, key: Option<String>) {
        let slot = match provider {
            Provider::Xai => &mut self.xai_api_key,
            Provider::OpenAi => &mut self.openai_api_key,
            Provider::Anthropic => &mut self.anthropic_api_key,
            Provider::Google => &mut self.google_api_key,
        };
        if slot.is_none() {
            *slot = key.filter(|k| !k.is_empty());
        }
    }

    fn set_model_if_absent(&mut self, provider: Provider, model: Option<String>) {
        let slot = match provider {
            Provider::Xai => &mut self.xai_model,
            Provider::OpenAi => &mut self.openai_model,
            Provider::Anthropic => &mut self.anthropic_model,
            Provider::Google => &mut self.google_model,
        };
        if slot.is_none() {
            *slot = model.filter(|m| !m.is_empty());
        }
    }
}

/// Immutable configuration snapshot consumed by the factory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Explicit provider selection; beats the API-key precedence scan.
    pub model_provider: Option<Provider>,
    /// Requested model name; may carry a `vendor:` prefix.
    pub model_name: Option<String>,
    /// Sampling temperature forwarded to the vendor client.
    pub temperature: f64,
    pub credentials: ProviderCredentials,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            model_provider: None,
            model_name: None,
            temperature: DEFAULT_TEMPERATURE,
            credentials: ProviderCredentials::default(),
        }
    }
}

impl Settings {
    /// Build a snapshot from the process environment.
    ///
    /// Fails only when `MODEL_PROVIDER` is set to an unrecognized name;
    /// a malformed `MODEL_TEMPERATURE` is logged and ignored.
    pub fn from_env() -> Result<Self, ProviderError> {
        let model_provider = match non_empty_env(env_vars::MODEL_PROVIDER) {
            Some(raw) => Some(Provider::from_str(&raw)?),
            None => None,
        };

        Ok(Self {
            model_provider,
            model_name: non_empty_env(env_vars::MODEL_NAME),
            temperature: temperature_from_env(),
            credentials: ProviderCredentials::from_env(),
        })
    }

    /// Build a snapshot from the environment layered over a TOML settings
    /// file. Environment values win for every overlapping field.
    pub fn from_env_and_file(path: &Path) -> Result<Self> {
        let mut settings = Self::from_env().map_err(anyhow::Error::from)?;

        if !path.exists() {
            return Ok(settings);
        }

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read settings file {}", path.display()))?;
        let file: SettingsFile = toml::from_str(&raw)
            .with_context(|| format!("failed to parse settings file {}", path.display()))?;

        settings.overlay_file(file);
        Ok(settings)
    }

    fn overlay_file(&mut self, file: SettingsFile) {
        if self.model_provider.is_none() {
            self.model_provider = file.provider;
        }
        if self.model_name.is_none() {
            self.model_name = file.model.filter(|m| !m.is_empty());
        }
        if non_empty_env(env_vars::MODEL_TEMPERATURE).is_none()
            && let Some(temperature) = file.temperature
        {
            self.temperature = temperature;
        }

        let entries = [
            (Provider::Xai, file.providers.xai),
            (Provider::OpenAi, file.providers.openai),
            (Provider::Anthropic, file.providers.anthropic),
            (Provider::Google, file.providers.google),
        ];
        for (provider, entry) in entries {
            let Some(entry) = entry else { continue };
            self.credentials.set_api_key_if_absent(provider, entry.api_key);
            self.credentials.set_model_if_absent(provider, entry.model);
        }
    }
}

/// On-disk settings schema.
#[derive(Debug, Default, Deserialize)]
pub struct SettingsFile {
    pub provider: Option<Provider>,
    pub model: Option<String>,
    pub temperature: Option<f64>,
    #[serde(default)]
    pub providers: ProviderTable,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProviderTable {
    pub xai: Option<ProviderEntry>,
    pub openai: Option<ProviderEntry>,
    pub anthropic: Option<ProviderEntry>,
    pub google: Option<ProviderEntry>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProviderEntry {
    pub api_key: Option<String>,
    pub model: Option<String>,
}

/// Load environment variables from a `.env` file.
///
/// A missing file is fine; any other failure is logged and not fatal.
pub fn load_dotenv() -> Result<()> {
    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!("loaded environment variables from {}", path.display());
            Ok(())
        }
        Err(dotenvy::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => {
            tracing::warn!("failed to load .env file: {}", e);
            Ok(())
        }
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn temperature_from_env() -> f64 {
    match non_empty_env(env_vars::MODEL_TEMPERATURE) {
        Some(raw) => match raw.trim().parse::<f64>() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!(
                    value = %raw,
                    "ignoring unparsable {}",
                    env_vars::MODEL_TEMPERATURE
                );
                DEFAULT_TEMPERATURE
            }
        },
        None => DEFAULT_TEMPERATURE,
    }
}
