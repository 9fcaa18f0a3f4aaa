use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{env_vars, models};
use crate::error::ProviderError;

/// Supported AI model providers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// X.AI Grok models
    Xai,
    /// OpenAI GPT models
    OpenAi,
    /// Anthropic Claude models
    Anthropic,
    /// Google Gemini models
    Google,
}

impl Provider {
    /// Fixed precedence used when several API keys are configured at once.
    /// The first provider in this list with a non-empty key wins.
    pub const PRIORITY: &'static [Provider] = &[
        Provider::Xai,
        Provider::OpenAi,
        Provider::Anthropic,
        Provider::Google,
    ];

    /// Get the API key environment variable for this provider
    pub fn api_key_env(&self) -> &'static str {
        match self {
            Provider::Xai => env_vars::XAI_API_KEY,
            Provider::OpenAi => env_vars::OPENAI_API_KEY,
            Provider::Anthropic => env_vars::ANTHROPIC_API_KEY,
            Provider::Google => env_vars::GOOGLE_API_KEY,
        }
    }

    /// Get the model-name override environment variable for this provider
    pub fn model_env(&self) -> &'static str {
        match self {
            Provider::Xai => env_vars::XAI_MODEL,
            Provider::OpenAi => env_vars::OPENAI_MODEL,
            Provider::Anthropic => env_vars::ANTHROPIC_MODEL,
            Provider::Google => env_vars::GOOGLE_MODEL,
        }
    }

    /// Default model used when neither an override nor a model name is set
    pub fn default_model(&self) -> &'static str {
        match self {
            Provider::Xai => models::xai::DEFAULT_MODEL,
            Provider::OpenAi => models::openai::DEFAULT_MODEL,
            Provider::Anthropic => models::anthropic::DEFAULT_MODEL,
            Provider::Google => models::google::DEFAULT_MODEL,
        }
    }

    /// Human-friendly label for display purposes
    pub fn label(&self) -> &'static str {
        match self {
            Provider::Xai => "xAI",
            Provider::OpenAi => "OpenAI",
            Provider::Anthropic => "Anthropic",
            Provider::Google => "Google",
        }
    }

    /// Get all supported providers, in precedence order
    pub fn all_providers() -> Vec<Provider> {
        Self::PRIORITY.to_vec()
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::Xai => write!(f, "xai"),
            Provider::OpenAi => write!(f, "openai"),
            Provider::Anthropic => write!(f, "anthropic"),
            Provider::Google => write!(f, "google"),
        }
    }
}

impl FromStr for Provider {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "xai" | "x.ai" | "grok" => Ok(Provider::Xai),
            "openai" => Ok(Provider::OpenAi),
            "anthropic" => Ok(Provider::Anthropic),
            "google" | "gemini" => Ok(Provider::Google),
            _ => Err(ProviderError::InvalidProvider(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_puts_xai_first() {
        assert_eq!(Provider::PRIORITY[0], Provider::Xai);
        assert_eq!(
            Provider::PRIORITY,
            &[
                Provider::Xai,
                Provider::OpenAi,
                Provider::Anthropic,
                Provider::Google
            ]
        );
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for provider in Provider::all_providers() {
            let name = provider.to_string();
            assert_eq!(Provider::from_str(&name).unwrap(), provider);
        }
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!(Provider::from_str("XAI").unwrap(), Provider::Xai);
        assert_eq!(Provider::from_str("OpenAI").unwrap(), Provider::OpenAi);
        assert_eq!(Provider::from_str(" gemini ").unwrap(), Provider::Google);
    }

    #[test]
    fn test_from_str_rejects_unknown_provider() {
        let err = Provider::from_str("mistral").unwrap_err();
        assert_eq!(err, ProviderError::InvalidProvider("mistral".to_string()));
    }

    #[test]
    fn test_api_key_env_names() {
        assert_eq!(Provider::Xai.api_key_env(), "XAI_API_KEY");
        assert_eq!(Provider::OpenAi.api_key_env(), "OPENAI_API_KEY");
        assert_eq!(Provider::Anthropic.api_key_env(), "ANTHROPIC_API_KEY");
        assert_eq!(Provider::Google.api_key_env(), "GOOGLE_API_KEY");
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        #[derive(serde::Serialize, serde::Deserialize)]
        struct Wrap {
            provider: Provider,
        }

        let rendered = toml::to_string(&Wrap {
            provider: Provider::Xai,
        })
        .unwrap();
        assert_eq!(rendered.trim(), "provider = \"xai\"");

        let parsed: Wrap = toml::from_str("provider = \"anthropic\"").unwrap();
        assert_eq!(parsed.provider, Provider::Anthropic);
    }
}
