//! Error types for provider resolution.

use thiserror::Error;

/// Failures surfaced while resolving a provider or constructing a client.
///
/// None of these are retried or recovered internally; misconfiguration is
/// always a hard stop for the caller to correct.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// The detector could not classify a model name. The caller must supply
    /// an explicit provider.
    #[error("cannot determine provider for model '{0}'; set an explicit provider")]
    UnknownProvider(String),

    /// No recognized API key environment variable is set.
    #[error(
        "no provider API key configured; set one of XAI_API_KEY, OPENAI_API_KEY, \
         ANTHROPIC_API_KEY, or GOOGLE_API_KEY"
    )]
    NoProviderConfigured,

    /// An explicit provider name did not parse.
    #[error("invalid provider '{0}'; supported providers: xai, openai, anthropic, google")]
    InvalidProvider(String),
}
