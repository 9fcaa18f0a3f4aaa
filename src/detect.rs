//! Model-name to provider detection.
//!
//! Classification is a fixed, totally ordered rule table: explicit
//! `vendor:` prefixes first, then family-name heuristics in provider
//! precedence order. Matching is case-insensitive and side-effect free.

use crate::error::ProviderError;
use crate::provider::Provider;

/// How a rule pattern matches against a lowercased model name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pattern {
    /// Explicit `vendor:` prefix; always binds to the vendor regardless of
    /// the remainder of the string.
    VendorPrefix(&'static str),
    /// Name starts with the fragment.
    Prefix(&'static str),
    /// Name contains the fragment anywhere.
    Contains(&'static str),
}

/// One ordered detection rule: the first matching pattern wins.
#[derive(Clone, Copy, Debug)]
pub struct ProviderRule {
    pub pattern: Pattern,
    pub provider: Provider,
}

const fn rule(pattern: Pattern, provider: Provider) -> ProviderRule {
    ProviderRule { pattern, provider }
}

/// Detection rules in evaluation order.
pub const RULES: &[ProviderRule] = &[
    rule(Pattern::VendorPrefix("xai:"), Provider::Xai),
    rule(Pattern::VendorPrefix("openai:"), Provider::OpenAi),
    rule(Pattern::VendorPrefix("anthropic:"), Provider::Anthropic),
    rule(Pattern::VendorPrefix("google:"), Provider::Google),
    rule(Pattern::VendorPrefix("gemini:"), Provider::Google),
    rule(Pattern::Contains("grok"), Provider::Xai),
    rule(Pattern::Prefix("gpt-"), Provider::OpenAi),
    rule(Pattern::Prefix("o1"), Provider::OpenAi),
    rule(Pattern::Prefix("o3"), Provider::OpenAi),
    rule(Pattern::Prefix("o4-"), Provider::OpenAi),
    rule(Pattern::Contains("codex"), Provider::OpenAi),
    rule(Pattern::Prefix("claude"), Provider::Anthropic),
    rule(Pattern::Contains("gemini"), Provider::Google),
    rule(Pattern::Prefix("palm"), Provider::Google),
];

impl Pattern {
    fn matches(&self, lowercased: &str) -> bool {
        match self {
            Pattern::VendorPrefix(prefix) | Pattern::Prefix(prefix) => {
                lowercased.starts_with(prefix)
            }
            Pattern::Contains(fragment) => lowercased.contains(fragment),
        }
    }
}

/// Determine the provider for a model name.
///
/// Returns [`ProviderError::UnknownProvider`] when no rule matches; the
/// caller must then require an explicit provider.
pub fn detect_provider(model_name: &str) -> Result<Provider, ProviderError> {
    match_rules(model_name, RULES)
}

/// Like [`detect_provider`] but honoring only explicit `vendor:` prefixes.
///
/// Used by the factory, where a bare family name must not preempt the
/// API-key precedence scan.
pub fn detect_vendor_prefix(model_name: &str) -> Option<Provider> {
    let lowercased = model_name.trim().to_lowercase();
    RULES
        .iter()
        .find(|r| matches!(r.pattern, Pattern::VendorPrefix(_)) && r.pattern.matches(&lowercased))
        .map(|r| r.provider)
}

/// Strip a recognized `vendor:` prefix so the remainder can be forwarded
/// as the SDK-facing model name. Unprefixed names pass through unchanged.
pub fn strip_vendor_prefix(model_name: &str) -> &str {
    let trimmed = model_name.trim();
    for rule in RULES {
        if let Pattern::VendorPrefix(prefix) = rule.pattern
            && let Some(head) = trimmed.get(..prefix.len())
            && head.eq_ignore_ascii_case(prefix)
        {
            return &trimmed[prefix.len()..];
        }
    }
    trimmed
}

fn match_rules(model_name: &str, rules: &[ProviderRule]) -> Result<Provider, ProviderError> {
    let lowercased = model_name.trim().to_lowercase();
    if lowercased.is_empty() {
        return Err(ProviderError::UnknownProvider(model_name.to_string()));
    }

    rules
        .iter()
        .find(|r| r.pattern.matches(&lowercased))
        .map(|r| r.provider)
        .ok_or_else(|| ProviderError::UnknownProvider(model_name.to_string()))
}
