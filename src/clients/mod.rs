//! Vendor client handles.
//!
//! Each provider gets a small configured handle constructed with exactly
//! `(model, temperature)`. The factory treats these as opaque beyond the
//! [`ModelClient`] surface; wire protocols live in the vendor SDKs, not
//! here.

use std::fmt;

use crate::provider::Provider;

pub trait ModelClient: fmt::Debug + Send + Sync {
    fn provider(&self) -> Provider;
    fn model(&self) -> &str;
    fn temperature(&self) -> f64;
    fn api_base(&self) -> &str;
}

mod anthropic;
mod google;
mod openai;
mod xai;

pub use anthropic::AnthropicClient;
pub use google::GoogleClient;
pub use openai::OpenAiClient;
pub use xai::XaiClient;
