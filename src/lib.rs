//! Provider auto-detection and model-client construction for CLIs that
//! wrap multiple LLM vendor SDKs (X.AI, OpenAI, Anthropic, Google).
//!
//! Two pieces collaborate:
//!
//! - [`detect::detect_provider`] classifies a model-name string against an
//!   ordered rule table (`xai:` prefixes, `grok` family names, and so on);
//! - [`factory::ModelFactory`] takes an immutable [`settings::Settings`]
//!   snapshot, selects exactly one provider with a fixed API-key
//!   precedence, and constructs the vendor client with `(model,
//!   temperature)`.
//!
//! ```no_run
//! use modelroute::{ModelClient as _, Settings, create_model};
//!
//! let settings = Settings::from_env()?;
//! let resolution = create_model(&settings)?;
//! println!(
//!     "using {} / {}",
//!     resolution.client.provider(),
//!     resolution.client.model()
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod clients;
pub mod constants;
pub mod detect;
pub mod error;
pub mod factory;
pub mod provider;
pub mod settings;

pub use clients::{AnthropicClient, GoogleClient, ModelClient, OpenAiClient, XaiClient};
pub use detect::{detect_provider, strip_vendor_prefix};
pub use error::ProviderError;
pub use factory::{ClientConfig, ModelFactory, ModelResolution, create_model};
pub use provider::Provider;
pub use settings::{ProviderCredentials, Settings, load_dotenv};
