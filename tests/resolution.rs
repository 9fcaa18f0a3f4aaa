//! End-to-end resolution tests driven by the process environment.

use modelroute::constants::env_vars;
use modelroute::{ModelClient as _, Provider, ProviderError, Settings, create_model, detect_provider};
use serial_test::serial;
use std::env;

const ALL_VARS: &[&str] = &[
    env_vars::XAI_API_KEY,
    env_vars::OPENAI_API_KEY,
    env_vars::ANTHROPIC_API_KEY,
    env_vars::GOOGLE_API_KEY,
    env_vars::GEMINI_API_KEY,
    env_vars::XAI_MODEL,
    env_vars::OPENAI_MODEL,
    env_vars::ANTHROPIC_MODEL,
    env_vars::GOOGLE_MODEL,
    env_vars::MODEL_PROVIDER,
    env_vars::MODEL_NAME,
    env_vars::MODEL_TEMPERATURE,
];

fn clear_env() {
    for name in ALL_VARS {
        unsafe {
            env::remove_var(name);
        }
    }
}

#[test]
#[serial]
fn grok_models_detect_as_xai() {
    assert_eq!(
        detect_provider("grok-4-1-fast-reasoning").unwrap(),
        Provider::Xai
    );
    assert_eq!(detect_provider("GROK-CODE-FAST-1").unwrap(), Provider::Xai);
    assert_eq!(
        detect_provider("xai:grok-4-1-fast-non-reasoning").unwrap(),
        Provider::Xai
    );
}

#[test]
#[serial]
fn xai_key_wins_and_model_override_is_honored() {
    clear_env();
    unsafe {
        env::set_var(env_vars::XAI_API_KEY, "test-key");
        env::set_var(env_vars::XAI_MODEL, "grok-code-fast-1");
    }

    let settings = Settings::from_env().expect("settings should load");
    let resolution = create_model(&settings).expect("resolution should succeed");

    assert_eq!(resolution.client.provider(), Provider::Xai);
    assert_eq!(resolution.client.model(), "grok-code-fast-1");
    assert_eq!(resolution.client.temperature(), 0.0);
    assert_eq!(resolution.settings.model_provider, Some(Provider::Xai));
    assert_eq!(
        resolution.settings.model_name.as_deref(),
        Some("grok-code-fast-1")
    );

    clear_env();
}

#[test]
#[serial]
fn xai_takes_precedence_over_openai() {
    clear_env();
    unsafe {
        env::set_var(env_vars::XAI_API_KEY, "xai-key");
        env::set_var(env_vars::OPENAI_API_KEY, "openai-key");
    }

    let settings = Settings::from_env().expect("settings should load");
    let resolution = create_model(&settings).expect("resolution should succeed");
    assert_eq!(resolution.client.provider(), Provider::Xai);

    clear_env();
}

#[test]
#[serial]
fn no_recognized_key_is_a_hard_stop() {
    clear_env();

    let settings = Settings::from_env().expect("settings should load");
    let err = create_model(&settings).unwrap_err();
    assert_eq!(err, ProviderError::NoProviderConfigured);
}

#[test]
#[serial]
fn explicit_model_provider_env_overrides_the_key_scan() {
    clear_env();
    unsafe {
        env::set_var(env_vars::XAI_API_KEY, "xai-key");
        env::set_var(env_vars::MODEL_PROVIDER, "anthropic");
    }

    let settings = Settings::from_env().expect("settings should load");
    let resolution = create_model(&settings).expect("resolution should succeed");
    assert_eq!(resolution.client.provider(), Provider::Anthropic);
    assert_eq!(
        resolution.client.model(),
        Provider::Anthropic.default_model()
    );

    clear_env();
}

#[test]
#[serial]
fn reload_is_rederivation_of_the_snapshot() {
    clear_env();
    unsafe {
        env::set_var(env_vars::OPENAI_API_KEY, "openai-key");
    }
    let first = Settings::from_env().expect("settings should load");
    assert_eq!(
        create_model(&first).unwrap().client.provider(),
        Provider::OpenAi
    );

    // Environment changes take effect only through a fresh snapshot.
    unsafe {
        env::set_var(env_vars::XAI_API_KEY, "xai-key");
    }
    assert_eq!(
        create_model(&first).unwrap().client.provider(),
        Provider::OpenAi
    );

    let second = Settings::from_env().expect("settings should load");
    assert_eq!(
        create_model(&second).unwrap().client.provider(),
        Provider::Xai
    );

    clear_env();
}

#[test]
#[serial]
fn temperature_env_is_forwarded_to_the_client() {
    clear_env();
    unsafe {
        env::set_var(env_vars::GOOGLE_API_KEY, "google-key");
        env::set_var(env_vars::MODEL_TEMPERATURE, "0.4");
    }

    let settings = Settings::from_env().expect("settings should load");
    let resolution = create_model(&settings).expect("resolution should succeed");
    assert_eq!(resolution.client.provider(), Provider::Google);
    assert_eq!(resolution.client.temperature(), 0.4);

    clear_env();
}
