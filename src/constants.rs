//! Model, environment-variable, and endpoint constants.

pub mod models {
    pub mod xai {
        pub const DEFAULT_MODEL: &str = "grok-code-fast-1";

        pub const SUPPORTED_MODELS: &[&str] = &[
            "grok-code-fast-1",
            "grok-4",
            "grok-4-fast",
            "grok-4-1-fast-reasoning",
            "grok-4-1-fast-non-reasoning",
            "grok-3",
            "grok-3-mini",
        ];

        pub const GROK_CODE_FAST_1: &str = "grok-code-fast-1";
        pub const GROK_4: &str = "grok-4";
        pub const GROK_4_FAST: &str = "grok-4-fast";
        pub const GROK_3_MINI: &str = "grok-3-mini";
    }

    pub mod openai {
        pub const DEFAULT_MODEL: &str = "gpt-5";

        pub const SUPPORTED_MODELS: &[&str] = &[
            "gpt-5",
            "gpt-5-mini",
            "gpt-5-nano",
            "gpt-5-codex",
            "gpt-4.1",
            "o3",
            "o4-mini",
        ];

        pub const GPT_5: &str = "gpt-5";
        pub const GPT_5_MINI: &str = "gpt-5-mini";
        pub const GPT_5_CODEX: &str = "gpt-5-codex";
    }

    pub mod anthropic {
        pub const DEFAULT_MODEL: &str = "claude-sonnet-4-5";

        pub const SUPPORTED_MODELS: &[&str] = &[
            "claude-sonnet-4-5",
            "claude-opus-4-5",
            "claude-opus-4-1",
            "claude-haiku-4-5",
            "claude-3-7-sonnet-latest",
        ];

        pub const CLAUDE_SONNET_4_5: &str = "claude-sonnet-4-5";
        pub const CLAUDE_OPUS_4_5: &str = "claude-opus-4-5";
        pub const CLAUDE_HAIKU_4_5: &str = "claude-haiku-4-5";
    }

    pub mod google {
        pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

        pub const SUPPORTED_MODELS: &[&str] = &[
            "gemini-2.5-flash",
            "gemini-2.5-flash-lite",
            "gemini-2.5-pro",
            "gemini-1.5-pro",
        ];

        pub const GEMINI_2_5_FLASH: &str = "gemini-2.5-flash";
        pub const GEMINI_2_5_PRO: &str = "gemini-2.5-pro";
    }
}

pub mod env_vars {
    pub const XAI_API_KEY: &str = "XAI_API_KEY";
    pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
    pub const ANTHROPIC_API_KEY: &str = "ANTHROPIC_API_KEY";
    pub const GOOGLE_API_KEY: &str = "GOOGLE_API_KEY";
    /// Legacy alias for [`GOOGLE_API_KEY`], kept for compatibility.
    pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";

    pub const XAI_MODEL: &str = "XAI_MODEL";
    pub const OPENAI_MODEL: &str = "OPENAI_MODEL";
    pub const ANTHROPIC_MODEL: &str = "ANTHROPIC_MODEL";
    pub const GOOGLE_MODEL: &str = "GOOGLE_MODEL";

    pub const MODEL_PROVIDER: &str = "MODEL_PROVIDER";
    pub const MODEL_NAME: &str = "MODEL_NAME";
    pub const MODEL_TEMPERATURE: &str = "MODEL_TEMPERATURE";
}

pub mod urls {
    pub const XAI_API_BASE: &str = "https://api.x.ai/v1";
    pub const OPENAI_API_BASE: &str = "https://api.openai.com/v1";
    pub const ANTHROPIC_API_BASE: &str = "https://api.anthropic.com/v1";
    pub const GOOGLE_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
}
