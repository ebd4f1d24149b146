//! Central Configuration Constants
//!
//! Single source of truth for configuration defaults.
//! Every value can be overridden through the environment.

/// Default classifier artifact (ONNX)
pub const DEFAULT_MODEL_PATH: &str = "machine_failure_model.onnx";

/// Default feature schema artifact (JSON array of field names)
pub const DEFAULT_FEATURES_PATH: &str = "model_features.json";

/// Default reference dataset
pub const DEFAULT_HISTORY_PATH: &str = "predictive_maintenance.csv";

/// Default chat completion endpoint
pub const DEFAULT_CHAT_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Default chat models (primary, fallback)
pub const DEFAULT_CHAT_MODEL: &str = "llama-3.3-70b-versatile";
pub const DEFAULT_CHAT_FALLBACK_MODEL: &str = "mixtral-8x7b-32768";

/// Default per-attempt chat timeout (seconds)
pub const DEFAULT_CHAT_TIMEOUT: u64 = 10;

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================
// Helper functions to read from env with fallback
// ============================================

pub fn get_model_path() -> String {
    std::env::var("MODEL_PATH")
        .unwrap_or_else(|_| DEFAULT_MODEL_PATH.to_string())
}

pub fn get_features_path() -> String {
    std::env::var("FEATURES_PATH")
        .unwrap_or_else(|_| DEFAULT_FEATURES_PATH.to_string())
}

pub fn get_history_path() -> String {
    std::env::var("HISTORY_PATH")
        .unwrap_or_else(|_| DEFAULT_HISTORY_PATH.to_string())
}

pub fn get_chat_url() -> String {
    std::env::var("GROQ_URL")
        .unwrap_or_else(|_| DEFAULT_CHAT_URL.to_string())
}

/// API key for the chat backend; empty counts as unset
pub fn get_chat_api_key() -> Option<String> {
    std::env::var("GROQ_API_KEY")
        .ok()
        .filter(|k| !k.trim().is_empty())
}

pub fn get_chat_model() -> String {
    std::env::var("GROQ_MODEL")
        .unwrap_or_else(|_| DEFAULT_CHAT_MODEL.to_string())
}

pub fn get_chat_fallback_model() -> String {
    std::env::var("GROQ_MODEL_FALLBACK")
        .unwrap_or_else(|_| DEFAULT_CHAT_FALLBACK_MODEL.to_string())
}

pub fn get_chat_timeout() -> u64 {
    std::env::var("CHAT_TIMEOUT_SECS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_CHAT_TIMEOUT)
}
