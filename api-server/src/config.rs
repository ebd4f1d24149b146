//! Configuration module

use std::env;
use std::path::PathBuf;

use sentinel_core::constants;
use sentinel_core::logic::assistant::ChatConfig;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Classifier artifact (required at startup)
    pub model_path: PathBuf,

    /// Feature schema artifact (required at startup)
    pub features_path: PathBuf,

    /// Reference dataset (optional)
    pub history_path: PathBuf,

    /// Chat forwarding backend
    pub chat: ChatConfig,

    /// Environment (development, production)
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),

            model_path: constants::get_model_path().into(),
            features_path: constants::get_features_path().into(),
            history_path: constants::get_history_path().into(),

            chat: ChatConfig::default(),

            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
        }
    }
}
