use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_POLLS_FILE: &str = "polls.json";
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// Service settings read from the Rocket figment (`Rocket.toml`, `ROCKET_*`).
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default = "default_polls_file")]
    pub polls_file: PathBuf,
    #[serde(default = "default_cors_origin")]
    pub cors_origin: String,
}

fn default_polls_file() -> PathBuf {
    PathBuf::from(DEFAULT_POLLS_FILE)
}

fn default_cors_origin() -> String {
    DEFAULT_CORS_ORIGIN.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            polls_file: default_polls_file(),
            cors_origin: default_cors_origin(),
        }
    }
}
