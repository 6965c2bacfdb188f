use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use screener_ai::GeminiConfig;
use screener_engine::EngineOptions;

pub const DEFAULT_PORT: u16 = 4001;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },

    #[error("no data directory: set SCREENER_DATA_DIR")]
    NoDataDir,
}

/// Settings read once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub data_dir: PathBuf,
    /// Present when an API key is configured.
    pub ai: Option<GeminiConfig>,
    pub engine: EngineOptions,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable source. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let port = match var("PORT") {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value,
            })?,
            None => DEFAULT_PORT,
        };

        let data_dir = match var("SCREENER_DATA_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => dirs::data_dir()
                .map(|dir| dir.join("screener"))
                .ok_or(ConfigError::NoDataDir)?,
        };

        let ai = match var("GEMINI_API_KEY").or_else(|| var("OPENAI_API_KEY")) {
            Some(key) => {
                let mut gemini = GeminiConfig::new(key);
                if let Some(model) = var("GEMINI_MODEL") {
                    gemini.model = model;
                }
                if let Some(base_url) = var("GEMINI_BASE_URL") {
                    gemini.base_url = base_url;
                }
                if let Some(value) = var("SCREENER_AI_TIMEOUT_SECS") {
                    let secs: u64 = value.trim().parse().map_err(|_| ConfigError::Invalid {
                        name: "SCREENER_AI_TIMEOUT_SECS",
                        value,
                    })?;
                    gemini.timeout = Duration::from_secs(secs);
                }
                Some(gemini)
            }
            None => None,
        };

        let top_up_goals = match var("SCREENER_TOP_UP_GOALS") {
            Some(value) => parse_flag(&value).ok_or(ConfigError::Invalid {
                name: "SCREENER_TOP_UP_GOALS",
                value,
            })?,
            None => false,
        };

        Ok(Self {
            port,
            data_dir,
            ai,
            engine: EngineOptions { top_up_goals },
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
