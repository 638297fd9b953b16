//! Configuration types for ulimi

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Fetch configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Directory to store downloaded pipeline bundle weights
    #[serde(default = "default_models_dir")]
    pub models_dir: PathBuf,

    /// Request timeout for weight downloads, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            models_dir: default_models_dir(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_models_dir() -> PathBuf {
    if let Ok(from_env) = std::env::var("ULIMI_MODELS_DIR") {
        let trimmed = from_env.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }

    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ulimi")
        .join("models")
}

fn default_timeout_secs() -> u64 {
    3600
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_models_dir_is_namespaced() {
        let config = FetchConfig::default();
        let rendered = config.models_dir.to_string_lossy().to_string();
        assert!(rendered.contains("ulimi") || std::env::var("ULIMI_MODELS_DIR").is_ok());
    }

    #[test]
    fn deserialize_fills_defaults() {
        let config: FetchConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.timeout_secs, 3600);
    }
}
