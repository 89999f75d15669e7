use std::{net::SocketAddr, path::PathBuf};

use serde::{Deserialize, Serialize};

/// Service configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Host to bind to
    pub host: String,

    /// Port to bind to
    pub port: u16,

    /// The fitted model artifact to load at startup
    pub model_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            model_path: PathBuf::from("models/best_model.json"),
        }
    }
}

impl Config {
    /// Read a YAML config file. Missing keys fall back to the defaults.
    pub async fn load(path: &str) -> anyhow::Result<Self> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("Unable to read config file {}: {}", path, e))?;

        serde_yaml::from_str(&contents)
            .map_err(|e| anyhow!("Unable to parse config file {}: {}", path, e))
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| anyhow!("Invalid address {}:{}: {}", self.host, self.port, e))
    }
}
