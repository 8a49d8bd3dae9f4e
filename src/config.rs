use std::time::Duration;

use serde::Deserialize;

/// Runtime settings for the server.
///
/// Defaults mirror the original fixed constants: port 61284, a 1024-byte
/// read buffer, a 5 second idle timeout and an accept backlog of one
/// connection. A YAML file named by the `REFLECTOR_CONFIG` environment
/// variable can override any subset of them.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub listen_addr: String,
    pub read_timeout_secs: u64,
    pub read_buffer_size: usize,
    pub backlog: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:61284".to_string(),
            read_timeout_secs: 5,
            read_buffer_size: 1024,
            backlog: 1,
        }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        match std::env::var("REFLECTOR_CONFIG") {
            Ok(path) => {
                let raw = std::fs::read_to_string(&path)?;
                Ok(serde_yaml::from_str(&raw)?)
            }
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout_secs)
    }
}
