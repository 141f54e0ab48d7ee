use std::time::Duration;

use anyhow::Result;
use clap_serde_derive::ClapSerde;
use serde::de::DeserializeOwned;

use crate::relay::client::Timeouts;

/// Configuration of the LLM processing service.
#[derive(ClapSerde, Debug)]
pub struct LlmServiceConfig {
    /// The address the listener binds to
    #[default("0.0.0.0".to_string())]
    #[arg(short, long, env)]
    pub address: String,

    /// The port the listener binds to
    #[default(8000)]
    #[arg(short, long, env)]
    pub port: u16,
}

/// Configuration of the test service.
#[derive(ClapSerde, Debug)]
pub struct TestServiceConfig {
    /// The address the listener binds to
    #[default("0.0.0.0".to_string())]
    #[arg(short, long, env)]
    pub address: String,

    /// The port the listener binds to
    #[default(8001)]
    #[arg(short, long, env)]
    pub port: u16,

    /// Base URL of the LLM processing service
    #[default("http://llm-service:8000".to_string())]
    #[arg(short = 'u', long, env)]
    pub llm_service_url: String,

    /// Timeout in seconds for health and discovery calls to the LLM service
    #[default(5)]
    #[arg(long, env)]
    pub health_timeout_secs: u64,

    /// Timeout in seconds for processing calls to the LLM service
    #[default(30)]
    #[arg(long, env)]
    pub process_timeout_secs: u64,
}

impl TestServiceConfig {
    pub fn timeouts(&self) -> Timeouts {
        Timeouts {
            metadata: Duration::from_secs(self.health_timeout_secs),
            process: Duration::from_secs(self.process_timeout_secs),
        }
    }
}

/// Reads a TOML configuration file, usually into a `<Config as ClapSerde>::Opt`.
pub fn from_toml<T: DeserializeOwned>(path: &str) -> Result<T> {
    let str = std::fs::read_to_string(path)?;
    let config = toml::from_str(&str)?;
    Ok(config)
}
