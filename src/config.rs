use anyhow::Result;
use figment::{providers::{Env, Format, Toml}, Figment};
use serde::Deserialize;
use std::net::SocketAddr;

use crate::estimator::DEFAULT_RATE_PER_KWH;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub tariff: TariffConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub enable_cors: bool,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            enable_cors: false,
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

/// Regional electricity tariff. The rate is deliberately configuration
/// rather than a hard-coded constant.
#[derive(Debug, Clone, Deserialize)]
pub struct TariffConfig {
    #[serde(default = "default_rate_per_kwh")]
    pub rate_per_kwh: f64,
}

impl Default for TariffConfig {
    fn default() -> Self {
        Self {
            rate_per_kwh: default_rate_per_kwh(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_rate_per_kwh() -> f64 {
    DEFAULT_RATE_PER_KWH
}

impl Config {
    pub fn load() -> Result<Self> {
        let figment = Figment::new()
            .merge(Toml::file("config/default.toml"))
            .merge(Env::prefixed("HEE__").split("__"));
        Ok(figment.extract()?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            tariff: TariffConfig::default(),
        }
    }
}
