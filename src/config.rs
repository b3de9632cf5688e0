use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::domains::DomainMatch;
use crate::core::aggregator::DEFAULT_MAX_RESULTS_PER_QUERY;
use crate::services::duckduckgo::DEFAULT_ENDPOINT;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub filter: FilterSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8000 }

#[derive(Debug, Clone, Deserialize)]
pub struct SearchSettings {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_max_results_per_query")]
    pub max_results_per_query: usize,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// DuckDuckGo region code, e.g. `in-en`
    pub region: Option<String>,
    #[serde(default)]
    pub safe_search: bool,
    pub user_agent: Option<String>,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            max_results_per_query: default_max_results_per_query(),
            timeout_secs: default_timeout_secs(),
            region: None,
            safe_search: false,
            user_agent: None,
        }
    }
}

fn default_endpoint() -> String { DEFAULT_ENDPOINT.to_string() }
fn default_max_results_per_query() -> usize { DEFAULT_MAX_RESULTS_PER_QUERY }
fn default_timeout_secs() -> u64 { 15 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterSettings {
    #[serde(default)]
    pub domain_match: DomainMatch,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with SCHEMES)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., SCHEMES__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("SCHEMES")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
