//! Command-line interface parsing for PokeFetch
//!
//! This module handles parsing of CLI arguments using clap. Every setting can
//! also come from a `POKEFETCH_*` environment variable.

use std::time::Duration;

use clap::Parser;
use thiserror::Error;

use crate::config::{
    ClientConfig, ConfigError, DEFAULT_API_URL, DEFAULT_CACHE_TTL_SECS, DEFAULT_TIMEOUT_SECS,
};

/// Error types for CLI argument handling
#[derive(Debug, Error)]
pub enum CliError {
    /// The arguments parsed but do not form a usable client configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}

/// PokeFetch - explore the Pokemon world from your terminal
#[derive(Parser, Debug)]
#[command(name = "pokefetch")]
#[command(about = "Interactive PokeAPI shell with response caching")]
#[command(version)]
pub struct Cli {
    /// Root URL of the PokeAPI
    #[arg(long, env = "POKEFETCH_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Per-request timeout in seconds
    #[arg(long, env = "POKEFETCH_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// How long API responses stay cached, in seconds
    #[arg(long, env = "POKEFETCH_CACHE_TTL_SECS", default_value_t = DEFAULT_CACHE_TTL_SECS)]
    pub cache_ttl_secs: u64,

    /// Log level used when RUST_LOG is not set
    ///
    /// Examples: error, warn, info, debug, trace
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// Validated client settings
    pub client: ClientConfig,
    /// Default log level for the subscriber
    pub log_level: String,
}

impl StartupConfig {
    /// Creates a StartupConfig from parsed CLI arguments.
    ///
    /// # Returns
    /// * `Ok(StartupConfig)` if the resulting client configuration is valid
    /// * `Err(CliError)` if a duration is zero or the API URL is unusable
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let client = ClientConfig::with_base_url(cli.api_url.as_str())
            .timeout(Duration::from_secs(cli.timeout_secs))
            .cache_ttl(Duration::from_secs(cli.cache_ttl_secs));
        client.validate()?;

        Ok(StartupConfig {
            client,
            log_level: cli.log_level.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_args_uses_defaults() {
        let cli = Cli::try_parse_from(["pokefetch"]).unwrap();
        assert_eq!(cli.timeout_secs, 5);
        assert_eq!(cli.cache_ttl_secs, 60);
        assert_eq!(cli.log_level, "info");
    }

    #[test]
    fn test_cli_parse_overrides() {
        let cli = Cli::try_parse_from([
            "pokefetch",
            "--api-url",
            "http://localhost:9000/api/v2",
            "--timeout-secs",
            "2",
            "--cache-ttl-secs",
            "300",
        ])
        .unwrap();
        assert_eq!(cli.api_url, "http://localhost:9000/api/v2");
        assert_eq!(cli.timeout_secs, 2);
        assert_eq!(cli.cache_ttl_secs, 300);
    }

    #[test]
    fn test_cli_rejects_non_numeric_timeout() {
        assert!(Cli::try_parse_from(["pokefetch", "--timeout-secs", "soon"]).is_err());
    }

    #[test]
    fn test_startup_config_from_overrides() {
        let cli = Cli::try_parse_from(["pokefetch", "--cache-ttl-secs", "300"]).unwrap();
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(config.client.cache_ttl, Duration::from_secs(300));
    }

    #[test]
    fn test_startup_config_rejects_zero_timeout() {
        let cli = Cli::try_parse_from(["pokefetch", "--timeout-secs", "0"]).unwrap();
        let err = StartupConfig::from_cli(&cli).unwrap_err();
        assert!(err.to_string().contains("timeout must be positive"));
    }

    #[test]
    fn test_startup_config_rejects_bad_url() {
        let cli = Cli::try_parse_from(["pokefetch", "--api-url", "pokeapi"]).unwrap();
        assert!(StartupConfig::from_cli(&cli).is_err());
    }
}
