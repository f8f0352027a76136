use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub database: DatabaseSettings,
    #[serde(default)]
    pub oracle: OracleSettings,
    #[serde(default)]
    pub search: SearchSettings,
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
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    #[serde(default = "default_database_url")]
    pub url: String,
    pub max_connections: Option<u32>,
    pub min_connections: Option<u32>,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: None,
            min_connections: None,
        }
    }
}

fn default_database_url() -> String { "sqlite://fighters.db".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct OracleSettings {
    #[serde(default = "default_oracle_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_oracle_timeout")]
    pub timeout_secs: u64,
}

impl Default for OracleSettings {
    fn default() -> Self {
        Self {
            endpoint: default_oracle_endpoint(),
            timeout_secs: default_oracle_timeout(),
        }
    }
}

fn default_oracle_endpoint() -> String { "http://127.0.0.1:4000".to_string() }
fn default_oracle_timeout() -> u64 { 5 }

#[derive(Debug, Clone, Deserialize)]
pub struct SearchSettings {
    #[serde(default = "default_search_limit")]
    pub default_limit: usize,
    #[serde(default = "default_search_max_limit")]
    pub max_limit: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            default_limit: default_search_limit(),
            max_limit: default_search_max_limit(),
        }
    }
}

fn default_search_limit() -> usize { 10 }
fn default_search_max_limit() -> usize { 25 }

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
    /// 4. Environment variables (prefixed with CAGESIDE_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., CAGESIDE_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("CAGESIDE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("CAGESIDE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Apply convenience environment overrides
///
/// DATABASE_URL and ORACLE_URL are checked before their prefixed forms so
/// the service drops into container setups that export the plain names.
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Ok(database_url) = env::var("DATABASE_URL").or_else(|_| env::var("CAGESIDE_DATABASE__URL")) {
        builder = builder.set_override("database.url", database_url)?;
    }

    if let Ok(oracle_url) = env::var("ORACLE_URL").or_else(|_| env::var("CAGESIDE_ORACLE__ENDPOINT")) {
        builder = builder.set_override("oracle.endpoint", oracle_url)?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_server_settings() {
        let server = ServerSettings::default();
        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 8080);
    }

    #[test]
    fn test_default_oracle_settings() {
        let oracle = OracleSettings::default();
        assert_eq!(oracle.timeout_secs, 5);
        assert!(oracle.endpoint.starts_with("http://"));
    }

    #[test]
    fn test_default_search_limits() {
        let search = SearchSettings::default();
        assert_eq!(search.default_limit, 10);
        assert_eq!(search.max_limit, 25);
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "json");
    }
}
