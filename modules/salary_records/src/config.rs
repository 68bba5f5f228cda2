//! Configuration for the salary records service
//!
//! Sources, lowest priority first: optional YAML file, `SALARY_*` environment
//! variables (`__` separates sections, e.g. `SALARY_SERVER__BIND_ADDR`), and
//! the connection variables `MONGO_URI`, `MONGO_DB`, `MONGO_COLLECTION`.

use anyhow::{bail, Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Salary records service configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    /// Document store connection, required
    pub mongo: MongoConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP listener configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Socket address to bind
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Path prefix the routes are nested under
    #[serde(default = "default_base_path")]
    pub base_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            base_path: default_base_path(),
        }
    }
}

/// MongoDB connection configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MongoConfig {
    /// Connection URI (`MONGO_URI`)
    pub uri: String,

    /// Database name (`MONGO_DB`)
    pub database: String,

    /// Collection holding salary records (`MONGO_COLLECTION`)
    pub collection: String,

    #[serde(default = "default_server_selection_timeout", with = "humantime_serde")]
    pub server_selection_timeout: Duration,

    #[serde(default = "default_connect_timeout", with = "humantime_serde")]
    pub connect_timeout: Duration,

    /// Upper bound on a single storage operation
    #[serde(default = "default_socket_timeout", with = "humantime_serde")]
    pub socket_timeout: Duration,

    #[serde(default)]
    pub tls_allow_invalid_certificates: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by `RUST_LOG`
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl Config {
    /// Build the layered provider chain
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::new();
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment
            .merge(salary_env())
            .merge(mongo_env())
    }

    /// Extract and check a configuration
    pub fn from_figment(figment: Figment) -> Result<Self> {
        let config: Config = figment
            .extract()
            .context("Invalid salary records configuration")?;

        if config.mongo.uri.trim().is_empty() {
            bail!("MONGO_URI not set");
        }
        if config.mongo.database.trim().is_empty() {
            bail!("MONGO_DB not set");
        }
        if config.mongo.collection.trim().is_empty() {
            bail!("MONGO_COLLECTION not set");
        }

        Ok(config)
    }

    /// Load configuration from an optional YAML file and the environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::from_figment(Self::figment(path))
    }
}

/// Top-level sections `SALARY_*` variables may address
const SECTIONS: [&str; 3] = ["server", "mongo", "logging"];

/// Connection variables and the keys they land on
const MONGO_ENV: [(&str, &str); 3] = [
    ("MONGO_URI", "mongo.uri"),
    ("MONGO_DB", "mongo.database"),
    ("MONGO_COLLECTION", "mongo.collection"),
];

/// `SALARY_*` variables outside the known sections belong to other tools
fn salary_env() -> Env {
    Env::prefixed("SALARY_").split("__").filter(|key| {
        let key = key.as_str().to_ascii_lowercase();
        let section = key.split('.').next().unwrap_or_default();
        SECTIONS.contains(&section)
    })
}

/// Connection variables are taken verbatim; `MONGO_DB=2024` names a database
fn mongo_env() -> Figment {
    MONGO_ENV
        .iter()
        .filter_map(|(var, key)| std::env::var(var).ok().map(|value| (*key, value)))
        .fold(Figment::new(), |figment, (key, value)| {
            figment.merge(Serialized::default(key, value))
        })
}

fn default_bind_addr() -> String {
    "0.0.0.0:8000".to_string()
}

fn default_base_path() -> String {
    "/".to_string()
}

fn default_server_selection_timeout() -> Duration {
    Duration::from_secs(5)
}

fn default_connect_timeout() -> Duration {
    Duration::from_secs(10)
}

fn default_socket_timeout() -> Duration {
    Duration::from_secs(10)
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults_from_yaml() {
        let figment = Figment::new().merge(Yaml::string(
            r#"
mongo:
  uri: "mongodb://localhost:27017"
  database: "hr"
  collection: "salaries"
"#,
        ));

        let config = Config::from_figment(figment).unwrap();
        assert_eq!(config.server.bind_addr, "0.0.0.0:8000");
        assert_eq!(config.server.base_path, "/");
        assert_eq!(config.mongo.server_selection_timeout, Duration::from_secs(5));
        assert_eq!(config.mongo.connect_timeout, Duration::from_secs(10));
        assert_eq!(config.mongo.socket_timeout, Duration::from_secs(10));
        assert!(!config.mongo.tls_allow_invalid_certificates);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_humantime_durations() {
        let figment = Figment::new().merge(Yaml::string(
            r#"
mongo:
  uri: "mongodb://localhost:27017"
  database: "hr"
  collection: "salaries"
  connect_timeout: "750ms"
"#,
        ));

        let config = Config::from_figment(figment).unwrap();
        assert_eq!(config.mongo.connect_timeout, Duration::from_millis(750));
    }

    #[test]
    fn test_missing_uri_refuses_to_load() {
        let figment = Figment::new().merge(Yaml::string(
            r#"
mongo:
  database: "hr"
  collection: "salaries"
"#,
        ));
        assert!(Config::from_figment(figment).is_err());
    }

    #[test]
    fn test_blank_uri_refuses_to_load() {
        let figment = Figment::new().merge(Yaml::string(
            r#"
mongo:
  uri: "  "
  database: "hr"
  collection: "salaries"
"#,
        ));
        let err = Config::from_figment(figment).unwrap_err();
        assert!(err.to_string().contains("MONGO_URI"));
    }

    #[test]
    fn test_environment_overrides() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "salary.yaml",
                r#"
server:
  bind_addr: "127.0.0.1:9000"
mongo:
  uri: "mongodb://file:27017"
  database: "file_db"
  collection: "file_collection"
"#,
            )?;
            jail.set_env("MONGO_URI", "mongodb://env:27017");
            jail.set_env("MONGO_DB", "env_db");
            jail.set_env("MONGO_COLLECTION", "env_collection");
            jail.set_env("SALARY_LOGGING__LEVEL", "debug");

            let config = Config::load(Some(Path::new("salary.yaml"))).map_err(|e| e.to_string())?;
            assert_eq!(config.server.bind_addr, "127.0.0.1:9000");
            assert_eq!(config.mongo.uri, "mongodb://env:27017");
            assert_eq!(config.mongo.database, "env_db");
            assert_eq!(config.mongo.collection, "env_collection");
            assert_eq!(config.logging.level, "debug");
            Ok(())
        });
    }

    #[test]
    fn test_numeric_names_are_strings() {
        Jail::expect_with(|jail| {
            jail.set_env("MONGO_URI", "mongodb://env:27017");
            jail.set_env("MONGO_DB", "2024");
            jail.set_env("MONGO_COLLECTION", "007");

            let config = Config::load(None).map_err(|e| e.to_string())?;
            assert_eq!(config.mongo.database, "2024");
            assert_eq!(config.mongo.collection, "007");
            Ok(())
        });
    }

    #[test]
    fn test_unrelated_salary_variables_are_ignored() {
        Jail::expect_with(|jail| {
            jail.set_env("MONGO_URI", "mongodb://env:27017");
            jail.set_env("MONGO_DB", "hr");
            jail.set_env("MONGO_COLLECTION", "salaries");
            jail.set_env("SALARY_API_URL", "http://x");
            jail.set_env("SALARY_SERVER__BASE_PATH", "/api");

            let config = Config::load(None).map_err(|e| e.to_string())?;
            assert_eq!(config.server.base_path, "/api");
            Ok(())
        });
    }

    #[test]
    fn test_unknown_key_inside_a_section_is_rejected() {
        Jail::expect_with(|jail| {
            jail.set_env("MONGO_URI", "mongodb://env:27017");
            jail.set_env("MONGO_DB", "hr");
            jail.set_env("MONGO_COLLECTION", "salaries");
            jail.set_env("SALARY_SERVER__BIND_ADRR", "127.0.0.1:1");

            assert!(Config::load(None).is_err());
            Ok(())
        });
    }
}
