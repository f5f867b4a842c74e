//! Application settings and configuration management

use crate::error::{AppError, Result};
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub server: ServerConfig,
    #[serde(default)]
    pub static_files: StaticConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

/// Static file serving configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StaticConfig {
    #[serde(default = "default_static_dir")]
    pub dir: String,
}

fn default_static_dir() -> String {
    "public".to_string()
}

impl Default for StaticConfig {
    fn default() -> Self {
        Self {
            dir: default_static_dir(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "compact".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Settings {
    /// Load settings from the default configuration file and environment
    /// variables.
    pub fn load() -> Result<Self> {
        Self::load_from_path("config/datavision.toml")
    }

    /// Load settings from a specific configuration file path.
    ///
    /// Precedence, lowest to highest: built-in defaults, the TOML file (if it
    /// exists), `DATAVISION__`-prefixed environment variables, and finally a
    /// bare `PORT` variable for the listen port.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let mut builder = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("static_files.dir", "public")?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "compact")?;

        if path.exists() {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml));
        }

        builder = builder.add_source(
            Environment::with_prefix("DATAVISION")
                .separator("__")
                .try_parsing(true),
        );

        let port_override = match std::env::var("PORT") {
            Ok(raw) => {
                let port: u16 = raw.parse().map_err(|_| {
                    AppError::Config(ConfigError::Message(format!("invalid PORT value: {raw}")))
                })?;
                Some(i64::from(port))
            }
            Err(_) => None,
        };
        builder = builder.set_override_option("server.port", port_override)?;

        let config = builder.build()?;
        let settings: Settings = config.try_deserialize()?;
        Ok(settings)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(AppError::Config(ConfigError::Message(
                "Server port cannot be 0".to_string(),
            )));
        }

        if self.static_files.dir.is_empty() {
            return Err(AppError::Config(ConfigError::Message(
                "Static file directory cannot be empty".to_string(),
            )));
        }

        Ok(())
    }

    /// The socket address to bind, as `host:port`.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: default_host(),
                port: default_port(),
            },
            static_files: StaticConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 3000);
        assert_eq!(settings.static_files.dir, "public");
        assert_eq!(settings.logging.level, "info");
    }

    #[test]
    fn test_addr_format() {
        let settings = Settings::default();
        assert_eq!(settings.addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_validation_rejects_port_zero() {
        let mut settings = Settings::default();
        settings.server.port = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_empty_static_dir() {
        let mut settings = Settings::default();
        settings.static_files.dir = String::new();
        assert!(settings.validate().is_err());
    }
}
