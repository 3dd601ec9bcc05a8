//! Tool configuration.
//!
//! Settings are layered with `figment`: built-in defaults, then the TOML file, then
//! `MODHASH_*` environment variables. Command-line flags are applied on top by the binary.

use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Default location of the configuration file.
pub const DEFAULT_CONFIG_FILE: &str = "config/modhash.toml";

/// Prefix for environment variable overrides, e.g. `MODHASH_SCHEMA__ENFORCE=true`.
pub const ENV_PREFIX: &str = "MODHASH_";

/// Tool configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Document schema settings.
    pub schema: SchemaSettings,
    /// Log output settings.
    pub logging: LoggingSettings,
}

/// Document schema settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaSettings {
    /// Schema to validate documents against. Validation is skipped when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// Abort when a document fails validation instead of only reporting it.
    pub enforce: bool,
}

/// Log output settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `tracing_subscriber::EnvFilter` directives; `RUST_LOG` takes precedence.
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            json: false,
        }
    }
}

impl Settings {
    /// Loads configuration from defaults, a TOML file and environment variables.
    ///
    /// Configuration priority: environment variables > TOML file > defaults. A missing file
    /// is not an error.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let file = file.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));

        let settings: Self = Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file(file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(|e| Error::Config(e.to_string()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Checks values that deserialize fine but cannot be used.
    ///
    /// `schema.enforce` without `schema.path` is accepted here; the schema may still come
    /// from the command line or the working directory.
    pub fn validate(&self) -> Result<()> {
        if self.logging.filter.trim().is_empty() {
            return Err(Error::Config("logging.filter must not be empty".to_string()));
        }

        if let Some(path) = &self.schema.path {
            if path.as_os_str().is_empty() {
                return Err(Error::Config("schema.path must not be empty".to_string()));
            }
        }

        Ok(())
    }
}
