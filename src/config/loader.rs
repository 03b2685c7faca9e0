//! Configuration loading from the environment and disk.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::schema::{BackendConfig, LoggingConfig};
use crate::config::validation::{validate_backend_config, ValidationError};

/// Project the entries are written to.
pub const PROJECT_ENV: &str = "GCP_PROJECT";
/// Name of the running function.
pub const FUNCTION_NAME_ENV: &str = "FUNCTION_NAME";
/// Region of the running function.
pub const FUNCTION_REGION_ENV: &str = "FUNCTION_REGION";
/// Optional path to a TOML file with [`BackendConfig`] overrides.
pub const CONFIG_PATH_ENV: &str = "FUNCTION_LOGGING_CONFIG";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} environment variable unset or missing")]
    MissingEnv(&'static str),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load configuration from the process environment.
pub fn from_env() -> Result<LoggingConfig, ConfigError> {
    from_lookup(|name| std::env::var(name).ok())
}

/// Load configuration through an arbitrary variable lookup.
///
/// Empty values count as missing. Variables are checked in the order
/// project, function name, region, and the first missing one is reported.
pub fn from_lookup<F>(lookup: F) -> Result<LoggingConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let required = |name: &'static str| {
        lookup(name)
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::MissingEnv(name))
    };

    let project_id = required(PROJECT_ENV)?;
    let function_name = required(FUNCTION_NAME_ENV)?;
    let function_region = required(FUNCTION_REGION_ENV)?;

    let backend = match lookup(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
        Some(path) => load_backend_config(Path::new(&path))?,
        None => BackendConfig::default(),
    };

    Ok(LoggingConfig {
        project_id,
        function_name,
        function_region,
        backend,
    })
}

/// Load and validate backend settings from a TOML file.
pub fn load_backend_config(path: &Path) -> Result<BackendConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config: BackendConfig = toml::from_str(&content)?;

    validate_backend_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}
