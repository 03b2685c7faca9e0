//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! GCP_PROJECT / FUNCTION_NAME / FUNCTION_REGION
//!     → loader.rs (read once at startup)
//! FUNCTION_LOGGING_CONFIG (optional TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → LoggingConfig (immutable)
//!     → Logging::from_config
//! ```
//!
//! # Design Decisions
//! - Missing variables are a soft failure handled by the caller
//! - All backend fields have defaults to allow an empty or absent file
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{
    from_env, from_lookup, ConfigError, CONFIG_PATH_ENV, FUNCTION_NAME_ENV, FUNCTION_REGION_ENV,
    PROJECT_ENV,
};
pub use schema::{AuthConfig, BackendConfig, LoggingConfig};
pub use validation::ValidationError;
