//! Domain core for revisa: CPF normalization/validation and application
//! configuration.
//!
//! Pure logic only; no I/O, no HTTP. The query client and batch runner
//! crates build on top of this.

use thiserror::Error;

pub mod app_config;
pub mod config;
pub mod cpf;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
