use crate::db::error::DbError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigErrorKind {
    #[error("failed to read file: {0}")]
    Read(std::io::Error),

    #[error("failed to parse file: {0}")]
    Parse(toml::de::Error),
}

/// Failures while bringing the process up: configuration or the store connection.
#[derive(Debug, Error)]
pub enum InfraError {
    #[error("database unavailable: {0}")]
    Db(#[from] DbError),

    #[error("invalid configuration in {path}: {source}")]
    Config {
        path: std::path::PathBuf,
        #[source]
        source: ConfigErrorKind,
    },

    #[error("invalid environment variable {0}: {1}")]
    InvalidEnv(String, String),
}
