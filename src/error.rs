use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] isochronic_core::Error),
    #[error("Failed to read config '{path}': {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
    #[error("Failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
