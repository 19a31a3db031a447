use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("browser storage is unavailable")]
    Unavailable,
    #[error("storage access failed: {0}")]
    Access(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse celebration config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("target date {month}/{day} does not exist")]
    InvalidTarget { month: u32, day: u32 },
    #[error("tick interval must be greater than zero")]
    InvalidInterval,
}
