use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageSizeError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Chart error: {0}")]
    Chart(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, StorageSizeError>;
