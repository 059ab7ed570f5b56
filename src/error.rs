use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OggError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, OggError>;
