use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EzConsoleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input stream closed before a value was entered")]
    InputClosed,

    #[error("Prompt cancelled")]
    Cancelled,

    #[error("No valid value entered after {0} attempts")]
    TooManyAttempts(u32),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unknown color: {0}")]
    UnknownColor(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("Failed to register signal handler: {0}")]
    SignalHandler(String),
}

pub type Result<T> = std::result::Result<T, EzConsoleError>;
