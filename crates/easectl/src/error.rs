//! Error types for easectl CLI

use cubic_ease::EasingError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Easing(#[from] EasingError),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Easing(EasingError::DivideByZero { .. }) => 3,
            Self::Easing(_) => 2,
            Self::InvalidConfiguration(_) | Self::IoError(_) | Self::JsonError(_) => 4,
        }
    }

    /// Short machine-readable name used in JSON error output.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Easing(EasingError::ArgumentCount { .. }) => "ArgumentCountError",
            Self::Easing(EasingError::ArgumentType { .. }) => "ArgumentTypeError",
            Self::Easing(EasingError::ArgumentRange { .. }) => "ArgumentRangeError",
            Self::Easing(EasingError::DivideByZero { .. }) => "DivideByZero",
            Self::Easing(EasingError::Parse(_)) => "ParseError",
            Self::InvalidConfiguration(_) => "InvalidConfiguration",
            Self::IoError(_) => "IoError",
            Self::JsonError(_) => "JsonError",
        }
    }
}
