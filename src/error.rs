use foodscan_common::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FoodScanError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error(transparent)]
    Common(#[from] foodscan_common::Error),

    #[error("Prompt failed: {0}")]
    Prompt(String),
}

impl From<ValidationError> for FoodScanError {
    fn from(e: ValidationError) -> Self {
        FoodScanError::Common(e.into())
    }
}

impl From<dialoguer::Error> for FoodScanError {
    fn from(e: dialoguer::Error) -> Self {
        FoodScanError::Prompt(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FoodScanError>;
