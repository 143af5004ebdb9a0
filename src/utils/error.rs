use thiserror::Error;

#[derive(Error, Debug)]
pub enum FizzBuzzError {
    #[error("Invalid input {value}: {reason}")]
    InvalidInput { value: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl FizzBuzzError {
    pub fn invalid_input(n: i64) -> Self {
        FizzBuzzError::InvalidInput {
            value: n.to_string(),
            reason: "only positive integers can be classified".to_string(),
        }
    }

    /// Short message for stderr, without the wrapped source chain.
    pub fn user_friendly_message(&self) -> String {
        match self {
            FizzBuzzError::InvalidInput { value, .. } => {
                format!("{} is not a positive integer", value)
            }
            FizzBuzzError::IoError(_) => "Failed to write output".to_string(),
            FizzBuzzError::SerializationError(_) | FizzBuzzError::CsvError(_) => {
                "Failed to encode output".to_string()
            }
            FizzBuzzError::ConfigError { message } => format!("Bad configuration: {}", message),
            FizzBuzzError::InvalidConfigValueError { field, reason, .. } => {
                format!("Bad value for {}: {}", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, FizzBuzzError>;
