use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown category code '{code}' for item {item_id}")]
    UnknownCategory { item_id: String, code: String },

    #[error("Duplicate item id: {item_id}")]
    DuplicateItem { item_id: String },
}

impl GeneratorError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            GeneratorError::IoError(e) => format!("Could not write output: {}", e),
            GeneratorError::SerializationError(e) => format!("Could not encode JSON output: {}", e),
            GeneratorError::ConfigError { message } => format!("Invalid items file: {}", message),
            GeneratorError::InvalidConfigValueError { field, value, reason } => {
                format!("Invalid {} '{}': {}", field, value, reason)
            }
            GeneratorError::UnknownCategory { item_id, code } => {
                format!("Item {} uses unknown category '{}'", item_id, code)
            }
            GeneratorError::DuplicateItem { item_id } => {
                format!("Item {} is listed more than once", item_id)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            GeneratorError::IoError(_) => "Check that the output directory exists and is writable",
            GeneratorError::SerializationError(_) => "Retry with --format sql",
            GeneratorError::ConfigError { .. } => {
                "Make sure the items file is valid TOML with at least one [[items]] entry"
            }
            GeneratorError::InvalidConfigValueError { .. } => "Fix the value in the items file",
            GeneratorError::UnknownCategory { .. } => {
                "Use one of GS, SW, LF, RB, or drop --strict to skip the Add-ons group"
            }
            GeneratorError::DuplicateItem { .. } => {
                "Remove the repeated entry, or drop --strict to generate it anyway"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_category_message() {
        let err = GeneratorError::UnknownCategory {
            item_id: "ITEM_XX_001".to_string(),
            code: "ZZ".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unknown category code 'ZZ' for item ITEM_XX_001"
        );
        assert!(err.user_friendly_message().contains("ITEM_XX_001"));
        assert!(err.recovery_suggestion().contains("--strict"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: GeneratorError = io.into();
        assert!(matches!(err, GeneratorError::IoError(_)));
    }
}
