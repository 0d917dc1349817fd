use crate::domain::entity::EntityId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UniversityError {
    #[error("{entity} with ID {id} not found")]
    NotFound { entity: &'static str, id: EntityId },

    #[error("{entity} ID {id} already exists")]
    DuplicateId { entity: &'static str, id: EntityId },

    #[error("Invalid data: {message}")]
    InvalidData { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("XML serialization error: {0}")]
    XmlError(#[from] quick_xml::Error),

    #[error("Encoding error: {0}")]
    EncodingError(#[from] std::str::Utf8Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    NotFound,
    DuplicateId,
    InvalidData,
    FileNotFound,
    Serialization,
    Configuration,
}

impl UniversityError {
    pub fn invalid_data(message: impl Into<String>) -> Self {
        Self::InvalidData {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotFound { .. } => ErrorCategory::NotFound,
            Self::DuplicateId { .. } => ErrorCategory::DuplicateId,
            Self::InvalidData { .. } => ErrorCategory::InvalidData,
            Self::FileNotFound { .. } => ErrorCategory::FileNotFound,
            Self::IoError(_) | Self::JsonError(_) | Self::XmlError(_) | Self::EncodingError(_) => {
                ErrorCategory::Serialization
            }
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    /// Short message suitable for printing to the console.
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::NotFound { entity, id } => format!("No {} has ID {}", entity.to_lowercase(), id),
            Self::DuplicateId { entity, id } => {
                format!("A {} with ID {} already exists", entity.to_lowercase(), id)
            }
            Self::InvalidData { message } => format!("The data is not valid: {}", message),
            Self::FileNotFound { path } => format!("Could not find the file {}", path),
            Self::IoError(e) => format!("Could not read or write a file: {}", e),
            Self::JsonError(e) => format!("The JSON data could not be processed: {}", e),
            Self::XmlError(e) => format!("The XML data could not be processed: {}", e),
            Self::EncodingError(_) => "The file is not valid UTF-8".to_string(),
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::NotFound => "List the collection to check which IDs exist",
            ErrorCategory::DuplicateId => "Choose an ID that is not used yet in this collection",
            ErrorCategory::InvalidData => "IDs must be positive integers and every field must be present",
            ErrorCategory::FileNotFound => "Check the data directory and file name, or save data first",
            ErrorCategory::Serialization => "Check that the file is well-formed and the directory is writable",
            ErrorCategory::Configuration => "Fix the configuration file or command line arguments",
        }
    }
}

pub type Result<T> = std::result::Result<T, UniversityError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_mapping() {
        let not_found = UniversityError::NotFound {
            entity: "Student",
            id: 7,
        };
        assert_eq!(not_found.category(), ErrorCategory::NotFound);
        assert_eq!(not_found.to_string(), "Student with ID 7 not found");

        let io = UniversityError::from(std::io::Error::other("disk full"));
        assert_eq!(io.category(), ErrorCategory::Serialization);

        let config = UniversityError::ConfigError {
            message: "bad".to_string(),
        };
        assert_eq!(config.category(), ErrorCategory::Configuration);
    }

    #[test]
    fn test_user_friendly_message() {
        let duplicate = UniversityError::DuplicateId {
            entity: "Course",
            id: 3,
        };
        assert_eq!(
            duplicate.user_friendly_message(),
            "A course with ID 3 already exists"
        );
        assert!(!duplicate.recovery_suggestion().is_empty());
    }
}
