use crate::domain::entity::EntityId;
use crate::utils::error::{Result, UniversityError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_positive_id(entity: &str, id: EntityId) -> Result<()> {
    if id <= 0 {
        return Err(UniversityError::InvalidData {
            message: format!("{} ID must be a positive integer, got {}", entity, id),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(UniversityError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(UniversityError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_file_extension(field_name: &str, file: &str, expected: &str) -> Result<()> {
    validate_path(field_name, file)?;

    match std::path::Path::new(file)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some(extension) if extension.eq_ignore_ascii_case(expected) => Ok(()),
        Some(extension) => Err(UniversityError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: format!("Unsupported file extension: {}. Expected: {}", extension, expected),
        }),
        None => Err(UniversityError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        }),
    }
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(UniversityError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Allowed values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_positive_id() {
        assert!(validate_positive_id("Student", 1).is_ok());
        assert!(validate_positive_id("Student", 0).is_err());
        assert!(validate_positive_id("Student", -7).is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("data_dir", "./data").is_ok());
        assert!(validate_path("data_dir", "").is_err());
        assert!(validate_path("data_dir", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension("json_file", "university.json", "json").is_ok());
        assert!(validate_file_extension("xml_file", "UNIVERSITY.XML", "xml").is_ok());
        assert!(validate_file_extension("xml_file", "university.txt", "xml").is_err());
        assert!(validate_file_extension("json_file", "university", "json").is_err());
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("format", "json", &["compact", "json"]).is_ok());
        assert!(validate_one_of("format", "pretty", &["compact", "json"]).is_err());
    }
}
