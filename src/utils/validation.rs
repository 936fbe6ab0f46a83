use crate::utils::error::{Result, StudyCafeError};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(StudyCafeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(StudyCafeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_file_extension(field_name: &str, file: &str, allowed_extensions: &[&str]) -> Result<()> {
    match Path::new(file).extension().and_then(|ext| ext.to_str()) {
        Some(extension) if allowed_extensions.contains(&extension) => Ok(()),
        Some(extension) => Err(StudyCafeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: format!(
                "Unsupported file extension: {}. Allowed extensions: {}",
                extension,
                allowed_extensions.join(", ")
            ),
        }),
        None => Err(StudyCafeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        }),
    }
}

pub fn validate_positive_number<T: PartialOrd + std::fmt::Display>(
    field_name: &str,
    value: T,
    min_value: T,
) -> Result<()> {
    if value < min_value {
        return Err(StudyCafeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(StudyCafeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// A fraction in `[0.0, 1.0]`; NaN and infinities are rejected.
pub fn validate_rate(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(StudyCafeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite number".to_string(),
        });
    }
    validate_range(field_name, value, 0.0, 1.0)
}

pub fn validate_catalog_file(field_name: &str, file: &str) -> Result<()> {
    validate_path(field_name, file)?;
    validate_file_extension(field_name, file, &["csv"])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("pass_list", "data/pass-list.csv").is_ok());
        assert!(validate_path("pass_list", "").is_err());
        assert!(validate_path("pass_list", "   ").is_err());
        assert!(validate_path("pass_list", "data/\0.csv").is_err());
    }

    #[test]
    fn test_validate_rate() {
        assert!(validate_rate("discount_rate", 0.0).is_ok());
        assert!(validate_rate("discount_rate", 0.15).is_ok());
        assert!(validate_rate("discount_rate", 1.0).is_ok());
        assert!(validate_rate("discount_rate", 1.5).is_err());
        assert!(validate_rate("discount_rate", -0.1).is_err());
        assert!(validate_rate("discount_rate", f64::NAN).is_err());
        assert!(validate_rate("discount_rate", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("duration", 1u32, 1).is_ok());
        assert!(validate_positive_number("duration", 0u32, 1).is_err());
    }

    #[test]
    fn test_validate_catalog_file() {
        assert!(validate_catalog_file("locker_list", "data/locker.csv").is_ok());
        assert!(validate_catalog_file("locker_list", "data/locker.txt").is_err());
        assert!(validate_catalog_file("locker_list", "data/locker").is_err());
    }
}
