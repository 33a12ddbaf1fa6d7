use crate::utils::error::{ReachError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(ReachError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ReachError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Checks `value` against a closed set of names, as used by the TOML enum fields.
pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if allowed.contains(&value) {
        return Ok(());
    }
    Err(ReachError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: format!("Valid values: {}", allowed.join(", ")),
    })
}

pub fn validate_log_level(field_name: &str, level: &str) -> Result<()> {
    validate_one_of(
        field_name,
        &level.to_ascii_lowercase(),
        &["trace", "debug", "info", "warn", "error"],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("input.path", "grid.txt").is_ok());
        assert!(validate_path("input.path", "").is_err());
        assert!(validate_path("input.path", "   ").is_err());
        assert!(validate_path("input.path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("output.format", "json", &["text", "json"]).is_ok());
        let err = validate_one_of("output.format", "xml", &["text", "json"]).unwrap_err();
        assert!(err.to_string().contains("output.format"));
        assert!(err.to_string().contains("text, json"));
    }

    #[test]
    fn test_validate_log_level() {
        assert!(validate_log_level("monitoring.log_level", "DEBUG").is_ok());
        assert!(validate_log_level("monitoring.log_level", "loud").is_err());
    }
}
