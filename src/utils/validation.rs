use crate::utils::error::{EnumError, Result};

/// Largest depth whose line count (10^depth) fits in a `u64`.
pub const MAX_CONFIG_DEPTH: u32 = 19;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(EnumError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(EnumError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// A prefix is emitted verbatim at the start of every line, so it must not
/// contain anything that would split or corrupt a line.
pub fn validate_prefix(field_name: &str, prefix: &str) -> Result<()> {
    if let Some(c) = prefix.chars().find(|c| matches!(c, '\n' | '\r' | '\0')) {
        return Err(EnumError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: prefix.escape_debug().to_string(),
            reason: format!("Prefix cannot contain {:?}", c),
        });
    }
    Ok(())
}

pub fn validate_depth(field_name: &str, depth: u32) -> Result<()> {
    validate_range(field_name, depth, 0, MAX_CONFIG_DEPTH)
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(EnumError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| EnumError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(EnumError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}
