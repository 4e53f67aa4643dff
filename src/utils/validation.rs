use crate::utils::error::{Result, TourError};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TourError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_no_duplicates(field_name: &str, values: &[String]) -> Result<()> {
    let mut seen: HashSet<&str> = HashSet::new();

    for value in values {
        if !seen.insert(value.as_str()) {
            return Err(TourError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: value.clone(),
                reason: "Duplicate entry".to_string(),
            });
        }
    }

    Ok(())
}
