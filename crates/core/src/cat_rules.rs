//! Field-level validation for agent cats.
//!
//! The breed itself is validated against the breed registry by the
//! service layer; these rules cover the plain scalar fields.

use crate::error::DomainError;

/// Maximum allowed length for a cat name.
pub const MAX_CAT_NAME_LENGTH: usize = 120;

/// Maximum allowed length for a breed string.
pub const MAX_BREED_LENGTH: usize = 80;

/// Validate a cat name: must be non-empty after trimming and within
/// [`MAX_CAT_NAME_LENGTH`].
pub fn validate_cat_name(name: &str) -> Result<(), DomainError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::Validation(
            "Cat name must not be empty".to_string(),
        ));
    }
    if trimmed.len() > MAX_CAT_NAME_LENGTH {
        return Err(DomainError::Validation(format!(
            "Cat name must not exceed {MAX_CAT_NAME_LENGTH} characters, got {}",
            trimmed.len()
        )));
    }
    Ok(())
}

/// Validate years of experience: must be zero or positive.
pub fn validate_years_of_experience(years: i32) -> Result<(), DomainError> {
    if years < 0 {
        return Err(DomainError::Validation(format!(
            "Years of experience must not be negative, got {years}"
        )));
    }
    Ok(())
}

/// Validate a salary: must be zero or positive.
pub fn validate_salary(salary: i32) -> Result<(), DomainError> {
    if salary < 0 {
        return Err(DomainError::Validation(format!(
            "Salary must not be negative, got {salary}"
        )));
    }
    Ok(())
}
