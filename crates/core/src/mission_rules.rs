//! Mission and target creation rules.
//!
//! A mission owns an ordered set of 1-3 targets fixed at creation time;
//! target names must be unique within their mission after trimming,
//! compared case-insensitively.

use std::collections::HashSet;

use crate::error::DomainError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Minimum number of targets a mission is created with.
pub const MIN_TARGETS_PER_MISSION: usize = 1;

/// Maximum number of targets a mission is created with.
pub const MAX_TARGETS_PER_MISSION: usize = 3;

/// Maximum allowed length for a target name.
pub const MAX_TARGET_NAME_LENGTH: usize = 120;

/// Maximum allowed length for a target country.
pub const MAX_TARGET_COUNTRY_LENGTH: usize = 80;

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Comparison key for a target name: trimmed and lowercased.
pub fn normalized_key(name: &str) -> String {
    name.trim().to_lowercase()
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate the number of targets a mission is created with.
pub fn validate_target_count(count: usize) -> Result<(), DomainError> {
    if !(MIN_TARGETS_PER_MISSION..=MAX_TARGETS_PER_MISSION).contains(&count) {
        return Err(DomainError::TargetsCountOutOfRange { count });
    }
    Ok(())
}

/// Validate a target name: non-empty after trimming, within
/// [`MAX_TARGET_NAME_LENGTH`].
pub fn validate_target_name(name: &str) -> Result<(), DomainError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::Validation(
            "Target name must not be empty".to_string(),
        ));
    }
    if trimmed.len() > MAX_TARGET_NAME_LENGTH {
        return Err(DomainError::Validation(format!(
            "Target name must not exceed {MAX_TARGET_NAME_LENGTH} characters, got {}",
            trimmed.len()
        )));
    }
    Ok(())
}

/// Validate a target country: non-empty after trimming, within
/// [`MAX_TARGET_COUNTRY_LENGTH`].
pub fn validate_target_country(country: &str) -> Result<(), DomainError> {
    let trimmed = country.trim();
    if trimmed.is_empty() {
        return Err(DomainError::Validation(
            "Target country must not be empty".to_string(),
        ));
    }
    if trimmed.len() > MAX_TARGET_COUNTRY_LENGTH {
        return Err(DomainError::Validation(format!(
            "Target country must not exceed {MAX_TARGET_COUNTRY_LENGTH} characters, got {}",
            trimmed.len()
        )));
    }
    Ok(())
}

/// Ensure no two target names collide case-insensitively after trimming.
///
/// Returns the first colliding name (as given) on failure.
pub fn validate_unique_target_names<'a, I>(names: I) -> Result<(), DomainError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(normalized_key(name)) {
            return Err(DomainError::TargetNameNotUniqueInMission {
                name: name.trim().to_string(),
            });
        }
    }
    Ok(())
}
