//! Shared helpers for service-layer integration tests.

use sca_breeds::fallback::fallback_directory;
use sca_breeds::{BreedDirectory, BreedSource, BreedSourceError, BreedValidator};
use sca_db::models::cat::CreateCat;
use sca_db::models::target::CreateTarget;

/// Breed source that serves the built-in fallback set without touching
/// the network.
pub struct StaticBreeds;

#[async_trait::async_trait]
impl BreedSource for StaticBreeds {
    async fn fetch(&self) -> Result<BreedDirectory, BreedSourceError> {
        Ok(fallback_directory())
    }
}

/// Validator over [`StaticBreeds`], so "Bengal" and friends validate.
pub fn breed_validator() -> BreedValidator {
    BreedValidator::new(Box::new(StaticBreeds))
}

pub fn new_cat(name: &str) -> CreateCat {
    CreateCat {
        name: name.to_string(),
        years_of_experience: 4,
        breed: "Bengal".to_string(),
        salary: 1000,
    }
}

pub fn new_target(name: &str, country: &str) -> CreateTarget {
    CreateTarget {
        name: name.to_string(),
        country: country.to_string(),
        notes: None,
    }
}
