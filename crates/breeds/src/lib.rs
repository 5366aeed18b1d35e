//! Breed validation against an external breed registry.
//!
//! [`BreedValidator`] answers one question: is a given string a known
//! breed id or name? It keeps a periodically refreshed snapshot of the
//! registry and falls back to a built-in set when the registry is
//! unreachable, so registry downtime never surfaces to callers.

pub mod fallback;
pub mod source;
pub mod validator;

pub use source::{BreedDirectory, BreedSource, BreedSourceError, CatApiSource, DEFAULT_BREEDS_URL};
pub use validator::BreedValidator;
