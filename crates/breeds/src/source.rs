//! Breed registry source: the trait and the TheCatAPI-backed client.

use std::collections::HashSet;
use std::time::Duration;

use serde::Deserialize;

/// Default breed registry endpoint.
pub const DEFAULT_BREEDS_URL: &str = "https://api.thecatapi.com/v1/breeds";

/// Upper bound on a registry fetch; a slower response counts as a failure
/// and the fallback set is used instead.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Normalized contents of the breed registry: known ids and known names,
/// both trimmed and lowercased.
#[derive(Debug, Clone, Default)]
pub struct BreedDirectory {
    pub ids: HashSet<String>,
    pub names: HashSet<String>,
}

impl BreedDirectory {
    /// Build a directory from raw registry entries.
    ///
    /// Entries carrying neither an `id` nor a `name` are ignored; all
    /// values are trimmed and lowercased before insertion.
    pub fn from_entries(entries: Vec<BreedEntry>) -> Self {
        let mut directory = Self::default();
        for entry in entries {
            if let Some(id) = entry.id {
                directory.ids.insert(id.trim().to_lowercase());
            }
            if let Some(name) = entry.name {
                directory.names.insert(name.trim().to_lowercase());
            }
        }
        directory
    }

    /// Membership test against either the id set or the name set.
    ///
    /// `key` is expected already normalized (trimmed, lowercased).
    pub fn contains(&self, key: &str) -> bool {
        self.ids.contains(key) || self.names.contains(key)
    }
}

/// One entry of the registry response. Both fields are optional; any
/// other fields in the payload are ignored.
#[derive(Debug, Deserialize)]
pub struct BreedEntry {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Errors from a breed registry fetch.
///
/// These never propagate past the validator; they only decide whether
/// the fallback set is used.
#[derive(Debug, thiserror::Error)]
pub enum BreedSourceError {
    /// Network-level failure, timeout, non-2xx status, or malformed body.
    #[error("Registry request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// A fetchable source of the full breed registry.
#[async_trait::async_trait]
pub trait BreedSource: Send + Sync {
    async fn fetch(&self) -> Result<BreedDirectory, BreedSourceError>;
}

/// Breed registry client for TheCatAPI (`GET /v1/breeds`, no auth).
pub struct CatApiSource {
    client: reqwest::Client,
    url: String,
}

impl CatApiSource {
    /// Create a client targeting the given registry URL with the bounded
    /// fetch timeout applied.
    pub fn new(url: impl Into<String>) -> Result<Self, BreedSourceError> {
        let client = reqwest::Client::builder().timeout(FETCH_TIMEOUT).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait::async_trait]
impl BreedSource for CatApiSource {
    async fn fetch(&self) -> Result<BreedDirectory, BreedSourceError> {
        let entries: Vec<BreedEntry> = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(BreedDirectory::from_entries(entries))
    }
}
