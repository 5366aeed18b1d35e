//! Cached breed validator.
//!
//! Holds one snapshot of the registry (fetch instant plus id/name sets)
//! behind an async mutex. The snapshot is refreshed lazily on the first
//! validation call after the refresh interval elapses; the mutex is held
//! across the refresh, so concurrent callers wait for a single fetch
//! rather than racing (and never observe a half-written snapshot).

use std::time::{Duration, Instant};

use tokio::sync::Mutex;

use crate::fallback::fallback_directory;
use crate::source::{BreedDirectory, BreedSource};

/// How long a snapshot (including a fallback snapshot) stays fresh.
const REFRESH_INTERVAL: Duration = Duration::from_secs(60 * 60);

/// One cached view of the registry.
struct Snapshot {
    fetched_at: Instant,
    directory: BreedDirectory,
}

/// Validates breed strings against the cached registry snapshot.
///
/// Construct once at process start and share by reference; the cache is
/// internal to the instance, not process-global.
pub struct BreedValidator {
    source: Box<dyn BreedSource>,
    refresh_interval: Duration,
    cache: Mutex<Option<Snapshot>>,
}

impl BreedValidator {
    /// Create a validator over the given registry source with the
    /// standard one-hour refresh interval.
    pub fn new(source: Box<dyn BreedSource>) -> Self {
        Self::with_refresh_interval(source, REFRESH_INTERVAL)
    }

    /// Create a validator with a custom refresh interval.
    pub fn with_refresh_interval(source: Box<dyn BreedSource>, refresh_interval: Duration) -> Self {
        Self {
            source,
            refresh_interval,
            cache: Mutex::new(None),
        }
    }

    /// Whether the given breed text matches a known breed id or name.
    ///
    /// Input is trimmed and lowercased; empty or whitespace-only input is
    /// invalid without consulting the cache. A fetch failure is absorbed
    /// by caching the built-in fallback set for the full refresh
    /// interval, so failures do not re-trigger the fetch on every call.
    pub async fn is_valid(&self, breed: &str) -> bool {
        let key = breed.trim().to_lowercase();
        if key.is_empty() {
            return false;
        }

        let mut cache = self.cache.lock().await;
        let stale = cache
            .as_ref()
            .map_or(true, |snapshot| {
                snapshot.fetched_at.elapsed() >= self.refresh_interval
            });
        if stale {
            let directory = match self.source.fetch().await {
                Ok(directory) => {
                    tracing::info!(
                        ids = directory.ids.len(),
                        names = directory.names.len(),
                        "Refreshed breed registry snapshot"
                    );
                    directory
                }
                Err(error) => {
                    tracing::warn!(%error, "Breed registry fetch failed, using fallback set");
                    fallback_directory()
                }
            };
            *cache = Some(Snapshot {
                fetched_at: Instant::now(),
                directory,
            });
        }

        cache
            .as_ref()
            .map(|snapshot| snapshot.directory.contains(&key))
            .unwrap_or(false)
    }
}
