//! Built-in breed set used when the registry cannot be fetched.

use crate::source::BreedDirectory;

/// Known breed ids served when the registry is unreachable.
const FALLBACK_IDS: [&str; 5] = ["beng", "siam", "mcoo", "sibe", "rblu"];

/// Known breed names served when the registry is unreachable.
const FALLBACK_NAMES: [&str; 5] = ["bengal", "siamese", "maine coon", "siberian", "russian blue"];

/// Build the fallback directory.
pub fn fallback_directory() -> BreedDirectory {
    BreedDirectory {
        ids: FALLBACK_IDS.iter().map(|s| s.to_string()).collect(),
        names: FALLBACK_NAMES.iter().map(|s| s.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_contains_known_entries() {
        let directory = fallback_directory();
        assert!(directory.contains("bengal"));
        assert!(directory.contains("beng"));
        assert!(!directory.contains("sphynx"));
    }
}
