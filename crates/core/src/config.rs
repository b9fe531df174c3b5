//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into core services. Nothing
//! in the core reads environment variables while handling a request; binaries read them and hand
//! the raw values to the parsing helpers below.

use crate::cases::InMemoryCaseStore;
use crate::constants::DEFAULT_MIN_SIMILARITY;
use crate::matching::MinSimilarity;
use crate::{NexusError, NexusResult};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug, Default)]
pub struct CoreConfig {
    min_similarity: MinSimilarity,
    cases_file: Option<PathBuf>,
}

impl CoreConfig {
    pub fn new(min_similarity: MinSimilarity, cases_file: Option<PathBuf>) -> Self {
        Self {
            min_similarity,
            cases_file,
        }
    }

    pub fn min_similarity(&self) -> MinSimilarity {
        self.min_similarity
    }

    /// Dataset file; `None` means the built-in reference dataset.
    pub fn cases_file(&self) -> Option<&Path> {
        self.cases_file.as_deref()
    }

    /// Loads the configured case store.
    ///
    /// # Errors
    ///
    /// Returns an error if the dataset file cannot be read, parsed or validated.
    pub fn open_case_store(&self) -> NexusResult<InMemoryCaseStore> {
        match &self.cases_file {
            Some(path) => InMemoryCaseStore::from_path(path),
            None => {
                let store = InMemoryCaseStore::builtin()?;
                tracing::info!("using built-in dataset of {} historical cases", store.len());
                Ok(store)
            }
        }
    }
}

/// Parse the minimum similarity from an optional string value.
///
/// The value is a fraction (`0.65`). If `value` is `None` or empty/whitespace, the default is
/// returned.
pub fn min_similarity_from_env_value(value: Option<String>) -> NexusResult<MinSimilarity> {
    let Some(raw) = value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) else {
        return MinSimilarity::from_fraction(DEFAULT_MIN_SIMILARITY);
    };
    let fraction: f64 = raw.parse().map_err(|_| {
        NexusError::InvalidInput(format!(
            "NEXUS_MIN_SIMILARITY must be a fraction between 0 and 1, got `{raw}`"
        ))
    })?;
    MinSimilarity::from_fraction(fraction)
}

/// Resolve the dataset path from an optional string value.
///
/// Blank values mean "use the built-in dataset". A non-blank value must name an existing file.
pub fn cases_file_from_env_value(value: Option<String>) -> NexusResult<Option<PathBuf>> {
    let Some(raw) = value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    let path = PathBuf::from(raw);
    if !path.is_file() {
        return Err(NexusError::InvalidInput(format!(
            "NEXUS_CASES_FILE does not name a file: {}",
            path.display()
        )));
    }
    Ok(Some(path))
}
