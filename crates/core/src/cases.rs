//! Historical case studies and the read-only store that serves them.
//!
//! Cases are loaded once (from the built-in reference dataset or a YAML/JSON file) and never
//! mutated afterwards. The matching engine only sees the [`CaseStore`] trait, so tests and
//! alternative sources can inject their own fixtures.

use crate::constants::BUILTIN_CASES_YAML;
use crate::error::{NexusError, NexusResult};
use crate::parameters::ScaleTier;
use crate::regions::{region_of, Region};
use crate::validation::validate_cases;
use nexus_types::NonEmptyText;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// A historical investment case study with its recorded outcomes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalCase {
    pub id: NonEmptyText,
    pub country: NonEmptyText,
    pub year: i32,
    /// Overrides the region derived from `country`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<Region>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<ScaleTier>,
    /// Free-text sector and intent tags compared against the strategic intent.
    #[serde(default)]
    pub sectors: Vec<String>,
    pub outcomes: Outcomes,
    #[serde(default)]
    pub success_factors: Vec<String>,
    #[serde(default)]
    pub risk_factors: Vec<String>,
}

impl HistoricalCase {
    /// Minimal case with no scoring hints, mostly useful for fixtures.
    pub fn new(id: NonEmptyText, country: NonEmptyText, year: i32, outcomes: Outcomes) -> Self {
        Self {
            id,
            country,
            year,
            region: None,
            scale: None,
            sectors: Vec::new(),
            outcomes,
            success_factors: Vec::new(),
            risk_factors: Vec::new(),
        }
    }

    pub fn region(&self) -> Option<Region> {
        self.region.or_else(|| region_of(self.country.as_str()))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outcomes {
    #[serde(default)]
    pub jobs_created: Option<u64>,
    #[serde(default)]
    pub roi_achieved: Option<f64>,
    pub result: OutcomeResult,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeResult {
    Success,
    Failure,
    Mixed,
}

impl OutcomeResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failure => "failure",
            Self::Mixed => "mixed",
        }
    }
}

/// Read-only source of historical cases.
pub trait CaseStore {
    /// Returns every case in the store, in load order.
    fn historical_cases(&self) -> NexusResult<&[HistoricalCase]>;
}

impl<S: CaseStore + ?Sized> CaseStore for &S {
    fn historical_cases(&self) -> NexusResult<&[HistoricalCase]> {
        (**self).historical_cases()
    }
}

impl<S: CaseStore + ?Sized> CaseStore for Arc<S> {
    fn historical_cases(&self) -> NexusResult<&[HistoricalCase]> {
        (**self).historical_cases()
    }
}

/// On-disk layout of a case dataset.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CaseFile {
    cases: Vec<HistoricalCase>,
}

/// A validated, immutable set of cases held in memory.
#[derive(Clone, Debug, Default)]
pub struct InMemoryCaseStore {
    cases: Vec<HistoricalCase>,
}

impl InMemoryCaseStore {
    /// Builds a store after checking ids are unique and outcome figures are sane.
    pub fn new(cases: Vec<HistoricalCase>) -> NexusResult<Self> {
        validate_cases(&cases)?;
        Ok(Self { cases })
    }

    /// Parses a dataset of the form `cases: [...]`. JSON input is accepted as well.
    pub fn from_yaml_str(input: &str) -> NexusResult<Self> {
        let deserializer = serde_yaml::Deserializer::from_str(input);
        let file: CaseFile = serde_path_to_error::deserialize(deserializer).map_err(|e| {
            NexusError::CaseDataset {
                path: e.path().to_string(),
                source: e.into_inner(),
            }
        })?;
        Self::new(file.cases)
    }

    pub fn from_path(path: &Path) -> NexusResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(NexusError::FileRead)?;
        let store = Self::from_yaml_str(&contents)?;
        tracing::info!(
            "loaded {} historical cases from {}",
            store.len(),
            path.display()
        );
        Ok(store)
    }

    /// The reference dataset compiled into the crate.
    pub fn builtin() -> NexusResult<Self> {
        Self::from_yaml_str(BUILTIN_CASES_YAML)
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&HistoricalCase> {
        self.cases.iter().find(|c| c.id.as_str() == id)
    }
}

impl CaseStore for InMemoryCaseStore {
    fn historical_cases(&self) -> NexusResult<&[HistoricalCase]> {
        Ok(&self.cases)
    }
}
