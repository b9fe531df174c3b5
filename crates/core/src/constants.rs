//! Constants used throughout the Nexus core crate.
//!
//! Scoring weights, confidence cut-offs and the letter defaults live here so that the matching
//! engine and the templates agree on a single set of values.

/// Default minimum similarity, as a fraction of 100.
pub const DEFAULT_MIN_SIMILARITY: f64 = 0.65;

/// Weight of country/region proximity in the overall similarity score.
pub const COUNTRY_WEIGHT: f64 = 40.0;

/// Weight of revenue scale proximity in the overall similarity score.
pub const SCALE_WEIGHT: f64 = 20.0;

/// Weight of strategic-intent relevance in the overall similarity score.
pub const INTENT_WEIGHT: f64 = 25.0;

/// Weight of the recorded outcome in the overall similarity score.
pub const OUTCOME_WEIGHT: f64 = 15.0;

/// Credit given to a dimension when either side lacks the data to compare.
pub const NEUTRAL_CREDIT: f64 = 0.5;

/// Credit for a different country in the same region.
pub const SAME_REGION_CREDIT: f64 = 0.6;

/// Similarity at or above which a precedent is rated high confidence.
pub const HIGH_CONFIDENCE_FROM: f64 = 80.0;

/// Similarity at or above which a precedent is rated medium confidence.
pub const MEDIUM_CONFIDENCE_FROM: f64 = 65.0;

/// Number of success factors quoted in a letter.
pub const LETTER_SUCCESS_FACTORS: usize = 3;

/// Default horizon for roadmap phasing when the expansion timeline cannot be read.
pub const DEFAULT_HORIZON_MONTHS: u32 = 24;

/// Years of history the precedent analysis is described as covering.
pub const ANALYSIS_SPAN_YEARS: u32 = 30;

pub const DEFAULT_ORGANIZATION_NAME: &str = "Our Organization";
pub const DEFAULT_COUNTRY: &str = "your target market";
pub const DEFAULT_STRATEGIC_INTENT: &str = "expand our market presence";
pub const DEFAULT_BUDGET_CAP: &str = "TBD";
pub const DEFAULT_COUNTERPART: &str = "Strategic partners";
pub const DEFAULT_EXPANSION_TIMELINE: &str = "18-24 months";
pub const DEFAULT_REVENUE_BAND: &str = "substantial";
pub const DEFAULT_DECISION_AUTHORITY: &str = "executive";

/// Built-in reference dataset of historical cases.
pub const BUILTIN_CASES_YAML: &str = include_str!("../data/historical_cases.yaml");
