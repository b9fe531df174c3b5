//! # Nexus Core
//!
//! Core business logic for precedent-backed outreach letters.
//!
//! This crate contains pure data operations:
//! - Loading and validating the historical case dataset
//! - Scoring and ranking precedents against report parameters
//! - Rendering formal, precedent-based and strategic letters
//! - Tracking the letter generation workflow
//!
//! **No API concerns**: HTTP servers, CLI parsing and environment handling belong in `api-rest`,
//! `api-shared`, `nexus-cli` or the `nexus-run` binary.

pub mod cases;
pub mod clock;
pub mod config;
pub mod constants;
pub mod error;
pub mod letters;
pub mod matching;
pub mod parameters;
pub mod regions;
pub mod service;
pub mod validation;
pub mod workflow;

pub use cases::{CaseStore, HistoricalCase, InMemoryCaseStore, OutcomeResult, Outcomes};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::CoreConfig;
pub use error::{NexusError, NexusResult};
pub use letters::{Letter, LetterGenerator, LetterType};
pub use matching::{
    ApplicableFactors, ConfidenceLevel, MatchResult, MinSimilarity, PrecedentMatchingEngine,
    Similarity,
};
pub use parameters::{BudgetCap, ReportParameters, ScaleTier};
pub use regions::Region;
pub use service::PrecedentLetterService;
pub use workflow::{Completion, GenerationTicket, LetterState, LetterWorkflow};

// Re-export validated primitives so callers need only depend on nexus-core.
pub use nexus_types::{NonEmptyText, Percentage, TextError};
