//! Matching plus letter generation behind one entry point.

use crate::cases::CaseStore;
use crate::clock::Clock;
use crate::config::CoreConfig;
use crate::error::NexusResult;
use crate::letters::{Letter, LetterGenerator, LetterType};
use crate::matching::{MatchResult, MinSimilarity, PrecedentMatchingEngine};
use crate::parameters::ReportParameters;
use crate::workflow::{Completion, LetterWorkflow};

/// Pure precedent and letter operations, no transport concerns.
#[derive(Clone, Debug)]
pub struct PrecedentLetterService<S, C> {
    engine: PrecedentMatchingEngine<S>,
    generator: LetterGenerator<C>,
    min_similarity: MinSimilarity,
}

impl<S: CaseStore, C: Clock> PrecedentLetterService<S, C> {
    pub fn new(store: S, clock: C, cfg: &CoreConfig) -> Self {
        Self {
            engine: PrecedentMatchingEngine::new(store),
            generator: LetterGenerator::new(clock),
            min_similarity: cfg.min_similarity(),
        }
    }

    pub fn store(&self) -> &S {
        self.engine.store()
    }

    pub fn min_similarity(&self) -> MinSimilarity {
        self.min_similarity
    }

    /// Ranked precedents at the configured threshold.
    pub fn find_matches(&self, parameters: &ReportParameters) -> NexusResult<Vec<MatchResult>> {
        self.engine.find_matches(parameters, self.min_similarity)
    }

    /// Ranked precedents at an explicit threshold.
    pub fn find_matches_at(
        &self,
        parameters: &ReportParameters,
        min_similarity: MinSimilarity,
    ) -> NexusResult<Vec<MatchResult>> {
        self.engine.find_matches(parameters, min_similarity)
    }

    /// Matches (when the style needs precedents) and renders a letter.
    ///
    /// # Errors
    ///
    /// Fails only when matching fails; a missing precedent falls back to the formal letter.
    pub fn generate_letter(
        &self,
        parameters: &ReportParameters,
        letter_type: LetterType,
    ) -> NexusResult<Letter> {
        let matches = if letter_type.uses_precedents() {
            self.find_matches(parameters)?
        } else {
            Vec::new()
        };
        Ok(self.generator.generate(parameters, &matches, letter_type))
    }

    /// Runs one full `begin -> complete` cycle on `workflow`.
    pub fn refresh(
        &self,
        workflow: &mut LetterWorkflow,
        parameters: &ReportParameters,
        letter_type: LetterType,
    ) -> Completion {
        let ticket = workflow.begin(letter_type);
        let outcome = self.generate_letter(parameters, letter_type);
        workflow.complete(ticket, outcome)
    }
}
