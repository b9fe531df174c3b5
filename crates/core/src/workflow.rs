//! Letter generation workflow state.
//!
//! The caller owns one [`LetterWorkflow`] per letter view. Every open or letter-type change calls
//! [`LetterWorkflow::begin`], which hands out a ticket with a fresh sequence number. Only the
//! completion carrying the latest ticket is applied; anything older is discarded, so a slow
//! response can never overwrite a newer one.
//!
//! ```text
//! idle ──begin──▶ generating ──ok──▶ ready
//!   ▲                 │  ▲             │
//!   │                 │  └──begin──────┤
//!   │                 └──err──▶ error ─┘
//! ```

use crate::error::NexusError;
use crate::letters::{Letter, LetterType};

#[derive(Clone, Debug, PartialEq)]
pub enum LetterState {
    Idle,
    Generating {
        sequence: u64,
        letter_type: LetterType,
    },
    Ready {
        sequence: u64,
        letter: Letter,
    },
    Error {
        sequence: u64,
        message: String,
    },
}

impl LetterState {
    pub fn name(&self) -> &'static str {
        match self {
            LetterState::Idle => "idle",
            LetterState::Generating { .. } => "generating",
            LetterState::Ready { .. } => "ready",
            LetterState::Error { .. } => "error",
        }
    }
}

/// Proof that a generation was requested; must be handed back on completion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationTicket {
    sequence: u64,
    letter_type: LetterType,
}

impl GenerationTicket {
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn letter_type(&self) -> LetterType {
        self.letter_type
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    /// The outcome became the current state.
    Applied,
    /// A newer request superseded this one; the outcome was dropped.
    Stale { latest: u64 },
}

#[derive(Clone, Debug)]
pub struct LetterWorkflow {
    state: LetterState,
    latest: u64,
}

impl Default for LetterWorkflow {
    fn default() -> Self {
        Self::new()
    }
}

impl LetterWorkflow {
    pub fn new() -> Self {
        Self {
            state: LetterState::Idle,
            latest: 0,
        }
    }

    pub fn state(&self) -> &LetterState {
        &self.state
    }

    pub fn is_generating(&self) -> bool {
        matches!(self.state, LetterState::Generating { .. })
    }

    /// Current letter, only while `ready`.
    pub fn letter(&self) -> Option<&Letter> {
        match &self.state {
            LetterState::Ready { letter, .. } => Some(letter),
            _ => None,
        }
    }

    /// Current error message, only while `error`.
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            LetterState::Error { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Enters `generating` from any state. Any previous letter or error is cleared.
    pub fn begin(&mut self, letter_type: LetterType) -> GenerationTicket {
        self.latest += 1;
        self.state = LetterState::Generating {
            sequence: self.latest,
            letter_type,
        };
        tracing::debug!(
            sequence = self.latest,
            letter_type = letter_type.as_str(),
            "letter generation started"
        );
        GenerationTicket {
            sequence: self.latest,
            letter_type,
        }
    }

    /// Applies the outcome of the generation identified by `ticket`.
    ///
    /// Outcomes for anything but the in-flight latest request are discarded.
    pub fn complete(
        &mut self,
        ticket: GenerationTicket,
        outcome: Result<Letter, NexusError>,
    ) -> Completion {
        let in_flight = matches!(
            self.state,
            LetterState::Generating { sequence, .. } if sequence == ticket.sequence
        );
        if !in_flight {
            tracing::warn!(
                sequence = ticket.sequence,
                latest = self.latest,
                "discarding stale letter generation result"
            );
            return Completion::Stale {
                latest: self.latest,
            };
        }

        self.state = match outcome {
            Ok(letter) => LetterState::Ready {
                sequence: ticket.sequence,
                letter,
            },
            Err(e) => {
                tracing::error!("letter generation failed: {}", e);
                LetterState::Error {
                    sequence: ticket.sequence,
                    message: format!("Failed to generate letter: {e}"),
                }
            }
        };
        Completion::Applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn letter(body: &str) -> Letter {
        Letter {
            requested: LetterType::Formal,
            rendered: LetterType::Formal,
            precedent_id: None,
            dated: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            body: body.to_string(),
        }
    }

    #[test]
    fn starts_idle() {
        let wf = LetterWorkflow::new();
        assert_eq!(wf.state(), &LetterState::Idle);
        assert!(wf.letter().is_none());
        assert!(wf.error().is_none());
    }

    #[test]
    fn success_moves_to_ready() {
        let mut wf = LetterWorkflow::new();
        let ticket = wf.begin(LetterType::Formal);
        assert!(wf.is_generating());

        assert_eq!(wf.complete(ticket, Ok(letter("hello"))), Completion::Applied);
        assert_eq!(wf.state().name(), "ready");
        assert_eq!(wf.letter().map(Letter::as_str), Some("hello"));
    }

    #[test]
    fn failure_moves_to_error_without_letter() {
        let mut wf = LetterWorkflow::new();
        let t1 = wf.begin(LetterType::Formal);
        wf.complete(t1, Ok(letter("first")));

        let t2 = wf.begin(LetterType::PrecedentBased);
        assert!(wf.letter().is_none());
        wf.complete(
            t2,
            Err(NexusError::StoreUnavailable("dataset offline".into())),
        );

        assert_eq!(wf.state().name(), "error");
        assert!(wf.letter().is_none());
        assert_eq!(
            wf.error(),
            Some("Failed to generate letter: case store unavailable: dataset offline")
        );
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut wf = LetterWorkflow::new();
        let old = wf.begin(LetterType::Formal);
        let new = wf.begin(LetterType::Strategic);
        assert_eq!(new.sequence(), old.sequence() + 1);

        assert_eq!(wf.complete(new, Ok(letter("new"))), Completion::Applied);
        assert_eq!(
            wf.complete(old, Ok(letter("old"))),
            Completion::Stale { latest: 2 }
        );
        assert_eq!(wf.letter().map(Letter::as_str), Some("new"));
    }

    #[test]
    fn stale_completion_while_newer_in_flight() {
        let mut wf = LetterWorkflow::new();
        let old = wf.begin(LetterType::Formal);
        let _new = wf.begin(LetterType::Formal);

        assert!(matches!(
            wf.complete(old, Ok(letter("old"))),
            Completion::Stale { .. }
        ));
        assert!(wf.is_generating());
    }

    #[test]
    fn duplicate_completion_is_stale() {
        let mut wf = LetterWorkflow::new();
        let t = wf.begin(LetterType::Formal);
        wf.complete(t, Ok(letter("once")));
        assert!(matches!(
            wf.complete(t, Ok(letter("twice"))),
            Completion::Stale { .. }
        ));
        assert_eq!(wf.letter().map(Letter::as_str), Some("once"));
    }

    #[test]
    fn error_can_be_retriggered() {
        let mut wf = LetterWorkflow::new();
        let t = wf.begin(LetterType::Formal);
        wf.complete(t, Err(NexusError::InvalidInput("boom".into())));
        let t = wf.begin(LetterType::Formal);
        wf.complete(t, Ok(letter("retry")));
        assert_eq!(wf.state().name(), "ready");
    }
}
