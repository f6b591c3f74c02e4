use std::fmt;

use hilo_core::{AnswerInputError, AnswerOutcome};

/// Message shown under the card after the player answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Wrong { expected: i32 },
    Rejected(AnswerInputError),
}

impl Feedback {
    #[must_use]
    pub fn is_correct(&self) -> bool {
        matches!(self, Feedback::Correct)
    }
}

impl From<AnswerOutcome> for Feedback {
    fn from(outcome: AnswerOutcome) -> Self {
        if outcome.correct {
            Feedback::Correct
        } else {
            Feedback::Wrong {
                expected: outcome.expected,
            }
        }
    }
}

impl From<AnswerInputError> for Feedback {
    fn from(err: AnswerInputError) -> Self {
        Feedback::Rejected(err)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feedback::Correct => write!(f, "✓ Correct!"),
            Feedback::Wrong { expected } => write!(f, "✗ Wrong! It was: {expected}"),
            Feedback::Rejected(err) => write!(f, "⚠️ {err}"),
        }
    }
}
