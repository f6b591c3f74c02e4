#![forbid(unsafe_code)]

pub mod model;
pub mod session;

pub use model::{
    AnswerInputError, Card, DealInterval, Deck, Rank, SettingsError, Suit, TrainerSettings,
    TrainerSettingsDraft,
};
pub use session::{Advance, AnswerOutcome, Checkpoints, CountingSession, QuizTally, SessionError};
