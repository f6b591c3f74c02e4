use hilo_core::model::parse_running_count;
use hilo_core::{Advance, Card, CountingSession, QuizTally};
use log::debug;

use super::feedback::Feedback;
use crate::error::DriverError;

/// What the Normal Mode screen shows in place of the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalScreen {
    Card(Card),
    Quiz,
}

/// Result of one "Next" press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextOutcome {
    pub screen: NormalScreen,
    pub feedback: Option<Feedback>,
}

/// Manual-advance driver: one card per "Next" press.
#[derive(Debug)]
pub struct NormalDriver {
    session: CountingSession,
    screen: NormalScreen,
}

impl NormalDriver {
    /// # Errors
    ///
    /// Returns `DriverError::Session` if the session has not been dealt.
    pub fn new(session: CountingSession) -> Result<Self, DriverError> {
        let card = session.current_card()?;
        Ok(Self {
            session,
            screen: NormalScreen::Card(card),
        })
    }

    #[must_use]
    pub fn screen(&self) -> NormalScreen {
        self.screen
    }

    #[must_use]
    pub fn session(&self) -> &CountingSession {
        &self.session
    }

    #[must_use]
    pub fn tally(&self) -> QuizTally {
        self.session.tally()
    }

    /// Handle a "Next" press.
    ///
    /// While a question is pending, `input` is graded and the card held back at
    /// the checkpoint is turned face up. Otherwise `input` is ignored and the
    /// next card is dealt.
    ///
    /// Grading does not call `advance()`. The held-back card has not been shown
    /// yet, and advancing past it would add it to the running count unseen. It
    /// is shown here and counted on the following press.
    ///
    /// # Errors
    ///
    /// Returns `DriverError::Input` for blank or non-numeric answers; the
    /// question stays pending and nothing else changes.
    pub fn press_next(&mut self, input: &str) -> Result<NextOutcome, DriverError> {
        if self.session.is_awaiting_answer() {
            let value = parse_running_count(input)?;
            let outcome = self.session.answer(value)?;
            debug!(
                "answered {} (expected {}) at position {}",
                outcome.given,
                outcome.expected,
                self.session.position()
            );
            self.screen = NormalScreen::Card(self.session.current_card()?);
            return Ok(NextOutcome {
                screen: self.screen,
                feedback: Some(Feedback::from(outcome)),
            });
        }

        let shoes_before = self.session.shoes_dealt();
        let advance = self.session.advance()?;
        if self.session.shoes_dealt() != shoes_before {
            debug!("shoe exhausted, reshuffled");
        }

        self.screen = match advance {
            Advance::Card(card) => NormalScreen::Card(card),
            Advance::Quiz => {
                debug!("quiz at position {}", self.session.position());
                NormalScreen::Quiz
            }
        };
        Ok(NextOutcome {
            screen: self.screen,
            feedback: None,
        })
    }
}
