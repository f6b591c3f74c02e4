use services::{DriverError, Feedback, NormalDriver, NormalScreen};

use crate::vm::card_vm::{CardFaceVm, format_tally};

/// Display state for Normal Mode.
#[derive(Debug)]
pub struct NormalVm {
    driver: NormalDriver,
    feedback: Option<String>,
}

impl NormalVm {
    #[must_use]
    pub fn new(driver: NormalDriver) -> Self {
        Self {
            driver,
            feedback: None,
        }
    }

    /// The face-up card, or `None` while the running-count question is shown.
    #[must_use]
    pub fn card(&self) -> Option<CardFaceVm> {
        match self.driver.screen() {
            NormalScreen::Card(card) => Some(CardFaceVm::from(card)),
            NormalScreen::Quiz => None,
        }
    }

    #[must_use]
    pub fn is_quiz(&self) -> bool {
        self.driver.screen() == NormalScreen::Quiz
    }

    #[must_use]
    pub fn feedback(&self) -> Option<&str> {
        self.feedback.as_deref()
    }

    #[must_use]
    pub fn tally_label(&self) -> String {
        let tally = self.driver.tally();
        format_tally(tally.asked, tally.correct)
    }

    /// Handle "Next". Returns `true` when the answer field should be cleared.
    pub fn press_next(&mut self, input: &str) -> bool {
        match self.driver.press_next(input) {
            Ok(outcome) => {
                let answered = outcome.feedback.is_some();
                self.feedback = outcome.feedback.map(|feedback| feedback.to_string());
                answered
            }
            Err(DriverError::Input(err)) => {
                self.feedback = Some(Feedback::Rejected(err).to_string());
                false
            }
            Err(err) => {
                log::warn!("next refused: {err}");
                false
            }
        }
    }
}
