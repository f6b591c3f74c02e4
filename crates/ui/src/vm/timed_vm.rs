use hilo_core::{DealInterval, QuizTally};
use services::{Feedback, TimedEvent};

use crate::vm::card_vm::{CardFaceVm, format_tally};

/// Display state for Timed Mode, folded from driver events.
#[derive(Clone, Debug, PartialEq)]
pub struct TimedVm {
    card: Option<CardFaceVm>,
    quiz: bool,
    feedback: Option<String>,
    keep_feedback: bool,
    paused: bool,
    stopped: bool,
    tally: QuizTally,
    interval: DealInterval,
}

impl TimedVm {
    #[must_use]
    pub fn new(interval: DealInterval) -> Self {
        Self {
            card: None,
            quiz: false,
            feedback: None,
            keep_feedback: false,
            paused: false,
            stopped: false,
            tally: QuizTally::default(),
            interval,
        }
    }

    pub fn apply(&mut self, event: TimedEvent) {
        match event {
            TimedEvent::Card(card) => {
                self.card = Some(CardFaceVm::from(card));
                self.quiz = false;
                // Feedback survives the card shown right after the answer.
                if self.keep_feedback {
                    self.keep_feedback = false;
                } else {
                    self.feedback = None;
                }
            }
            TimedEvent::Quiz => {
                self.quiz = true;
                self.feedback = None;
            }
            TimedEvent::Rejected(err) => {
                self.feedback = Some(Feedback::Rejected(err).to_string());
            }
            TimedEvent::Answered { feedback, tally } => {
                self.quiz = false;
                self.feedback = Some(feedback.to_string());
                self.keep_feedback = true;
                self.tally = tally;
            }
            TimedEvent::Paused => self.paused = true,
            TimedEvent::Resumed => self.paused = false,
            TimedEvent::Stopped => self.stopped = true,
        }
    }

    pub fn set_interval(&mut self, interval: DealInterval) {
        self.interval = interval;
    }

    /// The card to draw, hidden while the question or its feedback is up.
    #[must_use]
    pub fn card(&self) -> Option<&CardFaceVm> {
        if self.quiz || self.keep_feedback {
            None
        } else {
            self.card.as_ref()
        }
    }

    #[must_use]
    pub fn is_quiz(&self) -> bool {
        self.quiz
    }

    #[must_use]
    pub fn feedback(&self) -> Option<&str> {
        self.feedback.as_deref()
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    #[must_use]
    pub fn interval(&self) -> DealInterval {
        self.interval
    }

    #[must_use]
    pub fn interval_label(&self) -> String {
        format!("{:.2}s per card", self.interval.secs())
    }

    #[must_use]
    pub fn stop_label(&self) -> &'static str {
        if self.paused { "Resume" } else { "Stop" }
    }

    /// Stop/Resume and the speed slider are hidden during a question.
    #[must_use]
    pub fn shows_controls(&self) -> bool {
        !self.quiz && !self.stopped
    }

    #[must_use]
    pub fn tally_label(&self) -> String {
        format_tally(self.tally.asked, self.tally.correct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hilo_core::{AnswerInputError, Card, Rank, Suit};

    fn two_of_hearts() -> Card {
        Card::new(Rank::Two, Suit::Hearts)
    }

    #[test]
    fn starts_without_card_and_shows_first_deal() {
        let mut vm = TimedVm::new(DealInterval::default());
        assert_eq!(vm.card(), None);
        vm.apply(TimedEvent::Card(two_of_hearts()));
        assert_eq!(vm.card().map(|card| card.code.as_str()), Some("2H"));
        assert!(vm.shows_controls());
        assert_eq!(vm.stop_label(), "Stop");
    }

    #[test]
    fn quiz_cycle_keeps_feedback_for_one_card() {
        let mut vm = TimedVm::new(DealInterval::default());
        vm.apply(TimedEvent::Card(two_of_hearts()));
        vm.apply(TimedEvent::Quiz);
        assert!(vm.is_quiz());
        assert!(!vm.shows_controls());
        assert_eq!(vm.card(), None);

        vm.apply(TimedEvent::Rejected(AnswerInputError::Empty));
        assert_eq!(vm.feedback(), Some("⚠️ Insert the running count."));

        vm.apply(TimedEvent::Answered {
            feedback: Feedback::Correct,
            tally: QuizTally {
                asked: 1,
                correct: 1,
            },
        });
        assert!(!vm.is_quiz());
        assert_eq!(vm.card(), None);
        assert_eq!(vm.feedback(), Some("✓ Correct!"));
        assert_eq!(vm.tally_label(), "Score: 1 / 1");

        vm.apply(TimedEvent::Card(Card::new(Rank::Two, Suit::Clubs)));
        assert_eq!(vm.feedback(), Some("✓ Correct!"));
        assert_eq!(vm.card().map(|card| card.code.as_str()), Some("2C"));

        vm.apply(TimedEvent::Card(Card::new(Rank::Two, Suit::Spades)));
        assert_eq!(vm.feedback(), None);
    }

    #[test]
    fn pause_toggles_button_label() {
        let mut vm = TimedVm::new(DealInterval::default());
        vm.apply(TimedEvent::Paused);
        assert_eq!(vm.stop_label(), "Resume");
        vm.apply(TimedEvent::Resumed);
        assert_eq!(vm.stop_label(), "Stop");
    }

    #[test]
    fn interval_label_follows_slider() {
        let mut vm = TimedVm::new(DealInterval::default());
        assert_eq!(vm.interval_label(), "1.00s per card");
        vm.set_interval(DealInterval::clamped(1.75));
        assert_eq!(vm.interval_label(), "1.75s per card");
    }
}
