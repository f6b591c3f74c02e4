use std::time::Duration;

use hilo_core::model::parse_running_count;
use hilo_core::{
    Advance, AnswerInputError, Card, CountingSession, DealInterval, QuizTally, TrainerSettings,
};
use log::{debug, info, warn};
use tokio::sync::mpsc;
use tokio::time::{Instant, sleep_until};
use tokio_util::sync::CancellationToken;

use super::feedback::Feedback;
use crate::error::DriverError;

//
// ─── MESSAGES ──────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub enum TimedCommand {
    Pause,
    Resume,
    SetInterval(DealInterval),
    Submit(String),
}

/// Everything the Timed Mode screen needs to redraw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimedEvent {
    /// A card is face up.
    Card(Card),
    /// Dealing stopped; the player must submit the running count.
    Quiz,
    /// The submitted text was not a running count; the question stays open.
    Rejected(AnswerInputError),
    /// The question was graded. Dealing resumes after the feedback window.
    Answered { feedback: Feedback, tally: QuizTally },
    Paused,
    Resumed,
    /// The loop has exited.
    Stopped,
}

//
// ─── HANDLE ────────────────────────────────────────────────────────────────────
//

/// Control side of a running [`TimedDriver`].
#[derive(Debug, Clone)]
pub struct TimedHandle {
    commands: mpsc::UnboundedSender<TimedCommand>,
    cancel: CancellationToken,
}

impl TimedHandle {
    /// # Errors
    ///
    /// Returns `DriverError::Stopped` once the loop has exited.
    pub fn pause(&self) -> Result<(), DriverError> {
        self.send(TimedCommand::Pause)
    }

    /// # Errors
    ///
    /// Returns `DriverError::Stopped` once the loop has exited.
    pub fn resume(&self) -> Result<(), DriverError> {
        self.send(TimedCommand::Resume)
    }

    /// Change the dealing speed. Applies from the next card on.
    ///
    /// # Errors
    ///
    /// Returns `DriverError::Stopped` once the loop has exited.
    pub fn set_interval(&self, interval: DealInterval) -> Result<(), DriverError> {
        self.send(TimedCommand::SetInterval(interval))
    }

    /// Submit the text typed into the running-count field.
    ///
    /// # Errors
    ///
    /// Returns `DriverError::Stopped` once the loop has exited.
    pub fn submit(&self, input: impl Into<String>) -> Result<(), DriverError> {
        self.send(TimedCommand::Submit(input.into()))
    }

    /// Stop the loop. Safe to call more than once.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    fn send(&self, command: TimedCommand) -> Result<(), DriverError> {
        self.commands
            .send(command)
            .map_err(|_| DriverError::Stopped)
    }
}

//
// ─── DRIVER ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Dealing,
    Quiz,
    Feedback { until: Instant },
}

/// Timer-advance driver: deals one card per interval until cancelled.
///
/// Owns the session; the UI talks to it only through a [`TimedHandle`] and
/// listens on the [`TimedEvent`] channel.
pub struct TimedDriver {
    session: CountingSession,
    interval: DealInterval,
    feedback: Duration,
    paused: bool,
    phase: Phase,
    next_deal: Instant,
    commands: mpsc::UnboundedReceiver<TimedCommand>,
    events: mpsc::UnboundedSender<TimedEvent>,
    cancel: CancellationToken,
}

impl TimedDriver {
    /// Build a driver with its control handle and event stream.
    ///
    /// The driver does nothing until [`run`](Self::run) is awaited.
    ///
    /// # Errors
    ///
    /// Returns `DriverError::Session` if the session has not been dealt.
    pub fn new(
        session: CountingSession,
        settings: &TrainerSettings,
    ) -> Result<(Self, TimedHandle, mpsc::UnboundedReceiver<TimedEvent>), DriverError> {
        session.current_card()?;

        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();

        let driver = Self {
            session,
            interval: settings.deal_interval(),
            feedback: settings.feedback(),
            paused: false,
            phase: Phase::Dealing,
            next_deal: Instant::now(),
            commands: command_rx,
            events: event_tx,
            cancel: cancel.clone(),
        };
        let handle = TimedHandle {
            commands: command_tx,
            cancel,
        };
        Ok((driver, handle, event_rx))
    }

    /// Run until cancelled or until every handle is dropped. Returns the session.
    pub async fn run(mut self) -> CountingSession {
        info!("timed mode started ({}s per card)", self.interval.secs());
        self.reveal_current();
        self.next_deal = Instant::now() + self.interval.as_duration();

        let cancel = self.cancel.clone();
        loop {
            let wake_at = self.wake_at();
            tokio::select! {
                biased;
                () = cancel.cancelled() => break,
                command = self.commands.recv() => match command {
                    Some(command) => self.handle(command),
                    None => break,
                },
                () = sleep_until_some(wake_at) => self.on_wake(),
            }
        }

        info!(
            "timed mode stopped after {} questions ({} correct)",
            self.session.tally().asked,
            self.session.tally().correct
        );
        self.emit(TimedEvent::Stopped);
        self.session
    }

    fn wake_at(&self) -> Option<Instant> {
        if self.paused {
            return None;
        }
        match self.phase {
            Phase::Dealing => Some(self.next_deal),
            Phase::Quiz => None,
            Phase::Feedback { until } => Some(until),
        }
    }

    fn handle(&mut self, command: TimedCommand) {
        match command {
            TimedCommand::Pause => {
                if self.paused || self.phase == Phase::Quiz {
                    return;
                }
                self.paused = true;
                self.emit(TimedEvent::Paused);
            }
            TimedCommand::Resume => {
                if !self.paused {
                    return;
                }
                self.paused = false;
                let now = Instant::now();
                self.next_deal = now + self.interval.as_duration();
                if let Phase::Feedback { .. } = self.phase {
                    self.phase = Phase::Feedback {
                        until: now + self.feedback,
                    };
                }
                self.emit(TimedEvent::Resumed);
            }
            TimedCommand::SetInterval(interval) => {
                debug!("deal interval set to {}s", interval.secs());
                self.interval = interval;
            }
            TimedCommand::Submit(input) => self.submit(&input),
        }
    }

    fn submit(&mut self, input: &str) {
        if self.phase != Phase::Quiz {
            debug!("ignoring answer submitted outside a quiz");
            return;
        }
        let value = match parse_running_count(input) {
            Ok(value) => value,
            Err(err) => {
                self.emit(TimedEvent::Rejected(err));
                return;
            }
        };
        match self.session.answer(value) {
            Ok(outcome) => {
                self.phase = Phase::Feedback {
                    until: Instant::now() + self.feedback,
                };
                self.emit(TimedEvent::Answered {
                    feedback: Feedback::from(outcome),
                    tally: self.session.tally(),
                });
            }
            Err(err) => warn!("answer refused: {err}"),
        }
    }

    fn on_wake(&mut self) {
        match self.phase {
            Phase::Dealing => self.deal(),
            Phase::Feedback { .. } => {
                self.phase = Phase::Dealing;
                self.reveal_current();
                self.next_deal = Instant::now() + self.interval.as_duration();
            }
            Phase::Quiz => {}
        }
    }

    fn deal(&mut self) {
        let shoes_before = self.session.shoes_dealt();
        let advance = self.session.advance();
        if self.session.shoes_dealt() != shoes_before {
            debug!("shoe exhausted, reshuffled");
        }
        match advance {
            Ok(Advance::Card(card)) => {
                self.emit(TimedEvent::Card(card));
                self.next_deal = Instant::now() + self.interval.as_duration();
            }
            Ok(Advance::Quiz) => {
                debug!("quiz at position {}", self.session.position());
                self.phase = Phase::Quiz;
                self.emit(TimedEvent::Quiz);
            }
            Err(err) => {
                warn!("cannot deal: {err}");
                self.phase = Phase::Quiz;
            }
        }
    }

    fn reveal_current(&self) {
        if let Ok(card) = self.session.current_card() {
            self.emit(TimedEvent::Card(card));
        }
    }

    fn emit(&self, event: TimedEvent) {
        // A closed receiver means the screen is gone; cancellation follows.
        let _ = self.events.send(event);
    }
}

async fn sleep_until_some(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
