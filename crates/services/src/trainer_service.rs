use std::sync::atomic::{AtomicU64, Ordering};

use hilo_core::{CountingSession, TrainerSettings};
use log::info;
use tokio::sync::mpsc;

use crate::drivers::{NormalDriver, TimedDriver, TimedEvent, TimedHandle};
use crate::error::DriverError;

/// Deals fresh sessions for each practice mode.
///
/// With a configured seed, the n-th session uses `seed + n`, so a whole run is
/// reproducible while consecutive sessions still differ.
#[derive(Debug)]
pub struct TrainerService {
    settings: TrainerSettings,
    sessions_started: AtomicU64,
}

impl TrainerService {
    #[must_use]
    pub fn new(settings: TrainerSettings) -> Self {
        Self {
            settings,
            sessions_started: AtomicU64::new(0),
        }
    }

    #[must_use]
    pub fn settings(&self) -> TrainerSettings {
        self.settings
    }

    /// A freshly shuffled, dealt session.
    #[must_use]
    pub fn new_session(&self) -> CountingSession {
        let n = self.sessions_started.fetch_add(1, Ordering::Relaxed);
        let session = match self.settings.seed() {
            Some(seed) => CountingSession::from_seed(seed.wrapping_add(n)),
            None => CountingSession::from_entropy(),
        };
        info!(
            "session {} dealt, quiz checkpoints {:?}",
            n + 1,
            session
                .checkpoints()
                .map(|checkpoints| checkpoints.positions().to_vec())
                .unwrap_or_default()
        );
        session
    }

    /// Start Normal Mode on a new session.
    ///
    /// # Errors
    ///
    /// Returns `DriverError::Session` if the session could not be dealt.
    pub fn start_normal(&self) -> Result<NormalDriver, DriverError> {
        NormalDriver::new(self.new_session())
    }

    /// Start Timed Mode on a new session. The caller spawns `driver.run()`.
    ///
    /// # Errors
    ///
    /// Returns `DriverError::Session` if the session could not be dealt.
    pub fn start_timed(
        &self,
    ) -> Result<(TimedDriver, TimedHandle, mpsc::UnboundedReceiver<TimedEvent>), DriverError> {
        TimedDriver::new(self.new_session(), &self.settings)
    }
}
