use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("deal interval must be between {min} and {max} seconds, got {got}")]
    IntervalOutOfRange { got: f64, min: f64, max: f64 },

    #[error("feedback time must be between 0 and {max} seconds, got {got}")]
    InvalidFeedback { got: f64, max: f64 },
}

//
// ─── DEAL INTERVAL ─────────────────────────────────────────────────────────────
//

/// Seconds between two cards in Timed Mode.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct DealInterval(f64);

impl DealInterval {
    pub const MIN_SECS: f64 = 0.5;
    pub const MAX_SECS: f64 = 2.0;
    /// Slider granularity: seven ticks from 0.5 to 2.0.
    pub const STEP_SECS: f64 = 0.25;
    pub const DEFAULT_SECS: f64 = 1.0;

    /// # Errors
    ///
    /// Returns `SettingsError::IntervalOutOfRange` outside `0.5..=2.0` or for NaN.
    pub fn new(secs: f64) -> Result<Self, SettingsError> {
        if (Self::MIN_SECS..=Self::MAX_SECS).contains(&secs) {
            Ok(Self(secs))
        } else {
            Err(SettingsError::IntervalOutOfRange {
                got: secs,
                min: Self::MIN_SECS,
                max: Self::MAX_SECS,
            })
        }
    }

    /// Clamp a raw slider value into range. NaN falls back to the default.
    #[must_use]
    pub fn clamped(secs: f64) -> Self {
        if secs.is_nan() {
            return Self::default();
        }
        Self(secs.clamp(Self::MIN_SECS, Self::MAX_SECS))
    }

    #[must_use]
    pub fn secs(self) -> f64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs_f64(self.0)
    }
}

impl Default for DealInterval {
    fn default() -> Self {
        Self(Self::DEFAULT_SECS)
    }
}

//
// ─── TRAINER SETTINGS ──────────────────────────────────────────────────────────
//

/// Validated trainer settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainerSettings {
    deal_interval: DealInterval,
    feedback: Duration,
    seed: Option<u64>,
}

/// Unvalidated settings, as read from a settings file or assembled from flags.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrainerSettingsDraft {
    pub deal_interval_secs: Option<f64>,
    pub feedback_secs: Option<f64>,
    pub seed: Option<u64>,
}

impl TrainerSettingsDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill every unset field from `other`.
    #[must_use]
    pub fn or(self, other: TrainerSettingsDraft) -> Self {
        Self {
            deal_interval_secs: self.deal_interval_secs.or(other.deal_interval_secs),
            feedback_secs: self.feedback_secs.or(other.feedback_secs),
            seed: self.seed.or(other.seed),
        }
    }

    /// Validate the draft, falling back to defaults for unset fields.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` when a present value is out of range.
    pub fn validate(self) -> Result<TrainerSettings, SettingsError> {
        let deal_interval = self
            .deal_interval_secs
            .map(DealInterval::new)
            .transpose()?
            .unwrap_or_default();

        let feedback = match self.feedback_secs {
            Some(secs) if (0.0..=TrainerSettings::MAX_FEEDBACK_SECS).contains(&secs) => {
                Duration::from_secs_f64(secs)
            }
            Some(secs) => {
                return Err(SettingsError::InvalidFeedback {
                    got: secs,
                    max: TrainerSettings::MAX_FEEDBACK_SECS,
                });
            }
            None => TrainerSettings::DEFAULT_FEEDBACK,
        };

        Ok(TrainerSettings {
            deal_interval,
            feedback,
            seed: self.seed,
        })
    }
}

impl TrainerSettings {
    /// How long answer feedback stays on screen in Timed Mode.
    pub const DEFAULT_FEEDBACK: Duration = Duration::from_millis(1500);
    pub const MAX_FEEDBACK_SECS: f64 = 60.0;

    #[must_use]
    pub fn deal_interval(&self) -> DealInterval {
        self.deal_interval
    }

    #[must_use]
    pub fn feedback(&self) -> Duration {
        self.feedback
    }

    /// Base seed for reproducible shuffles. `None` draws from the OS.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    #[must_use]
    pub fn with_deal_interval(mut self, deal_interval: DealInterval) -> Self {
        self.deal_interval = deal_interval;
        self
    }

    #[must_use]
    pub fn with_feedback(mut self, feedback: Duration) -> Self {
        self.feedback = feedback;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}

impl Default for TrainerSettings {
    fn default() -> Self {
        Self {
            deal_interval: DealInterval::default(),
            feedback: Self::DEFAULT_FEEDBACK,
            seed: None,
        }
    }
}
