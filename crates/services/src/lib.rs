#![forbid(unsafe_code)]

pub mod config;
pub mod drivers;
pub mod error;
pub mod trainer_service;

pub use config::{parse_settings_json, read_settings_file, resolve_settings};
pub use drivers::{
    Feedback, NextOutcome, NormalDriver, NormalScreen, TimedCommand, TimedDriver, TimedEvent,
    TimedHandle,
};
pub use error::{ConfigError, DriverError};
pub use trainer_service::TrainerService;
