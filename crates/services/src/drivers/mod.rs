mod feedback;
mod normal;
mod timed;

// Public API of the practice drivers.
pub use feedback::Feedback;
pub use normal::{NextOutcome, NormalDriver, NormalScreen};
pub use timed::{TimedCommand, TimedDriver, TimedEvent, TimedHandle};
