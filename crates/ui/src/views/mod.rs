mod components;
mod home;
mod normal;
mod state;
mod timed;

pub use components::{CardFace, CountPrompt, FeedbackLine};
pub use home::HomeView;
pub use normal::NormalView;
pub use state::ViewError;
pub use timed::TimedView;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
