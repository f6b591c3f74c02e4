#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    SessionUnavailable,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::SessionUnavailable => {
                "Could not deal a new shoe. Please go back and try again."
            }
        }
    }
}
