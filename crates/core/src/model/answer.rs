use thiserror::Error;

/// Reasons a typed running-count answer is refused.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AnswerInputError {
    #[error("Insert the running count.")]
    Empty,

    #[error("Insert the running count.")]
    NotANumber { raw: String },
}

/// Parse the text a player typed as their running count.
///
/// Surrounding whitespace is ignored and an explicit `+` or `-` sign is accepted.
///
/// # Errors
///
/// Returns `AnswerInputError::Empty` for blank input and
/// `AnswerInputError::NotANumber` for anything that is not a whole number.
pub fn parse_running_count(input: &str) -> Result<i32, AnswerInputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AnswerInputError::Empty);
    }
    trimmed
        .parse::<i32>()
        .map_err(|_| AnswerInputError::NotANumber {
            raw: trimmed.to_string(),
        })
}
