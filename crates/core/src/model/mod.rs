mod answer;
mod card;
mod count;
mod deck;
mod settings;

pub use answer::{AnswerInputError, parse_running_count};
pub use card::{Card, Rank, Suit};
pub use count::{HI_LO_VALUES, hi_lo_value};
pub use deck::{DECK_SIZE, Deck};
pub use settings::{DealInterval, SettingsError, TrainerSettings, TrainerSettingsDraft};
