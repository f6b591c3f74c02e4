use hilo_core::Card;

/// UI-ready card face.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardFaceVm {
    /// Short code such as `10H`, also used as the element title.
    pub code: String,
    pub rank: &'static str,
    pub suit: char,
    pub is_red: bool,
}

impl From<Card> for CardFaceVm {
    fn from(card: Card) -> Self {
        Self {
            code: card.to_string(),
            rank: card.rank().label(),
            suit: card.suit().symbol(),
            is_red: card.suit().is_red(),
        }
    }
}

impl CardFaceVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        if self.is_red {
            "card-face card-face--red"
        } else {
            "card-face card-face--black"
        }
    }
}

#[must_use]
pub fn format_tally(asked: u32, correct: u32) -> String {
    if asked == 0 {
        return "Score: --".to_string();
    }
    format!("Score: {correct} / {asked}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use hilo_core::{Rank, Suit};

    #[test]
    fn maps_red_and_black_cards() {
        let ten = CardFaceVm::from(Card::new(Rank::Ten, Suit::Hearts));
        assert_eq!(ten.code, "10H");
        assert_eq!(ten.rank, "10");
        assert_eq!(ten.suit, '♥');
        assert_eq!(ten.class(), "card-face card-face--red");

        let king = CardFaceVm::from(Card::new(Rank::King, Suit::Clubs));
        assert_eq!(king.class(), "card-face card-face--black");
    }

    #[test]
    fn tally_label() {
        assert_eq!(format_tally(0, 0), "Score: --");
        assert_eq!(format_tally(3, 2), "Score: 2 / 3");
    }
}
