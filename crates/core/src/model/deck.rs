use rand::Rng;
use rand::seq::SliceRandom;

use crate::model::card::{Card, Rank, Suit};

/// Number of cards in a single shoe.
pub const DECK_SIZE: usize = 52;

/// An ordered 52-card shoe. The order is the draw order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// All 52 cards, ranks outer and suits inner (`2H 2D 2C 2S 3H ...`).
    #[must_use]
    pub fn sorted() -> Self {
        let cards = Rank::ALL
            .iter()
            .flat_map(|rank| Suit::ALL.iter().map(move |suit| Card::new(*rank, *suit)))
            .collect();
        Self { cards }
    }

    /// A uniformly shuffled deck.
    #[must_use]
    pub fn shuffled(rng: &mut impl Rng) -> Self {
        let mut deck = Self::sorted();
        deck.shuffle(rng);
        deck
    }

    pub fn shuffle(&mut self, rng: &mut impl Rng) {
        self.cards.as_mut_slice().shuffle(rng);
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn assert_permutation(deck: &Deck) {
        let unique: HashSet<_> = deck.cards().iter().copied().collect();
        assert_eq!(deck.len(), DECK_SIZE);
        assert_eq!(unique.len(), DECK_SIZE);
    }

    #[test]
    fn sorted_deck_starts_with_twos() {
        let deck = Deck::sorted();
        assert_permutation(&deck);
        assert_eq!(deck.cards()[0], Card::new(Rank::Two, Suit::Hearts));
        assert_eq!(deck.cards()[3], Card::new(Rank::Two, Suit::Spades));
        assert_eq!(deck.cards()[51], Card::new(Rank::Ace, Suit::Spades));
    }

    #[test]
    fn reshuffling_keeps_every_card_exactly_once() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut deck = Deck::shuffled(&mut rng);
        for _ in 0..20 {
            deck.shuffle(&mut rng);
            assert_permutation(&deck);
        }
    }
}
