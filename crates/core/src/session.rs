use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::model::{Card, DECK_SIZE, Deck, hi_lo_value};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("session has not been dealt yet")]
    NotStarted,

    #[error("a running-count question must be answered first")]
    QuizPending,

    #[error("no running-count question is pending")]
    InvalidState,
}

//
// ─── CHECKPOINTS ───────────────────────────────────────────────────────────────
//

/// Draw positions at which the player is asked for the running count.
///
/// Drawn with replacement, so fewer than three distinct positions is possible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkpoints(Vec<usize>);

impl Checkpoints {
    pub const COUNT: usize = 3;
    pub const STEP: usize = 5;
    pub const LAST: usize = 50;

    /// Draw `COUNT` positions uniformly from `{5, 10, ..., 50}`.
    #[must_use]
    pub fn draw(rng: &mut impl Rng) -> Self {
        let slots = Self::LAST / Self::STEP;
        let positions = (0..Self::COUNT)
            .map(|_| rng.random_range(1..=slots) * Self::STEP)
            .collect();
        Self(positions)
    }

    #[must_use]
    pub fn from_positions(positions: impl IntoIterator<Item = usize>) -> Self {
        Self(positions.into_iter().collect())
    }

    #[must_use]
    pub fn contains(&self, position: usize) -> bool {
        self.0.contains(&position)
    }

    #[must_use]
    pub fn positions(&self) -> &[usize] {
        &self.0
    }
}

//
// ─── RESULTS ───────────────────────────────────────────────────────────────────
//

/// What happened on a single `advance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// A new card is face up.
    Card(Card),
    /// The player must state the running count before the next card is shown.
    Quiz,
}

impl Advance {
    #[must_use]
    pub fn quiz_triggered(self) -> bool {
        matches!(self, Advance::Quiz)
    }

    #[must_use]
    pub fn card(self) -> Option<Card> {
        match self {
            Advance::Card(card) => Some(card),
            Advance::Quiz => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub given: i32,
    pub expected: i32,
    pub correct: bool,
}

/// Quiz results across every shoe of a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuizTally {
    pub asked: u32,
    pub correct: u32,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
struct Shoe {
    deck: Deck,
    position: usize,
    running_count: i32,
    checkpoints: Checkpoints,
    awaiting_answer: bool,
}

impl Shoe {
    fn fresh(rng: &mut StdRng) -> Self {
        Self {
            deck: Deck::shuffled(rng),
            position: 0,
            running_count: 0,
            checkpoints: Checkpoints::draw(rng),
            awaiting_answer: false,
        }
    }

    fn current(&self) -> Card {
        // position stays below DECK_SIZE; advance wraps before reading
        self.deck.cards()[self.position]
    }
}

/// Hi-Lo practice state: one shoe, a draw position, the running count and the
/// pending quiz checkpoints.
///
/// The running count always equals the sum of Hi-Lo values of the cards before
/// `position` in the current shoe.
#[derive(Debug, Clone)]
pub struct CountingSession {
    rng: StdRng,
    shoe: Option<Shoe>,
    tally: QuizTally,
    shoes_dealt: u32,
}

impl CountingSession {
    /// A session that has not been dealt yet. Call [`reset`](Self::reset) first.
    #[must_use]
    pub fn new(rng: StdRng) -> Self {
        Self {
            rng,
            shoe: None,
            tally: QuizTally::default(),
            shoes_dealt: 0,
        }
    }

    /// An undealt session with a reproducible shuffle sequence.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// A dealt session with a reproducible shuffle sequence.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        let mut session = Self::seeded(seed);
        session.reset();
        session
    }

    /// A dealt session shuffled from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        let mut session = Self::new(StdRng::from_os_rng());
        session.reset();
        session
    }

    /// A dealt session with a fixed first shoe. Later shoes are shuffled from `seed`.
    #[must_use]
    pub fn with_shoe(deck: Deck, checkpoints: Checkpoints, seed: u64) -> Self {
        let mut session = Self::seeded(seed);
        session.shoe = Some(Shoe {
            deck,
            position: 0,
            running_count: 0,
            checkpoints,
            awaiting_answer: false,
        });
        session.shoes_dealt = 1;
        session
    }

    /// Reshuffle, zero the position and count, and draw new checkpoints.
    pub fn reset(&mut self) {
        self.shoe = Some(Shoe::fresh(&mut self.rng));
        self.shoes_dealt += 1;
    }

    /// The face-up card.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotStarted` before the first `reset`.
    pub fn current_card(&self) -> Result<Card, SessionError> {
        self.shoe
            .as_ref()
            .map(Shoe::current)
            .ok_or(SessionError::NotStarted)
    }

    /// Count the face-up card and move to the next one.
    ///
    /// When the shoe runs out the deck is reshuffled and counting starts over
    /// from the first card of the new shoe.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotStarted` before the first `reset` and
    /// `SessionError::QuizPending` while a question is unanswered.
    pub fn advance(&mut self) -> Result<Advance, SessionError> {
        let shoe = self.shoe.as_mut().ok_or(SessionError::NotStarted)?;
        if shoe.awaiting_answer {
            return Err(SessionError::QuizPending);
        }

        shoe.running_count += hi_lo_value(shoe.current().rank());
        shoe.position += 1;

        if shoe.position >= DECK_SIZE {
            self.reset();
        }

        let shoe = self.shoe.as_mut().ok_or(SessionError::NotStarted)?;
        if shoe.checkpoints.contains(shoe.position) {
            shoe.awaiting_answer = true;
            return Ok(Advance::Quiz);
        }
        Ok(Advance::Card(shoe.current()))
    }

    /// Grade the player's running count. Does not move the draw position.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidState` unless a question is pending.
    pub fn answer(&mut self, value: i32) -> Result<AnswerOutcome, SessionError> {
        let shoe = self.shoe.as_mut().ok_or(SessionError::InvalidState)?;
        if !shoe.awaiting_answer {
            return Err(SessionError::InvalidState);
        }
        shoe.awaiting_answer = false;

        let expected = shoe.running_count;
        let correct = value == expected;
        self.tally.asked += 1;
        if correct {
            self.tally.correct += 1;
        }

        Ok(AnswerOutcome {
            given: value,
            expected,
            correct,
        })
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.shoe.as_ref().map_or(0, |shoe| shoe.position)
    }

    #[must_use]
    pub fn running_count(&self) -> i32 {
        self.shoe.as_ref().map_or(0, |shoe| shoe.running_count)
    }

    #[must_use]
    pub fn checkpoints(&self) -> Option<&Checkpoints> {
        self.shoe.as_ref().map(|shoe| &shoe.checkpoints)
    }

    #[must_use]
    pub fn is_awaiting_answer(&self) -> bool {
        self.shoe.as_ref().is_some_and(|shoe| shoe.awaiting_answer)
    }

    #[must_use]
    pub fn deck(&self) -> Option<&Deck> {
        self.shoe.as_ref().map(|shoe| &shoe.deck)
    }

    #[must_use]
    pub fn tally(&self) -> QuizTally {
        self.tally
    }

    /// Number of shoes dealt so far, counting the first one.
    #[must_use]
    pub fn shoes_dealt(&self) -> u32 {
        self.shoes_dealt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Rank, Suit};
    use std::collections::HashSet;

    fn no_quiz() -> Checkpoints {
        Checkpoints::from_positions(Vec::new())
    }

    fn expected_count(deck: &Deck, upto: usize) -> i32 {
        deck.cards()[..upto]
            .iter()
            .map(|card| hi_lo_value(card.rank()))
            .sum()
    }

    #[test]
    fn current_card_before_reset_fails() {
        let session = CountingSession::seeded(1);
        assert_eq!(session.current_card(), Err(SessionError::NotStarted));
    }

    #[test]
    fn advance_before_reset_fails() {
        let mut session = CountingSession::seeded(1);
        assert_eq!(session.advance(), Err(SessionError::NotStarted));
    }

    #[test]
    fn reset_zeroes_state_and_draws_three_checkpoints() {
        let mut session = CountingSession::from_seed(3);
        session.advance().unwrap();
        session.reset();

        assert_eq!(session.position(), 0);
        assert_eq!(session.running_count(), 0);
        assert!(!session.is_awaiting_answer());
        let checkpoints = session.checkpoints().unwrap();
        assert_eq!(checkpoints.positions().len(), Checkpoints::COUNT);
        for position in checkpoints.positions() {
            assert!((5..=50).contains(position));
            assert_eq!(position % 5, 0);
        }
    }

    #[test]
    fn checkpoints_cover_the_whole_range() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = HashSet::new();
        for _ in 0..500 {
            seen.extend(Checkpoints::draw(&mut rng).positions().iter().copied());
        }
        let all: HashSet<usize> = (1..=10).map(|n| n * 5).collect();
        assert_eq!(seen, all);
    }

    #[test]
    fn running_count_tracks_cards_already_passed() {
        let mut session = CountingSession::from_seed(42);
        let deck = session.deck().unwrap().clone();
        let checkpoints = session.checkpoints().unwrap().clone();

        for n in 1..=40 {
            match session.advance().unwrap() {
                Advance::Quiz => {
                    assert!(checkpoints.contains(n));
                    let expected = session.running_count();
                    session.answer(expected).unwrap();
                }
                Advance::Card(card) => assert_eq!(card, deck.cards()[n]),
            }
            assert_eq!(session.position(), n);
            assert_eq!(session.running_count(), expected_count(&deck, n));
        }
    }

    #[test]
    fn fifty_two_advances_wrap_exactly_once() {
        let mut session = CountingSession::with_shoe(Deck::sorted(), no_quiz(), 5);
        let first_shoe = session.deck().unwrap().clone();

        for n in 1..52 {
            let advance = session.advance().unwrap();
            assert_eq!(advance, Advance::Card(first_shoe.cards()[n]));
            assert_eq!(session.running_count(), expected_count(&first_shoe, n));
        }
        assert_eq!(session.shoes_dealt(), 1);
        // the ace of spades is face up and not counted yet
        assert_eq!(session.running_count(), 1);

        // The 52nd advance exhausts the shoe. A fresh shoe may carry a quiz on 5+ only.
        let advance = session.advance().unwrap();
        assert_eq!(session.shoes_dealt(), 2);
        assert_eq!(session.position(), 0);
        assert_eq!(session.running_count(), 0);
        let new_shoe = session.deck().unwrap();
        assert_eq!(advance, Advance::Card(new_shoe.cards()[0]));
        let unique: HashSet<_> = new_shoe.cards().iter().collect();
        assert_eq!(unique.len(), DECK_SIZE);
    }

    #[test]
    fn answer_without_pending_quiz_is_invalid_state() {
        let mut session = CountingSession::from_seed(8);
        assert_eq!(session.answer(0), Err(SessionError::InvalidState));
        assert_eq!(session.position(), 0);
        assert_eq!(session.tally(), QuizTally::default());
    }

    #[test]
    fn quiz_scenario_on_sorted_deck() {
        let mut session = CountingSession::with_shoe(
            Deck::sorted(),
            Checkpoints::from_positions([5]),
            1,
        );

        for _ in 0..4 {
            assert!(!session.advance().unwrap().quiz_triggered());
        }
        let fifth = session.advance().unwrap();
        assert!(fifth.quiz_triggered());
        assert_eq!(fifth.card(), None);
        assert!(session.is_awaiting_answer());
        assert_eq!(session.position(), 5);
        // 2H 2D 2C 2S 3H
        assert_eq!(session.running_count(), 5);

        let outcome = session.answer(session.running_count()).unwrap();
        assert!(outcome.correct);
        assert_eq!(outcome.expected, 5);
        assert!(!session.is_awaiting_answer());
        assert_eq!(session.position(), 5);
        assert_eq!(
            session.current_card(),
            Ok(Card::new(Rank::Three, Suit::Diamonds))
        );
    }

    #[test]
    fn pending_quiz_blocks_advance() {
        let mut session = CountingSession::with_shoe(
            Deck::sorted(),
            Checkpoints::from_positions([1]),
            1,
        );
        assert!(session.advance().unwrap().quiz_triggered());
        assert_eq!(session.advance(), Err(SessionError::QuizPending));
        assert_eq!(session.position(), 1);
        assert_eq!(session.running_count(), 1);
    }

    #[test]
    fn wrong_answer_reports_pre_call_count() {
        let mut session = CountingSession::with_shoe(
            Deck::sorted(),
            Checkpoints::from_positions([2]),
            1,
        );
        session.advance().unwrap();
        session.advance().unwrap();

        let before = session.running_count();
        let outcome = session.answer(before + 3).unwrap();
        assert!(!outcome.correct);
        assert_eq!(outcome.expected, before);
        assert_eq!(outcome.given, before + 3);
        assert_eq!(session.tally(), QuizTally { asked: 1, correct: 0 });
    }

    #[test]
    fn duplicate_checkpoints_trigger_once() {
        let mut session = CountingSession::with_shoe(
            Deck::sorted(),
            Checkpoints::from_positions([5, 5, 10]),
            1,
        );
        let quizzes = (0..12)
            .filter_map(|_| {
                let advance = session.advance().unwrap();
                if advance.quiz_triggered() {
                    session.answer(0).unwrap();
                }
                advance.quiz_triggered().then_some(session.position())
            })
            .collect::<Vec<_>>();
        assert_eq!(quizzes, vec![5, 10]);
    }
}
