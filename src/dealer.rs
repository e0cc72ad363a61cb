//! Dealer-side participant state.

use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DeckError;
use crate::hand::Hand;

/// The dealer: holds a hand like any participant and owns the draw queue.
#[derive(Debug)]
pub struct Dealer {
    /// Cards held this round.
    pub hand: Hand,
    deck: Deck,
}

impl Dealer {
    /// Creates a dealer with a freshly shuffled standard deck.
    #[must_use]
    pub fn new(rng: &mut ChaCha8Rng) -> Self {
        let mut deck = Deck::standard();
        deck.shuffle(rng);
        Self {
            hand: Hand::new(),
            deck,
        }
    }

    /// Discards the old queue and shuffles a fresh standard deck.
    pub fn reshuffle(&mut self, rng: &mut ChaCha8Rng) {
        let mut deck = Deck::standard();
        deck.shuffle(rng);
        self.deck = deck;
    }

    /// Draws the next card from the queue.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] when no cards remain.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.deck.draw()
    }

    /// Cards left in the draw queue.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Current hand score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.hand.score()
    }

    /// Replaces the draw queue, for hosts and tests that rig deals.
    pub fn set_deck(&mut self, deck: Deck) {
        self.deck = deck;
    }
}
