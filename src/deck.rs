//! The shuffled draw queue.

use alloc::collections::VecDeque;

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::DeckError;

/// An ordered queue of cards drawn strictly from the front.
///
/// The queue shrinks by one card per draw and never grows; a draw from an
/// empty queue fails with [`DeckError::Exhausted`]. Round bookkeeping is
/// expected to keep that from happening during normal play.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Creates the full 52-card deck in enumeration order, unshuffled.
    ///
    /// The result holds exactly one card per (suit, rank) pair, suits in
    /// [`Suit::ALL`] order, ranks ascending within each suit.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = VecDeque::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in 1..=13 {
                cards.push_back(Card::new(suit, rank));
            }
        }
        Self { cards }
    }

    /// Creates a deck with a fixed draw order; the first card given is the
    /// first card drawn. Intended for hosts and tests that rig deals.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Uniformly permutes the remaining cards.
    pub fn shuffle(&mut self, rng: &mut ChaCha8Rng) {
        self.cards.make_contiguous().shuffle(rng);
    }

    /// Removes and returns the front card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] when no cards remain.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop_front().ok_or(DeckError::Exhausted)
    }

    /// Number of cards left in the queue.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The remaining cards in draw order.
    #[must_use]
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
