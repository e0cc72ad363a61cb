//! Round outcome types.

use alloc::vec::Vec;

use crate::score::BLACKJACK;

/// Outcome of one seat measured against the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The seat beat the dealer.
    Win,
    /// The seat lost; exact score ties count as a loss.
    Lose,
}

impl Outcome {
    /// Classifies a seat's final score against the dealer's.
    ///
    /// A seat wins when it holds a legal total the dealer cannot beat:
    /// either the dealer's total is lower, or the dealer busted. Everything
    /// else loses, including an exact tie.
    #[must_use]
    pub const fn judge(dealer_score: u32, player_score: u32) -> Self {
        if player_score <= BLACKJACK && (dealer_score < player_score || dealer_score > BLACKJACK) {
            Self::Win
        } else {
            Self::Lose
        }
    }
}

/// Final line for one seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatResult {
    /// The seat this line belongs to.
    pub seat: u32,
    /// The seat's final score.
    pub score: u32,
    /// Number of cards the seat ended with.
    pub cards: usize,
    /// Win or lose.
    pub outcome: Outcome,
}

/// Snapshot of a finished round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSummary {
    /// One line per round seat, in seat order.
    pub seats: Vec<SeatResult>,
    /// The dealer's final score.
    pub dealer_score: u32,
    /// Number of cards the dealer ended with.
    pub dealer_cards: usize,
}
