//! Hand scoring under ace-ambiguity rules.

use alloc::vec::Vec;

use crate::card::Card;

/// The legal hand ceiling.
pub const BLACKJACK: u32 = 21;

/// Computes the value of a hand.
///
/// An empty hand scores 0. Ranks 10 through 13 count 10, ranks 2 through 9
/// count face value. Cards are tallied in descending rank order, so aces
/// (rank 1) come last: each ace counts 11 when that keeps the running total
/// at or under [`BLACKJACK`], and 1 otherwise. Multiple aces therefore
/// resolve independently and a hand is never pushed over the ceiling just by
/// holding aces. Bust hands return their real total, uncapped.
#[must_use]
pub fn compute_score(cards: &[Card]) -> u32 {
    if cards.is_empty() {
        return 0;
    }

    let mut aces = cards.iter().filter(|card| card.is_ace()).count() as u32;

    let mut ranks: Vec<u8> = cards.iter().map(|card| card.rank).collect();
    ranks.sort_unstable_by(|a, b| b.cmp(a));
    let mut total = 0;
    for rank in ranks {
        total += match rank {
            1 => {
                // Each ace still to come is worth at least 1; an ace only
                // counts 11 when the hand stays legal after all of them.
                aces -= 1;
                if total + 11 + aces <= BLACKJACK { 11 } else { 1 }
            }
            r if r >= 10 => 10,
            r => u32::from(r),
        };
    }
    total
}
