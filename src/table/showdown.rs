//! Result resolution.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::error::RoundFault;
use crate::events::Category;
use crate::result::{Outcome, RoundSummary, SeatResult};

use super::Table;

impl Table {
    /// Judges every round seat against the dealer, records the summary,
    /// and halts the clock.
    pub(super) fn finish_round(&self) -> Result<(), RoundFault> {
        self.publish(
            Category::Result,
            String::from("================ result ================"),
        );

        let (dealer_score, dealer_cards) = {
            let dealer = self.dealer.lock();
            (dealer.score(), dealer.hand.len())
        };

        let mut seats = Vec::new();
        {
            let round = self.round.lock();
            let players = self.players.lock();
            for seat in round.iter() {
                let Some(player) = players.get(seat) else {
                    continue;
                };
                let score = player.score();
                let outcome = Outcome::judge(dealer_score, score);
                self.publish(
                    Category::Result,
                    format!(
                        "player {}: {}, cards: {}, result: {:?}",
                        seat,
                        score,
                        player.hand.len(),
                        outcome
                    ),
                );
                seats.push(SeatResult {
                    seat: *seat,
                    score,
                    cards: player.hand.len(),
                    outcome,
                });
            }
        }

        self.publish(
            Category::Result,
            format!("dealer: {dealer_score}, cards: {dealer_cards}"),
        );
        *self.summary.lock() = Some(RoundSummary {
            seats,
            dealer_score,
            dealer_cards,
        });

        self.stop();
        Ok(())
    }
}
