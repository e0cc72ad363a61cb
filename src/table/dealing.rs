//! The opening deal.

use alloc::format;

use crate::error::RoundFault;
use crate::events::Category;
use crate::player::Readiness;

use super::{RoundPhase, Table};

/// Cards every participant holds after the opening deal.
const OPENING_CARDS: usize = 2;

impl Table {
    /// Two passes of one card per round seat in seat order, then one card
    /// to the dealer per pass.
    pub(super) fn pass_card(&self) -> Result<(), RoundFault> {
        let round = self.round.lock().clone();

        for _ in 0..OPENING_CARDS {
            for &seat in &round {
                let card = self.draw_card()?;
                let mut players = self.players.lock();
                if let Some(player) = players.get_mut(&seat) {
                    player.hand.push(card);
                    player.readiness = Readiness::InGame;
                    self.publish(
                        Category::Deal,
                        format!(
                            "player {}: {}, cards: {}",
                            seat,
                            player.score(),
                            player.hand.len()
                        ),
                    );
                }
            }

            let card = self.draw_card()?;
            self.dealer.lock().hand.push(card);
        }

        self.clock.set_phase(RoundPhase::PassCardSettle);
        Ok(())
    }

    /// Advances once every round seat and the dealer hold exactly two
    /// cards.
    pub(super) fn pass_card_settle(&self) -> Result<(), RoundFault> {
        let everyone_dealt = {
            let round = self.round.lock();
            let players = self.players.lock();
            round.iter().all(|seat| {
                players
                    .get(seat)
                    .is_some_and(|p| p.hand.len() == OPENING_CARDS)
            }) && self.dealer.lock().hand.len() == OPENING_CARDS
        };

        if everyone_dealt {
            self.clock.set_phase(RoundPhase::PlayerTurn);
        }
        Ok(())
    }
}
