//! Player and dealer turns.
//!
//! The settle phases hand control back to their entry phase between draws;
//! autonomous play therefore acts once every two ticks.

use alloc::format;

use crate::error::RoundFault;
use crate::events::Category;
use crate::player::PlayerKind;
use crate::policy::should_draw;

use super::{RoundPhase, Table};

impl Table {
    /// Opens the action window for host-driven seats.
    pub(super) fn player_turn(&self) -> Result<(), RoundFault> {
        {
            let round = self.round.lock();
            let mut players = self.players.lock();
            for seat in round.iter() {
                if let Some(player) = players.get_mut(seat) {
                    if player.kind == PlayerKind::Own {
                        player.actions.enable_all();
                    }
                }
            }
        }

        self.clock.set_phase(RoundPhase::PlayerTurnSettle);
        Ok(())
    }

    /// One autonomous pass: each `Other` seat below the stand threshold
    /// draws a card. Advances once every round seat is standing.
    pub(super) fn player_turn_settle(&self) -> Result<(), RoundFault> {
        let round = self.round.lock().clone();

        for &seat in &round {
            let wants_card = {
                let players = self.players.lock();
                players
                    .get(&seat)
                    .is_some_and(|p| p.kind == PlayerKind::Other && should_draw(p.score()))
            };
            if !wants_card {
                continue;
            }

            let card = self.draw_card()?;
            let mut players = self.players.lock();
            if let Some(player) = players.get_mut(&seat) {
                player.hand.push(card);
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

        let all_standing = {
            let players = self.players.lock();
            round
                .iter()
                .all(|seat| players.get(seat).is_none_or(|p| !should_draw(p.score())))
        };

        self.clock.set_phase(if all_standing {
            RoundPhase::DealerTurn
        } else {
            RoundPhase::PlayerTurn
        });
        Ok(())
    }

    /// Closes the action window before the house plays.
    pub(super) fn dealer_turn(&self) -> Result<(), RoundFault> {
        {
            let mut players = self.players.lock();
            for player in players.values_mut() {
                player.actions.disable_all();
            }
        }

        self.clock.set_phase(RoundPhase::DealerTurnSettle);
        Ok(())
    }

    /// The house draws one card per pass until the stand threshold.
    pub(super) fn dealer_turn_settle(&self) -> Result<(), RoundFault> {
        let drawing = should_draw(self.dealer.lock().score());

        if drawing {
            let card = self.draw_card()?;
            let mut dealer = self.dealer.lock();
            dealer.hand.push(card);
            self.publish(
                Category::Deal,
                format!("dealer: {}, cards: {}", dealer.score(), dealer.hand.len()),
            );
        } else {
            let dealer = self.dealer.lock();
            self.publish(
                Category::Deal,
                format!("dealer: {}, cards: {}", dealer.score(), dealer.hand.len()),
            );
        }

        self.clock.set_phase(if drawing {
            RoundPhase::DealerTurn
        } else {
            RoundPhase::Result
        });
        Ok(())
    }
}
