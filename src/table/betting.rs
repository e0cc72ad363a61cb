//! Betting phases and the host bet entry point.

use crate::error::{BetError, RoundFault};
use crate::player::Readiness;

use super::{RoundPhase, Table};

impl Table {
    /// Posts the opening bets for every round seat.
    pub(super) fn start_betting(&self) -> Result<(), RoundFault> {
        let nobody_ready = {
            let round = self.round.lock();
            let players = self.players.lock();
            !round.is_empty()
                && !round.iter().any(|seat| {
                    players
                        .get(seat)
                        .is_some_and(|p| p.readiness == Readiness::Ready)
                })
        };
        if nobody_ready {
            return self.fail_round(RoundFault::NoReadyParticipants);
        }

        // Every seat posts the table minimum; hosts raise through
        // `place_bet` while the settle phase holds the window open.
        {
            let round = self.round.lock();
            let mut players = self.players.lock();
            for seat in round.iter() {
                if let Some(player) = players.get_mut(seat) {
                    player.bet = self.options.min_bet;
                }
            }
        }

        self.clock.set_phase(RoundPhase::StartBettingSettle);
        Ok(())
    }

    /// Advances once every round seat holds a non-zero bet.
    pub(super) fn betting_settle(&self) -> Result<(), RoundFault> {
        let all_bet = {
            let round = self.round.lock();
            let players = self.players.lock();
            round
                .iter()
                .all(|seat| players.get(seat).is_some_and(|p| p.bet != 0))
        };

        if all_bet {
            self.clock.set_phase(RoundPhase::PassCard);
        }
        Ok(())
    }

    /// Replaces a seat's bet during the betting window.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not in a betting phase, the seat is
    /// empty or not part of the round, the amount falls outside the table
    /// limits, or the seat cannot cover it.
    pub fn place_bet(&self, seat: u32, amount: u32) -> Result<(), BetError> {
        match self.phase() {
            RoundPhase::StartBetting | RoundPhase::StartBettingSettle => {}
            _ => return Err(BetError::InvalidState),
        }
        if amount < self.options.min_bet {
            return Err(BetError::BelowMinimum);
        }
        if amount > self.options.max_bet {
            return Err(BetError::AboveMaximum);
        }
        if !self.players.lock().contains_key(&seat) {
            return Err(BetError::UnknownSeat);
        }
        if !self.round.lock().contains(&seat) {
            return Err(BetError::NotInRound);
        }

        let mut players = self.players.lock();
        let player = players.get_mut(&seat).ok_or(BetError::UnknownSeat)?;
        if player.chips < amount {
            return Err(BetError::InsufficientChips);
        }
        player.bet = amount;
        Ok(())
    }
}
