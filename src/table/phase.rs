//! The round phase enumeration.

use crate::clock::SchedulePhase;

/// Phases of one table round, in schedule order.
///
/// Phases suffixed `Settle` re-check an advance condition on every tick
/// without repeating the entry work of the phase they follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// Clock stopped; no round in progress.
    Idle,
    /// Round bookkeeping: cleared hands and the derived roster.
    InitGame,
    /// Opening bets are posted.
    StartBetting,
    /// Waits until every round seat holds a non-zero bet.
    StartBettingSettle,
    /// Two cards dealt to every round seat and the dealer.
    PassCard,
    /// Waits until everyone holds exactly two cards.
    PassCardSettle,
    /// Opens the host seats' action window; re-entered between autonomous
    /// draws.
    PlayerTurn,
    /// Autonomous seats draw while the policy tells them to.
    PlayerTurnSettle,
    /// Closes the action window; re-entered between dealer draws.
    DealerTurn,
    /// The dealer draws up to the house threshold.
    DealerTurnSettle,
    /// Outcomes are judged and the clock halts.
    Result,
}

impl SchedulePhase for RoundPhase {
    const IDLE: Self = Self::Idle;
    const START: Self = Self::InitGame;
}
