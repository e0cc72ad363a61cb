//! Error types for table operations.

use thiserror::Error;

/// Errors raised by deck draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Draw attempted on an empty queue.
    #[error("deck is exhausted")]
    Exhausted,
}

/// Faults raised by phase handlers.
///
/// Every variant is fatal to the run: the faulting handler halts the clock
/// before returning, and the fault is surfaced through the log-event stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundFault {
    /// No seat qualified for the round at initialization.
    #[error("no participants qualify for the round")]
    NoParticipants,
    /// The round roster is non-empty but no seat is ready.
    #[error("no ready participants")]
    NoReadyParticipants,
    /// The deck ran out mid-deal; the phase guards should make this
    /// impossible.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Errors from clock control calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ClockError {
    /// The clock was started while already running.
    #[error("clock is already running")]
    AlreadyRunning,
}

/// Errors raised when placing a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// No player at the given seat.
    #[error("no player at this seat")]
    UnknownSeat,
    /// The seat is not part of the current round.
    #[error("seat is not part of this round")]
    NotInRound,
    /// Bets are only accepted during the betting phases.
    #[error("invalid game state for betting")]
    InvalidState,
    /// Bet is below the table minimum.
    #[error("bet is below the table minimum")]
    BelowMinimum,
    /// Bet is above the table maximum.
    #[error("bet is above the table maximum")]
    AboveMaximum,
    /// The seat cannot cover the bet.
    #[error("insufficient chips")]
    InsufficientChips,
}

/// Errors raised when seating or removing a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SeatError {
    /// Seat numbers start at 1.
    #[error("seat number must be positive")]
    InvalidSeat,
    /// Another player already holds the seat.
    #[error("seat is already taken")]
    SeatTaken,
    /// No player at the given seat.
    #[error("no player at this seat")]
    UnknownSeat,
    /// The roster cannot change while a round is running.
    #[error("table is running")]
    TableRunning,
}
