//! A tick-driven blackjack table engine with optional `no_std` support.
//!
//! The crate drives a multi-seat blackjack round through a fixed phase
//! schedule (initialization, betting, dealing, player turns, dealer turn,
//! result) polled by a cooperative [`GameClock`]. The [`Table`] owns the
//! dealer, the deck, and the seated players; hosts observe it through
//! read-only snapshots and a structured log-event queue, and drive it either
//! with the built-in background thread (`std`) or by calling
//! [`Table::step`] from their own loop.
//!
//! # Example
//!
//! ```no_run
//! use bjtable::{PlayerKind, Table, TableOptions};
//!
//! let table = std::sync::Arc::new(Table::new(TableOptions::default(), 42));
//! table.seat_player(PlayerKind::Other, 1, 30_000).unwrap();
//! table.clone().start().unwrap();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod clock;
pub mod dealer;
pub mod deck;
pub mod error;
pub mod events;
pub mod hand;
pub mod options;
pub mod player;
pub mod policy;
pub mod result;
pub mod score;
mod sync;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use clock::{DEFAULT_TICK, GameClock, PhaseHandler, SchedulePhase};
pub use dealer::Dealer;
pub use deck::Deck;
pub use error::{BetError, ClockError, DeckError, RoundFault, SeatError};
pub use events::{Category, LogEvent};
pub use hand::Hand;
pub use options::TableOptions;
pub use player::{ActionSet, Player, PlayerAction, PlayerKind, Readiness};
pub use policy::{STAND_THRESHOLD, should_draw};
pub use result::{Outcome, RoundSummary, SeatResult};
pub use score::{BLACKJACK, compute_score};
pub use table::{DealerSnapshot, PlayerSnapshot, RoundPhase, Table};
