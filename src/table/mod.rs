//! The table orchestrator.
//!
//! [`Table`] composes the deck, the participants, the scoring engine, the
//! draw policy, and the game clock into the concrete blackjack round
//! schedule. The clock's phase handlers are the only mutators while a round
//! runs; hosts observe through snapshots and the drained event queue.

use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::String;
#[cfg(feature = "std")]
use alloc::sync::Arc;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::clock::{GameClock, PhaseHandler};
use crate::dealer::Dealer;
use crate::deck::Deck;
use crate::error::{ClockError, RoundFault, SeatError};
use crate::events::{Category, EventLog, LogEvent};
use crate::options::TableOptions;
use crate::player::{ActionSet, Player, PlayerKind, Readiness};
use crate::result::RoundSummary;
use crate::sync::Mutex;

mod betting;
mod dealing;
mod phase;
mod showdown;
mod turns;

pub use phase::RoundPhase;

/// A blackjack table driven by a tick scheduler.
///
/// The table owns the dealer (and through it the deck) and the seated
/// players. A round is one pass of the clock from [`RoundPhase::InitGame`]
/// to [`RoundPhase::Result`]; the clock halts itself once outcomes are
/// recorded.
pub struct Table {
    /// Table configuration.
    pub options: TableOptions,
    clock: GameClock<RoundPhase>,
    events: EventLog,
    dealer: Mutex<Dealer>,
    /// Seated players keyed by seat, so deals follow seat order.
    players: Mutex<BTreeMap<u32, Player>>,
    /// Seats qualifying for the current round, ascending.
    round: Mutex<Vec<u32>>,
    summary: Mutex<Option<RoundSummary>>,
    rng: Mutex<ChaCha8Rng>,
}

impl Table {
    /// Creates a table with the given options and RNG seed.
    ///
    /// The dealer starts with a freshly shuffled deck; the deck then
    /// persists across rounds until [`Table::reshuffle`] or
    /// [`Table::set_deck`] replaces it.
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let dealer = Dealer::new(&mut rng);
        let tick = options.tick;

        Self {
            options,
            clock: GameClock::new(tick),
            events: EventLog::new(),
            dealer: Mutex::new(dealer),
            players: Mutex::new(BTreeMap::new()),
            round: Mutex::new(Vec::new()),
            summary: Mutex::new(None),
            rng: Mutex::new(rng),
        }
    }

    // --- roster -----------------------------------------------------------

    /// Seats a player.
    ///
    /// # Errors
    ///
    /// Returns an error if the seat number is zero, the seat is taken, or a
    /// round is running.
    pub fn seat_player(&self, kind: PlayerKind, seat: u32, chips: u32) -> Result<(), SeatError> {
        if self.clock.is_running() {
            return Err(SeatError::TableRunning);
        }
        if seat == 0 {
            return Err(SeatError::InvalidSeat);
        }

        let mut players = self.players.lock();
        if players.contains_key(&seat) {
            return Err(SeatError::SeatTaken);
        }
        players.insert(seat, Player::new(kind, seat, chips));
        Ok(())
    }

    /// Removes a seat between rounds.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is running or the seat is empty.
    pub fn leave(&self, seat: u32) -> Result<(), SeatError> {
        if self.clock.is_running() {
            return Err(SeatError::TableRunning);
        }
        self.players
            .lock()
            .remove(&seat)
            .map(|_| ())
            .ok_or(SeatError::UnknownSeat)
    }

    /// Number of seated players.
    pub fn player_count(&self) -> usize {
        self.players.lock().len()
    }

    // --- control ----------------------------------------------------------

    /// Arms the clock for a new round without spawning a thread.
    ///
    /// Pair with [`Table::step`] when the host drives ticks itself, e.g. in
    /// a `no_std` build or a deterministic test.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::AlreadyRunning`] if a round is in progress.
    pub fn begin(&self) -> Result<(), ClockError> {
        self.clock.begin()
    }

    /// Runs one scheduler tick synchronously on the calling thread.
    pub fn step(&self) {
        self.clock.tick(self);
    }

    /// Starts a round on a background clock thread.
    ///
    /// Takes an [`Arc`] clone, which the thread keeps alive until the clock
    /// halts, either by the round reaching its result or by
    /// [`Table::stop`]. Stopping does not interrupt a handler already in
    /// progress.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::AlreadyRunning`] if a round is in progress.
    #[cfg(feature = "std")]
    pub fn start(self: Arc<Self>) -> Result<(), ClockError> {
        self.begin()?;
        std::thread::spawn(move || self.clock.run(&*self));
        Ok(())
    }

    /// Stops the schedule and parks the phase at [`RoundPhase::Idle`].
    ///
    /// Idempotent; takes effect at the next tick boundary.
    pub fn stop(&self) {
        self.clock.halt();
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.clock.phase()
    }

    /// Whether a round is running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.clock.is_running()
    }

    // --- deck -------------------------------------------------------------

    /// Shuffles a fresh standard deck between rounds.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::AlreadyRunning`] while a round is in progress.
    pub fn reshuffle(&self) -> Result<(), ClockError> {
        if self.clock.is_running() {
            return Err(ClockError::AlreadyRunning);
        }
        let mut dealer = self.dealer.lock();
        let mut rng = self.rng.lock();
        dealer.reshuffle(&mut rng);
        Ok(())
    }

    /// Replaces the draw queue with a fixed deck, for hosts and tests that
    /// rig deals.
    pub fn set_deck(&self, deck: Deck) {
        self.dealer.lock().set_deck(deck);
    }

    // --- events -----------------------------------------------------------

    /// Drains the pending log events in publish order.
    ///
    /// The core emits one event per phase transition, per card dealt, per
    /// result line, and per reported fault. Deduplicating repeats and
    /// rendering is the host's business.
    #[must_use]
    pub fn drain_events(&self) -> Vec<LogEvent> {
        self.events.drain()
    }

    // --- snapshots --------------------------------------------------------

    /// Snapshot of one seat.
    #[must_use]
    pub fn player(&self, seat: u32) -> Option<PlayerSnapshot> {
        self.players.lock().get(&seat).map(PlayerSnapshot::of)
    }

    /// Snapshot of every seat, ascending.
    #[must_use]
    pub fn seats(&self) -> Vec<PlayerSnapshot> {
        self.players.lock().values().map(PlayerSnapshot::of).collect()
    }

    /// Snapshot of the dealer.
    #[must_use]
    pub fn dealer(&self) -> DealerSnapshot {
        let dealer = self.dealer.lock();
        DealerSnapshot {
            cards: dealer.hand.cards().to_vec(),
            score: dealer.score(),
            cards_remaining: dealer.cards_remaining(),
        }
    }

    /// Result of the last finished round, if any.
    #[must_use]
    pub fn summary(&self) -> Option<RoundSummary> {
        self.summary.lock().clone()
    }

    // --- handler plumbing -------------------------------------------------

    pub(crate) fn publish(&self, category: Category, message: String) {
        self.events.publish(category, message);
    }

    /// Halts the clock and returns the fault; for faults fatal to the run.
    pub(crate) fn fail_round(&self, fault: RoundFault) -> Result<(), RoundFault> {
        self.clock.halt();
        Err(fault)
    }

    /// Draws from the dealer's queue; an exhausted deck ends the run.
    pub(crate) fn draw_card(&self) -> Result<Card, RoundFault> {
        match self.dealer.lock().draw() {
            Ok(card) => Ok(card),
            Err(err) => {
                self.clock.halt();
                Err(RoundFault::Deck(err))
            }
        }
    }

    /// Round bookkeeping: cleared hands and bets, then the derived roster.
    fn init_game(&self) -> Result<(), RoundFault> {
        self.round.lock().clear();
        *self.summary.lock() = None;
        self.dealer.lock().hand.clear();

        let mut qualified = Vec::new();
        {
            let mut players = self.players.lock();
            for player in players.values_mut() {
                player.hand.clear();
                player.bet = 0;
                player.actions.disable_all();
                if player.chips > self.options.min_bet && player.seat > 0 {
                    player.readiness = Readiness::Ready;
                    qualified.push(player.seat);
                } else {
                    player.readiness = Readiness::Observing;
                }
            }
        }

        if qualified.is_empty() {
            return self.fail_round(RoundFault::NoParticipants);
        }

        *self.round.lock() = qualified;
        self.clock.set_phase(RoundPhase::StartBetting);
        Ok(())
    }
}

impl PhaseHandler for Table {
    type Phase = RoundPhase;
    type Fault = RoundFault;

    fn dispatch(&self, phase: RoundPhase) -> Result<(), RoundFault> {
        match phase {
            RoundPhase::Idle => Ok(()),
            RoundPhase::InitGame => self.init_game(),
            RoundPhase::StartBetting => self.start_betting(),
            RoundPhase::StartBettingSettle => self.betting_settle(),
            RoundPhase::PassCard => self.pass_card(),
            RoundPhase::PassCardSettle => self.pass_card_settle(),
            RoundPhase::PlayerTurn => self.player_turn(),
            RoundPhase::PlayerTurnSettle => self.player_turn_settle(),
            RoundPhase::DealerTurn => self.dealer_turn(),
            RoundPhase::DealerTurnSettle => self.dealer_turn_settle(),
            RoundPhase::Result => self.finish_round(),
        }
    }

    fn phase_changed(&self, _from: RoundPhase, to: RoundPhase) {
        self.publish(Category::Phase, format!("phase: {to:?}"));
    }

    fn fault(&self, fault: &RoundFault) {
        self.publish(Category::Fault, format!("fault: {fault}"));
    }
}

/// Read-only view of one seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSnapshot {
    /// The seat this view belongs to.
    pub seat: u32,
    /// Host-driven or autonomous.
    pub kind: PlayerKind,
    /// Chip balance.
    pub chips: u32,
    /// Bet posted for the current round.
    pub bet: u32,
    /// Round participation state.
    pub readiness: Readiness,
    /// Capability toggles as the presentation layer should render them.
    pub actions: ActionSet,
    /// Cards held, in deal order.
    pub cards: Vec<Card>,
    /// Current hand score.
    pub score: u32,
}

impl PlayerSnapshot {
    fn of(player: &Player) -> Self {
        Self {
            seat: player.seat,
            kind: player.kind,
            chips: player.chips,
            bet: player.bet,
            readiness: player.readiness,
            actions: player.actions,
            cards: player.hand.cards().to_vec(),
            score: player.score(),
        }
    }
}

/// Read-only view of the dealer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealerSnapshot {
    /// Cards held, in deal order.
    pub cards: Vec<Card>,
    /// Current hand score.
    pub score: u32,
    /// Cards left in the draw queue.
    pub cards_remaining: usize,
}
