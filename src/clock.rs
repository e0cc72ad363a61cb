//! Generic tick-driven phase scheduler.
//!
//! The clock owns the phase cell, the running flag, and the cadence; the
//! concrete game supplies the per-phase work through [`PhaseHandler`].
//! Handlers run one at a time on the driving thread and never overlap;
//! [`GameClock::begin`] and [`GameClock::halt`] are the only mutation
//! points expected from outside that thread.

use core::fmt::{Debug, Display};
use core::sync::atomic::{AtomicBool, Ordering};
use core::time::Duration;

use crate::error::ClockError;
use crate::sync::Mutex;

/// Default tick period.
pub const DEFAULT_TICK: Duration = Duration::from_millis(500);

/// An enumerated phase set a [`GameClock`] can schedule.
pub trait SchedulePhase: Copy + Eq + Debug {
    /// Phase the clock rests in while stopped.
    const IDLE: Self;
    /// Phase entered when the clock begins.
    const START: Self;
}

/// Per-phase work supplied by the concrete game.
///
/// A phase with no work returns `Ok(())` from [`PhaseHandler::dispatch`];
/// that is the idiom for phases the game leaves unhandled.
pub trait PhaseHandler {
    /// The phase set this handler drives.
    type Phase: SchedulePhase;
    /// Fault type surfaced through [`PhaseHandler::fault`].
    type Fault: Display;

    /// Runs the work for `phase`, mutating whatever state the handler owns.
    ///
    /// # Errors
    ///
    /// A fault is reported through [`PhaseHandler::fault`] and does not stop
    /// the schedule; a handler that wants to end the run halts the clock
    /// itself before returning the error.
    fn dispatch(&self, phase: Self::Phase) -> Result<(), Self::Fault>;

    /// Called once per observed phase change, before dispatching.
    fn phase_changed(&self, _from: Self::Phase, _to: Self::Phase) {}

    /// Called when [`PhaseHandler::dispatch`] faults.
    fn fault(&self, _fault: &Self::Fault) {}
}

struct PhaseCell<P> {
    current: P,
    previous: P,
}

/// Tick-driven scheduler over a phase set.
pub struct GameClock<P> {
    phase: Mutex<PhaseCell<P>>,
    running: AtomicBool,
    period: Duration,
}

impl<P: SchedulePhase> GameClock<P> {
    /// Creates a stopped clock with the given tick period.
    #[must_use]
    pub const fn new(period: Duration) -> Self {
        Self {
            phase: Mutex::new(PhaseCell {
                current: P::IDLE,
                previous: P::IDLE,
            }),
            running: AtomicBool::new(false),
            period,
        }
    }

    /// Tick period between scheduler iterations.
    #[must_use]
    pub const fn period(&self) -> Duration {
        self.period
    }

    /// Current phase.
    pub fn phase(&self) -> P {
        self.phase.lock().current
    }

    /// Moves the schedule to `phase`, remembering the one it left.
    pub fn set_phase(&self, phase: P) {
        let mut cell = self.phase.lock();
        cell.previous = cell.current;
        cell.current = phase;
    }

    /// Whether the tick loop should keep going.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Arms the clock: running flag up, phase moved to [`SchedulePhase::START`].
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::AlreadyRunning`] if the clock is already armed.
    pub fn begin(&self) -> Result<(), ClockError> {
        if self.running.swap(true, Ordering::SeqCst) {
            return Err(ClockError::AlreadyRunning);
        }
        self.set_phase(P::START);
        Ok(())
    }

    /// Stops the schedule and parks the phase at [`SchedulePhase::IDLE`].
    ///
    /// Idempotent. A handler already dispatched keeps running; the loop
    /// observes the flag at the next iteration boundary.
    pub fn halt(&self) {
        self.running.store(false, Ordering::SeqCst);
        self.set_phase(P::IDLE);
    }

    /// Runs one scheduler iteration against `handler`.
    ///
    /// Reports a phase change exactly once per change, dispatches the
    /// current phase, and surfaces any fault through
    /// [`PhaseHandler::fault`] without stopping the schedule.
    pub fn tick<H>(&self, handler: &H)
    where
        H: PhaseHandler<Phase = P>,
    {
        let (previous, current) = {
            let mut cell = self.phase.lock();
            let seen = (cell.previous, cell.current);
            cell.previous = cell.current;
            seen
        };

        if previous != current {
            handler.phase_changed(previous, current);
        }

        if let Err(fault) = handler.dispatch(current) {
            handler.fault(&fault);
        }
    }

    /// Drives the tick loop until the clock halts, sleeping
    /// [`GameClock::period`] between iterations.
    #[cfg(feature = "std")]
    pub fn run<H>(&self, handler: &H)
    where
        H: PhaseHandler<Phase = P>,
    {
        while self.is_running() {
            self.tick(handler);
            std::thread::sleep(self.period);
        }
    }
}
