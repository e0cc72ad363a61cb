//! Table configuration options.

use core::time::Duration;

use crate::clock::DEFAULT_TICK;

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjtable::TableOptions;
/// use core::time::Duration;
///
/// let options = TableOptions::default()
///     .with_min_bet(50)
///     .with_tick(Duration::from_millis(250));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Minimum bet; a seat must hold more than this to join a round.
    pub min_bet: u32,
    /// Maximum bet accepted from a host.
    pub max_bet: u32,
    /// Scheduler tick period.
    pub tick: Duration,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            min_bet: 100,
            max_bet: 10_000,
            tick: DEFAULT_TICK,
        }
    }
}

impl TableOptions {
    /// Sets the table minimum bet.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_min_bet(500);
    /// assert_eq!(options.min_bet, 500);
    /// ```
    #[must_use]
    pub const fn with_min_bet(mut self, min_bet: u32) -> Self {
        self.min_bet = min_bet;
        self
    }

    /// Sets the table maximum bet.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_max_bet(50_000);
    /// assert_eq!(options.max_bet, 50_000);
    /// ```
    #[must_use]
    pub const fn with_max_bet(mut self, max_bet: u32) -> Self {
        self.max_bet = max_bet;
        self
    }

    /// Sets the scheduler tick period.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    /// use core::time::Duration;
    ///
    /// let options = TableOptions::default().with_tick(Duration::from_millis(100));
    /// assert_eq!(options.tick, Duration::from_millis(100));
    /// ```
    #[must_use]
    pub const fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }
}
