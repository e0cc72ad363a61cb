//! Structured log events for the presentation layer.
//!
//! The core never renders anything. Phase transitions, dealt cards, result
//! lines, and reported faults are published to an in-memory queue the host
//! drains; order in the queue is the implicit timestamp. Deduplicating
//! repeated lines and choosing colors is the host's business, with
//! [`Category`] as the hint.

use alloc::collections::VecDeque;
use alloc::string::String;
use alloc::vec::Vec;

use crate::sync::Mutex;

/// Event category; doubles as a severity/color hint for renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// A phase transition.
    Phase,
    /// A card dealt to a seat or the dealer.
    Deal,
    /// A round-result line.
    Result,
    /// A reported handler fault.
    Fault,
}

/// A single log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEvent {
    /// What kind of line this is.
    pub category: Category,
    /// Human-readable message.
    pub message: String,
}

/// In-memory event queue drained by the host.
pub(crate) struct EventLog {
    queue: Mutex<VecDeque<LogEvent>>,
}

impl EventLog {
    pub(crate) const fn new() -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
        }
    }

    pub(crate) fn publish(&self, category: Category, message: String) {
        self.queue.lock().push_back(LogEvent { category, message });
    }

    /// Removes and returns every pending event, oldest first.
    pub(crate) fn drain(&self) -> Vec<LogEvent> {
        self.queue.lock().drain(..).collect()
    }
}
