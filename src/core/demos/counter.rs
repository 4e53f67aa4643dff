//! Process-wide ticket counter: one instance, one operation, no reset.

use crate::domain::model::DemoReport;
use crate::domain::ports::{Demo, RunConfig};
use crate::utils::error::Result;
use std::sync::Mutex;

/// Counter with private state behind a mutex. The demo goes through the
/// single process-wide instance; `new` exists so tests can start from zero.
pub struct TicketCounter {
    count: Mutex<u64>,
}

impl TicketCounter {
    pub const fn new() -> Self {
        Self {
            count: Mutex::new(0),
        }
    }

    /// Increments the counter and returns the new value. The Nth call on a
    /// fresh counter returns N.
    pub fn next(&self) -> u64 {
        // The guarded value is a plain integer, so a poisoned lock still
        // holds a usable count.
        let mut count = self.count.lock().unwrap_or_else(|e| e.into_inner());
        *count += 1;
        *count
    }
}

impl Default for TicketCounter {
    fn default() -> Self {
        Self::new()
    }
}

static TICKETS: TicketCounter = TicketCounter::new();

/// The single counter instance for this process.
pub fn tickets() -> &'static TicketCounter {
    &TICKETS
}

pub struct TicketCounterDemo;

impl Demo for TicketCounterDemo {
    fn name(&self) -> &'static str {
        "ticket-counter"
    }

    fn summary(&self) -> &'static str {
        "a singleton counter incremented on each invocation"
    }

    fn run(&self, _config: &dyn RunConfig) -> Result<DemoReport> {
        let lines = vec![
            format!("ticket {}", tickets().next()),
            format!("ticket {}", tickets().next()),
        ];
        Ok(DemoReport::new(self.name(), lines))
    }
}
