// Raw counter rows and captured samples

use std::time::Instant;

/// Cumulative byte counters for one interface since boot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceCounters {
    pub name: String,
    pub bytes_recv: u64,
    pub bytes_sent: u64,
}

impl InterfaceCounters {
    pub fn new(name: impl Into<String>, bytes_recv: u64, bytes_sent: u64) -> Self {
        Self {
            name: name.into(),
            bytes_recv,
            bytes_sent,
        }
    }

    pub fn has_traffic(&self) -> bool {
        self.bytes_recv > 0 || self.bytes_sent > 0
    }
}

/// Selected counters at the moment they were read. Never mutated after capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterSample {
    pub bytes_recv: u64,
    pub bytes_sent: u64,
    pub timestamp: Instant,
}
