// Shared test helpers

#![allow(dead_code)]

use netflow::counter_source::CounterSource;
use netflow::error::MonitorError;
use netflow::models::InterfaceCounters;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

pub type Reading = Result<Vec<InterfaceCounters>, MonitorError>;

/// Counter source replaying a fixed script. Once exhausted, the last reading repeats.
#[derive(Clone)]
pub struct ScriptedSource {
    steps: Arc<Mutex<VecDeque<Reading>>>,
    last: Arc<Mutex<Option<Reading>>>,
    calls: Arc<Mutex<usize>>,
}

impl ScriptedSource {
    pub fn new(steps: Vec<Reading>) -> Self {
        Self {
            steps: Arc::new(Mutex::new(steps.into())),
            last: Arc::new(Mutex::new(None)),
            calls: Arc::new(Mutex::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

impl CounterSource for ScriptedSource {
    fn read_counters(&mut self) -> Result<Vec<InterfaceCounters>, MonitorError> {
        *self.calls.lock().unwrap() += 1;
        let next = self.steps.lock().unwrap().pop_front();
        let mut last = self.last.lock().unwrap();
        match next {
            Some(reading) => {
                *last = Some(reading.clone());
                reading
            }
            None => last
                .clone()
                .unwrap_or_else(|| Err(MonitorError::counter_source("script empty"))),
        }
    }
}

/// Answers the priming read, then panics on every later read.
#[derive(Default)]
pub struct CrashingSource {
    primed: bool,
}

impl CounterSource for CrashingSource {
    fn read_counters(&mut self) -> Result<Vec<InterfaceCounters>, MonitorError> {
        if self.primed {
            panic!("counter source crashed");
        }
        self.primed = true;
        eth0(0, 0)
    }
}

/// One `eth0` interface plus loopback noise.
pub fn eth0(bytes_recv: u64, bytes_sent: u64) -> Reading {
    Ok(vec![
        InterfaceCounters::new("eth0", bytes_recv, bytes_sent),
        InterfaceCounters::new("lo", 999_999, 999_999),
    ])
}

pub fn source_failure() -> Reading {
    Err(MonitorError::counter_source("permission denied"))
}
