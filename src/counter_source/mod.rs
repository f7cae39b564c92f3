// Cumulative per-interface byte counters from the OS

mod procfs;

pub use procfs::{ProcNetDevSource, parse_proc_net_dev};

use crate::error::MonitorError;
use crate::models::InterfaceCounters;
use serde::Deserialize;
use sysinfo::Networks;

/// Capability to read cumulative byte counters for every interface.
///
/// Implementations return rows sorted by interface name so "first interface"
/// is stable across ticks.
pub trait CounterSource {
    fn read_counters(&mut self) -> Result<Vec<InterfaceCounters>, MonitorError>;
}

impl<S: CounterSource + ?Sized> CounterSource for Box<S> {
    fn read_counters(&mut self) -> Result<Vec<InterfaceCounters>, MonitorError> {
        (**self).read_counters()
    }
}

/// Which counter source the binary wires in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CounterSourceKind {
    #[default]
    Sysinfo,
    Procfs,
}

impl CounterSourceKind {
    pub fn build(self) -> Box<dyn CounterSource + Send> {
        match self {
            CounterSourceKind::Sysinfo => Box::new(SysinfoCounterSource::new()),
            CounterSourceKind::Procfs => Box::new(ProcNetDevSource::default()),
        }
    }
}

/// Counters via `sysinfo::Networks` (cross-platform).
pub struct SysinfoCounterSource {
    networks: Networks,
}

impl Default for SysinfoCounterSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SysinfoCounterSource {
    pub fn new() -> Self {
        Self {
            networks: Networks::new_with_refreshed_list(),
        }
    }
}

impl CounterSource for SysinfoCounterSource {
    fn read_counters(&mut self) -> Result<Vec<InterfaceCounters>, MonitorError> {
        // `true` drops interfaces that disappeared and picks up new ones (VPN up/down).
        self.networks.refresh(true);
        let mut interfaces: Vec<InterfaceCounters> = self
            .networks
            .list()
            .iter()
            .map(|(name, data)| {
                InterfaceCounters::new(name.clone(), data.total_received(), data.total_transmitted())
            })
            .collect();
        interfaces.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(interfaces)
    }
}
