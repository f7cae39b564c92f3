// Linux /proc/net/dev reader

use std::path::PathBuf;

use super::CounterSource;
use crate::error::MonitorError;
use crate::models::InterfaceCounters;

const PROC_NET_DEV: &str = "/proc/net/dev";

/// Index of transmitted bytes among the fields after "iface:".
const TX_BYTES_FIELD: usize = 8;

/// Reads counters straight from `/proc/net/dev`. Fails on hosts without procfs.
#[derive(Debug, Clone)]
pub struct ProcNetDevSource {
    path: PathBuf,
}

impl Default for ProcNetDevSource {
    fn default() -> Self {
        Self::new(PROC_NET_DEV)
    }
}

impl ProcNetDevSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CounterSource for ProcNetDevSource {
    fn read_counters(&mut self) -> Result<Vec<InterfaceCounters>, MonitorError> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            MonitorError::counter_source(format!("read {}: {}", self.path.display(), e))
        })?;
        parse_proc_net_dev(&content)
    }
}

/// Parse `/proc/net/dev` content. The two header lines are skipped; every other
/// non-blank line must be `name: rx_bytes ... tx_bytes ...`.
pub fn parse_proc_net_dev(content: &str) -> Result<Vec<InterfaceCounters>, MonitorError> {
    let mut interfaces = Vec::new();
    for line in content.lines().skip(2) {
        if line.trim().is_empty() {
            continue;
        }
        let (name, rest) = line
            .split_once(':')
            .ok_or_else(|| MonitorError::counter_source(format!("malformed line: {line:?}")))?;
        let fields: Vec<&str> = rest.split_whitespace().collect();
        if fields.len() <= TX_BYTES_FIELD {
            return Err(MonitorError::counter_source(format!(
                "expected at least {} fields for {}, got {}",
                TX_BYTES_FIELD + 1,
                name.trim(),
                fields.len()
            )));
        }
        let parse = |s: &str| {
            s.parse::<u64>().map_err(|e| {
                MonitorError::counter_source(format!("bad counter {s:?} for {}: {e}", name.trim()))
            })
        };
        interfaces.push(InterfaceCounters::new(
            name.trim(),
            parse(fields[0])?,
            parse(fields[TX_BYTES_FIELD])?,
        ));
    }
    interfaces.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(interfaces)
}
