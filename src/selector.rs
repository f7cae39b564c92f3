// Active interface selection: sum non-loopback traffic, fall back to the first idle interface.

use crate::error::MonitorError;
use crate::models::InterfaceCounters;

/// Loopback names across Linux, macOS and Windows.
pub const LOOPBACK_NAMES: &[&str] = &["lo", "lo0", "Loopback", "Loopback Pseudo-Interface 1"];

/// Aggregate counters chosen for one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub bytes_recv: u64,
    pub bytes_sent: u64,
    /// Label only; with several active interfaces the counters are a sum.
    pub name: String,
}

pub fn is_loopback(name: &str) -> bool {
    LOOPBACK_NAMES.contains(&name)
}

fn is_excluded(name: &str, exclude: &[String]) -> bool {
    is_loopback(name) || exclude.iter().any(|e| e == name)
}

/// Pick the counters to report from every interface the source returned.
///
/// Interfaces with traffic are summed and the first of them names the result.
/// When none has traffic, the first usable interface is used as-is (not summed).
/// `exclude` names are skipped exactly like loopback.
pub fn select_interface(
    interfaces: &[InterfaceCounters],
    exclude: &[String],
) -> Result<Selection, MonitorError> {
    if interfaces.is_empty() {
        return Err(MonitorError::no_interface("no network interfaces found"));
    }

    let mut usable = interfaces.iter().filter(|i| !is_excluded(&i.name, exclude));

    let mut active: Option<Selection> = None;
    for iface in usable.clone().filter(|i| i.has_traffic()) {
        match active.as_mut() {
            Some(sel) => {
                sel.bytes_recv = sel.bytes_recv.wrapping_add(iface.bytes_recv);
                sel.bytes_sent = sel.bytes_sent.wrapping_add(iface.bytes_sent);
            }
            None => {
                active = Some(Selection {
                    bytes_recv: iface.bytes_recv,
                    bytes_sent: iface.bytes_sent,
                    name: iface.name.clone(),
                })
            }
        }
    }
    if let Some(sel) = active {
        return Ok(sel);
    }

    usable
        .next()
        .map(|iface| Selection {
            bytes_recv: iface.bytes_recv,
            bytes_sent: iface.bytes_sent,
            name: iface.name.clone(),
        })
        .ok_or_else(|| MonitorError::no_interface("no active network interface found"))
}
