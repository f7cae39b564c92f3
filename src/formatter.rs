// Human-readable rates for the tooltip

use crate::models::SpeedResult;

const KB: u64 = 1024;
const MB: u64 = 1024 * 1024;
const GB: u64 = 1024 * 1024 * 1024;

/// Tooltip shown while the last tick failed.
pub const TOOLTIP_ERROR: &str = "↓ -- KB/s    ↑ -- KB/s";

/// Format a byte rate with binary thresholds labelled KB/MB/GB:
/// - 0 -> `0 KB/s`
/// - below 1 KiB -> `### B/s`
/// - below 1 MiB -> `### KB/s` (floored)
/// - below 1 GiB -> `#.# MB/s`
/// - otherwise -> `#.## GB/s`
pub fn format_rate(bps: u64) -> String {
    if bps == 0 {
        return "0 KB/s".to_string();
    }
    if bps < KB {
        return format!("{} B/s", bps);
    }
    if bps < MB {
        return format!("{} KB/s", bps / KB);
    }
    if bps < GB {
        return format!("{:.1} MB/s", bps as f64 / MB as f64);
    }
    format!("{:.2} GB/s", bps as f64 / GB as f64)
}

/// `↓ <down>    ↑ <up>`
pub fn format_tooltip(download_bps: u64, upload_bps: u64) -> String {
    format!(
        "↓ {}    ↑ {}",
        format_rate(download_bps),
        format_rate(upload_bps)
    )
}

pub fn format_tooltip_error() -> String {
    TOOLTIP_ERROR.to_string()
}

/// Tooltip for a tick result; any error wins over the rates.
pub fn format_result(result: &SpeedResult) -> String {
    if result.error.is_some() {
        format_tooltip_error()
    } else {
        format_tooltip(result.download_bps, result.upload_bps)
    }
}
