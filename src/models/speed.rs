// Per-tick result and the state handed to the display shell

use crate::error::MonitorError;

/// Result of one tick. Rates are bytes per second; both are 0 when `error` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpeedResult {
    pub download_bps: u64,
    pub upload_bps: u64,
    pub error: Option<MonitorError>,
}

impl SpeedResult {
    pub fn new(download_bps: u64, upload_bps: u64) -> Self {
        Self {
            download_bps,
            upload_bps,
            error: None,
        }
    }

    pub fn failed(error: MonitorError) -> Self {
        Self {
            download_bps: 0,
            upload_bps: 0,
            error: Some(error),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Latest value held by the publisher: the tick result plus its rendered tooltip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    pub result: SpeedResult,
    pub text: String,
    /// Cosmetic label of the active interface; empty until the first publish.
    pub interface_name: String,
}
