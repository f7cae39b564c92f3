// Rate engine: rollover-safe byte deltas over elapsed time.

use std::time::Instant;

use crate::counter_source::CounterSource;
use crate::error::MonitorError;
use crate::models::{CounterSample, SpeedResult};
use crate::selector::select_interface;

/// Divisor used when the clock did not advance between two samples.
const FALLBACK_DELTA_SECS: f64 = 1.0;

/// Bytes transferred between two readings of a cumulative counter.
///
/// `current < last` is taken as exactly one wrap at the 64-bit boundary.
pub fn counter_delta(last: u64, current: u64) -> u64 {
    if current >= last {
        current - last
    } else {
        (u64::MAX - last) + current + 1
    }
}

/// Bytes per second for `delta` over `secs`, floored. `secs <= 0` uses a 1 s divisor.
pub fn rate_per_sec(delta: u64, secs: f64) -> u64 {
    let secs = if secs > 0.0 { secs } else { FALLBACK_DELTA_SECS };
    (delta as f64 / secs) as u64
}

/// Stateful throughput monitor. Owns the last good sample; only one task may sample.
pub struct Monitor<S> {
    source: S,
    exclude: Vec<String>,
    last_sample: CounterSample,
    interface_name: String,
}

impl<S: CounterSource> Monitor<S> {
    /// Read counters once to establish the baseline sample and active interface.
    /// Fails when no usable interface exists or the source errors.
    pub fn prime(source: S) -> Result<Self, MonitorError> {
        Self::prime_with_exclusions(source, Vec::new())
    }

    /// Like [`Monitor::prime`], additionally skipping `exclude` interface names.
    pub fn prime_with_exclusions(source: S, exclude: Vec<String>) -> Result<Self, MonitorError> {
        Self::prime_at(source, exclude, Instant::now())
    }

    /// Prime with an explicit capture time.
    pub fn prime_at(
        mut source: S,
        exclude: Vec<String>,
        now: Instant,
    ) -> Result<Self, MonitorError> {
        let interfaces = source.read_counters()?;
        let selection = select_interface(&interfaces, &exclude)?;
        Ok(Self {
            source,
            exclude,
            last_sample: CounterSample {
                bytes_recv: selection.bytes_recv,
                bytes_sent: selection.bytes_sent,
                timestamp: now,
            },
            interface_name: selection.name,
        })
    }

    /// Compute rates since the previous successful sample.
    pub fn sample(&mut self) -> SpeedResult {
        self.sample_at(Instant::now())
    }

    /// [`Monitor::sample`] with an explicit capture time.
    ///
    /// On failure the baseline is left untouched, so the next success spans the gap.
    pub fn sample_at(&mut self, now: Instant) -> SpeedResult {
        match self.measure(now) {
            Ok((download_bps, upload_bps)) => SpeedResult::new(download_bps, upload_bps),
            Err(e) => SpeedResult::failed(e),
        }
    }

    fn measure(&mut self, now: Instant) -> Result<(u64, u64), MonitorError> {
        let interfaces = self.source.read_counters()?;
        let selection = select_interface(&interfaces, &self.exclude)?;
        let current = CounterSample {
            bytes_recv: selection.bytes_recv,
            bytes_sent: selection.bytes_sent,
            timestamp: now,
        };

        // None when `now` is earlier than the last capture.
        let secs = now
            .checked_duration_since(self.last_sample.timestamp)
            .map(|d| d.as_secs_f64())
            .unwrap_or(0.0);
        let download = rate_per_sec(
            counter_delta(self.last_sample.bytes_recv, current.bytes_recv),
            secs,
        );
        let upload = rate_per_sec(
            counter_delta(self.last_sample.bytes_sent, current.bytes_sent),
            secs,
        );

        self.last_sample = current;
        self.interface_name = selection.name;
        Ok((download, upload))
    }

    /// Label of the interface chosen on the last successful read.
    pub fn interface_name(&self) -> &str {
        &self.interface_name
    }

    pub fn last_sample(&self) -> CounterSample {
        self.last_sample
    }
}
