// Periodic sampler: the only task that drives the rate engine.
// Each tick samples on the blocking pool and hands the result to a callback (the publisher in the binary).

use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{Duration, Instant, MissedTickBehavior, interval_at};
use tracing::{debug, error, info, instrument, warn};

use crate::counter_source::CounterSource;
use crate::error::MonitorError;
use crate::models::SpeedResult;
use crate::monitor::Monitor;
use crate::publisher::Publisher;

pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

/// Minimum spacing between "sample failed" log lines; the display still sees every failure.
pub const DEFAULT_ERROR_LOG_INTERVAL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy)]
pub struct SamplerConfig {
    pub interval: Duration,
    pub error_log_interval: Duration,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            error_log_interval: DEFAULT_ERROR_LOG_INTERVAL,
        }
    }
}

/// Run the sampling loop until `shutdown_rx` fires (or its sender is dropped).
///
/// The first tick runs one full interval after start. `on_tick` receives every
/// result, failures included, along with the active interface label.
#[instrument(skip_all, fields(interval_ms = config.interval.as_millis() as u64))]
pub async fn start_monitoring<S, F>(
    mut monitor: Monitor<S>,
    config: SamplerConfig,
    mut on_tick: F,
    mut shutdown_rx: oneshot::Receiver<()>,
) where
    S: CounterSource + Send + 'static,
    F: FnMut(SpeedResult, &str),
{
    let SamplerConfig {
        interval: period,
        error_log_interval,
    } = config;

    let mut tick = interval_at(Instant::now() + period, period);
    tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut last_error_log: Option<Instant> = None;
    let mut failing = false;
    let mut interface_name = monitor.interface_name().to_string();
    info!(interface = %interface_name, "sampler started");

    loop {
        let fired = tokio::select! {
            _ = tick.tick() => true,
            _ = &mut shutdown_rx => false,
        };
        if !fired {
            debug!("sampler shutting down");
            break;
        }

        // Timestamp from the tokio clock so paused-time runs see exact intervals.
        let now = Instant::now().into_std();
        let joined = tokio::task::spawn_blocking(move || {
            let result = monitor.sample_at(now);
            (monitor, result)
        })
        .await;
        let result = match joined {
            Ok((m, result)) => {
                monitor = m;
                result
            }
            Err(e) => {
                error!(error = %e, operation = "sample", "sampling task failed; stopping sampler");
                // Engine state went down with the task; leave the display on the error placeholder.
                on_tick(
                    SpeedResult::failed(MonitorError::counter_source(format!(
                        "sampling task failed: {e}"
                    ))),
                    &interface_name,
                );
                break;
            }
        };

        match &result.error {
            Some(e) => {
                let should_log = last_error_log.is_none_or(|t| t.elapsed() >= error_log_interval);
                if should_log {
                    warn!(error = %e, operation = "sample", "network sample failed");
                    last_error_log = Some(Instant::now());
                }
                failing = true;
            }
            None => {
                if failing {
                    info!(interface = %monitor.interface_name(), "network sampling recovered");
                    failing = false;
                }
                if monitor.interface_name() != interface_name {
                    info!(
                        from = %interface_name,
                        to = %monitor.interface_name(),
                        "active interface changed"
                    );
                    interface_name = monitor.interface_name().to_string();
                }
            }
        }

        on_tick(result, &interface_name);
    }
}

/// Spawn [`start_monitoring`] with `publisher` receiving every tick.
pub fn spawn<S>(
    monitor: Monitor<S>,
    publisher: Publisher,
    config: SamplerConfig,
    shutdown_rx: oneshot::Receiver<()>,
) -> JoinHandle<()>
where
    S: CounterSource + Send + 'static,
{
    tokio::spawn(start_monitoring(
        monitor,
        config,
        move |result, interface_name| publisher.publish(result, interface_name),
        shutdown_rx,
    ))
}
