use anyhow::{Context, Result};
use netflow::*;
use std::io::Write;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

/// Stand-in for the tray: prints the tooltip line to stdout whenever it changes.
async fn run_display(publisher: publisher::Publisher) {
    let mut rx = publisher.subscribe();
    let mut last_text = String::new();
    loop {
        let text = rx.borrow_and_update().text.clone();
        if text != last_text {
            let mut out = std::io::stdout().lock();
            if writeln!(out, "{}", text).and_then(|_| out.flush()).is_err() {
                tracing::debug!("stdout closed; display stopped");
                return;
            }
            last_text = text;
        }
        if rx.changed().await.is_err() {
            return;
        }
    }
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        let mut sigterm =
            match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                Ok(s) => s,
                Err(_) => {
                    let _ = tokio::signal::ctrl_c().await;
                    return;
                }
            };
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {}
            _ = sigterm.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let app_config = config::AppConfig::load()?;
    let source = app_config.monitoring.counter_source.build();
    let monitor = tokio::task::spawn_blocking({
        let exclude = app_config.interfaces.exclude.clone();
        move || monitor::Monitor::prime_with_exclusions(source, exclude)
    })
    .await?
    .context("failed to initialize network monitor")?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        interface = %monitor.interface_name(),
        counter_source = ?app_config.monitoring.counter_source,
        "NetFlow started"
    );

    let publisher = publisher::Publisher::new();
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
    let sampler_handle = sampler::spawn(
        monitor,
        publisher.clone(),
        app_config.sampler_config(),
        shutdown_rx,
    );

    tokio::select! {
        _ = run_display(publisher) => {}
        _ = shutdown_signal() => {
            tracing::info!("Received shutdown signal");
        }
    }

    let _ = shutdown_tx.send(());
    let _ = sampler_handle.await;
    tracing::info!("NetFlow shutting down");
    Ok(())
}
