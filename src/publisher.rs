// Latest display state: one writer (the sampler), any number of readers.

use tokio::sync::watch;

use crate::formatter::{format_result, format_tooltip};
use crate::models::{DisplayState, SpeedResult};

/// Holds the most recent tick result and its tooltip text.
///
/// Backed by a `watch` channel: `publish` swaps the whole value under a short
/// lock, readers clone it out, so nobody sees a half-written state.
#[derive(Clone)]
pub struct Publisher {
    tx: watch::Sender<DisplayState>,
}

impl Default for Publisher {
    fn default() -> Self {
        Self::new()
    }
}

impl Publisher {
    /// Starts at zero speeds, as the tray shows before the first tick.
    pub fn new() -> Self {
        let (tx, _) = watch::channel(DisplayState {
            result: SpeedResult::default(),
            text: format_tooltip(0, 0),
            interface_name: String::new(),
        });
        Self { tx }
    }

    /// Replace the latest state with `result`. Readers are notified even when
    /// the text did not change.
    pub fn publish(&self, result: SpeedResult, interface_name: &str) {
        let state = DisplayState {
            text: format_result(&result),
            result,
            interface_name: interface_name.to_string(),
        };
        // send_replace stores the value even with no receivers alive.
        self.tx.send_replace(state);
    }

    pub fn latest(&self) -> DisplayState {
        self.tx.borrow().clone()
    }

    pub fn latest_text(&self) -> String {
        self.tx.borrow().text.clone()
    }

    /// Push-style reader: `changed().await` wakes on every publish.
    pub fn subscribe(&self) -> watch::Receiver<DisplayState> {
        self.tx.subscribe()
    }
}
