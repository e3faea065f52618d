use tokio::sync::watch;

use super::state::CounterState;

/// Observer handle over the engine's published state.
///
/// Only the latest state is kept: an observer that falls behind skips
/// straight to the newest value. Nothing is delivered before the engine
/// starts.
pub struct StateSubscription {
    rx: watch::Receiver<Option<CounterState>>,
}

impl StateSubscription {
    pub(super) fn new(mut rx: watch::Receiver<Option<CounterState>>) -> Self {
        // First `next()` yields the state current at subscription time.
        rx.mark_changed();
        Self { rx }
    }

    /// Wait for the next published state.
    ///
    /// Returns `None` once the tick loop has exited and its last state has
    /// been delivered.
    pub async fn next(&mut self) -> Option<CounterState> {
        loop {
            self.rx.changed().await.ok()?;
            if let Some(state) = *self.rx.borrow_and_update() {
                return Some(state);
            }
        }
    }

    /// Latest state without waiting, `None` before the engine starts.
    pub fn latest(&self) -> Option<CounterState> {
        *self.rx.borrow()
    }
}
