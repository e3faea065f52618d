use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::shutdown::{ShutdownCoordinator, ShutdownHandle};

use super::error::CountdownError;
use super::state::CounterState;
use super::subscription::StateSubscription;

/// Value the screen counts down from.
pub const DEFAULT_START: u32 = 100;

/// Wall-clock time between two ticks.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Drives a single countdown and publishes every step of it.
///
/// The engine owns the tick loop for its whole lifetime. The publishing half
/// of the state channel moves into the loop on the first successful
/// [`start`](Self::start), so there is never more than one writer and never
/// more than one loop.
pub struct CountdownEngine {
    publisher: Mutex<Option<watch::Sender<Option<CounterState>>>>,
    /// `None` until the first start publication.
    state: watch::Receiver<Option<CounterState>>,
    stop: ShutdownCoordinator,
    task: Mutex<Option<JoinHandle<()>>>,
    period: Duration,
}

impl CountdownEngine {
    pub fn new() -> Self {
        Self::with_period(TICK_PERIOD)
    }

    pub fn with_period(period: Duration) -> Self {
        let (publisher, state) = watch::channel(None);
        Self {
            publisher: Mutex::new(Some(publisher)),
            state,
            stop: ShutdownCoordinator::new("countdown"),
            task: Mutex::new(None),
            period,
        }
    }

    /// Publish `(initial, false)` and spawn the tick loop on the current
    /// tokio runtime.
    pub fn start(&self, initial: u32) -> Result<(), CountdownError> {
        if initial == 0 {
            return Err(CountdownError::InvalidStartValue);
        }

        let mut slot = self.publisher.lock();
        if self.stop.is_shutting_down() {
            return Err(CountdownError::TornDown);
        }
        if slot.is_none() {
            return Err(CountdownError::AlreadyStarted);
        }
        let runtime = Handle::try_current().map_err(|_| CountdownError::NoRuntime)?;
        let publisher = slot.take().ok_or(CountdownError::AlreadyStarted)?;

        let initial_state = CounterState::running(initial);
        publisher.send_replace(Some(initial_state));
        let handle = runtime.spawn(tick_loop(
            publisher,
            initial_state,
            self.period,
            self.stop.handle(),
        ));
        *self.task.lock() = Some(handle);

        tracing::info!(initial, period_ms = self.period.as_millis() as u64, "countdown started");
        Ok(())
    }

    /// Latest published state, `None` before `start`.
    pub fn current_state(&self) -> Option<CounterState> {
        *self.state.borrow()
    }

    pub fn subscribe(&self) -> StateSubscription {
        StateSubscription::new(self.state.clone())
    }

    /// True while the tick loop task is alive.
    pub fn is_running(&self) -> bool {
        self.task
            .lock()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Stop the tick loop and wait for it to exit.
    ///
    /// Once this returns nothing is published anymore. Safe to call more
    /// than once, and before `start`.
    pub async fn shutdown(&self) {
        let handle = {
            let mut slot = self.publisher.lock();
            self.stop.signal();
            slot.take();
            self.task.lock().take()
        };

        if let Some(handle) = handle {
            if let Err(err) = handle.await {
                if err.is_panic() {
                    tracing::warn!("countdown tick loop panicked: {}", err);
                }
            }
        }
    }
}

impl Default for CountdownEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for CountdownEngine {
    fn drop(&mut self) {
        self.stop.signal();
        if let Some(handle) = self.task.get_mut().take() {
            handle.abort();
        }
    }
}

async fn tick_loop(
    publisher: watch::Sender<Option<CounterState>>,
    mut state: CounterState,
    period: Duration,
    stop: ShutdownHandle,
) {
    while !state.done {
        tokio::select! {
            biased;
            _ = stop.wait() => {
                tracing::debug!(remaining = state.remaining, "countdown stopped before completion");
                return;
            }
            _ = tokio::time::sleep(period) => {}
        }

        // A stop signalled while the timer fired still wins.
        if stop.is_shutting_down() {
            return;
        }

        state = state.next();
        publisher.send_replace(Some(state));
        tracing::trace!(remaining = state.remaining, done = state.done, "tick");
    }

    tracing::info!("countdown finished");
}
