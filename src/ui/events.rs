use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent};
use signal_hook::consts::{SIGHUP, SIGINT, SIGQUIT, SIGTERM};
use signal_hook::SigId;

use crate::countdown::CounterState;
use crate::shutdown::ShutdownHandle;

/// Poll granularity of the input thread, so it notices shutdown quickly.
const INPUT_POLL: Duration = Duration::from_millis(50);

/// Signals that end the session.
const SESSION_SIGNALS: &[std::ffi::c_int] = &[SIGTERM, SIGHUP, SIGINT, SIGQUIT];

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    /// The countdown engine published a new state.
    Countdown(CounterState),
    /// OS termination signal received (SIGTERM, SIGHUP, SIGINT, SIGQUIT).
    Shutdown,
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    /// Spawn the input thread. It stops once `shutdown` is signaled or the
    /// handler is dropped.
    pub fn new(shutdown: ShutdownHandle) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        let spawned = thread::Builder::new()
            .name("input".to_string())
            .spawn(move || input_loop(event_tx, shutdown));
        if let Err(err) = spawned {
            tracing::error!("failed to spawn input thread: {}", err);
        }

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn try_next(&self) -> Result<AppEvent, mpsc::TryRecvError> {
        self.rx.try_recv()
    }

    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }
}

fn input_loop(event_tx: mpsc::Sender<AppEvent>, shutdown: ShutdownHandle) {
    let term_flag = Arc::new(AtomicBool::new(false));
    let registered = register_session_signals(&term_flag);
    poll_input(&event_tx, &shutdown, &term_flag);
    for id in registered {
        signal_hook::low_level::unregister(id);
    }
}

/// Point every session signal at `flag`. Failures are logged and skipped.
fn register_session_signals(flag: &Arc<AtomicBool>) -> Vec<SigId> {
    SESSION_SIGNALS
        .iter()
        .filter_map(|&signal| match signal_hook::flag::register(signal, Arc::clone(flag)) {
            Ok(id) => Some(id),
            Err(err) => {
                tracing::warn!(signal, "failed to register signal handler: {}", err);
                None
            }
        })
        .collect()
}

fn poll_input(event_tx: &mpsc::Sender<AppEvent>, shutdown: &ShutdownHandle, term_flag: &AtomicBool) {
    loop {
        if shutdown.is_shutting_down() {
            break;
        }

        if term_flag.swap(false, Ordering::Relaxed) {
            let _ = event_tx.send(AppEvent::Shutdown);
            break;
        }

        let event = match event::poll(INPUT_POLL) {
            Ok(true) => event::read(),
            Ok(false) => continue,
            Err(err) => Err(err),
        };

        let forwarded = match event {
            Ok(Event::Key(key)) => event_tx.send(AppEvent::Key(key)),
            Ok(Event::Resize(cols, rows)) => event_tx.send(AppEvent::Resize(cols, rows)),
            Ok(_) => Ok(()),
            Err(err) => {
                tracing::error!("terminal input error: {}", err);
                break;
            }
        };

        if forwarded.is_err() {
            break;
        }
    }
}
