use std::sync::mpsc;
use std::time::Duration;

use anyhow::Context;

use crate::config::Config;
use crate::countdown::{CountdownEngine, StateSubscription, DEFAULT_START};
use crate::shutdown::{ShutdownCoordinator, ShutdownPhase};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::screen::ScreenIntent;
use crate::ui::terminal_guard::setup_terminal;

/// Run the countdown screen until the user closes it or a termination
/// signal arrives.
///
/// The engine lives exactly as long as this session: it is shut down before
/// the terminal is restored.
pub fn run(config: &Config) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("countdown-rt")
        .enable_time()
        .build()
        .context("failed to build tokio runtime")?;

    let engine = CountdownEngine::new();
    {
        let _enter = runtime.enter();
        engine
            .start(DEFAULT_START)
            .context("failed to start countdown")?;
    }

    let (mut terminal, guard) = setup_terminal().context("failed to set up terminal")?;

    // No early returns past this point: the input thread only stops once the
    // session is signaled.
    let session = ShutdownCoordinator::new("session");
    let frame_interval = Duration::from_millis(config.ui.frame_interval_ms);
    let events = EventHandler::new(session.handle());
    let forwarder = runtime.spawn(forward_countdown(engine.subscribe(), events.sender()));

    let mut app = App::new(&config.ui);
    if let Some(state) = engine.current_state() {
        app.dispatch(ScreenIntent::Published(state));
    }

    let result = (|| -> anyhow::Result<()> {
        loop {
            if app.take_dirty() {
                terminal.draw(|frame| draw(frame, &app))?;
            }
            if app.should_quit() {
                return Ok(());
            }

            match events.next(frame_interval) {
                Ok(event) => {
                    handle_event(&mut app, event);
                    // Coalesce whatever queued up behind it into one frame.
                    while let Ok(event) = events.try_next() {
                        handle_event(&mut app, event);
                    }
                }
                Err(mpsc::RecvTimeoutError::Timeout) => {}
                Err(mpsc::RecvTimeoutError::Disconnected) => return Ok(()),
            }
        }
    })();

    session.signal();
    session.advance(ShutdownPhase::StoppingCountdown);
    runtime.block_on(async {
        engine.shutdown().await;
        // Subscription ends once the engine is gone.
        if let Err(err) = forwarder.await {
            if err.is_panic() {
                tracing::warn!("countdown forwarder panicked: {}", err);
            }
        }
    });

    session.advance(ShutdownPhase::RestoringTerminal);
    drop(guard);
    session.advance(ShutdownPhase::Complete);
    tracing::info!(
        final_state = ?app.screen(),
        phase = ?session.phase(),
        "session ended"
    );

    result
}

pub fn handle_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Resize(_, _) => app.on_resize(),
        AppEvent::Countdown(state) => app.dispatch(ScreenIntent::Published(state)),
        AppEvent::Shutdown => {
            tracing::info!("termination signal received");
            app.request_quit();
        }
    }
}

/// Relay every engine publication into the UI event channel.
pub async fn forward_countdown(mut subscription: StateSubscription, tx: mpsc::Sender<AppEvent>) {
    while let Some(state) = subscription.next().await {
        if tx.send(AppEvent::Countdown(state)).is_err() {
            break;
        }
    }
}
