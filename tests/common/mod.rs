//! Shared test helpers.

#![allow(dead_code, unused_imports)]

use countdown_screen::config::UiConfig;
use countdown_screen::countdown::{CounterState, StateSubscription};
use countdown_screen::ui::app::App;
use countdown_screen::ui::render::draw;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

/// Drain a subscription until the tick loop ends.
pub async fn collect_states(mut subscription: StateSubscription) -> Vec<CounterState> {
    let mut seen = Vec::new();
    while let Some(state) = subscription.next().await {
        seen.push(state);
    }
    seen
}

/// Render `app` into a `width` x `height` test terminal and return its rows.
pub fn render_rows(app: &App, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
    terminal.draw(|frame| draw(frame, app)).expect("draw");
    let buffer = terminal.backend().buffer();
    buffer
        .content()
        .chunks(width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect())
        .collect()
}

pub fn plain_ui() -> UiConfig {
    UiConfig {
        large_text: false,
        ..UiConfig::default()
    }
}
