use crate::countdown::CounterState;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy)]
pub enum ScreenIntent {
    /// The engine published a new state.
    Published(CounterState),
}

impl Intent for ScreenIntent {}
