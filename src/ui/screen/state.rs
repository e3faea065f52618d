use crate::countdown::{CounterState, DEFAULT_START};
use crate::ui::mvi::UiState;

/// What the screen shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenState {
    Counting(u32),
    /// Terminal.
    Done,
}

impl Default for ScreenState {
    fn default() -> Self {
        Self::Counting(DEFAULT_START)
    }
}

impl UiState for ScreenState {}

impl ScreenState {
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }
}

impl From<CounterState> for ScreenState {
    fn from(state: CounterState) -> Self {
        if state.done {
            Self::Done
        } else {
            Self::Counting(state.remaining)
        }
    }
}
