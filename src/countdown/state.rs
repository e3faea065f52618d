/// Snapshot of the countdown published by the engine.
///
/// `done` is only ever set together with `remaining == 0`, on the final
/// step of the tick loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterState {
    pub remaining: u32,
    pub done: bool,
}

impl CounterState {
    pub fn running(remaining: u32) -> Self {
        Self {
            remaining,
            done: false,
        }
    }

    pub fn finished() -> Self {
        Self {
            remaining: 0,
            done: true,
        }
    }

    /// State after one more tick. `Done` is terminal.
    pub fn next(self) -> Self {
        match self.remaining {
            0 | 1 => Self::finished(),
            n => Self::running(n - 1),
        }
    }
}
