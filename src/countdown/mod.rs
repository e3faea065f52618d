//! Countdown core: the counter state, the engine that drives it, and the
//! subscription handle observers use to follow it.
//!
//! ```text
//! CountdownEngine ──(watch)──→ StateSubscription ──→ UI
//!   tick loop: sleep 1s, decrement, publish
//! ```

mod engine;
mod error;
mod state;
mod subscription;

pub use engine::{CountdownEngine, DEFAULT_START, TICK_PERIOD};
pub use error::CountdownError;
pub use state::CounterState;
pub use subscription::StateSubscription;
