//! Model-View-Intent (MVI) primitives for the screen.
//!
//! ```text
//! engine publication ──→ Intent ──→ Reducer ──→ State ──→ render
//! ```
//!
//! - **State**: everything the view needs, nothing more
//! - **Intent**: something that happened (a state publication)
//! - **Reducer**: pure `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
