use crate::ui::mvi::Reducer;

use super::intent::ScreenIntent;
use super::state::ScreenState;

/// Maps engine publications onto the screen.
///
/// Last write wins, except that `Done` never reverts and the counter never
/// goes back up.
pub struct ScreenReducer;

impl Reducer for ScreenReducer {
    type State = ScreenState;
    type Intent = ScreenIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ScreenIntent::Published(published) => match (state, ScreenState::from(published)) {
                (ScreenState::Done, _) => ScreenState::Done,
                (ScreenState::Counting(current), ScreenState::Counting(next)) if next > current => {
                    ScreenState::Counting(current)
                }
                (_, next) => next,
            },
        }
    }
}
