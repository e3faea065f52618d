use crate::config::UiConfig;
use crate::ui::mvi::Reducer;
use crate::ui::screen::{ScreenIntent, ScreenReducer, ScreenState};
use crate::ui::theme::Palette;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    screen: ScreenState,
    palette: Palette,
    large_text: bool,
    /// Set when the screen changed since the last frame.
    dirty: bool,
}

impl App {
    pub fn new(config: &UiConfig) -> Self {
        Self {
            should_quit: false,
            screen: ScreenState::default(),
            palette: Palette::for_theme(config.theme),
            large_text: config.large_text,
            dirty: true,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn screen(&self) -> ScreenState {
        self.screen
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    pub fn large_text(&self) -> bool {
        self.large_text
    }

    pub fn dispatch(&mut self, intent: ScreenIntent) {
        let before = self.screen;
        dispatch_mvi!(self, screen, ScreenReducer, intent);
        if self.screen != before {
            self.dirty = true;
        }
    }

    pub fn on_resize(&mut self) {
        self.dirty = true;
    }

    /// Returns whether a redraw is due and clears the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
