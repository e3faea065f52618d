use ratatui::style::{Color, Modifier, Style};

use crate::config::Theme;

const DARK_BACKGROUND: Color = Color::Rgb(0x12, 0x12, 0x12);
const DARK_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
const LIGHT_BACKGROUND: Color = Color::Rgb(0xfa, 0xfa, 0xfa);
const LIGHT_TEXT: Color = Color::Rgb(0x1f, 0x1f, 0x1f);
const DONE_GREEN: Color = Color::Rgb(0x22, 0xc5, 0x5e);
const DONE_GREEN_DARK: Color = Color::Rgb(0x15, 0x80, 0x3d);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub done: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                background: DARK_BACKGROUND,
                text: DARK_TEXT,
                done: DONE_GREEN,
            },
            Theme::Light => Self {
                background: LIGHT_BACKGROUND,
                text: LIGHT_TEXT,
                done: DONE_GREEN_DARK,
            },
        }
    }

    pub fn surface(&self) -> Style {
        Style::default().bg(self.background).fg(self.text)
    }

    pub fn counter(&self) -> Style {
        self.surface().add_modifier(Modifier::BOLD)
    }

    pub fn done(&self) -> Style {
        self.surface().fg(self.done).add_modifier(Modifier::BOLD)
    }
}
