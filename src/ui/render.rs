use ratatui::layout::Alignment;
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::glyphs::{block_lines, block_width, GLYPH_HEIGHT};
use crate::ui::layout::centered_rect_by_size;
use crate::ui::screen::ScreenState;

pub const DONE_TEXT: &str = "Done";

/// Text the screen shows for `state`.
pub fn screen_text(state: &ScreenState) -> String {
    match state {
        ScreenState::Counting(remaining) => remaining.to_string(),
        ScreenState::Done => DONE_TEXT.to_string(),
    }
}

/// Draw the whole screen. Reads `app`, never mutates anything.
pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let palette = app.palette();
    frame.render_widget(Block::default().style(palette.surface()), area);

    let screen = app.screen();
    let text = screen_text(&screen);
    let style = if screen.is_done() {
        palette.done()
    } else {
        palette.counter()
    };

    let fits_large = block_width(&text) <= area.width && GLYPH_HEIGHT <= area.height;
    let lines: Vec<Line> = match block_lines(&text) {
        Some(rows) if app.large_text() && fits_large => rows.into_iter().map(Line::from).collect(),
        _ => vec![Line::from(text)],
    };

    let width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let target = centered_rect_by_size(area, width, lines.len() as u16);
    frame.render_widget(
        Paragraph::new(lines).style(style).alignment(Alignment::Center),
        target,
    );
}
