//! 3x5 block font for the counter and the "Done" banner.

pub const GLYPH_HEIGHT: u16 = 5;
const GLYPH_WIDTH: usize = 3;
const GLYPH_SPACING: usize = 1;

fn glyph(c: char) -> Option<[&'static str; GLYPH_HEIGHT as usize]> {
    let rows = match c.to_ascii_uppercase() {
        '0' | 'O' => ["███", "█ █", "█ █", "█ █", "███"],
        '1' => [" █ ", "██ ", " █ ", " █ ", "███"],
        '2' => ["███", "  █", "███", "█  ", "███"],
        '3' => ["███", "  █", "███", "  █", "███"],
        '4' => ["█ █", "█ █", "███", "  █", "  █"],
        '5' => ["███", "█  ", "███", "  █", "███"],
        '6' => ["███", "█  ", "███", "█ █", "███"],
        '7' => ["███", "  █", "  █", "  █", "  █"],
        '8' => ["███", "█ █", "███", "█ █", "███"],
        '9' => ["███", "█ █", "███", "  █", "███"],
        'D' => ["██ ", "█ █", "█ █", "█ █", "██ "],
        'N' => ["█ █", "███", "███", "█ █", "█ █"],
        'E' => ["███", "█  ", "██ ", "█  ", "███"],
        _ => return None,
    };
    Some(rows)
}

/// Display width of `text` in the block font.
pub fn block_width(text: &str) -> u16 {
    let count = text.chars().count();
    if count == 0 {
        return 0;
    }
    (count * GLYPH_WIDTH + (count - 1) * GLYPH_SPACING) as u16
}

/// Rows of `text` in the block font, or `None` if a character has no glyph.
pub fn block_lines(text: &str) -> Option<Vec<String>> {
    let glyphs = text.chars().map(glyph).collect::<Option<Vec<_>>>()?;
    let spacer = " ".repeat(GLYPH_SPACING);
    let rows = (0..GLYPH_HEIGHT as usize)
        .map(|row| {
            glyphs
                .iter()
                .map(|g| g[row])
                .collect::<Vec<_>>()
                .join(&spacer)
        })
        .collect();
    Some(rows)
}
