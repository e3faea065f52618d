use ratatui::layout::Rect;

/// A `width` x `height` rect centered in `area`, clamped to fit.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centers_inside_area() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered_rect_by_size(area, 10, 4), Rect::new(35, 10, 10, 4));
    }

    #[test]
    fn clamps_to_area() {
        let area = Rect::new(2, 3, 5, 1);
        assert_eq!(centered_rect_by_size(area, 40, 5), area);
    }
}
