use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

/// Page layout: header, title bar, card grid, status, footer
pub fn create_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(1), // Title + Add User
            Constraint::Min(1),    // Card grid
            Constraint::Length(1), // Status
            Constraint::Length(3), // Footer
        ])
        .split(area)
        .to_vec()
}

/// A `width` x `height` rect centered in `area`, clamped to fit
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    rect
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let rect = centered_rect(40, 10, Rect::new(0, 0, 100, 30));
        assert_eq!(rect, Rect::new(30, 10, 40, 10));
    }

    #[test]
    fn test_centered_rect_clamps() {
        let area = Rect::new(0, 0, 20, 5);
        let rect = centered_rect(40, 10, area);
        assert_eq!(rect, area);
    }
}
