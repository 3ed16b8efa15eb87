use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::TileMode;

/// Layout information for rendering
pub struct LayoutInfo {
    /// Tile grid area (including its border)
    pub grid_area: Rect,
    /// Hotkey legend area (full width)
    pub legend_area: Rect,
    /// Bottom status bar area
    pub status_area: Rect,
}

/// Calculate the screen layout for all UI components
pub fn calculate_layout(
    terminal_size: Rect,
    vim_mode: bool,
    mode: TileMode,
    menu_open: bool,
    form_open: bool,
) -> LayoutInfo {
    let legend_height = super::legend::calculate_legend_height(
        terminal_size.width,
        vim_mode,
        mode,
        menu_open,
        form_open,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),                // Tile grid
            Constraint::Length(legend_height), // Legend (exact fit for wrapped content)
            Constraint::Length(3),             // Status bar
        ])
        .split(terminal_size);

    LayoutInfo {
        grid_area: chunks[0],
        legend_area: chunks[1],
        status_area: chunks[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_stacks_areas() {
        let info = calculate_layout(Rect::new(0, 0, 200, 40), false, TileMode::View, false, false);
        assert_eq!(info.grid_area.y, 0);
        assert_eq!(info.legend_area.height, 3);
        assert_eq!(info.status_area.height, 3);
        assert_eq!(info.status_area.y, 37);
        assert_eq!(info.grid_area.height, 34);
    }
}
