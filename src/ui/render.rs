use ratatui::Frame;

use super::icons::IconRenderer;
use super::{dialogs, layout, legend, status_bar, tile_grid, toast};
use crate::intl::FormatMessage;
use crate::logic::grid::TileGrid;
use crate::model::{Link, Model};

/// Main render function - orchestrates all UI rendering
///
/// `rows` are the store's current link records; the grid only ever borrows
/// them. The column count of the drawn grid is written back to the model.
pub fn render(
    f: &mut Frame,
    model: &mut Model,
    rows: &[Link],
    icon_renderer: &IconRenderer,
    intl: &dyn FormatMessage,
) {
    let size = f.area();
    let grid_model = &model.grid;
    let form_open = model.ui.edit_form.is_some();

    let layout_info = layout::calculate_layout(
        size,
        model.ui.vim_mode,
        grid_model.mode,
        grid_model.has_open_menu(),
        form_open,
    );

    let grid = TileGrid::new(rows, grid_model.count, grid_model.mode);
    let columns = tile_grid::render_tile_grid(
        f,
        layout_info.grid_area,
        &grid,
        &grid_model.interaction,
        grid_model.focused_slot,
        model.ui.menu_selection,
        intl,
        icon_renderer,
    );

    legend::render_legend(
        f,
        layout_info.legend_area,
        model.ui.vim_mode,
        grid_model.mode,
        grid_model.has_open_menu(),
        form_open,
    );

    let focused = grid.tile(grid_model.focused_slot);
    let pinned_count = rows
        .iter()
        .take(grid_model.count)
        .filter(|link| link.is_pinned)
        .count();
    status_bar::render_status_bar(
        f,
        layout_info.status_area,
        grid_model.focused_slot,
        grid_model.count,
        focused.map(|tile| tile.link()),
        grid_model.mode,
        pinned_count,
        model.ui.store_stats,
        model.ui.last_action.as_deref(),
    );

    if let Some(form) = &model.ui.edit_form {
        let is_new = grid.slot(form.index).is_empty();
        dialogs::render_edit_form(f, form, is_new, intl);
    }

    if let Some((message, _timestamp)) = &model.ui.toast_message {
        toast::render_toast(f, size, message);
    }

    model.grid.columns = columns;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intl::Messages;
    use crate::model::EditFormState;
    use crate::ui::icons::{IconMode, IconTheme};
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(model: &mut Model, rows: &[Link]) -> String {
        let backend = TestBackend::new(100, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        let renderer = IconRenderer::new(IconMode::Emoji, IconTheme::default());
        terminal
            .draw(|f| render(f, model, rows, &renderer, &Messages::new()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_full_screen_render() {
        let mut model = Model::new(8, false);
        let mut link = Link::new("https://mozilla.org");
        link.label = Some("mozilla".to_string());
        let rows = vec![link];

        let text = draw(&mut model, &rows);
        assert!(text.contains("Top Sites (Browse)"));
        assert!(text.contains("Hotkeys"));
        assert!(text.contains("URL: https://mozilla.org"));
        // 98 inner cells fit five 18-cell tiles per row
        assert_eq!(model.grid.columns, 5);
    }

    #[test]
    fn test_form_over_empty_slot_is_add_form() {
        let mut model = Model::new(8, false);
        model.ui.edit_form = Some(EditFormState::for_slot(4, None));
        let text = draw(&mut model, &[]);
        assert!(text.contains("New Top Site"));
    }

    #[test]
    fn test_toast_is_drawn() {
        let mut model = Model::new(8, false);
        model.show_toast("Opening https://mozilla.org".to_string());
        let text = draw(&mut model, &[]);
        assert!(text.contains("Opening https://mozilla.org"));
    }
}
