use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::icons::{IconRenderer, TileGlyph};
use super::link_menu::render_link_menu;
use super::tile_link::{render_tile_link, tile_areas};
use crate::intl::FormatMessage;
use crate::logic::grid::{Slot, TileGrid};
use crate::logic::layout::{calculate_grid_dimensions, TILE_HEIGHT};
use crate::logic::link_menu::LinkMenuProps;
use crate::logic::tile::TileControls;
use crate::logic::tile_link::TileLinkView;
use crate::model::TileInteractionState;
use crate::TileMode;

/// Draw the mode controls line of an occupied tile
fn render_controls(
    f: &mut Frame,
    area: Rect,
    controls: &TileControls,
    is_focused: bool,
    icon_renderer: &IconRenderer,
) {
    match controls {
        TileControls::ContextMenu { menu, .. } => {
            let mut glyph = icon_renderer.glyph(TileGlyph::MenuButton);
            if menu.visible {
                glyph.style = glyph.style.add_modifier(Modifier::REVERSED);
            } else if !is_focused {
                glyph.style = glyph.style.add_modifier(Modifier::DIM);
            }
            f.render_widget(
                Paragraph::new(Line::from(glyph)).alignment(Alignment::Right),
                area,
            );
        }
        TileControls::EditMenu { buttons } => {
            let mut spans = Vec::new();
            for (i, button) in buttons.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw("  "));
                }
                spans.push(icon_renderer.glyph(TileGlyph::from(button.kind)));
            }
            f.render_widget(
                Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
                area,
            );
        }
    }
}

/// Draw an empty slot; in edit mode it offers to add a site
fn render_empty_slot(
    f: &mut Frame,
    area: Rect,
    mode: TileMode,
    is_focused: bool,
    icon_renderer: &IconRenderer,
) {
    let controls = render_tile_link(f, area, &TileLinkView::placeholder(), is_focused, icon_renderer);
    if mode == TileMode::Edit {
        let mut glyph = icon_renderer.glyph(TileGlyph::AddSite);
        if is_focused {
            glyph.style = glyph.style.add_modifier(Modifier::BOLD);
        }
        f.render_widget(
            Paragraph::new(Line::from(glyph)).alignment(Alignment::Center),
            controls,
        );
    }
}

/// Rect of slot `index` inside `inner`, or None when it falls below the area
fn slot_rect(inner: Rect, index: usize, columns: usize, tile_width: u16) -> Option<Rect> {
    let columns = columns.max(1);
    let row = index / columns;
    let col = index % columns;
    let top = row.checked_mul(TILE_HEIGHT as usize)?;
    if top.checked_add(TILE_HEIGHT as usize)? > inner.height as usize {
        return None;
    }
    Some(Rect {
        x: inner.x + (col as u16).saturating_mul(tile_width),
        y: inner.y + top as u16,
        width: tile_width,
        height: TILE_HEIGHT,
    })
}

/// Render the whole grid and the open link menu, if any
///
/// Returns the number of columns used, for up/down focus movement.
#[allow(clippy::too_many_arguments)]
pub fn render_tile_grid(
    f: &mut Frame,
    area: Rect,
    grid: &TileGrid,
    state: &TileInteractionState,
    focused_slot: usize,
    menu_selection: usize,
    intl: &dyn FormatMessage,
    icon_renderer: &IconRenderer,
) -> usize {
    let title = format!(
        " {} ({}) ",
        intl.format_message("header_top_sites"),
        grid.mode().as_str()
    );
    let (border_color, toggle_id) = match grid.mode() {
        TileMode::View => (Color::Gray, "edit_topsites_button_text"),
        TileMode::Edit => (Color::Yellow, "edit_topsites_done_button"),
    };
    let toggle = format!(" e:{} ", intl.format_message(toggle_id));
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_bottom(Line::from(toggle).right_aligned())
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let dims = calculate_grid_dimensions(inner.width, grid.count());
    let mut open_menu: Option<(Rect, LinkMenuProps)> = None;

    for slot in grid.slots() {
        let index = slot.index();
        // Slots come in order, so everything after the first clipped one is clipped too
        let Some(rect) = slot_rect(inner, index, dims.columns, dims.tile_width) else {
            break;
        };
        let is_focused = index == focused_slot;

        match slot {
            Slot::Occupied(tile) => {
                let view = tile.view(state, intl);
                let controls_area = render_tile_link(f, rect, &view.link, is_focused, icon_renderer);
                render_controls(f, controls_area, &view.controls, is_focused, icon_renderer);
                if let TileControls::ContextMenu { menu, .. } = view.controls {
                    if menu.visible {
                        open_menu = Some((rect, menu));
                    }
                }
            }
            Slot::Empty { .. } => {
                render_empty_slot(f, rect, grid.mode(), is_focused, icon_renderer);
            }
        }
    }

    // Drawn last so it sits over neighbouring tiles
    if let Some((anchor, menu)) = open_menu {
        let controls = tile_areas(Block::default().borders(Borders::ALL).inner(anchor)).controls;
        render_link_menu(f, controls, &menu, menu_selection, intl);
    }

    dims.columns
}
