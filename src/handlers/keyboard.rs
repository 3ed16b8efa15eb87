//! Keyboard Input Handler
//!
//! Routes keys to the edit form, the open link menu or the grid, in that
//! order, and turns them into tile interactions.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use topsites::logic::form::submit_edit_form;
use topsites::logic::grid::TileGrid;
use topsites::logic::link_menu::{next_item, prev_item, resolve_options, TOP_SITES_CONTEXT_MENU_OPTIONS};
use topsites::logic::navigation::{move_focus, next_slot, prev_slot, Direction};
use topsites::logic::tile::{ClickOutcome, TileControls};
use topsites::model::EditFormState;
use topsites::TileMode;

use crate::App;

/// Handle keyboard input
pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<()> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.model.ui.should_quit = true;
        return Ok(());
    }

    if app.model.ui.edit_form.is_some() {
        handle_form_key(app, key);
    } else if app.model.grid.has_open_menu() {
        handle_menu_key(app, key);
    } else {
        handle_grid_key(app, key);
    }
    Ok(())
}

/// Keys while the add/edit form is showing
fn handle_form_key(app: &mut App, key: KeyEvent) {
    let Some(form) = app.model.ui.edit_form.as_mut() else {
        return;
    };

    match key.code {
        KeyCode::Esc => app.model.ui.close_all_modals(),
        KeyCode::Tab | KeyCode::BackTab => form.next_field(),
        KeyCode::Backspace => {
            form.focused_input_mut().pop();
        }
        KeyCode::Enter => {
            let form = form.clone();
            if submit_edit_form(&form, &mut app.dispatcher) {
                app.model.ui.close_all_modals();
            } else {
                app.model.show_toast("Error: a URL is required".to_string());
            }
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            form.focused_input_mut().push(c);
        }
        _ => {}
    }
}

/// Keys while a tile's link menu is open
fn handle_menu_key(app: &mut App, key: KeyEvent) {
    let Some(index) = app.model.grid.interaction.open_tile() else {
        return;
    };
    let grid = TileGrid::new(&app.rows, app.model.grid.count, app.model.grid.mode);
    let Some(tile) = grid.tile(index) else {
        app.model.grid.interaction.show_context_menu = false;
        return;
    };
    let items = resolve_options(TOP_SITES_CONTEXT_MENU_OPTIONS, tile.link());
    let vim = app.model.ui.vim_mode;

    match key.code {
        KeyCode::Esc | KeyCode::Char('m') | KeyCode::Char('q') => {
            tile.on_menu_update(&mut app.model.grid.interaction, false);
        }
        KeyCode::Up => app.model.ui.menu_selection = prev_item(&items, app.model.ui.menu_selection),
        KeyCode::Down => app.model.ui.menu_selection = next_item(&items, app.model.ui.menu_selection),
        KeyCode::Char('k') if vim => {
            app.model.ui.menu_selection = prev_item(&items, app.model.ui.menu_selection)
        }
        KeyCode::Char('j') if vim => {
            app.model.ui.menu_selection = next_item(&items, app.model.ui.menu_selection)
        }
        KeyCode::Enter => {
            let selection = app.model.ui.menu_selection;
            let view = tile.view(&app.model.grid.interaction, &app.messages);
            if let TileControls::ContextMenu { menu, .. } = view.controls {
                let interaction = &mut app.model.grid.interaction;
                menu.activate(selection, &mut app.dispatcher, |show| {
                    tile.on_menu_update(interaction, show)
                });
            }
        }
        _ => {}
    }
}

/// Keys on the grid itself
fn handle_grid_key(app: &mut App, key: KeyEvent) {
    let count = app.model.grid.count;
    let focused = app.model.grid.focused_slot;
    let columns = app.model.grid.columns;
    let vim = app.model.ui.vim_mode;

    let direction = match key.code {
        KeyCode::Left => Some(Direction::Left),
        KeyCode::Right => Some(Direction::Right),
        KeyCode::Up => Some(Direction::Up),
        KeyCode::Down => Some(Direction::Down),
        KeyCode::Char('h') if vim => Some(Direction::Left),
        KeyCode::Char('l') if vim => Some(Direction::Right),
        KeyCode::Char('k') if vim => Some(Direction::Up),
        KeyCode::Char('j') if vim => Some(Direction::Down),
        _ => None,
    };
    if let Some(direction) = direction {
        app.model.grid.focused_slot = move_focus(focused, direction, columns, count);
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.model.ui.should_quit = true,
        KeyCode::Tab => app.model.grid.focused_slot = next_slot(focused, count),
        KeyCode::BackTab => app.model.grid.focused_slot = prev_slot(focused, count),
        KeyCode::Char('e') => {
            app.model.grid.toggle_mode();
            log::debug!("mode: {}", app.model.grid.mode.as_str());
        }
        _ => match app.model.grid.mode {
            TileMode::View => handle_view_key(app, key),
            TileMode::Edit => handle_edit_key(app, key),
        },
    }
}

fn handle_view_key(app: &mut App, key: KeyEvent) {
    let grid = TileGrid::new(&app.rows, app.model.grid.count, app.model.grid.mode);
    let Some(tile) = grid.tile(app.model.grid.focused_slot) else {
        return;
    };

    match key.code {
        KeyCode::Enter => {
            if let ClickOutcome::Navigate(url) = tile.on_link_click(&mut app.dispatcher) {
                app.open_url(&url, false);
            }
        }
        KeyCode::Char('m') | KeyCode::Char(' ') => {
            tile.on_menu_button_click(&mut app.model.grid.interaction);
            app.model.ui.menu_selection = 0;
        }
        _ => {}
    }
}

fn handle_edit_key(app: &mut App, key: KeyEvent) {
    let index = app.model.grid.focused_slot;
    let grid = TileGrid::new(&app.rows, app.model.grid.count, app.model.grid.mode);

    let Some(tile) = grid.tile(index) else {
        // Empty slot: only adding a site is possible
        if key.code == KeyCode::Enter && index < app.model.grid.count {
            app.model.ui.edit_form = Some(EditFormState::for_slot(index, None));
        }
        return;
    };

    match key.code {
        KeyCode::Enter => {
            let link = tile.link();
            let edit_form = &mut app.model.ui.edit_form;
            tile.on_edit_button_click(&mut |slot| {
                *edit_form = Some(EditFormState::for_slot(slot, Some(link)));
            });
        }
        KeyCode::Char('p') => tile.on_pin_button_click(&mut app.dispatcher),
        KeyCode::Char('x') | KeyCode::Delete => tile.on_dismiss_button_click(&mut app.dispatcher),
        _ => {}
    }
}
