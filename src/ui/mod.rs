// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - icons: Glyph rendering (emoji and Nerd Fonts) with themes
// - layout: Calculates screen layout (grid, legend, status bar)
// - render: Main orchestration function that coordinates all rendering
// - tile_link: Renders one tile's link (border, icon variant, title)
// - tile_grid: Renders every slot plus the mode controls and open menu
// - link_menu: Renders the context menu popup of a tile
// - legend: Renders hotkey legend
// - status_bar: Renders bottom status bar for the focused slot
// - dialogs: Renders the add/edit top site form
// - toast: Renders toast notifications (brief pop-up messages)

pub mod dialogs;
pub mod icons;
pub mod layout;
pub mod legend;
pub mod link_menu;
pub mod render;
pub mod status_bar;
pub mod tile_grid;
pub mod tile_link;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
