//! Layout calculation logic
//!
//! Pure functions for calculating tile grid geometry.

/// Minimum tile width in terminal cells (border + icon area + title)
pub const MIN_TILE_WIDTH: u16 = 18;

/// Tile height in terminal cells
pub const TILE_HEIGHT: u16 = 8;

/// Grid geometry for a given terminal area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDimensions {
    /// Slots per row
    pub columns: usize,
    /// Rows needed for all slots
    pub rows: usize,
    /// Width of each tile in cells
    pub tile_width: u16,
}

/// Calculate how the slots are arranged in `content_width` cells
///
/// Tiles are at least [`MIN_TILE_WIDTH`] wide; at least one column is
/// always used, and never more columns than slots.
///
/// # Examples
/// ```
/// use topsites::logic::layout::calculate_grid_dimensions;
///
/// // 8 slots fit in a single row on a 160-cell terminal
/// let dims = calculate_grid_dimensions(160, 8);
/// assert_eq!(dims.columns, 8);
/// assert_eq!(dims.rows, 1);
/// assert_eq!(dims.tile_width, 20);
///
/// // 80 cells: 4 columns of 20, two rows
/// let dims = calculate_grid_dimensions(80, 8);
/// assert_eq!(dims.columns, 4);
/// assert_eq!(dims.rows, 2);
/// ```
pub fn calculate_grid_dimensions(content_width: u16, count: usize) -> GridDimensions {
    let max_columns = (content_width / MIN_TILE_WIDTH).max(1) as usize;
    let columns = max_columns.min(count.max(1));
    let rows = count.div_ceil(columns);
    let tile_width = content_width / columns as u16;

    GridDimensions {
        columns,
        rows,
        tile_width,
    }
}
