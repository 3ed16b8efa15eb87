//! Grid focus navigation
//!
//! Pure functions moving keyboard focus between grid slots. Left/right
//! wrap around the whole grid; up/down move by one row and stop at the
//! edges.

/// Direction of a focus move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Calculate the next slot with wrapping
///
/// # Examples
/// ```
/// use topsites::logic::navigation::next_slot;
///
/// assert_eq!(next_slot(0, 8), 1);
/// assert_eq!(next_slot(7, 8), 0);  // Wrap to start
/// assert_eq!(next_slot(0, 0), 0);  // Empty grid
/// ```
pub fn next_slot(current: usize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    if current >= count - 1 {
        0
    } else {
        current + 1
    }
}

/// Calculate the previous slot with wrapping
///
/// # Examples
/// ```
/// use topsites::logic::navigation::prev_slot;
///
/// assert_eq!(prev_slot(3, 8), 2);
/// assert_eq!(prev_slot(0, 8), 7);  // Wrap to end
/// ```
pub fn prev_slot(current: usize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    match current {
        0 => count - 1,
        i if i >= count => count - 1,
        i => i - 1,
    }
}

/// Move focus one step in `direction`
///
/// # Arguments
/// * `current` - Focused slot
/// * `direction` - Requested move
/// * `columns` - Slots per row in the current layout
/// * `count` - Total number of slots
///
/// # Returns
/// The newly focused slot (unchanged when an up/down move would leave the grid)
pub fn move_focus(current: usize, direction: Direction, columns: usize, count: usize) -> usize {
    let columns = columns.max(1);
    match direction {
        Direction::Right => next_slot(current, count),
        Direction::Left => prev_slot(current, count),
        Direction::Up => current.checked_sub(columns).unwrap_or(current),
        Direction::Down => {
            let below = current + columns;
            if below < count {
                below
            } else {
                current
            }
        }
    }
}
