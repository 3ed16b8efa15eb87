//! Event Handlers
//!
//! - keyboard: User keyboard input (grid, link menu, edit form)
//!
//! Handlers take &mut App and turn input into tile interactions; store
//! snapshots are applied by the App itself.

pub mod keyboard;

// Re-export for convenience
pub use keyboard::handle_key;
