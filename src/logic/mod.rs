//! Business Logic
//!
//! This module contains pure logic that can be unit tested without a terminal:
//! - icon: Icon variant selection (rich icon vs. screenshot + corner favicon)
//! - tile_link: Stateless tile view model
//! - tile: Tile interactions and the actions they dispatch
//! - grid: Fixed-length slot composition
//! - link_menu: Context menu options and their actions
//! - form: Add/edit top site form submission
//! - layout: Grid geometry
//! - navigation: Focus movement between slots
//! - ui: UI timing decisions

pub mod form;
pub mod grid;
pub mod icon;
pub mod layout;
pub mod link_menu;
pub mod navigation;
pub mod tile;
pub mod tile_link;
pub mod ui;
