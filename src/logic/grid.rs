//! Top Sites grid composition
//!
//! Turns a possibly shorter (or longer) sequence of links into exactly
//! `count` ordered slots, each either occupied by a tile or empty.

use super::tile::Tile;
use crate::model::Link;
use crate::TileMode;

/// Identity of a rendered slot
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SlotKey {
    /// guid, else url
    Link(String),
    /// Empty slot (or a link with no identity) keyed by its position
    Index(usize),
}

/// One grid position
#[derive(Debug, Clone, Copy)]
pub enum Slot<'a> {
    Occupied(Tile<'a>),
    Empty { index: usize },
}

impl<'a> Slot<'a> {
    pub fn index(&self) -> usize {
        match self {
            Slot::Occupied(tile) => tile.index(),
            Slot::Empty { index } => *index,
        }
    }

    pub fn key(&self) -> SlotKey {
        match self {
            Slot::Occupied(tile) => tile
                .link()
                .key()
                .map(|key| SlotKey::Link(key.to_string()))
                .unwrap_or(SlotKey::Index(tile.index())),
            Slot::Empty { index } => SlotKey::Index(*index),
        }
    }

    pub fn tile(&self) -> Option<&Tile<'a>> {
        match self {
            Slot::Occupied(tile) => Some(tile),
            Slot::Empty { .. } => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty { .. })
    }
}

/// Fixed-length grid of Top Sites
#[derive(Debug, Clone, Copy)]
pub struct TileGrid<'a> {
    links: &'a [Link],
    count: usize,
    mode: TileMode,
}

impl<'a> TileGrid<'a> {
    pub fn new(links: &'a [Link], count: usize, mode: TileMode) -> Self {
        Self { links, count, mode }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn mode(&self) -> TileMode {
        self.mode
    }

    /// Exactly `count` slots, links in input order then empty slots
    ///
    /// # Examples
    /// ```
    /// use topsites::model::Link;
    /// use topsites::logic::grid::TileGrid;
    /// use topsites::TileMode;
    ///
    /// let links: Vec<Link> = (0..5).map(|i| Link::new(format!("https://site{}.com", i))).collect();
    /// let slots = TileGrid::new(&links, 8, TileMode::View).slots();
    ///
    /// assert_eq!(slots.len(), 8);
    /// assert!(slots[..5].iter().all(|s| !s.is_empty()));
    /// assert!(slots[5..].iter().all(|s| s.is_empty()));
    /// ```
    pub fn slots(&self) -> Vec<Slot<'a>> {
        (0..self.count).map(|index| self.slot(index)).collect()
    }

    /// Slot at `index` (empty beyond the link sequence)
    pub fn slot(&self, index: usize) -> Slot<'a> {
        match self.links.get(index) {
            Some(link) if index < self.count => Slot::Occupied(Tile::new(link, index, self.mode)),
            _ => Slot::Empty { index },
        }
    }

    /// Tile at `index`, if the slot is occupied
    pub fn tile(&self, index: usize) -> Option<Tile<'a>> {
        match self.slot(index) {
            Slot::Occupied(tile) => Some(tile),
            Slot::Empty { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links(n: usize) -> Vec<Link> {
        (0..n)
            .map(|i| Link::new(format!("https://site{}.com", i)))
            .collect()
    }

    #[test]
    fn test_pads_with_placeholders() {
        let links = links(5);
        let slots = TileGrid::new(&links, 8, TileMode::View).slots();

        assert_eq!(slots.len(), 8);
        for (i, slot) in slots.iter().enumerate() {
            assert_eq!(slot.index(), i);
        }
        for (i, slot) in slots[..5].iter().enumerate() {
            assert_eq!(slot.tile().unwrap().link().url, format!("https://site{}.com", i));
        }
        assert!(slots[5..].iter().all(Slot::is_empty));
    }

    #[test]
    fn test_truncates_extra_links() {
        let links = links(12);
        let grid = TileGrid::new(&links, 6, TileMode::View);
        let slots = grid.slots();
        assert_eq!(slots.len(), 6);
        assert!(slots.iter().all(|s| !s.is_empty()));
        assert!(grid.slot(7).is_empty());
    }

    #[test]
    fn test_zero_count() {
        let links = links(3);
        assert!(TileGrid::new(&links, 0, TileMode::View).slots().is_empty());
    }

    #[test]
    fn test_slot_keys() {
        let mut links = links(2);
        links[0].guid = Some("guid-0".to_string());
        links[1].url = String::new();
        let slots = TileGrid::new(&links, 3, TileMode::View).slots();

        assert_eq!(slots[0].key(), SlotKey::Link("guid-0".to_string()));
        assert_eq!(slots[1].key(), SlotKey::Index(1));
        assert_eq!(slots[2].key(), SlotKey::Index(2));
    }

    #[test]
    fn test_url_key() {
        let links = links(1);
        let slot = TileGrid::new(&links, 1, TileMode::View).slot(0);
        assert_eq!(slot.key(), SlotKey::Link("https://site0.com".to_string()));
    }

    #[test]
    fn test_mode_reaches_tiles() {
        let links = links(2);
        let grid = TileGrid::new(&links, 2, TileMode::Edit);
        assert_eq!(grid.tile(1).unwrap().mode(), TileMode::Edit);
        assert!(grid.tile(2).is_none());
    }
}
