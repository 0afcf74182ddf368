//! Game board representation: a sparse grid of placed tiles.
//!
//! This module contains:
//! - Placed tiles and the meeples standing on them
//! - The board map with reserved (empty but placeable) slots
//! - Board query and mutation methods
//!
//! A cell is either absent (never reached), reserved (`None`, adjacent to a
//! tile and waiting to be filled) or holds a tile. Every tile keeps its four
//! orthogonal neighbours present in the map; that is how legal placement
//! sites are found.

use crate::coord::Coord;
use crate::player::{MeepleKind, PlayerColor, PlayerId};
use crate::tiles::{AreaType, TileType};
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// A meeple standing on one area of a tile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeple {
    /// Colour of the owning player
    pub color: Option<PlayerColor>,
    /// Name of the tile area it stands on (`"castle"`, `"field2"`, ...)
    pub segment: String,
    /// Type of that area
    pub segment_type: AreaType,
    #[serde(default)]
    pub kind: MeepleKind,
}

/// A tile placed on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedTile {
    #[serde(rename = "type")]
    pub tile_type: TileType,
    /// Degrees clockwise, normally 0, 90, 180 or 270
    pub rotation: i32,
    /// Player who placed the tile
    pub owner: PlayerId,
    /// Placed during the current turn and still undoable
    #[serde(default)]
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeple: Option<Meeple>,
}

impl PlacedTile {
    /// A freshly placed, active tile without a meeple
    pub fn new(tile_type: TileType, rotation: i32, owner: impl Into<PlayerId>) -> Self {
        Self {
            tile_type,
            rotation,
            owner: owner.into(),
            active: true,
            meeple: None,
        }
    }

    /// Builder-style helper to put a meeple on the tile
    pub fn with_meeple(mut self, meeple: Meeple) -> Self {
        self.meeple = Some(meeple);
        self
    }
}

/// The sparse game board.
///
/// Iteration follows insertion order of cell keys, which is also the order
/// the board is serialized in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    cells: HashMap<Coord, Option<PlacedTile>>,
    order: Vec<Coord>,
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Query Methods ====================

    /// Tile at a cell, `None` for reserved or absent cells
    pub fn get(&self, coord: Coord) -> Option<&PlacedTile> {
        self.cells.get(&coord).and_then(Option::as_ref)
    }

    /// Mutable tile at a cell
    pub fn get_mut(&mut self, coord: Coord) -> Option<&mut PlacedTile> {
        self.cells.get_mut(&coord).and_then(Option::as_mut)
    }

    /// Whether the cell key is present (reserved or occupied)
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains_key(&coord)
    }

    /// Whether the cell is present but has no tile yet
    pub fn is_reserved(&self, coord: Coord) -> bool {
        matches!(self.cells.get(&coord), Some(None))
    }

    /// Whether no cell has ever been touched
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of placed tiles
    pub fn tile_count(&self) -> usize {
        self.cells.values().filter(|cell| cell.is_some()).count()
    }

    /// Placed tiles in insertion order
    pub fn tiles(&self) -> impl Iterator<Item = (Coord, &PlacedTile)> + '_ {
        self.order
            .iter()
            .filter_map(|coord| self.get(*coord).map(|tile| (*coord, tile)))
    }

    /// Reserved slots in insertion order
    pub fn reserved_slots(&self) -> impl Iterator<Item = Coord> + '_ {
        self.order
            .iter()
            .copied()
            .filter(|coord| self.is_reserved(*coord))
    }

    /// First tile still marked active, if any
    pub fn active_tile(&self) -> Option<Coord> {
        self.tiles().find(|(_, tile)| tile.active).map(|(coord, _)| coord)
    }

    // ==================== Mutation Methods ====================

    fn set_cell(&mut self, coord: Coord, cell: Option<PlacedTile>) {
        if self.cells.insert(coord, cell).is_none() {
            self.order.push(coord);
        }
    }

    /// Reserve a slot unless the cell already exists
    pub fn reserve(&mut self, coord: Coord) {
        if !self.cells.contains_key(&coord) {
            self.set_cell(coord, None);
        }
    }

    /// Reserve the four neighbours of a cell
    pub fn reserve_neighbors(&mut self, coord: Coord) {
        for neighbor in coord.neighbors() {
            self.reserve(neighbor);
        }
    }

    /// Put a tile on a cell and reserve its neighbours.
    ///
    /// Does not check legality; see [`crate::placement::validate_placement`].
    pub fn place(&mut self, coord: Coord, tile: PlacedTile) {
        self.set_cell(coord, Some(tile));
        self.reserve_neighbors(coord);
    }

    /// Take a tile off the board, leaving the slot reserved
    pub fn remove(&mut self, coord: Coord) -> Option<PlacedTile> {
        self.cells.get_mut(&coord).and_then(Option::take)
    }

    /// Mark every tile as no longer active
    pub fn deactivate_all(&mut self) {
        for tile in self.cells.values_mut().flatten() {
            tile.active = false;
        }
    }
}

impl Serialize for Board {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.order.len()))?;
        for coord in &self.order {
            let cell = self.cells.get(coord).and_then(Option::as_ref);
            map.serialize_entry(&coord.to_string(), &cell)?;
        }
        map.end()
    }
}

struct BoardVisitor;

impl<'de> Visitor<'de> for BoardVisitor {
    type Value = Board;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map from \"x,y\" keys to tiles or null")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Board, A::Error> {
        let mut board = Board::new();
        while let Some((key, cell)) = access.next_entry::<String, Option<PlacedTile>>()? {
            let coord: Coord = key.parse().map_err(de::Error::custom)?;
            board.set_cell(coord, cell);
        }
        Ok(board)
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Board, D::Error> {
        deserializer.deserialize_map(BoardVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(owner: &str) -> PlacedTile {
        PlacedTile::new(TileType::new("CastleCenter0"), 0, owner)
    }

    #[test]
    fn test_place_reserves_neighbors() {
        let mut board = Board::new();
        board.place(Coord::new(0, 0), tile("system"));

        assert_eq!(board.tile_count(), 1);
        for n in Coord::new(0, 0).neighbors() {
            assert!(board.is_reserved(n));
        }
        assert!(!board.contains(Coord::new(1, 1)));
        assert_eq!(board.reserved_slots().count(), 4);
    }

    #[test]
    fn test_reserve_keeps_existing_tile() {
        let mut board = Board::new();
        board.place(Coord::new(0, 0), tile("system"));
        board.place(Coord::new(1, 0), tile("player1"));

        // (0,0) is a neighbour of (1,0) but must keep its tile
        assert!(board.get(Coord::new(0, 0)).is_some());
        assert_eq!(board.reserved_slots().count(), 6);
    }

    #[test]
    fn test_remove_leaves_reserved_slot() {
        let mut board = Board::new();
        board.place(Coord::new(0, 0), tile("system"));
        board.place(Coord::new(0, 1), tile("player1"));

        let removed = board.remove(Coord::new(0, 1)).unwrap();
        assert_eq!(removed.owner, "player1");
        assert!(board.is_reserved(Coord::new(0, 1)));
        assert!(board.remove(Coord::new(0, 1)).is_none());
        assert!(board.remove(Coord::new(9, 9)).is_none());
    }

    #[test]
    fn test_active_tile_and_deactivate() {
        let mut board = Board::new();
        let mut start = tile("system");
        start.active = false;
        board.place(Coord::new(0, 0), start);
        board.place(Coord::new(1, 0), tile("player1"));

        assert_eq!(board.active_tile(), Some(Coord::new(1, 0)));
        board.deactivate_all();
        assert_eq!(board.active_tile(), None);
    }

    #[test]
    fn test_iteration_follows_insertion_order() {
        let mut board = Board::new();
        board.place(Coord::new(0, 0), tile("system"));
        board.place(Coord::new(-1, 0), tile("player1"));
        board.place(Coord::new(0, -1), tile("player2"));

        let coords: Vec<Coord> = board.tiles().map(|(c, _)| c).collect();
        assert_eq!(
            coords,
            vec![Coord::new(0, 0), Coord::new(-1, 0), Coord::new(0, -1)]
        );
    }

    #[test]
    fn test_json_uses_string_keys_and_nulls() {
        let mut board = Board::new();
        board.place(Coord::new(0, 0), tile("system"));

        let json = serde_json::to_value(&board).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 5);
        assert_eq!(obj["0,0"]["type"], "CastleCenter0");
        assert_eq!(obj["0,0"]["owner"], "system");
        assert!(obj["1,0"].is_null());
        assert!(obj["0,0"].get("meeple").is_none());
    }

    #[test]
    fn test_json_round_trip_keeps_order() {
        let mut board = Board::new();
        board.place(Coord::new(0, 0), tile("system"));
        board.place(Coord::new(1, 0), tile("player1").with_meeple(Meeple {
            color: Some(PlayerColor::Red),
            segment: "castle".into(),
            segment_type: AreaType::Castle,
            kind: MeepleKind::Follower,
        }));

        let text = serde_json::to_string(&board).unwrap();
        let restored: Board = serde_json::from_str(&text).unwrap();
        assert_eq!(restored, board);
        assert_eq!(serde_json::to_string(&restored).unwrap(), text);
    }

    #[test]
    fn test_bad_key_is_rejected() {
        let result: Result<Board, _> = serde_json::from_str(r#"{ "zero": null }"#);
        assert!(result.is_err());
    }
}
