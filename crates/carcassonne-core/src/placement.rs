//! Tile placement legality.

use crate::board::Board;
use crate::coord::{Coord, Direction};
use crate::edges::{facing_segments, segments_match};
use crate::tiles::{TileLookup, TileType};

/// Rotations tried when enumerating placements
pub const ROTATIONS: [i32; 4] = [0, 90, 180, 270];

/// Check whether a tile may go on `coord` with the given rotation.
///
/// Occupancy of `coord` itself is the caller's concern. Every neighbouring
/// tile must present a matching edge, and at least one neighbour must exist:
/// a tile is never placed in isolation.
pub fn validate_placement<L: TileLookup + ?Sized>(
    board: &Board,
    lookup: &L,
    tile_type: &TileType,
    rotation: i32,
    coord: Coord,
) -> bool {
    let mut has_neighbor = false;

    for dir in Direction::ALL {
        let Some(neighbor) = board.get(coord.neighbor(dir)) else {
            continue;
        };
        has_neighbor = true;

        let ours = facing_segments(lookup, tile_type, rotation, dir);
        let theirs = facing_segments(
            lookup,
            &neighbor.tile_type,
            neighbor.rotation,
            dir.opposite(),
        );
        if !segments_match(ours, theirs) {
            return false;
        }
    }

    has_neighbor
}

/// Every reserved slot and rotation where the tile fits, in board order
pub fn valid_placements<L: TileLookup + ?Sized>(
    board: &Board,
    lookup: &L,
    tile_type: &TileType,
) -> Vec<(Coord, i32)> {
    board
        .reserved_slots()
        .flat_map(|coord| ROTATIONS.iter().map(move |&rotation| (coord, rotation)))
        .filter(|&(coord, rotation)| validate_placement(board, lookup, tile_type, rotation, coord))
        .collect()
}
