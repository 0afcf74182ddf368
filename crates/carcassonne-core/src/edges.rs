//! Edge resolution for rotated tiles and segment matching between neighbours.

use crate::coord::Direction;
use crate::tiles::{Segment, TileLookup, TileType};

/// Number of clockwise quarter turns for a rotation in degrees.
///
/// Any integer is accepted and wrapped into 0-3; negative angles turn
/// counter-clockwise.
pub fn quarter_turns(rotation: i32) -> usize {
    (rotation.rem_euclid(360) / 90) as usize
}

/// Map each facing side (N, E, S, W) of a rotated tile to the definition's
/// unrotated edge index.
///
/// 0 → `[0,1,2,3]`, 90 → `[3,0,1,2]`, 180 → `[2,3,0,1]`, 270 → `[1,2,3,0]`.
pub fn effective_edge_indices(rotation: i32) -> [usize; 4] {
    let mut indices = [0, 1, 2, 3];
    indices.rotate_right(quarter_turns(rotation));
    indices
}

/// Segments on the given facing side of a tile placed with `rotation`
pub fn facing_segments<'a, L: TileLookup + ?Sized>(
    lookup: &'a L,
    tile_type: &TileType,
    rotation: i32,
    side: Direction,
) -> &'a [Segment] {
    let edge = effective_edge_indices(rotation)[side.side_index()];
    lookup.edge_segments(tile_type, edge)
}

/// Whether two touching edges fit together.
///
/// Segments pair up mirrored (`a[i]` with `b[n-1-i]`) because the two edges
/// are walked in opposite directions. Only area types are compared; group ids
/// are tile-local.
pub fn segments_match(a: &[Segment], b: &[Segment]) -> bool {
    a.len() == b.len()
        && a.iter()
            .zip(b.iter().rev())
            .all(|(left, right)| left.area == right.area)
}
