//! Feature (region) discovery.
//!
//! A feature is a maximal set of connected tiles sharing one continuous area
//! of a given type: a road, a city or a field. Features are derived on demand
//! from the board and never stored.
//!
//! Tracing is coarse: tiles connect through any matching segment of the
//! requested area type, regardless of the segment's connectivity group. Two
//! separate roads on one tile therefore join a single feature. Scoring relies
//! on this granularity, so it must stay consistent across the crate.

use crate::board::Board;
use crate::coord::{Coord, Direction};
use crate::edges::facing_segments;
use crate::player::PlayerId;
use crate::tiles::{AreaType, TileLookup};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// A traced region of the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    /// Area type the region was traced for
    pub area: AreaType,
    /// Cells belonging to the region
    pub tiles: HashSet<Coord>,
    /// Meeples on the region per owner
    pub meeples: HashMap<PlayerId, u32>,
    /// Boundary segments without a matching neighbour
    pub open_edges: u32,
}

impl Feature {
    fn empty(area: AreaType) -> Self {
        Self {
            area,
            tiles: HashSet::new(),
            meeples: HashMap::new(),
            open_edges: 0,
        }
    }

    /// A feature is complete when no boundary is left open
    pub fn is_complete(&self) -> bool {
        self.open_edges == 0
    }

    /// Number of tiles in the region
    pub fn size(&self) -> usize {
        self.tiles.len()
    }

    /// Total meeples standing on the region
    pub fn meeple_count(&self) -> u32 {
        self.meeples.values().sum()
    }
}

/// Trace the region of `area` reachable from `start`.
///
/// Walks the board depth-first with an explicit stack. Only cells holding a
/// tile join the region; an empty or reserved start yields an empty feature.
/// For every side of a visited tile whose edge carries `area`, the first such
/// segment is checked against the neighbour:
/// - no tile there: the edge is open;
/// - the neighbour's facing edge has `area` at the mirrored position: the
///   walk continues into it;
/// - otherwise the edge is open.
///
/// Meeples count when their area type equals `area`, credited to the owner
/// of the tile they stand on.
pub fn trace_feature<L: TileLookup + ?Sized>(
    board: &Board,
    lookup: &L,
    start: Coord,
    area: AreaType,
) -> Feature {
    let mut feature = Feature::empty(area);
    let mut visited: HashSet<Coord> = HashSet::new();
    let mut stack = vec![start];

    while let Some(coord) = stack.pop() {
        if !visited.insert(coord) {
            continue;
        }
        let Some(tile) = board.get(coord) else {
            continue;
        };

        feature.tiles.insert(coord);

        if let Some(meeple) = &tile.meeple {
            if meeple.segment_type == area {
                *feature.meeples.entry(tile.owner.clone()).or_insert(0) += 1;
            }
        }

        for dir in Direction::ALL {
            let segments = facing_segments(lookup, &tile.tile_type, tile.rotation, dir);
            let Some(segment) = segments.iter().find(|s| s.area == area) else {
                continue;
            };

            let next = coord.neighbor(dir);
            let Some(neighbor) = board.get(next) else {
                feature.open_edges += 1;
                continue;
            };

            let theirs = facing_segments(
                lookup,
                &neighbor.tile_type,
                neighbor.rotation,
                dir.opposite(),
            );
            let mirrored = segments.len().checked_sub(1 + segment.index);
            let connects = mirrored.is_some_and(|index| {
                theirs
                    .iter()
                    .any(|s| s.index == index && s.area == area)
            });

            if connects {
                stack.push(next);
            } else {
                feature.open_edges += 1;
            }
        }
    }

    feature
}

/// Trace the region of `area` for every tile on the board that touches it,
/// each region once.
///
/// Regions come out in board order of their first tile.
pub fn all_features<L: TileLookup + ?Sized>(
    board: &Board,
    lookup: &L,
    area: AreaType,
) -> Vec<Feature> {
    let mut seen: HashSet<Coord> = HashSet::new();
    let mut features = Vec::new();

    for (coord, tile) in board.tiles() {
        if seen.contains(&coord) {
            continue;
        }
        let touches_area = Direction::ALL.iter().any(|&dir| {
            facing_segments(lookup, &tile.tile_type, tile.rotation, dir)
                .iter()
                .any(|s| s.area == area)
        });
        if !touches_area {
            continue;
        }

        let feature = trace_feature(board, lookup, coord, area);
        seen.extend(feature.tiles.iter().copied());
        features.push(feature);
    }

    features
}
