//! Scoring of traced features and whole boards.

use crate::board::{Board, PlacedTile};
use crate::coord::{Coord, Direction};
use crate::edges::facing_segments;
use crate::feature::{trace_feature, Feature};
use crate::player::{Player, PlayerId};
use crate::tiles::{AreaType, TileLookup};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

/// Points per tile of a completed city
const CASTLE_POINTS_PER_TILE: u32 = 2;

/// Points per tile of every other completed feature
const DEFAULT_POINTS_PER_TILE: u32 = 1;

/// Points awarded by one feature
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureScore {
    pub points: u32,
    /// Owners with the most meeples on the feature, sorted. Each receives the
    /// full `points`.
    pub winners: Vec<PlayerId>,
}

/// Points per tile for a completed feature of this type
pub fn base_points(area: AreaType) -> u32 {
    match area {
        AreaType::Castle => CASTLE_POINTS_PER_TILE,
        _ => DEFAULT_POINTS_PER_TILE,
    }
}

/// Score a feature.
///
/// Incomplete features never score. Ties for the meeple majority are not
/// split: every tied owner gets the full value.
pub fn score_feature(feature: &Feature) -> FeatureScore {
    if !feature.is_complete() {
        return FeatureScore::default();
    }

    let points = base_points(feature.area) * feature.size() as u32;
    let max = feature.meeples.values().copied().max().unwrap_or(0);
    let mut winners: Vec<PlayerId> = feature
        .meeples
        .iter()
        .filter(|(_, &count)| count == max)
        .map(|(owner, _)| owner.clone())
        .collect();
    winners.sort();

    FeatureScore { points, winners }
}

/// Connectivity group of the edge segment a meeple stands on.
///
/// Matches the area name against segment areas, falling back to the name
/// without trailing digits (`castle2` stands on a `castle` segment).
fn meeple_group<'a, L: TileLookup + ?Sized>(
    lookup: &'a L,
    tile: &PlacedTile,
    area_name: &str,
) -> Option<&'a str> {
    let base_name = area_name.trim_end_matches(|c: char| c.is_ascii_digit());

    Direction::ALL.iter().find_map(|&dir| {
        facing_segments(lookup, &tile.tile_type, tile.rotation, dir)
            .iter()
            .find(|s| s.area.as_str() == area_name || s.area.as_str() == base_name)
            .map(|s| s.group.as_str())
    })
}

/// Current score of every player.
///
/// Every listed player starts at zero. Meeple-carrying tiles are visited in
/// board order; each one not yet covered by an earlier feature traces the
/// feature of its meeple's area type. Completed features pay out to their
/// winners. The traced tiles are marked processed whether or not the feature
/// was complete, so a region holding several meeples is scored once.
pub fn calculate_scores<L: TileLookup + ?Sized>(
    board: &Board,
    players: &[Player],
    lookup: &L,
) -> HashMap<PlayerId, u32> {
    let mut scores: HashMap<PlayerId, u32> = players
        .iter()
        .map(|p| (p.player_id.clone(), 0))
        .collect();
    let mut processed: HashSet<Coord> = HashSet::new();

    for (coord, tile) in board.tiles() {
        let Some(meeple) = &tile.meeple else {
            continue;
        };
        if processed.contains(&coord) {
            continue;
        }

        if meeple_group(lookup, tile, &meeple.segment).is_none() {
            warn!(
                "No connectivity group for meeple on area {:?} of tile {} at {}",
                meeple.segment, tile.tile_type, coord
            );
            continue;
        }

        let feature = trace_feature(board, lookup, coord, meeple.segment_type);
        let result = score_feature(&feature);
        if result.points > 0 {
            debug!(
                "Feature {} of {} tiles at {} scores {} for {:?}",
                feature.area,
                feature.size(),
                coord,
                result.points,
                result.winners
            );
        }
        for winner in result.winners {
            *scores.entry(winner).or_insert(0) += result.points;
        }

        processed.extend(feature.tiles);
    }

    scores
}
