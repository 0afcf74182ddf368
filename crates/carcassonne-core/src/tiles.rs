//! Tile definitions: edge segments and named areas per tile type.
//!
//! Definitions are static data loaded once. Each tile type has four edges
//! (0 = north, 1 = east, 2 = south, 3 = west in its unrotated orientation),
//! every edge split into segments that run clockwise around the tile, so two
//! touching edges list their segments in mirrored order.
//!
//! The rules engine only ever sees definitions through [`TileLookup`], which
//! keeps tests free to supply their own tiny catalogs.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Definitions bundled with the crate, covering the standard deck
const STANDARD_TILES_JSON: &str = include_str!("../data/tiles.json");

/// Image file suffix used by tile art (`CastleTube0.png`)
const IMAGE_SUFFIX: &str = ".png";

/// Kind of terrain a segment or area belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AreaType {
    /// City
    Castle,
    Road,
    Field,
    /// Area-only, never appears on an edge
    Monastery,
    /// Area-only, never appears on an edge
    Garden,
}

impl AreaType {
    /// Lowercase name as used in tile data
    pub fn as_str(&self) -> &'static str {
        match self {
            AreaType::Castle => "castle",
            AreaType::Road => "road",
            AreaType::Field => "field",
            AreaType::Monastery => "monastery",
            AreaType::Garden => "garden",
        }
    }
}

impl fmt::Display for AreaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed slice of one tile edge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Position along the edge, clockwise
    pub index: usize,
    pub area: AreaType,
    /// Connectivity group inside the tile (`"C1"`, `"R1"`, ...)
    pub group: String,
}

impl Segment {
    /// Create a segment
    pub fn new(index: usize, area: AreaType, group: impl Into<String>) -> Self {
        Self {
            index,
            area,
            group: group.into(),
        }
    }
}

/// One side of a tile definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeDef {
    /// Unrotated side index (0-3)
    pub edge: usize,
    pub segments: Vec<Segment>,
}

/// A named region of a tile where a meeple may stand
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaDef {
    pub name: String,
    #[serde(rename = "type")]
    pub area_type: AreaType,
}

/// Static description of a tile type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileDefinition {
    #[serde(default)]
    pub edges: Vec<EdgeDef>,
    #[serde(default)]
    pub areas: Vec<AreaDef>,
}

impl TileDefinition {
    /// Segments of an unrotated edge, empty if the edge is not defined
    pub fn edge_segments(&self, edge_index: usize) -> &[Segment] {
        self.edges
            .iter()
            .find(|e| e.edge == edge_index)
            .map(|e| e.segments.as_slice())
            .unwrap_or(&[])
    }

    /// Copy of this definition turned clockwise by `quarter_turns`.
    ///
    /// Edge `k` becomes edge `(k + quarter_turns) % 4`; areas carry over as-is.
    pub fn rotated(&self, quarter_turns: usize) -> TileDefinition {
        let mut edges: Vec<EdgeDef> = self
            .edges
            .iter()
            .map(|e| EdgeDef {
                edge: (e.edge + quarter_turns) % 4,
                segments: e.segments.clone(),
            })
            .collect();
        edges.sort_by_key(|e| e.edge);

        TileDefinition {
            edges,
            areas: self.areas.clone(),
        }
    }
}

/// Key identifying a tile definition (`"CastleTube0"`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TileType(String);

impl TileType {
    /// Wrap a raw key without checking it against any catalog
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TileType {
    fn from(key: &str) -> Self {
        TileType::new(key)
    }
}

/// Read access to tile definitions.
///
/// Unknown tile types and edges degrade to empty results instead of failing,
/// so a tile with no data can never match a neighbour and ends any trace.
pub trait TileLookup {
    /// Segments of the given unrotated edge of a tile type
    fn edge_segments(&self, tile_type: &TileType, edge_index: usize) -> &[Segment];

    /// Area of a tile type by its name
    fn find_area_by_name(&self, tile_type: &TileType, area_name: &str) -> Option<&AreaDef>;
}

/// Errors while loading a tile catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Malformed tile definitions: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Tile {tile} defines edge {edge}, expected 0-3")]
    EdgeOutOfRange { tile: String, edge: usize },

    #[error("Unknown tile image {0:?}")]
    UnknownImage(String),
}

/// All tile definitions, keyed by tile type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TileCatalog {
    definitions: HashMap<TileType, TileDefinition>,
}

impl TileCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog bundled with the crate, rotation variants included
    pub fn standard() -> Result<Self, CatalogError> {
        Self::from_json(STANDARD_TILES_JSON)
    }

    /// Parse definitions from JSON and derive missing rotation variants
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let definitions: HashMap<TileType, TileDefinition> = serde_json::from_str(json)?;

        for (tile, def) in &definitions {
            if let Some(edge) = def.edges.iter().map(|e| e.edge).find(|&e| e > 3) {
                return Err(CatalogError::EdgeOutOfRange {
                    tile: tile.to_string(),
                    edge,
                });
            }
        }

        let mut catalog = Self { definitions };
        catalog.add_rotation_variants();
        Ok(catalog)
    }

    /// For every `<name>0`, derive `<name>1..3` as quarter-turn rotations
    /// unless the data already provides them.
    pub fn add_rotation_variants(&mut self) {
        let bases: Vec<(String, TileDefinition)> = self
            .definitions
            .iter()
            .filter_map(|(key, def)| {
                key.as_str()
                    .strip_suffix('0')
                    .map(|base| (base.to_string(), def.clone()))
            })
            .collect();

        for (base, def) in bases {
            for turns in 1..=3 {
                let key = TileType::new(format!("{base}{turns}"));
                if !self.definitions.contains_key(&key) {
                    self.definitions.insert(key, def.rotated(turns));
                }
            }
        }
    }

    /// Look up a definition
    pub fn get(&self, tile_type: &TileType) -> Option<&TileDefinition> {
        self.definitions.get(tile_type)
    }

    pub fn contains(&self, tile_type: &TileType) -> bool {
        self.definitions.contains_key(tile_type)
    }

    /// Number of definitions, rotation variants included
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// All known tile types, sorted
    pub fn tile_types(&self) -> Vec<&TileType> {
        let mut types: Vec<&TileType> = self.definitions.keys().collect();
        types.sort();
        types
    }

    /// Resolve an image file name (`"CastleTube0.png"`) to its tile type.
    ///
    /// The suffix must match exactly and the key must exist in the catalog.
    pub fn resolve_image(&self, image: &str) -> Result<TileType, CatalogError> {
        let key = image
            .strip_suffix(IMAGE_SUFFIX)
            .ok_or_else(|| CatalogError::UnknownImage(image.to_string()))?;
        let tile_type = TileType::new(key);
        if self.contains(&tile_type) {
            Ok(tile_type)
        } else {
            Err(CatalogError::UnknownImage(image.to_string()))
        }
    }
}

impl TileLookup for TileCatalog {
    fn edge_segments(&self, tile_type: &TileType, edge_index: usize) -> &[Segment] {
        self.definitions
            .get(tile_type)
            .map(|def| def.edge_segments(edge_index))
            .unwrap_or(&[])
    }

    fn find_area_by_name(&self, tile_type: &TileType, area_name: &str) -> Option<&AreaDef> {
        self.definitions
            .get(tile_type)?
            .areas
            .iter()
            .find(|area| area.name == area_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn areas_of(catalog: &TileCatalog, tile: &str) -> Vec<Vec<AreaType>> {
        let tile = TileType::new(tile);
        (0..4)
            .map(|edge| {
                catalog
                    .edge_segments(&tile, edge)
                    .iter()
                    .map(|s| s.area)
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_standard_catalog_loads() {
        let catalog = TileCatalog::standard().unwrap();
        // 12 base tiles, each with 3 derived rotations
        assert_eq!(catalog.len(), 48);
        for tile in catalog.tile_types() {
            for edge in 0..4 {
                assert!(
                    !catalog.edge_segments(tile, edge).is_empty(),
                    "{tile} edge {edge} has no segments"
                );
            }
        }
    }

    #[test]
    fn test_rotation_variant_moves_edges_clockwise() {
        let catalog = TileCatalog::standard().unwrap();
        let road = vec![AreaType::Field, AreaType::Road, AreaType::Field];

        // Entry road on the south side, turned three quarters ends up east
        let base = areas_of(&catalog, "CastleCenterEntry0");
        assert_eq!(base[2], road);
        let turned = areas_of(&catalog, "CastleCenterEntry3");
        assert_eq!(turned[1], road);
        assert_eq!(turned[0], vec![AreaType::Castle]);
        assert_eq!(turned[2], vec![AreaType::Castle]);
        assert_eq!(turned[3], vec![AreaType::Castle]);
    }

    #[test]
    fn test_explicit_variant_is_not_overwritten() {
        let json = r#"{
            "T0": { "edges": [ { "edge": 0, "segments": [ { "index": 0, "area": "castle", "group": "C1" } ] } ], "areas": [] },
            "T1": { "edges": [ { "edge": 0, "segments": [ { "index": 0, "area": "road", "group": "R1" } ] } ], "areas": [] }
        }"#;
        let catalog = TileCatalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.edge_segments(&"T1".into(), 0)[0].area, AreaType::Road);
        assert_eq!(catalog.edge_segments(&"T2".into(), 2)[0].area, AreaType::Castle);
    }

    #[test]
    fn test_unknown_tile_degrades_to_empty() {
        let catalog = TileCatalog::standard().unwrap();
        assert!(catalog.edge_segments(&"Nope".into(), 0).is_empty());
        assert!(catalog.edge_segments(&"CastleCenter0".into(), 7).is_empty());
        assert!(catalog.find_area_by_name(&"Nope".into(), "castle").is_none());
    }

    #[test]
    fn test_find_area_by_name() {
        let catalog = TileCatalog::standard().unwrap();
        let tile = TileType::new("CastleSidesQuad0");
        let area = catalog.find_area_by_name(&tile, "castle3").unwrap();
        assert_eq!(area.area_type, AreaType::Castle);
        assert!(catalog.find_area_by_name(&tile, "road").is_none());
    }

    #[test]
    fn test_resolve_image_is_exact() {
        let catalog = TileCatalog::standard().unwrap();
        assert_eq!(
            catalog.resolve_image("CastleTube0.png").unwrap(),
            TileType::new("CastleTube0")
        );
        assert!(catalog.resolve_image("CastleTube0").is_err());
        assert!(catalog.resolve_image("photo1_CastleTube0.png").is_err());
        assert!(catalog.resolve_image("CastleTube0.png.bak").is_err());
    }

    #[test]
    fn test_edge_out_of_range_rejected() {
        let json = r#"{ "X0": { "edges": [ { "edge": 4, "segments": [] } ] } }"#;
        assert!(matches!(
            TileCatalog::from_json(json),
            Err(CatalogError::EdgeOutOfRange { edge: 4, .. })
        ));
    }
}
