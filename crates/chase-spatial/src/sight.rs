//! Axis-aligned line of sight.

use chase_core::{Direction, Surface, Vector};

use crate::grid::{Geometry, TileCoord};

const MARK_RADIUS: f64 = 2.0;

/// The straight run of tiles visible from an origin along one cardinal
/// direction.
///
/// The origin is always part of the run.  The run then extends tile by tile
/// while the next tile exists and is not blocked; it stops before the first
/// blocked or missing tile.  Diagonal visibility is not modelled.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxisOfSight {
    tiles: Vec<(TileCoord, Vector)>,
}

impl AxisOfSight {
    /// A `None` origin sees nothing.  A `None` direction sees only the origin.
    pub fn new(
        geometry: &dyn Geometry,
        origin: Option<TileCoord>,
        direction: Option<Direction>,
    ) -> Self {
        let Some(tile) = origin.and_then(|c| geometry.tile(c)) else {
            return Self::default();
        };

        let mut tiles = vec![(tile.coord, tile.center())];
        if let Some(direction) = direction {
            let mut cur = tile.coord;
            while let Some(next) = geometry.neighbor(cur, direction) {
                if next.blocked {
                    break;
                }
                tiles.push((next.coord, next.center()));
                cur = next.coord;
            }
        }
        Self { tiles }
    }

    pub fn can_see(&self, coord: TileCoord) -> bool {
        self.tiles.iter().any(|&(c, _)| c == coord)
    }

    pub fn tiles(&self) -> impl Iterator<Item = TileCoord> + '_ {
        self.tiles.iter().map(|&(c, _)| c)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// A small mark on every tile, joined by segments.
    pub fn draw(&self, surface: &mut dyn Surface) {
        let mut prev: Option<Vector> = None;
        for &(_, center) in &self.tiles {
            if let Some(p) = prev {
                surface.line(p, center);
            }
            surface.point(center, MARK_RADIUS);
            prev = Some(center);
        }
    }
}
