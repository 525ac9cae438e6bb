//! Tile grid geometry.
//!
//! The navigation core reads the world through the small [`Geometry`] trait:
//! addressable tiles with a rectangle, a `blocked` flag, and four cardinal
//! neighbours.  [`TileGrid`] is the stock implementation: a uniform grid of
//! equally sized tiles laid out column-major, like the browser canvas the
//! simulation was designed for.
//!
//! Tiles are addressed by `(column, row)`; column grows to the right, row grows
//! downward.

use chase_core::{Direction, Vector};

use crate::{SpatialError, SpatialResult};

// ── TileCoord ─────────────────────────────────────────────────────────────────

/// Grid address of a tile: `(column, row)`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileCoord {
    pub column: u32,
    pub row:    u32,
}

impl TileCoord {
    #[inline]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// The coordinate one step in `direction`, or `None` when that would leave
    /// the non-negative quadrant.  Upper bounds are checked by the geometry.
    pub fn step(self, direction: Direction) -> Option<TileCoord> {
        let (dc, dr) = direction.offset();
        let column = u32::try_from(self.column as i64 + dc).ok()?;
        let row = u32::try_from(self.row as i64 + dr).ok()?;
        Some(TileCoord { column, row })
    }
}

impl std::fmt::Display for TileCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.column, self.row)
    }
}

// ── Tile ──────────────────────────────────────────────────────────────────────

/// One grid cell: an axis-aligned rectangle plus a `blocked` flag.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tile {
    pub coord:   TileCoord,
    pub x:       f64,
    pub y:       f64,
    pub width:   f64,
    pub height:  f64,
    pub blocked: bool,
}

impl Tile {
    #[inline]
    pub fn center(&self) -> Vector {
        Vector::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Half-open containment: `[x, x + width) × [y, y + height)`.
    /// NaN coordinates are never contained.
    pub fn contains(&self, point: Vector) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }
}

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Read-only view of the tile world consumed by the graph and sight code.
pub trait Geometry {
    fn columns(&self) -> u32;

    fn rows(&self) -> u32;

    /// The tile at `at`, or `None` when out of range.
    fn tile(&self, at: TileCoord) -> Option<&Tile>;

    /// The tile adjacent to `at` in `direction`, or `None` at the border.
    fn neighbor(&self, at: TileCoord, direction: Direction) -> Option<&Tile> {
        at.step(direction).and_then(|c| self.tile(c))
    }
}

// ── TileGrid ──────────────────────────────────────────────────────────────────

/// A uniform grid of `columns × rows` tiles covering a `width × height` area.
///
/// Tile size is `floor(width / columns) × floor(height / rows)`; any remainder
/// of the area is left uncovered.
#[derive(Clone, Debug)]
pub struct TileGrid {
    columns:     u32,
    rows:        u32,
    tile_width:  f64,
    tile_height: f64,
    /// Column-major: tile `(i, j)` lives at `i * rows + j`.
    tiles:       Vec<Tile>,
}

impl TileGrid {
    /// Build an all-open grid.
    pub fn new(columns: u32, rows: u32, width: f64, height: f64) -> Self {
        let tile_width = if columns > 0 { (width / columns as f64).floor() } else { 0.0 };
        let tile_height = if rows > 0 { (height / rows as f64).floor() } else { 0.0 };

        let mut tiles = Vec::with_capacity(columns as usize * rows as usize);
        for i in 0..columns {
            for j in 0..rows {
                tiles.push(Tile {
                    coord:   TileCoord::new(i, j),
                    x:       i as f64 * tile_width,
                    y:       j as f64 * tile_height,
                    width:   tile_width,
                    height:  tile_height,
                    blocked: false,
                });
            }
        }

        Self { columns, rows, tile_width, tile_height, tiles }
    }

    /// Build a grid shaped like `map` (one entry per column) and apply it.
    pub fn from_map(map: &[Vec<u8>], width: f64, height: f64) -> SpatialResult<Self> {
        let (columns, rows) = map_dimensions(map)?;
        let mut grid = TileGrid::new(columns as u32, rows as u32, width, height);
        grid.set_map(map)?;
        Ok(grid)
    }

    pub fn tile_width(&self) -> f64 {
        self.tile_width
    }

    pub fn tile_height(&self) -> f64 {
        self.tile_height
    }

    #[inline]
    fn slot(&self, at: TileCoord) -> Option<usize> {
        if at.column < self.columns && at.row < self.rows {
            Some(at.column as usize * self.rows as usize + at.row as usize)
        } else {
            None
        }
    }

    /// Block every tile whose map entry is `1`.  `map[i][j]` addresses column
    /// `i`, row `j`.  Entries not covered by the map are left untouched.
    pub fn set_map(&mut self, map: &[Vec<u8>]) -> SpatialResult<()> {
        let (columns, rows) = map_dimensions(map)?;
        if columns > self.columns as usize || rows > self.rows as usize {
            return Err(SpatialError::MapTooLarge {
                columns,
                rows,
                grid_columns: self.columns,
                grid_rows:    self.rows,
            });
        }
        for (i, column) in map.iter().enumerate() {
            for (j, &cell) in column.iter().enumerate() {
                if cell == 1 {
                    self.set_blocked(TileCoord::new(i as u32, j as u32), true);
                }
            }
        }
        Ok(())
    }

    /// Set the `blocked` flag of one tile.  Returns `true` if the flag changed.
    pub fn set_blocked(&mut self, at: TileCoord, blocked: bool) -> bool {
        let Some(slot) = self.slot(at) else {
            return false;
        };
        let tile = &mut self.tiles[slot];
        let changed = tile.blocked != blocked;
        tile.blocked = blocked;
        changed
    }

    pub fn is_blocked(&self, at: TileCoord) -> bool {
        self.tile(at).is_some_and(|t| t.blocked)
    }

    /// The tile containing `point`, blocked or not.
    pub fn find(&self, point: Vector) -> Option<&Tile> {
        if self.tile_width <= 0.0 || self.tile_height <= 0.0 || !point.is_finite() {
            return None;
        }
        let i = (point.x / self.tile_width).floor();
        let j = (point.y / self.tile_height).floor();
        if i < 0.0 || j < 0.0 {
            return None;
        }
        self.tile(TileCoord::new(i as u32, j as u32))
            .filter(|t| t.contains(point))
    }

    /// Every unblocked tile, column-major.
    pub fn free_tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.tiles.iter().filter(|t| !t.blocked)
    }

    /// Every tile, column-major.
    pub fn iter(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.tiles.iter()
    }
}

impl Geometry for TileGrid {
    fn columns(&self) -> u32 {
        self.columns
    }

    fn rows(&self) -> u32 {
        self.rows
    }

    fn tile(&self, at: TileCoord) -> Option<&Tile> {
        self.slot(at).map(|s| &self.tiles[s])
    }
}

/// `(columns, rows)` of a rectangular map, rejecting empty and ragged ones.
pub(crate) fn map_dimensions(map: &[Vec<u8>]) -> SpatialResult<(usize, usize)> {
    let columns = map.len();
    let rows = map.first().map_or(0, Vec::len);
    if columns == 0 || rows == 0 {
        return Err(SpatialError::EmptyMap);
    }
    for (column, cells) in map.iter().enumerate() {
        if cells.len() != rows {
            return Err(SpatialError::RaggedMap { column, expected: rows, got: cells.len() });
        }
    }
    Ok((columns, rows))
}
