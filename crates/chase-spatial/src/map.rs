//! JSON map loading.
//!
//! A map is a JSON array of columns, each an array of cells; `1` marks a
//! blocked tile, anything else is open:
//!
//! ```text
//! [[1, 1, 1, 1],
//!  [0, 0, 0, 1],
//!  [0, 0, 0, 1],
//!  [1, 1, 1, 1]]
//! ```
//!
//! Entry `map[i][j]` is column `i`, row `j`.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::grid::map_dimensions;
use crate::SpatialResult;

/// Parse a map from any reader and check it is rectangular.
pub fn load_map_reader<R: Read>(reader: R) -> SpatialResult<Vec<Vec<u8>>> {
    let map: Vec<Vec<u8>> = serde_json::from_reader(reader)?;
    map_dimensions(&map)?;
    Ok(map)
}

/// Parse a map from a JSON file.
pub fn load_map_path(path: &Path) -> SpatialResult<Vec<Vec<u8>>> {
    let file = File::open(path)?;
    load_map_reader(BufReader::new(file))
}
