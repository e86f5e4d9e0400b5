//! Grid module - the static world map.
//!
//! The world is a rectangular grid where each cell is either a wall or empty.
//! Uses a flat array for cache locality; coordinates are (x, y) with x running
//! left to right and y top to bottom, matching the render and matrix layers.
//! The grid only answers point containment queries; it is never mutated after
//! construction.

use thiserror::Error;

/// Minimum cells per side for a usable map.
const MIN_SIDE: usize = 2;

/// A single map cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Wall,
}

/// Construction-time validation failures. These are fatal: a malformed map
/// must abort startup, never partially render.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid must be at least {MIN_SIDE}x{MIN_SIDE} cells, got {width}x{height}")]
    TooSmall { width: usize, height: usize },
    #[error("grid rows must all have the same length: row {row} has {len} cells, expected {expected}")]
    Ragged {
        row: usize,
        len: usize,
        expected: usize,
    },
}

/// Immutable rectangular occupancy grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridMap {
    width: usize,
    height: usize,
    /// Flat row-major storage (y * width + x).
    cells: Vec<Cell>,
}

impl GridMap {
    /// Build a grid from rows of cells, validating shape.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or(0);

        if width < MIN_SIDE || height < MIN_SIDE {
            return Err(GridError::TooSmall { width, height });
        }

        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != width {
                return Err(GridError::Ragged {
                    row,
                    len: cells.len(),
                    expected: width,
                });
            }
        }

        let mut cells = Vec::with_capacity(width * height);
        for row in &rows {
            cells.extend_from_slice(row);
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Parse a grid from strings where '#' is a wall and anything else empty.
    pub fn parse(rows: &[&str]) -> Result<Self, GridError> {
        let cells = rows
            .iter()
            .map(|row| {
                row.chars()
                    .map(|ch| if ch == '#' { Cell::Wall } else { Cell::Empty })
                    .collect()
            })
            .collect();
        Self::from_rows(cells)
    }

    /// The default 8x8 arena: bordered, with interior pillars.
    pub fn default_arena() -> Result<Self, GridError> {
        Self::parse(&[
            "########",
            "#......#",
            "#.#..#.#",
            "#......#",
            "#.#..#.#",
            "#......#",
            "#..##..#",
            "########",
        ])
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline(always)]
    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some((y as usize) * self.width + (x as usize))
    }

    /// Cell at integer coordinates, `None` when out of bounds.
    pub fn cell_at(&self, x: i64, y: i64) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// True only for an in-bounds wall cell. Out of bounds is not a wall
    /// (rays exiting the grid are a no-hit, not an error).
    pub fn is_wall(&self, x: i64, y: i64) -> bool {
        matches!(self.cell_at(x, y), Some(Cell::Wall))
    }

    /// True only for an in-bounds empty cell. Out of bounds is not walkable.
    pub fn is_empty_cell(&self, x: i64, y: i64) -> bool {
        matches!(self.cell_at(x, y), Some(Cell::Empty))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_query() {
        let grid = GridMap::parse(&["###", "#.#", "###"]).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 3);
        assert!(grid.is_wall(0, 0));
        assert!(grid.is_empty_cell(1, 1));
        assert!(!grid.is_wall(1, 1));
    }

    #[test]
    fn out_of_bounds_is_neither_wall_nor_walkable() {
        let grid = GridMap::default_arena().unwrap();
        assert_eq!(grid.cell_at(-1, 0), None);
        assert_eq!(grid.cell_at(0, 8), None);
        assert!(!grid.is_wall(-1, -1));
        assert!(!grid.is_empty_cell(99, 0));
    }

    #[test]
    fn rejects_too_small() {
        let err = GridMap::parse(&["#"]).unwrap_err();
        assert_eq!(
            err,
            GridError::TooSmall {
                width: 1,
                height: 1
            }
        );
        assert!(GridMap::from_rows(Vec::new()).is_err());
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = GridMap::parse(&["###", "##", "###"]).unwrap_err();
        assert_eq!(
            err,
            GridError::Ragged {
                row: 1,
                len: 2,
                expected: 3
            }
        );
    }

    #[test]
    fn default_arena_is_bordered() {
        let grid = GridMap::default_arena().unwrap();
        for x in 0..8 {
            assert!(grid.is_wall(x, 0));
            assert!(grid.is_wall(x, 7));
        }
        for y in 0..8 {
            assert!(grid.is_wall(0, y));
            assert!(grid.is_wall(7, y));
        }
        assert!(grid.is_empty_cell(3, 3));
    }
}
