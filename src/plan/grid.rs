//! Resolved color grid, one cell per brick
//!
//! The grid is derived once from a [`Pattern`] and a [`Palette`] and never
//! mutated afterwards. Rows are indexed from the top (row 0) down.

use crate::io::error::{PlanError, Result};
use crate::pattern::{ColorId, Palette, Pattern};
use ndarray::{Array2, ArrayView1, Axis};

/// Matrix of color ids with the dimensions of the pattern it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<ColorId>,
}

impl Grid {
    /// Resolve every pattern symbol through the palette
    ///
    /// Symbols without a mapping become the palette's background color.
    pub fn resolve(pattern: &Pattern, palette: &Palette) -> Self {
        let cells = Array2::from_shape_fn((pattern.height(), pattern.width()), |(row, col)| {
            pattern
                .symbol(row, col)
                .map_or_else(|| palette.background().clone(), |s| palette.resolve(s).clone())
        });
        Self { cells }
    }

    /// Rebuild a grid from nested rows, top row first
    ///
    /// # Errors
    ///
    /// Returns an error if the rows do not all have the same length
    pub fn from_rows(rows: Vec<Vec<ColorId>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if let Some((index, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(PlanError::MalformedExport {
                reason: format!(
                    "row {} has {} cells, expected {width}",
                    index + 1,
                    row.len()
                ),
            });
        }

        let flat: Vec<ColorId> = rows.into_iter().flatten().collect();
        let cells =
            Array2::from_shape_vec((height, width), flat).map_err(|e| PlanError::MalformedExport {
                reason: format!("grid shape {width}x{height} rejected: {e}"),
            })?;
        Ok(Self { cells })
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Color at `(row, col)`
    pub fn get(&self, row: usize, col: usize) -> Option<&ColorId> {
        self.cells.get((row, col))
    }

    /// One row, left to right
    pub fn row(&self, index: usize) -> Option<ArrayView1<'_, ColorId>> {
        (index < self.height()).then(|| self.cells.index_axis(Axis(0), index))
    }

    /// All cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = &ColorId> + '_ {
        self.cells.iter()
    }

    /// Cells with their `(row, col)` position in row-major order
    pub fn indexed_iter(&self) -> impl Iterator<Item = ((usize, usize), &ColorId)> + '_ {
        self.cells.indexed_iter()
    }

    /// Nested rows, top row first
    pub fn to_rows(&self) -> Vec<Vec<ColorId>> {
        self.cells
            .rows()
            .into_iter()
            .map(|row| row.iter().cloned().collect())
            .collect()
    }
}
