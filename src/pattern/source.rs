//! Symbol pattern fitted to the target grid dimensions

use crate::pattern::design::{BACKGROUND_SYMBOL, DESIGN};

/// Rectangular grid of design symbols, top row first
///
/// Every row holds exactly `width` symbols and there are exactly `height`
/// rows, whatever the shape of the rows it was fitted from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    rows: Vec<Vec<char>>,
    width: usize,
    height: usize,
}

impl Pattern {
    /// Fit raw symbol rows to `width` x `height`
    ///
    /// Short rows are padded with `background` and long rows truncated.
    /// Missing rows are appended as background rows; surplus rows are dropped.
    pub fn fit<S: AsRef<str>>(rows: &[S], width: usize, height: usize, background: char) -> Self {
        let mut fitted: Vec<Vec<char>> = rows
            .iter()
            .take(height)
            .map(|row| {
                let mut symbols: Vec<char> = row.as_ref().chars().take(width).collect();
                symbols.resize(width, background);
                symbols
            })
            .collect();
        fitted.resize_with(height, || vec![background; width]);

        Self {
            rows: fitted,
            width,
            height,
        }
    }

    /// The built-in design fitted to the given grid
    pub fn builtin(width: usize, height: usize) -> Self {
        Self::fit(DESIGN, width, height, BACKGROUND_SYMBOL)
    }

    /// Number of symbols per row
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Symbol at `(row, col)`, if inside the pattern
    pub fn symbol(&self, row: usize, col: usize) -> Option<char> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Rows as symbol slices, top row first
    pub fn rows(&self) -> impl Iterator<Item = &[char]> + '_ {
        self.rows.iter().map(Vec::as_slice)
    }

    /// All symbols in row-major order
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.rows.iter().flatten().copied()
    }
}
