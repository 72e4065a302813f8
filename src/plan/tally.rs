//! Per-color brick counts

use crate::pattern::ColorId;
use crate::plan::grid::Grid;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Occurrence count of every color present in a grid
///
/// Colors with a zero count are never stored, so the counts always sum to
/// the number of cells counted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tally {
    counts: BTreeMap<ColorId, usize>,
}

impl Tally {
    /// Count the colors of every cell in `grid`
    pub fn from_grid(grid: &Grid) -> Self {
        let mut counts = BTreeMap::new();
        for color in grid.iter() {
            *counts.entry(color.clone()).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Build a tally from explicit counts, dropping zero entries
    pub fn from_counts<I>(counts: I) -> Self
    where
        I: IntoIterator<Item = (ColorId, usize)>,
    {
        Self {
            counts: counts.into_iter().filter(|&(_, count)| count > 0).collect(),
        }
    }

    /// Count for one color; zero when absent
    pub fn get(&self, id: &str) -> usize {
        self.counts.get(id).copied().unwrap_or(0)
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Number of distinct colors
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no color was counted
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Counts in color id order
    pub fn iter(&self) -> impl Iterator<Item = (&ColorId, usize)> + '_ {
        self.counts.iter().map(|(id, &count)| (id, count))
    }

    /// Counts from most to least used; equal counts keep color id order
    pub fn by_descending_count(&self) -> Vec<(&ColorId, usize)> {
        let mut sorted: Vec<(&ColorId, usize)> = self.iter().collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted
    }

    /// Underlying map from color id to count
    pub const fn counts(&self) -> &BTreeMap<ColorId, usize> {
        &self.counts
    }
}
