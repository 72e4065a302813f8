//! Tests for per-color brick counting

#[cfg(test)]
mod tests {
    use brickplan::pattern::{ColorId, Palette, Pattern};
    use brickplan::plan::{Grid, Tally};

    // Tests counts for a small mixed grid
    // Verified by counting each color once per row
    #[test]
    fn test_from_grid_counts_colors() {
        let pattern = Pattern::fit(&["0r", "b0"], 2, 2, '0');
        let grid = Grid::resolve(&pattern, &Palette::builtin());

        let tally = Tally::from_grid(&grid);

        assert_eq!(tally.get("white"), 2);
        assert_eq!(tally.get("red"), 1);
        assert_eq!(tally.get("brown"), 1);
        assert_eq!(tally.get("green"), 0);
        assert_eq!(tally.len(), 3);
    }

    // Tests counts always sum to the number of cells
    // Verified by skipping the background color in the tally
    #[test]
    fn test_total_matches_cell_count() {
        let pattern = Pattern::builtin(63, 94);
        let grid = Grid::resolve(&pattern, &Palette::builtin());

        let tally = Tally::from_grid(&grid);

        assert_eq!(tally.total(), grid.cell_count());
        assert!(tally.iter().all(|(_, count)| count > 0));
    }

    // Tests zero counts are not stored
    // Verified by keeping zero entries in from_counts
    #[test]
    fn test_from_counts_drops_zero_entries() {
        let tally = Tally::from_counts([
            (ColorId::new("red"), 3),
            (ColorId::new("blue"), 0),
        ]);

        assert_eq!(tally.len(), 1);
        assert!(!tally.counts().contains_key("blue"));
        assert!(Tally::default().is_empty());
    }

    // Tests ordering by count with ties in id order
    // Verified by using an unstable sort
    #[test]
    fn test_by_descending_count() {
        let tally = Tally::from_counts([
            (ColorId::new("red"), 2),
            (ColorId::new("blue"), 2),
            (ColorId::new("white"), 9),
        ]);

        let order: Vec<(&str, usize)> = tally
            .by_descending_count()
            .into_iter()
            .map(|(id, count)| (id.as_str(), count))
            .collect();

        assert_eq!(order, vec![("white", 9), ("blue", 2), ("red", 2)]);
    }
}
