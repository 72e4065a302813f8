//! Tests for the structured JSON export

#[cfg(test)]
mod tests {
    use brickplan::PlanError;
    use brickplan::io::configuration::PlanConfig;
    use brickplan::pattern::{Palette, Pattern};
    use brickplan::plan::{Grid, Tally};
    use brickplan::report::export::{PlanDocument, read_export, write_export};
    use std::fs;

    fn sample() -> (Grid, Tally) {
        let pattern = Pattern::fit(&["0rt", "bmw"], 3, 2, '0');
        let grid = Grid::resolve(&pattern, &Palette::builtin());
        let tally = Tally::from_grid(&grid);
        (grid, tally)
    }

    // Tests a written export reads back to the same grid and counts
    // Verified by transposing grid_data on write
    #[test]
    fn test_export_round_trip() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("plan.json");
        let (grid, tally) = sample();

        write_export(&path, &grid, &tally, &Palette::builtin(), &PlanConfig::default())
            .expect("Failed to write export");
        let document = read_export(&path).expect("Failed to read export");

        assert_eq!(document.grid().expect("Failed to rebuild grid"), grid);
        assert_eq!(document.tally(), &tally);
        assert_eq!(document.project_info.grid_size, [3, 2]);
        assert_eq!(document.project_info.total_bricks, 6);
        assert_eq!(document.project_info.name, "Mario Brick Mosaic");
    }

    // Tests the document uses the documented top-level keys
    // Verified by renaming grid_size to dimensions
    #[test]
    fn test_export_json_layout() {
        let (grid, tally) = sample();
        let document = PlanDocument::new(
            &grid,
            &tally,
            &Palette::builtin(),
            &PlanConfig::default(),
            "2024-01-01T00:00:00+00:00".to_string(),
        );

        let value = serde_json::to_value(&document).expect("Failed to serialize");

        assert_eq!(value["grid_data"][0][1], "red");
        assert_eq!(value["materials"]["white"], 2);
        assert_eq!(value["color_palette"]["tan"], "#E4CD9E");
        assert_eq!(value["color_names"]["darkblue"], "Dark Blue");
        assert_eq!(value["project_info"]["total_size_mm"][1], 1500.0);
        assert_eq!(
            value["project_info"]["generated_time"],
            "2024-01-01T00:00:00+00:00"
        );
    }

    // Tests color name overrides reach the export unescaped
    // Verified by building color_names from the built-in palette
    #[test]
    fn test_export_keeps_localized_names() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("plan.json");
        let config = PlanConfig {
            color_names: [("red".to_string(), "红色".to_string())].into(),
            ..PlanConfig::default()
        };
        let palette = config.palette().expect("Failed to build palette");
        let (grid, tally) = sample();

        write_export(&path, &grid, &tally, &palette, &config).expect("Failed to write export");
        let raw = fs::read_to_string(&path).expect("Failed to read export");
        let document = read_export(&path).expect("Failed to parse export");

        assert!(raw.contains("红色"));
        assert_eq!(
            document.color_names.get("red").map(String::as_str),
            Some("红色")
        );
    }

    // Tests grid_size must agree with grid_data
    // Verified by skipping the row width check
    #[test]
    fn test_grid_rejects_size_mismatch() {
        let (grid, tally) = sample();
        let mut document = PlanDocument::new(
            &grid,
            &tally,
            &Palette::builtin(),
            &PlanConfig::default(),
            String::new(),
        );
        document.project_info.grid_size = [2, 3];

        assert!(matches!(
            document.grid(),
            Err(PlanError::MalformedExport { .. })
        ));
    }

    // Tests unparseable exports report a JSON error
    // Verified by mapping parse errors to MalformedExport
    #[test]
    fn test_read_export_rejects_invalid_json() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("broken.json");
        fs::write(&path, "{\"project_info\": 1}").expect("Failed to write file");

        assert!(matches!(
            read_export(&path),
            Err(PlanError::Serialization { .. })
        ));
        assert!(matches!(
            read_export(&dir.path().join("missing.json")),
            Err(PlanError::FileSystem { .. })
        ));
    }
}
