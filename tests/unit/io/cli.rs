//! Tests for command-line parsing and the artifact pipeline

#[cfg(test)]
mod tests {
    use brickplan::PlanError;
    use brickplan::io::cli::{ArtifactKind, Cli, PlanBuilder, PlanOutcome, summary_lines};
    use brickplan::io::configuration::{DEFAULT_CELL_PIXEL_SIZE, PlanConfig};
    use brickplan::pattern::palette::{ColorSpec, PaletteConfig};
    use brickplan::pattern::{ColorId, Palette};
    use brickplan::plan::Tally;
    use clap::Parser;
    use std::collections::BTreeMap;
    use std::path::{Path, PathBuf};

    fn small_config(directory: &Path) -> PlanConfig {
        let mut config = PlanConfig {
            brick_size_mm: 100.0,
            cell_pixel_size: 4,
            fonts: Vec::new(),
            ..PlanConfig::default()
        };
        config.output.directory = directory.to_path_buf();
        config
    }

    fn spec(hex: &str, name: &str) -> ColorSpec {
        ColorSpec {
            hex: hex.to_string(),
            name: name.to_string(),
            abbr: None,
            cost_multiplier: 1.0,
        }
    }

    // Tests CLI parsing with no arguments uses defaults
    // Verified by changing the default log level
    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::parse_from(["brickplan"]);

        assert!(cli.config.is_none());
        assert!(cli.output_dir.is_none());
        assert!(!cli.strict);
        assert!(!cli.quiet);
        assert!(cli.should_show_progress());
        assert_eq!(cli.log_filter(), log::LevelFilter::Warn);
    }

    // Tests every override flag is parsed
    // Verified by renaming the -b short flag
    #[test]
    fn test_cli_parse_all_flags() {
        let cli = Cli::parse_from([
            "brickplan",
            "--config",
            "plan.toml",
            "-o",
            "out",
            "-W",
            "500",
            "-H",
            "800",
            "-b",
            "20",
            "-p",
            "8",
            "--strict",
            "-q",
            "-l",
            "debug",
        ]);

        assert_eq!(cli.config, Some(PathBuf::from("plan.toml")));
        assert_eq!(cli.output_dir, Some(PathBuf::from("out")));
        assert_eq!(cli.width_mm, Some(500.0));
        assert_eq!(cli.height_mm, Some(800.0));
        assert_eq!(cli.brick_mm, Some(20.0));
        assert_eq!(cli.cell_pixels, Some(8));
        assert!(cli.strict);
        assert!(!cli.should_show_progress());
        assert_eq!(cli.log_filter(), log::LevelFilter::Debug);
    }

    // Tests unknown log levels fall back to warn
    // Verified by falling back to LevelFilter::Off
    #[test]
    fn test_unknown_log_level_falls_back_to_warn() {
        let cli = Cli::parse_from(["brickplan", "-l", "chatty"]);
        assert_eq!(cli.log_filter(), log::LevelFilter::Warn);
    }

    // Tests command-line values override the defaults
    // Verified by applying overrides before loading the file
    #[test]
    fn test_resolve_config_applies_overrides() {
        let cli = Cli::parse_from(["brickplan", "-W", "500", "-H", "800", "-b", "20", "-o", "out"]);

        let config = cli.resolve_config().expect("Failed to resolve config");

        assert_eq!(config.grid_width(), 25);
        assert_eq!(config.grid_height(), 40);
        assert_eq!(config.output.directory, PathBuf::from("out"));
        assert_eq!(config.cell_pixel_size, DEFAULT_CELL_PIXEL_SIZE);
    }

    // Tests overrides are validated after they are applied
    // Verified by skipping validate in resolve_config
    #[test]
    fn test_resolve_config_rejects_invalid_override() {
        let cli = Cli::parse_from(["brickplan", "-p", "0"]);

        assert!(matches!(
            cli.resolve_config(),
            Err(PlanError::InvalidParameter {
                parameter: "cell_pixel_size",
                ..
            })
        ));
    }

    // Tests strict mode rejects symbols missing from a custom palette
    // Verified by ignoring the strict flag in resolve_grid
    #[test]
    fn test_strict_rejects_unmapped_symbols() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let mut config = small_config(dir.path());
        config.palette = Some(PaletteConfig {
            background: "white".to_string(),
            symbols: BTreeMap::from([
                ("0".to_string(), "white".to_string()),
                ("r".to_string(), "red".to_string()),
            ]),
            colors: BTreeMap::from([
                ("white".to_string(), spec("#FFFFFF", "White")),
                ("red".to_string(), spec("#FF0000", "Red")),
            ]),
        });

        let strict = PlanBuilder::new(config.clone(), true, false).expect("Failed to build");
        match strict.resolve_grid() {
            Err(PlanError::UnmappedSymbols { symbols }) => {
                let unmapped: Vec<char> = symbols.iter().map(|&(symbol, _)| symbol).collect();
                assert!(unmapped.contains(&'b'));
                assert!(!unmapped.contains(&'r'));
            }
            other => unreachable!("Expected UnmappedSymbols, got {other:?}"),
        }

        // Lenient mode paints unmapped cells with the background
        let lenient = PlanBuilder::new(config, false, false).expect("Failed to build");
        let grid = lenient.resolve_grid().expect("Failed to resolve grid");
        assert!(grid.iter().all(|id| id.as_str() == "white" || id.as_str() == "red"));
    }

    // Tests an invalid palette fails builder construction
    // Verified by building the palette lazily in run
    #[test]
    fn test_builder_rejects_invalid_palette() {
        let config = PlanConfig {
            palette: Some(PaletteConfig {
                background: "missing".to_string(),
                symbols: BTreeMap::new(),
                colors: BTreeMap::new(),
            }),
            ..PlanConfig::default()
        };

        assert!(matches!(
            PlanBuilder::new(config, false, false),
            Err(PlanError::InvalidPalette { .. })
        ));
    }

    // Tests a full run writes all four artifacts
    // Verified by skipping the export writer
    #[test]
    fn test_run_writes_all_artifacts() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let builder =
            PlanBuilder::new(small_config(dir.path()), false, false).expect("Failed to build");

        let outcome = builder.run().expect("Failed to run pipeline");

        assert!(outcome.failures.is_empty());
        assert_eq!(outcome.tally.total(), 10 * 15);
        let kinds: Vec<ArtifactKind> = outcome.artifacts.iter().map(|a| a.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ArtifactKind::Blueprint,
                ArtifactKind::PartsList,
                ArtifactKind::AssemblyGuide,
                ArtifactKind::Export,
            ]
        );
        for artifact in outcome.into_result().expect("Failed to write artifacts") {
            assert!(artifact.path.is_file(), "{} missing", artifact.path.display());
        }
    }

    // Tests writer failures are collected and the first is returned
    // Verified by returning on the first writer failure
    #[test]
    fn test_run_collects_write_failures() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let blocker = dir.path().join("not_a_directory");
        std::fs::write(&blocker, "occupied").expect("Failed to write blocker");
        let builder =
            PlanBuilder::new(small_config(&blocker), false, false).expect("Failed to build");

        let outcome = builder.run().expect("Failed to run pipeline");

        assert!(outcome.artifacts.is_empty());
        assert_eq!(outcome.failures.len(), 4);
        assert_eq!(outcome.failures[0].0, ArtifactKind::Blueprint);
        assert!(matches!(
            outcome.into_result(),
            Err(PlanError::FileSystem { .. })
        ));
    }

    // Tests an oversized panel is refused before rendering
    // Verified by removing validate from PlanBuilder::new
    #[test]
    fn test_builder_rejects_oversized_panel() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config = PlanConfig {
            panel_width: u32::MAX,
            ..small_config(dir.path())
        };

        assert!(matches!(
            PlanBuilder::new(config, false, false),
            Err(PlanError::InvalidParameter {
                parameter: "panel_width",
                ..
            })
        ));
    }

    // Tests the closing summary lists colors by count then cost
    // Verified by printing colors in id order
    #[test]
    fn test_summary_lines() {
        let outcome = PlanOutcome {
            artifacts: Vec::new(),
            failures: Vec::new(),
            tally: Tally::from_counts([
                (ColorId::new("white"), 300),
                (ColorId::new("tan"), 100),
                (ColorId::new("red"), 100),
            ]),
        };
        let config = PlanConfig {
            brick_size_mm: 50.0,
            ..PlanConfig::default()
        };

        let lines = summary_lines(&outcome, &Palette::builtin(), &config);

        assert_eq!(
            lines,
            vec![
                "Materials summary:",
                "  White      :    300 ( 50.0%)",
                "  Red        :    100 ( 16.7%)",
                "  Tan        :    100 ( 16.7%)",
                "Colored bricks: 200",
                "Estimated cost: ¥115.00",
            ]
        );
    }

    // Tests artifact kinds display their report names
    // Verified by deriving Display from the variant name
    #[test]
    fn test_artifact_kind_display() {
        assert_eq!(ArtifactKind::Blueprint.to_string(), "Blueprint image");
        assert_eq!(ArtifactKind::Export.to_string(), "JSON data");
    }
}
