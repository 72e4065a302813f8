//! Command-line interface and the pipeline that produces every artifact

use crate::io::configuration::PlanConfig;
use crate::io::error::{PlanError, Result};
use crate::io::progress::StepProgress;
use crate::pattern::{Palette, Pattern};
use crate::plan::{Grid, Tally};
use crate::report::export::write_export;
use crate::report::guide::write_assembly_guide;
use crate::report::image::write_blueprint;
use crate::report::parts::{estimate_cost, material_lines, write_parts_list};
use crate::report::text::group_thousands;
use clap::Parser;
use std::fmt;
use std::path::PathBuf;

// Resolve grid, tally, then one step per artifact
const PIPELINE_STEPS: usize = 6;

#[derive(Parser)]
#[command(name = "brickplan")]
#[command(
    author,
    version,
    about = "Generate a brick mosaic build plan: blueprint, parts list, assembly guide and JSON export"
)]
/// Command-line arguments for the build plan generator
pub struct Cli {
    /// TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory the artifacts are written to
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Overall mosaic width in millimetres
    #[arg(short = 'W', long)]
    pub width_mm: Option<f64>,

    /// Overall mosaic height in millimetres
    #[arg(short = 'H', long)]
    pub height_mm: Option<f64>,

    /// Edge length of one brick in millimetres
    #[arg(short, long)]
    pub brick_mm: Option<f64>,

    /// Pixels per grid cell in the blueprint
    #[arg(short = 'p', long)]
    pub cell_pixels: Option<u32>,

    /// Fail when the pattern uses symbols missing from the palette
    #[arg(long)]
    pub strict: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log filter for `env_logger`; unknown levels fall back to `warn`
    pub fn log_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Warn)
    }

    /// Configuration file (or defaults) with command-line overrides applied
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be loaded or the
    /// final configuration fails validation
    pub fn resolve_config(&self) -> Result<PlanConfig> {
        let mut config = match &self.config {
            Some(path) => PlanConfig::load(path)?,
            None => PlanConfig::default(),
        };

        if let Some(dir) = &self.output_dir {
            config.output.directory.clone_from(dir);
        }
        if let Some(width) = self.width_mm {
            config.total_width_mm = width;
        }
        if let Some(height) = self.height_mm {
            config.total_height_mm = height;
        }
        if let Some(brick) = self.brick_mm {
            config.brick_size_mm = brick;
        }
        if let Some(pixels) = self.cell_pixels {
            config.cell_pixel_size = pixels;
        }

        config.validate()?;
        Ok(config)
    }
}

/// The four files a run produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// Labeled grid image
    Blueprint,
    /// Material counts and cost estimate
    PartsList,
    /// Bottom-up row instructions
    AssemblyGuide,
    /// Structured JSON document
    Export,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Blueprint => "Blueprint image",
            Self::PartsList => "Parts list",
            Self::AssemblyGuide => "Assembly guide",
            Self::Export => "JSON data",
        })
    }
}

/// One artifact written by a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Which report this is
    pub kind: ArtifactKind,
    /// Where it was written
    pub path: PathBuf,
}

/// Result of a full pipeline run
///
/// Writers are independent: a failed artifact is recorded here and the
/// remaining artifacts are still produced.
#[derive(Debug)]
pub struct PlanOutcome {
    /// Artifacts written successfully, in pipeline order
    pub artifacts: Vec<Artifact>,
    /// Artifacts that could not be written
    pub failures: Vec<(ArtifactKind, PlanError)>,
    /// Brick counts of the resolved grid
    pub tally: Tally,
}

impl PlanOutcome {
    /// Written artifacts, or the first failure if any writer failed
    ///
    /// # Errors
    ///
    /// Returns the error of the first artifact that could not be written
    pub fn into_result(self) -> Result<Vec<Artifact>> {
        match self.failures.into_iter().next() {
            Some((_, error)) => Err(error),
            None => Ok(self.artifacts),
        }
    }
}

/// Console summary of a run: per-color counts, colored bricks and estimated cost
///
/// Colors are listed from most to least used, as in the parts list.
pub fn summary_lines(outcome: &PlanOutcome, palette: &Palette, config: &PlanConfig) -> Vec<String> {
    let tally = &outcome.tally;
    let mut lines = vec!["Materials summary:".to_string()];
    lines.extend(
        material_lines(tally, config.total_bricks())
            .iter()
            .map(|line| {
                format!(
                    "  {:<10} : {:>6} ({:5.1}%)",
                    palette.name(line.color.as_str()),
                    group_thousands(line.count),
                    line.percentage
                )
            }),
    );

    let colored = tally
        .total()
        .saturating_sub(tally.get(palette.background().as_str()));
    let estimate = estimate_cost(tally, palette, config.base_unit_price);
    lines.push(format!("Colored bricks: {}", group_thousands(colored)));
    lines.push(format!(
        "Estimated cost: {}{:.2}",
        config.currency, estimate.total
    ));
    lines
}

/// Runs grid resolution, tallying and every report writer in sequence
pub struct PlanBuilder {
    config: PlanConfig,
    palette: Palette,
    strict: bool,
    progress: StepProgress,
}

impl PlanBuilder {
    /// Create a builder, validating the configuration and its palette
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or its palette is invalid
    pub fn new(config: PlanConfig, strict: bool, show_progress: bool) -> Result<Self> {
        config.validate()?;
        let palette = config.palette()?;
        let progress = if show_progress {
            StepProgress::new(PIPELINE_STEPS)
        } else {
            StepProgress::hidden(PIPELINE_STEPS)
        };

        Ok(Self {
            config,
            palette,
            strict,
            progress,
        })
    }

    /// Create a builder from command-line arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be resolved
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        Self::new(cli.resolve_config()?, cli.strict, cli.should_show_progress())
    }

    /// Configuration used by this builder
    pub const fn config(&self) -> &PlanConfig {
        &self.config
    }

    /// Palette used by this builder
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Fit the built-in design to the configured grid and resolve its colors
    ///
    /// Unmapped symbols fall back to the background color with a warning,
    /// or are rejected when the builder is strict.
    ///
    /// # Errors
    ///
    /// Returns an error in strict mode if any pattern symbol is unmapped
    pub fn resolve_grid(&self) -> Result<Grid> {
        let pattern = Pattern::builtin(self.config.grid_width(), self.config.grid_height());

        let unmapped = self.palette.unmapped_symbols(&pattern);
        if !unmapped.is_empty() {
            if self.strict {
                return Err(PlanError::UnmappedSymbols {
                    symbols: unmapped.into_iter().collect(),
                });
            }
            for (symbol, count) in &unmapped {
                log::warn!(
                    "Symbol '{symbol}' has no palette entry; {count} cells use background '{}'",
                    self.palette.background()
                );
            }
        }

        Ok(Grid::resolve(&pattern, &self.palette))
    }

    /// Run the whole pipeline
    ///
    /// # Errors
    ///
    /// Returns an error if the grid cannot be resolved; writer failures are
    /// collected in [`PlanOutcome::failures`] instead
    pub fn run(&self) -> Result<PlanOutcome> {
        log::info!(
            "Project grid: {}x{} = {} bricks",
            self.config.grid_width(),
            self.config.grid_height(),
            self.config.total_bricks()
        );

        self.progress.start_step("Resolving grid colors");
        let grid = self.resolve_grid()?;
        self.progress.complete_step();

        self.progress.start_step("Counting materials");
        let tally = Tally::from_grid(&grid);
        self.progress.complete_step();

        let mut outcome = PlanOutcome {
            artifacts: Vec::with_capacity(4),
            failures: Vec::new(),
            tally,
        };
        let output = &self.config.output;

        self.progress.start_step("Rendering blueprint");
        let result = write_blueprint(&output.image_path(), &grid, &self.palette, &self.config);
        self.record(&mut outcome, ArtifactKind::Blueprint, result);

        self.progress.start_step("Writing parts list");
        let result = write_parts_list(
            &output.parts_list_path(),
            &outcome.tally,
            &self.palette,
            &self.config,
        );
        self.record(&mut outcome, ArtifactKind::PartsList, result);

        self.progress.start_step("Writing assembly guide");
        let result =
            write_assembly_guide(&output.assembly_guide_path(), &grid, &self.palette, &self.config);
        self.record(&mut outcome, ArtifactKind::AssemblyGuide, result);

        self.progress.start_step("Writing JSON data");
        let result = write_export(
            &output.export_path(),
            &grid,
            &outcome.tally,
            &self.palette,
            &self.config,
        );
        self.record(&mut outcome, ArtifactKind::Export, result);

        self.progress.finish();
        Ok(outcome)
    }

    fn record(&self, outcome: &mut PlanOutcome, kind: ArtifactKind, result: Result<PathBuf>) {
        match result {
            Ok(path) => outcome.artifacts.push(Artifact { kind, path }),
            Err(error) => {
                log::error!("{kind} failed: {error}");
                outcome.failures.push((kind, error));
            }
        }
        self.progress.complete_step();
    }
}
