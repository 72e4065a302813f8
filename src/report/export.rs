//! Structured JSON export of the whole build plan

use crate::io::configuration::PlanConfig;
use crate::io::error::{PlanError, Result, WithPath};
use crate::pattern::{ColorId, Palette};
use crate::plan::{Grid, Tally};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Project metadata block of the export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectInfo {
    /// Project title
    pub name: String,
    /// Overall `[width, height]` in millimetres
    pub total_size_mm: [f64; 2],
    /// Edge length of one brick in millimetres
    pub brick_size_mm: f64,
    /// Grid `[columns, rows]`
    pub grid_size: [usize; 2],
    /// Number of bricks in the grid
    pub total_bricks: usize,
    /// Generation timestamp (RFC 3339, local time)
    pub generated_time: String,
}

/// The complete export document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanDocument {
    /// Project metadata
    pub project_info: ProjectInfo,
    /// Color ids, top row first
    pub grid_data: Vec<Vec<ColorId>>,
    /// Brick count per color
    pub materials: Tally,
    /// Display color per color id
    pub color_palette: BTreeMap<ColorId, String>,
    /// Localized name per color id
    pub color_names: BTreeMap<ColorId, String>,
}

impl PlanDocument {
    /// Assemble the document for one run
    pub fn new(
        grid: &Grid,
        tally: &Tally,
        palette: &Palette,
        config: &PlanConfig,
        generated_time: String,
    ) -> Self {
        Self {
            project_info: ProjectInfo {
                name: config.project_name.clone(),
                total_size_mm: [config.total_width_mm, config.total_height_mm],
                brick_size_mm: config.brick_size_mm,
                grid_size: [grid.width(), grid.height()],
                total_bricks: grid.cell_count(),
                generated_time,
            },
            grid_data: grid.to_rows(),
            materials: tally.clone(),
            color_palette: palette
                .colors()
                .map(|(id, spec)| (id.clone(), spec.hex.clone()))
                .collect(),
            color_names: palette
                .colors()
                .map(|(id, spec)| (id.clone(), spec.name.clone()))
                .collect(),
        }
    }

    /// Rebuild the grid described by `grid_data`
    ///
    /// # Errors
    ///
    /// Returns an error if the rows are ragged or disagree with `grid_size`
    pub fn grid(&self) -> Result<Grid> {
        let grid = Grid::from_rows(self.grid_data.clone())?;
        let [width, height] = self.project_info.grid_size;
        if grid.width() != width || grid.height() != height {
            return Err(PlanError::MalformedExport {
                reason: format!(
                    "grid_data is {}x{} but grid_size says {width}x{height}",
                    grid.width(),
                    grid.height()
                ),
            });
        }
        Ok(grid)
    }

    /// Brick counts as recorded in the document
    pub const fn tally(&self) -> &Tally {
        &self.materials
    }
}

/// Write the export document for this run to `path`
///
/// # Errors
///
/// Returns an error if the file cannot be created or the JSON cannot be written
pub fn write_export(
    path: &Path,
    grid: &Grid,
    tally: &Tally,
    palette: &Palette,
    config: &PlanConfig,
) -> Result<PathBuf> {
    let document = PlanDocument::new(
        grid,
        tally,
        palette,
        config,
        chrono::Local::now().to_rfc3339(),
    );

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }
    let file = File::create(path).with_path(path, "create file")?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &document).map_err(|source| {
        PlanError::Serialization {
            path: path.to_path_buf(),
            source,
        }
    })?;
    writer.flush().with_path(path, "flush export")?;

    log::info!("JSON data saved: {}", path.display());
    Ok(path.to_path_buf())
}

/// Parse an export document written by [`write_export`]
///
/// # Errors
///
/// Returns an error if the file cannot be opened or is not a valid document
pub fn read_export(path: &Path) -> Result<PlanDocument> {
    let file = File::open(path).with_path(path, "open export")?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| PlanError::Serialization {
        path: path.to_path_buf(),
        source,
    })
}
