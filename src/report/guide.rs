//! Row-by-row assembly guide, bottom row first
//!
//! Bricks are placed from the highest row index up to row 0 so that no row
//! is ever built above an unfinished one.

use crate::io::configuration::PlanConfig;
use crate::io::error::Result;
use crate::pattern::{ColorId, Palette};
use crate::plan::Grid;
use crate::report::text::{banner, write_lines};
use std::path::{Path, PathBuf};

const PREPARATION_STEPS: [&str; 4] = [
    "Prepare a flat building surface",
    "Make sure there is plenty of light",
    "Sort the bricks by color",
    "Keep this guide and the parts list at hand",
];

/// Row indices in build order: bottom (highest index) to top (index 0)
pub fn assembly_order(height: usize) -> impl Iterator<Item = usize> {
    (0..height).rev()
}

/// Non-background colors of a row with their counts, in order of first appearance
pub fn row_materials<'a, I>(row: I, background: &ColorId) -> Vec<(&'a ColorId, usize)>
where
    I: IntoIterator<Item = &'a ColorId>,
{
    let mut needed: Vec<(&'a ColorId, usize)> = Vec::new();
    for color in row {
        if color == background {
            continue;
        }
        if let Some(entry) = needed.iter_mut().find(|(id, _)| *id == color) {
            entry.1 += 1;
        } else {
            needed.push((color, 1));
        }
    }
    needed
}

/// Assembly guide text, one entry per line
pub fn render_assembly_guide(grid: &Grid, palette: &Palette, config: &PlanConfig) -> Vec<String> {
    let background = palette.background();
    let wrap = config.guide_wrap.max(1);
    let mut guide = banner(&format!("{} - Assembly Guide", config.project_name));
    guide.push(String::new());

    guide.push("Preparation:".to_string());
    guide.extend(
        PREPARATION_STEPS
            .iter()
            .enumerate()
            .map(|(i, step)| format!("{}. {step}", i + 1)),
    );
    guide.push(String::new());

    guide.push("Steps:".to_string());
    guide.push(format!(
        "Build row by row from the bottom up (row {} to row 1)",
        grid.height()
    ));
    guide.push(String::new());

    for y in assembly_order(grid.height()) {
        let Some(row) = grid.row(y) else {
            continue;
        };
        guide.push(format!("Row {:2}:", y + 1));

        let needed = row_materials(row.iter(), background);
        if needed.is_empty() {
            guide.push(format!(
                "  Needs: background only ({})",
                palette.name(background.as_str())
            ));
        } else {
            let listed = needed
                .iter()
                .map(|(color, count)| format!("{} x{count}", palette.name(color.as_str())))
                .collect::<Vec<_>>()
                .join(", ");
            guide.push(format!("  Needs: {listed}"));
        }

        let mut line = String::from("  ");
        for (x, color) in row.iter().enumerate() {
            let abbr = palette.abbr(color.as_str());
            line.push_str(&format!("{:2}({abbr}) ", x + 1));

            if (x + 1) % wrap == 0 {
                guide.push(std::mem::replace(&mut line, String::from("  ")));
            }
        }
        if !line.trim().is_empty() {
            guide.push(line);
        }
        guide.push(String::new());
    }

    guide
}

/// Render the assembly guide and write it to `path`
///
/// # Errors
///
/// Returns an error if the guide file cannot be created or written
pub fn write_assembly_guide(
    path: &Path,
    grid: &Grid,
    palette: &Palette,
    config: &PlanConfig,
) -> Result<PathBuf> {
    let guide = render_assembly_guide(grid, palette, config);
    write_lines(path, &guide)?;
    log::info!("Assembly guide saved: {}", path.display());
    Ok(path.to_path_buf())
}
