//! Blueprint PNG: colored cell grid with coordinate labels and an information panel

use crate::io::configuration::{
    CELL_OUTLINE_RGB, INFO_FONT_PX, LABEL_FONT_PX, MAX_CANVAS_PIXELS, PANEL_LINE_SPACING,
    PlanConfig, TITLE_FONT_PX,
};
use crate::io::error::{PlanError, Result, WithPath, invalid_parameter};
use crate::pattern::Palette;
use crate::plan::Grid;
use crate::report::font::Typeface;
use crate::report::text::group_thousands;
use image::{ImageFormat, Rgb, RgbImage};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
const PANEL_MARGIN: u32 = 20;
const PANEL_TEXT_TOP: u32 = 60;
const LABEL_INSET: u32 = 2;

/// Text lines shown under the title in the information panel
pub fn panel_lines(config: &PlanConfig) -> Vec<String> {
    vec![
        format!(
            "Overall size: {}x{}mm",
            config.total_width_mm, config.total_height_mm
        ),
        format!("Brick size: {0}x{0}mm", config.brick_size_mm),
        format!(
            "Grid: {}x{} cells",
            config.grid_width(),
            config.grid_height()
        ),
        format!("Total bricks: {}", group_thousands(config.total_bricks())),
        String::new(),
        "Coordinates:".to_string(),
        "Labels read row-column".to_string(),
        "e.g. 1-1 is row 1, column 1".to_string(),
        String::new(),
        "Assembly tips:".to_string(),
        "1. Build row by row from the bottom".to_string(),
        "2. Batch areas of the same color".to_string(),
        "3. Finish outlines before filling".to_string(),
    ]
}

/// Canvas `(width, height)` for a grid: cells plus the panel and bottom margin
///
/// # Errors
///
/// Returns an error if either side overflows `u32` or the canvas exceeds
/// [`MAX_CANVAS_PIXELS`]
pub fn canvas_dimensions(
    grid_width: usize,
    grid_height: usize,
    config: &PlanConfig,
) -> Result<(u32, u32)> {
    let side = |cells: usize, margin: u32| {
        u32::try_from(cells)
            .ok()
            .and_then(|cells| cells.checked_mul(config.cell_pixel_size))
            .and_then(|pixels| pixels.checked_add(margin))
    };
    let (Some(width), Some(height)) = (
        side(grid_width, config.panel_width),
        side(grid_height, config.footer_height),
    ) else {
        return Err(invalid_parameter(
            "canvas",
            &format!("{grid_width}x{grid_height} cells"),
            &"blueprint dimensions overflow",
        ));
    };
    if u64::from(width) * u64::from(height) > MAX_CANVAS_PIXELS {
        return Err(invalid_parameter(
            "canvas",
            &format!("{width}x{height}"),
            &format!("exceeds maximum of {MAX_CANVAS_PIXELS} pixels"),
        ));
    }
    Ok((width, height))
}

/// Paint the blueprint into an in-memory image
///
/// # Errors
///
/// Returns an error if the canvas size cannot be represented
pub fn render_blueprint(
    grid: &Grid,
    palette: &Palette,
    config: &PlanConfig,
    typeface: &Typeface,
) -> Result<RgbImage> {
    let cell = config.cell_pixel_size;
    let interval = config.label_interval.max(1);
    let (width, height) = canvas_dimensions(grid.width(), grid.height(), config)?;
    let grid_px_width = width - config.panel_width;
    let mut canvas = RgbImage::from_pixel(width, height, WHITE);
    let outline = Rgb(CELL_OUTLINE_RGB);

    for ((row, col), color) in grid.indexed_iter() {
        let fill = palette.rgb(color.as_str()).map_or(WHITE, Rgb);
        let x1 = col as u32 * cell;
        let y1 = row as u32 * cell;
        // Edges are inclusive, so neighbouring cells share one outline pixel
        let (x2, y2) = (x1 + cell, y1 + cell);
        fill_rect(&mut canvas, x1, y1, x2, y2, fill);
        outline_rect(&mut canvas, x1, y1, x2, y2, outline);

        if row % interval == 0 && col % interval == 0 {
            typeface.draw_text(
                &mut canvas,
                (x1 + LABEL_INSET) as i32,
                (y1 + LABEL_INSET) as i32,
                &format!("{}-{}", row + 1, col + 1),
                LABEL_FONT_PX,
                BLACK,
            );
        }
    }

    let panel_x = (grid_px_width + PANEL_MARGIN) as i32;
    typeface.draw_text(
        &mut canvas,
        panel_x,
        PANEL_MARGIN as i32,
        &format!("{} Blueprint", config.project_name),
        TITLE_FONT_PX,
        BLACK,
    );
    let mut y = PANEL_TEXT_TOP;
    for line in panel_lines(config) {
        typeface.draw_text(&mut canvas, panel_x, y as i32, &line, INFO_FONT_PX, BLACK);
        y += PANEL_LINE_SPACING;
    }

    Ok(canvas)
}

/// Render the blueprint with the first available preferred font and save it as PNG
///
/// # Errors
///
/// Returns an error if:
/// - The canvas size cannot be represented
/// - The parent directory cannot be created
/// - The file cannot be created
/// - PNG encoding fails
pub fn write_blueprint(
    path: &Path,
    grid: &Grid,
    palette: &Palette,
    config: &PlanConfig,
) -> Result<PathBuf> {
    let typeface = Typeface::select(&config.fonts);
    let canvas = render_blueprint(grid, palette, config, &typeface)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }
    let file = File::create(path).with_path(path, "create file")?;
    let mut writer = BufWriter::new(file);
    canvas
        .write_to(&mut writer, ImageFormat::Png)
        .map_err(|source| PlanError::ImageExport {
            path: path.to_path_buf(),
            source,
        })?;
    writer.flush().with_path(path, "flush image")?;

    log::info!("Blueprint saved: {}", path.display());
    Ok(path.to_path_buf())
}

fn fill_rect(canvas: &mut RgbImage, x1: u32, y1: u32, x2: u32, y2: u32, color: Rgb<u8>) {
    for y in y1..=y2 {
        for x in x1..=x2 {
            if let Some(pixel) = canvas.get_pixel_mut_checked(x, y) {
                *pixel = color;
            }
        }
    }
}

fn outline_rect(canvas: &mut RgbImage, x1: u32, y1: u32, x2: u32, y2: u32, color: Rgb<u8>) {
    for x in x1..=x2 {
        for y in [y1, y2] {
            if let Some(pixel) = canvas.get_pixel_mut_checked(x, y) {
                *pixel = color;
            }
        }
    }
    for y in y1..=y2 {
        for x in [x1, x2] {
            if let Some(pixel) = canvas.get_pixel_mut_checked(x, y) {
                *pixel = color;
            }
        }
    }
}
