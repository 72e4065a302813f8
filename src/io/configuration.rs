//! Build plan constants and the immutable run configuration

use crate::io::error::{PlanError, Result, WithPath, invalid_parameter};
use crate::pattern::palette::{Palette, PaletteConfig};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

// Physical project size
/// Overall mosaic width in millimetres
pub const DEFAULT_TOTAL_WIDTH_MM: f64 = 1000.0;
/// Overall mosaic height in millimetres
pub const DEFAULT_TOTAL_HEIGHT_MM: f64 = 1500.0;
/// Edge length of one brick in millimetres
pub const DEFAULT_BRICK_SIZE_MM: f64 = 15.8;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;
/// Maximum pixels per rendered cell
pub const MAX_CELL_PIXEL_SIZE: u32 = 200;
/// Maximum width of the blueprint information panel
pub const MAX_PANEL_WIDTH: u32 = 4_000;
/// Maximum height of the blank margin below the blueprint grid
pub const MAX_FOOTER_HEIGHT: u32 = 4_000;
/// Maximum number of pixels in the blueprint canvas
pub const MAX_CANVAS_PIXELS: u64 = 200_000_000;

// Blueprint rendering
/// Pixels per grid cell in the blueprint
pub const DEFAULT_CELL_PIXEL_SIZE: u32 = 20;
/// Every Nth row and column carries a coordinate label
pub const DEFAULT_LABEL_INTERVAL: usize = 10;
/// Width of the information panel right of the grid
pub const DEFAULT_PANEL_WIDTH: u32 = 400;
/// Blank margin below the grid
pub const DEFAULT_FOOTER_HEIGHT: u32 = 200;
/// Title text size in the information panel
pub const TITLE_FONT_PX: f32 = 24.0;
/// Body text size in the information panel
pub const INFO_FONT_PX: f32 = 16.0;
/// Coordinate label text size
pub const LABEL_FONT_PX: f32 = 10.0;
/// Vertical distance between panel lines
pub const PANEL_LINE_SPACING: u32 = 25;
/// Outline drawn around every cell
pub const CELL_OUTLINE_RGB: [u8; 3] = [0xCC, 0xCC, 0xCC];

/// Font files tried in order before falling back to the built-in bitmap font
pub const PREFERRED_FONTS: &[&str] = &[
    "/System/Library/Fonts/PingFang.ttc",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "C:\\Windows\\Fonts\\msyh.ttc",
    "C:\\Windows\\Fonts\\arial.ttf",
];

// Progress display
/// Width of the step progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Text reports
/// Columns per wrapped line of cell positions in the assembly guide
pub const DEFAULT_GUIDE_WRAP: usize = 20;
/// Price of one brick before the color multiplier
pub const DEFAULT_BASE_UNIT_PRICE: f64 = 0.5;
/// Currency symbol printed in cost lines
pub const DEFAULT_CURRENCY: &str = "¥";
/// Project title used in every artifact
pub const DEFAULT_PROJECT_NAME: &str = "Mario Brick Mosaic";

// Output settings
/// Default blueprint image file name
pub const DEFAULT_IMAGE_FILE: &str = "mario_lego_blueprint.png";
/// Default parts list file name
pub const DEFAULT_PARTS_LIST_FILE: &str = "mario_materials_list.txt";
/// Default assembly guide file name
pub const DEFAULT_GUIDE_FILE: &str = "mario_building_guide.txt";
/// Default structured export file name
pub const DEFAULT_EXPORT_FILE: &str = "mario_lego_data.json";

/// Where the four artifacts are written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputPaths {
    /// Directory joined in front of every file name
    pub directory: PathBuf,
    /// Blueprint image file name
    pub image: PathBuf,
    /// Parts list file name
    pub parts_list: PathBuf,
    /// Assembly guide file name
    pub assembly_guide: PathBuf,
    /// Structured export file name
    pub export: PathBuf,
}

impl Default for OutputPaths {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            image: PathBuf::from(DEFAULT_IMAGE_FILE),
            parts_list: PathBuf::from(DEFAULT_PARTS_LIST_FILE),
            assembly_guide: PathBuf::from(DEFAULT_GUIDE_FILE),
            export: PathBuf::from(DEFAULT_EXPORT_FILE),
        }
    }
}

impl OutputPaths {
    /// Full path of the blueprint image
    pub fn image_path(&self) -> PathBuf {
        self.directory.join(&self.image)
    }

    /// Full path of the parts list
    pub fn parts_list_path(&self) -> PathBuf {
        self.directory.join(&self.parts_list)
    }

    /// Full path of the assembly guide
    pub fn assembly_guide_path(&self) -> PathBuf {
        self.directory.join(&self.assembly_guide)
    }

    /// Full path of the structured export
    pub fn export_path(&self) -> PathBuf {
        self.directory.join(&self.export)
    }
}

/// Settings shared read-only by every pipeline step
///
/// Every field has a compiled-in default, so a TOML file only needs to name
/// the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanConfig {
    /// Title used in every artifact
    pub project_name: String,
    /// Overall mosaic width in millimetres
    pub total_width_mm: f64,
    /// Overall mosaic height in millimetres
    pub total_height_mm: f64,
    /// Edge length of one brick in millimetres
    pub brick_size_mm: f64,
    /// Pixels per grid cell in the blueprint
    pub cell_pixel_size: u32,
    /// Every Nth row and column carries a coordinate label
    pub label_interval: usize,
    /// Width of the blueprint information panel
    pub panel_width: u32,
    /// Blank margin below the blueprint grid
    pub footer_height: u32,
    /// Columns per wrapped line in the assembly guide
    pub guide_wrap: usize,
    /// Price of one brick before the color multiplier
    pub base_unit_price: f64,
    /// Currency symbol printed in cost lines
    pub currency: String,
    /// Font files tried in order for the blueprint text
    pub fonts: Vec<PathBuf>,
    /// Artifact locations
    pub output: OutputPaths,
    /// Replacement palette; the built-in palette when absent
    pub palette: Option<PaletteConfig>,
    /// Display name overrides by color id, applied on top of the palette
    pub color_names: BTreeMap<String, String>,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            project_name: DEFAULT_PROJECT_NAME.to_string(),
            total_width_mm: DEFAULT_TOTAL_WIDTH_MM,
            total_height_mm: DEFAULT_TOTAL_HEIGHT_MM,
            brick_size_mm: DEFAULT_BRICK_SIZE_MM,
            cell_pixel_size: DEFAULT_CELL_PIXEL_SIZE,
            label_interval: DEFAULT_LABEL_INTERVAL,
            panel_width: DEFAULT_PANEL_WIDTH,
            footer_height: DEFAULT_FOOTER_HEIGHT,
            guide_wrap: DEFAULT_GUIDE_WRAP,
            base_unit_price: DEFAULT_BASE_UNIT_PRICE,
            currency: DEFAULT_CURRENCY.to_string(),
            fonts: PREFERRED_FONTS.iter().map(PathBuf::from).collect(),
            output: OutputPaths::default(),
            palette: None,
            color_names: BTreeMap::new(),
        }
    }
}

impl PlanConfig {
    /// Read a TOML configuration file; missing fields keep their defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML for
    /// this schema, or fails [`PlanConfig::validate`]
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).with_path(path, "read configuration")?;
        let config: Self = toml::from_str(&content).map_err(|source| PlanError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Number of brick columns that fit the overall width
    pub fn grid_width(&self) -> usize {
        (self.total_width_mm / self.brick_size_mm).floor() as usize
    }

    /// Number of brick rows that fit the overall height
    pub fn grid_height(&self) -> usize {
        (self.total_height_mm / self.brick_size_mm).floor() as usize
    }

    /// Number of bricks in the full grid
    pub fn total_bricks(&self) -> usize {
        self.grid_width() * self.grid_height()
    }

    /// Pixel count of the blueprint canvas for the configured grid
    pub fn canvas_pixels(&self) -> u64 {
        let cell = u64::from(self.cell_pixel_size);
        let width = self.grid_width() as u64 * cell + u64::from(self.panel_width);
        let height = self.grid_height() as u64 * cell + u64::from(self.footer_height);
        width.saturating_mul(height)
    }

    /// Palette configured for this run
    ///
    /// # Errors
    ///
    /// Returns an error if a configured palette is inconsistent or a name
    /// override refers to an undefined color
    pub fn palette(&self) -> Result<Palette> {
        self.palette
            .as_ref()
            .map_or_else(|| Ok(Palette::builtin()), Palette::from_config)?
            .with_names(&self.color_names)
    }

    /// Check every value a pipeline step relies on
    ///
    /// # Errors
    ///
    /// Returns an error naming the first invalid parameter
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [
            ("total_width_mm", self.total_width_mm),
            ("total_height_mm", self.total_height_mm),
            ("brick_size_mm", self.brick_size_mm),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &"must be a positive length",
                ));
            }
        }

        for (parameter, cells) in [
            ("grid_width", self.grid_width()),
            ("grid_height", self.grid_height()),
        ] {
            if cells == 0 {
                return Err(invalid_parameter(
                    parameter,
                    &cells,
                    &"brick size is larger than the overall size",
                ));
            }
            if cells > MAX_GRID_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &cells,
                    &format!("exceeds maximum of {MAX_GRID_DIMENSION} cells"),
                ));
            }
        }

        if self.cell_pixel_size == 0 || self.cell_pixel_size > MAX_CELL_PIXEL_SIZE {
            return Err(invalid_parameter(
                "cell_pixel_size",
                &self.cell_pixel_size,
                &format!("must be between 1 and {MAX_CELL_PIXEL_SIZE}"),
            ));
        }
        if self.panel_width > MAX_PANEL_WIDTH {
            return Err(invalid_parameter(
                "panel_width",
                &self.panel_width,
                &format!("exceeds maximum of {MAX_PANEL_WIDTH} pixels"),
            ));
        }
        if self.footer_height > MAX_FOOTER_HEIGHT {
            return Err(invalid_parameter(
                "footer_height",
                &self.footer_height,
                &format!("exceeds maximum of {MAX_FOOTER_HEIGHT} pixels"),
            ));
        }
        let canvas_pixels = self.canvas_pixels();
        if canvas_pixels > MAX_CANVAS_PIXELS {
            return Err(invalid_parameter(
                "cell_pixel_size",
                &self.cell_pixel_size,
                &format!(
                    "blueprint would have {canvas_pixels} pixels, maximum is {MAX_CANVAS_PIXELS}"
                ),
            ));
        }
        if self.label_interval == 0 {
            return Err(invalid_parameter(
                "label_interval",
                &self.label_interval,
                &"must be at least 1",
            ));
        }
        if self.guide_wrap == 0 {
            return Err(invalid_parameter(
                "guide_wrap",
                &self.guide_wrap,
                &"must be at least 1",
            ));
        }
        if !self.base_unit_price.is_finite() || self.base_unit_price < 0.0 {
            return Err(invalid_parameter(
                "base_unit_price",
                &self.base_unit_price,
                &"must be a non-negative amount",
            ));
        }

        Ok(())
    }
}
