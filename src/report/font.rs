//! Text rendering for the blueprint with a preferred-font selection
//!
//! Preferred fonts are tried in order; when none can be loaded the built-in
//! 5x7 bitmap font is used, so text can always be drawn.

use ab_glyph::{Font, FontVec, PxScale, ScaleFont, point};
use image::{Rgb, RgbImage};
use std::path::{Path, PathBuf};

/// Pixel rows of the bitmap font before scaling (7 glyph rows + 1 spacing)
pub const BITMAP_CELL_HEIGHT: u32 = 8;
/// Pixel columns of the bitmap font before scaling (5 glyph columns + 1 spacing)
pub const BITMAP_CELL_WIDTH: u32 = 6;

// Printable ASCII from ' ' to '~', five columns per glyph, bit 0 is the top row
const BITMAP_GLYPHS: [[u8; 5]; 95] = [
    [0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x5F, 0x00, 0x00],
    [0x00, 0x07, 0x00, 0x07, 0x00],
    [0x14, 0x7F, 0x14, 0x7F, 0x14],
    [0x24, 0x2A, 0x7F, 0x2A, 0x12],
    [0x23, 0x13, 0x08, 0x64, 0x62],
    [0x36, 0x49, 0x55, 0x22, 0x50],
    [0x00, 0x05, 0x03, 0x00, 0x00],
    [0x00, 0x1C, 0x22, 0x41, 0x00],
    [0x00, 0x41, 0x22, 0x1C, 0x00],
    [0x08, 0x2A, 0x1C, 0x2A, 0x08],
    [0x08, 0x08, 0x3E, 0x08, 0x08],
    [0x00, 0x50, 0x30, 0x00, 0x00],
    [0x08, 0x08, 0x08, 0x08, 0x08],
    [0x00, 0x60, 0x60, 0x00, 0x00],
    [0x20, 0x10, 0x08, 0x04, 0x02],
    [0x3E, 0x51, 0x49, 0x45, 0x3E],
    [0x00, 0x42, 0x7F, 0x40, 0x00],
    [0x42, 0x61, 0x51, 0x49, 0x46],
    [0x21, 0x41, 0x45, 0x4B, 0x31],
    [0x18, 0x14, 0x12, 0x7F, 0x10],
    [0x27, 0x45, 0x45, 0x45, 0x39],
    [0x3C, 0x4A, 0x49, 0x49, 0x30],
    [0x01, 0x71, 0x09, 0x05, 0x03],
    [0x36, 0x49, 0x49, 0x49, 0x36],
    [0x06, 0x49, 0x49, 0x29, 0x1E],
    [0x00, 0x36, 0x36, 0x00, 0x00],
    [0x00, 0x56, 0x36, 0x00, 0x00],
    [0x08, 0x14, 0x22, 0x41, 0x00],
    [0x14, 0x14, 0x14, 0x14, 0x14],
    [0x00, 0x41, 0x22, 0x14, 0x08],
    [0x02, 0x01, 0x51, 0x09, 0x06],
    [0x32, 0x49, 0x79, 0x41, 0x3E],
    [0x7E, 0x11, 0x11, 0x11, 0x7E],
    [0x7F, 0x49, 0x49, 0x49, 0x36],
    [0x3E, 0x41, 0x41, 0x41, 0x22],
    [0x7F, 0x41, 0x41, 0x22, 0x1C],
    [0x7F, 0x49, 0x49, 0x49, 0x41],
    [0x7F, 0x09, 0x09, 0x09, 0x01],
    [0x3E, 0x41, 0x49, 0x49, 0x7A],
    [0x7F, 0x08, 0x08, 0x08, 0x7F],
    [0x00, 0x41, 0x7F, 0x41, 0x00],
    [0x20, 0x40, 0x41, 0x3F, 0x01],
    [0x7F, 0x08, 0x14, 0x22, 0x41],
    [0x7F, 0x40, 0x40, 0x40, 0x40],
    [0x7F, 0x02, 0x0C, 0x02, 0x7F],
    [0x7F, 0x04, 0x08, 0x10, 0x7F],
    [0x3E, 0x41, 0x41, 0x41, 0x3E],
    [0x7F, 0x09, 0x09, 0x09, 0x06],
    [0x3E, 0x41, 0x51, 0x21, 0x5E],
    [0x7F, 0x09, 0x19, 0x29, 0x46],
    [0x46, 0x49, 0x49, 0x49, 0x31],
    [0x01, 0x01, 0x7F, 0x01, 0x01],
    [0x3F, 0x40, 0x40, 0x40, 0x3F],
    [0x1F, 0x20, 0x40, 0x20, 0x1F],
    [0x3F, 0x40, 0x38, 0x40, 0x3F],
    [0x63, 0x14, 0x08, 0x14, 0x63],
    [0x07, 0x08, 0x70, 0x08, 0x07],
    [0x61, 0x51, 0x49, 0x45, 0x43],
    [0x00, 0x7F, 0x41, 0x41, 0x00],
    [0x02, 0x04, 0x08, 0x10, 0x20],
    [0x00, 0x41, 0x41, 0x7F, 0x00],
    [0x04, 0x02, 0x01, 0x02, 0x04],
    [0x40, 0x40, 0x40, 0x40, 0x40],
    [0x00, 0x01, 0x02, 0x04, 0x00],
    [0x20, 0x54, 0x54, 0x54, 0x78],
    [0x7F, 0x48, 0x44, 0x44, 0x38],
    [0x38, 0x44, 0x44, 0x44, 0x20],
    [0x38, 0x44, 0x44, 0x48, 0x7F],
    [0x38, 0x54, 0x54, 0x54, 0x18],
    [0x08, 0x7E, 0x09, 0x01, 0x02],
    [0x0C, 0x52, 0x52, 0x52, 0x3E],
    [0x7F, 0x08, 0x04, 0x04, 0x78],
    [0x00, 0x44, 0x7D, 0x40, 0x00],
    [0x20, 0x40, 0x44, 0x3D, 0x00],
    [0x7F, 0x10, 0x28, 0x44, 0x00],
    [0x00, 0x41, 0x7F, 0x40, 0x00],
    [0x7C, 0x04, 0x18, 0x04, 0x78],
    [0x7C, 0x08, 0x04, 0x04, 0x78],
    [0x38, 0x44, 0x44, 0x44, 0x38],
    [0x7C, 0x14, 0x14, 0x14, 0x08],
    [0x08, 0x14, 0x14, 0x18, 0x7C],
    [0x7C, 0x08, 0x04, 0x04, 0x08],
    [0x48, 0x54, 0x54, 0x54, 0x20],
    [0x04, 0x3F, 0x44, 0x40, 0x20],
    [0x3C, 0x40, 0x40, 0x20, 0x7C],
    [0x1C, 0x20, 0x40, 0x20, 0x1C],
    [0x3C, 0x40, 0x30, 0x40, 0x3C],
    [0x44, 0x28, 0x10, 0x28, 0x44],
    [0x0C, 0x50, 0x50, 0x50, 0x3C],
    [0x44, 0x64, 0x54, 0x4C, 0x44],
    [0x00, 0x08, 0x36, 0x41, 0x00],
    [0x00, 0x00, 0x7F, 0x00, 0x00],
    [0x00, 0x41, 0x36, 0x08, 0x00],
    [0x10, 0x08, 0x08, 0x10, 0x08],
];

const REPLACEMENT_GLYPH: [u8; 5] = [0x02, 0x01, 0x51, 0x09, 0x06];

/// Column bitmap for `ch`; characters outside printable ASCII map to `?`
pub fn bitmap_glyph(ch: char) -> [u8; 5] {
    u32::from(ch)
        .checked_sub(0x20)
        .and_then(|index| BITMAP_GLYPHS.get(index as usize))
        .copied()
        .unwrap_or(REPLACEMENT_GLYPH)
}

/// Load a font file, returning `None` when it is missing or unreadable
///
/// Collections (`.ttc`) use their first face.
pub fn load_font(path: &Path) -> Option<FontVec> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::debug!("Font {} unavailable: {e}", path.display());
            return None;
        }
    };
    match FontVec::try_from_vec_and_index(bytes, 0) {
        Ok(font) => Some(font),
        Err(e) => {
            log::debug!("Font {} rejected: {e}", path.display());
            None
        }
    }
}

/// Font used to draw blueprint text
pub enum Typeface {
    /// Scalable font loaded from disk
    Outline(FontVec),
    /// Built-in 5x7 bitmap font, always available
    Bitmap,
}

impl std::fmt::Debug for Typeface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Outline(_) => f.write_str("Typeface::Outline"),
            Self::Bitmap => f.write_str("Typeface::Bitmap"),
        }
    }
}

impl Typeface {
    /// First preferred font that loads, or the bitmap font
    pub fn select(candidates: &[PathBuf]) -> Self {
        if let Some((path, font)) = candidates
            .iter()
            .find_map(|path| load_font(path).map(|font| (path, font)))
        {
            log::info!("Using font {}", path.display());
            return Self::Outline(font);
        }
        log::warn!("No preferred font could be loaded; using the built-in bitmap font");
        Self::Bitmap
    }

    /// Whether the built-in bitmap font is in use
    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Bitmap)
    }

    /// Draw `text` with its top-left corner at `(x, y)` and a nominal height of `px`
    pub fn draw_text(&self, canvas: &mut RgbImage, x: i32, y: i32, text: &str, px: f32, color: Rgb<u8>) {
        match self {
            Self::Outline(font) => draw_outline_text(font, canvas, x, y, text, px, color),
            Self::Bitmap => draw_bitmap_text(canvas, x, y, text, px, color),
        }
    }
}

fn draw_outline_text(
    font: &FontVec,
    canvas: &mut RgbImage,
    x: i32,
    y: i32,
    text: &str,
    px: f32,
    color: Rgb<u8>,
) {
    let scaled = font.as_scaled(PxScale::from(px));
    let baseline = y as f32 + scaled.ascent();
    let mut caret = x as f32;
    let mut previous = None;

    for ch in text.chars() {
        let id = scaled.glyph_id(ch);
        if let Some(prev) = previous {
            caret += scaled.kern(prev, id);
        }
        let glyph = id.with_scale_and_position(scaled.scale(), point(caret, baseline));
        caret += scaled.h_advance(id);
        previous = Some(id);

        if let Some(outlined) = font.outline_glyph(glyph) {
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, coverage| {
                blend_pixel(
                    canvas,
                    bounds.min.x as i32 + gx as i32,
                    bounds.min.y as i32 + gy as i32,
                    color,
                    coverage,
                );
            });
        }
    }
}

fn draw_bitmap_text(canvas: &mut RgbImage, x: i32, y: i32, text: &str, px: f32, color: Rgb<u8>) {
    let scale = (px / BITMAP_CELL_HEIGHT as f32).round().max(1.0) as i32;
    let advance = BITMAP_CELL_WIDTH as i32 * scale;

    for (index, ch) in text.chars().enumerate() {
        let origin_x = x + index as i32 * advance;
        for (col, bits) in bitmap_glyph(ch).iter().enumerate() {
            for row in 0..7 {
                if bits & (1 << row) == 0 {
                    continue;
                }
                let block_x = origin_x + col as i32 * scale;
                let block_y = y + row * scale;
                for dy in 0..scale {
                    for dx in 0..scale {
                        blend_pixel(canvas, block_x + dx, block_y + dy, color, 1.0);
                    }
                }
            }
        }
    }
}

// Coverage-weighted blend; pixels outside the canvas are ignored
fn blend_pixel(canvas: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>, coverage: f32) {
    if x < 0 || y < 0 {
        return;
    }
    let Some(pixel) = canvas.get_pixel_mut_checked(x as u32, y as u32) else {
        return;
    };
    let alpha = coverage.clamp(0.0, 1.0);
    for (channel, target) in pixel.0.iter_mut().zip(color.0) {
        *channel = (f32::from(*channel) * (1.0 - alpha) + f32::from(target) * alpha).round() as u8;
    }
}
