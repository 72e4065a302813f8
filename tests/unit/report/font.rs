//! Tests for font loading and text drawing

#[cfg(test)]
mod tests {
    use brickplan::report::font::{Typeface, bitmap_glyph, load_font};
    use image::{Rgb, RgbImage};
    use std::path::{Path, PathBuf};

    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

    // Tests characters outside printable ASCII use the replacement glyph
    // Verified by indexing the glyph table without a range check
    #[test]
    fn test_bitmap_glyph_fallback() {
        assert_eq!(bitmap_glyph('é'), bitmap_glyph('?'));
        assert_eq!(bitmap_glyph('\n'), bitmap_glyph('?'));
        assert_ne!(bitmap_glyph('A'), bitmap_glyph('?'));
        assert_eq!(bitmap_glyph(' '), [0; 5]);
    }

    // Tests a missing font file yields no font
    // Verified by returning the bitmap font from load_font
    #[test]
    fn test_load_font_missing_file() {
        assert!(load_font(Path::new("/nonexistent/font.ttf")).is_none());
    }

    // Tests invalid font data yields no font
    // Verified by ignoring the FontVec parse error
    #[test]
    fn test_load_font_rejects_non_font_bytes() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("fake.ttf");
        std::fs::write(&path, b"not a font").expect("Failed to write file");

        assert!(load_font(&path).is_none());
    }

    // Tests selecting with no loadable font selects the bitmap font
    // Verified by returning the first path without loading it
    #[test]
    fn test_select_falls_back_to_bitmap() {
        let typeface = Typeface::select(&[PathBuf::from("/nonexistent/font.ttf")]);

        assert!(typeface.is_fallback());
        assert!(Typeface::select(&[]).is_fallback());
    }

    // Tests bitmap text sets pixels in the text color
    // Verified by drawing glyphs in the background color
    #[test]
    fn test_bitmap_text_draws_pixels() {
        let mut canvas = RgbImage::from_pixel(40, 20, WHITE);

        Typeface::Bitmap.draw_text(&mut canvas, 1, 1, "1-1", 10.0, BLACK);

        assert!(canvas.pixels().any(|pixel| *pixel == BLACK));
    }

    // Tests text running off the canvas is clipped instead of failing
    // Verified by removing the bounds check in put_pixel
    #[test]
    fn test_draw_text_clips_at_edges() {
        let mut canvas = RgbImage::from_pixel(4, 4, WHITE);

        Typeface::Bitmap.draw_text(&mut canvas, -3, -3, "WW", 16.0, BLACK);
        Typeface::Bitmap.draw_text(&mut canvas, 2, 2, "WW", 16.0, BLACK);

        assert_eq!(canvas.dimensions(), (4, 4));
    }
}
