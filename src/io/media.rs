// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Media file loading and the annotated image buffer.
//!
//! Images are converted to 8-bit RGB on load so that coloured profile
//! components can be burned into them when a profile is saved.

use crate::error::Result as ProfileResult;
use crate::host::{ImageId, ProfileImage};
use crate::models::annotation::{Point, StrokeColor};
use crate::models::calibration::Calibration;
use ab_glyph::{FontVec, PxScale};
use anyhow::{Context, Result};
use image::{ImageFormat, Rgb, RgbImage};
use imageproc::drawing::{draw_cross_mut, draw_line_segment_mut, draw_text_mut, text_size};
use std::path::{Path, PathBuf};

/// Image file extensions offered in the open dialog.
pub const IMAGE_EXTENSIONS: &[&str] = &["tif", "tiff", "png", "jpg", "jpeg", "bmp"];

/// Fonts tried for the profile label when none is configured.
const SYSTEM_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "/Library/Fonts/Arial Bold.ttf",
    "C:\\Windows\\Fonts\\arialbd.ttf",
];

/// Load a font from `path`, or from the first system font that exists.
pub fn load_label_font(path: Option<&Path>) -> Option<FontVec> {
    let candidates: Vec<PathBuf> = match path {
        Some(p) => vec![p.to_path_buf()],
        None => SYSTEM_FONTS.iter().map(PathBuf::from).collect(),
    };
    for candidate in candidates.iter().filter(|p| p.exists()) {
        match std::fs::read(candidate).map(FontVec::try_from_vec) {
            Ok(Ok(font)) => {
                log::info!("Using label font {}", candidate.display());
                return Some(font);
            }
            Ok(Err(e)) => log::warn!("Invalid font {}: {}", candidate.display(), e),
            Err(e) => log::warn!("Failed to read font {}: {}", candidate.display(), e),
        }
    }
    log::warn!("No label font found, profile labels will not be drawn");
    None
}

fn to_rgb(color: StrokeColor) -> Rgb<u8> {
    Rgb([color.r, color.g, color.b])
}

/// An opened image being profiled.
pub struct AnnotatedImage {
    id: ImageId,
    title: String,
    short_title: String,
    pub pixels: RgbImage,
    pub calibration: Calibration,
    font: Option<FontVec>,
    /// Set whenever pixels were drawn on, so the display can be refreshed.
    pub modified: bool,
}

impl AnnotatedImage {
    pub fn new(id: ImageId, title: impl Into<String>, pixels: RgbImage) -> Self {
        let title = title.into();
        let short_title = Path::new(&title)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| title.clone());
        Self {
            id,
            title,
            short_title,
            pixels,
            calibration: Calibration::default(),
            font: None,
            modified: false,
        }
    }

    pub fn with_font(mut self, font: Option<FontVec>) -> Self {
        self.font = font;
        self
    }

    /// RGBA bytes for uploading as a texture.
    pub fn rgba_bytes(&self) -> Vec<u8> {
        image::DynamicImage::ImageRgb8(self.pixels.clone())
            .to_rgba8()
            .into_raw()
    }
}

/// Load an image file as an RGB buffer.
pub fn load_image(path: &Path, id: ImageId) -> Result<AnnotatedImage> {
    let img = image::open(path).with_context(|| format!("opening {}", path.display()))?;
    let title = path
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let pixels = img.to_rgb8();
    log::info!(
        "Loaded {} ({}x{})",
        path.display(),
        pixels.width(),
        pixels.height()
    );
    Ok(AnnotatedImage::new(id, title, pixels))
}

impl ProfileImage for AnnotatedImage {
    fn id(&self) -> ImageId {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn short_title(&self) -> &str {
        &self.short_title
    }

    fn width(&self) -> u32 {
        self.pixels.width()
    }

    fn height(&self) -> u32 {
        self.pixels.height()
    }

    fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    fn draw_line(&mut self, from: Point, to: Point, color: StrokeColor) {
        draw_line_segment_mut(
            &mut self.pixels,
            (from.x as f32, from.y as f32),
            (to.x as f32, to.y as f32),
            to_rgb(color),
        );
        self.modified = true;
    }

    fn draw_marker(&mut self, at: Point, color: StrokeColor) {
        draw_cross_mut(&mut self.pixels, to_rgb(color), at.x, at.y);
        self.modified = true;
    }

    fn label_extent(&self, text: &str, size: u32) -> (u32, u32) {
        match &self.font {
            Some(font) => text_size(PxScale::from(size as f32), font, text),
            None => (text.chars().count() as u32 * size * 3 / 5, size),
        }
    }

    fn draw_label(&mut self, text: &str, at: Point, size: u32, color: StrokeColor) {
        let Some(font) = &self.font else {
            log::warn!("No label font available, skipping label '{}'", text);
            return;
        };
        draw_text_mut(
            &mut self.pixels,
            to_rgb(color),
            at.x,
            at.y,
            PxScale::from(size as f32),
            font,
            text,
        );
        self.modified = true;
    }

    fn save_raster_copy(&self, path: &Path) -> ProfileResult<()> {
        self.pixels.save_with_format(path, ImageFormat::Tiff)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank(width: u32, height: u32) -> AnnotatedImage {
        AnnotatedImage::new(ImageId(1), "cell.tif", RgbImage::new(width, height))
    }

    #[test]
    fn test_titles() {
        let image = blank(4, 4);
        assert_eq!(image.title(), "cell.tif");
        assert_eq!(image.short_title(), "cell");
    }

    #[test]
    fn test_draw_line_colours_pixels() {
        let mut image = blank(20, 20);
        image.draw_line(Point::new(2, 5), Point::new(12, 5), StrokeColor::BLUE);
        assert_eq!(*image.pixels.get_pixel(7, 5), Rgb([0, 0, 255]));
        assert_eq!(*image.pixels.get_pixel(7, 6), Rgb([0, 0, 0]));
        assert!(image.modified);
    }

    #[test]
    fn test_marker_is_drawn_at_point() {
        let mut image = blank(10, 10);
        image.draw_marker(Point::new(5, 5), StrokeColor::MAGENTA);
        assert_eq!(*image.pixels.get_pixel(5, 5), Rgb([255, 0, 255]));
    }

    #[test]
    fn test_label_without_font_is_skipped() {
        let mut image = blank(10, 10);
        image.draw_label("A1", Point::new(1, 1), 8, StrokeColor::BLUE);
        assert!(!image.modified);
        assert_eq!(image.label_extent("A1", 10), (12, 10));
    }

    #[test]
    fn test_raster_copy_is_tiff() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cell.a.tif");
        let mut image = blank(8, 6);
        image.draw_line(Point::new(0, 0), Point::new(7, 0), StrokeColor::RED);
        image.save_raster_copy(&path).unwrap();

        let reloaded = load_image(&path, ImageId(2)).unwrap();
        assert_eq!(reloaded.width(), 8);
        assert_eq!(reloaded.height(), 6);
        assert_eq!(*reloaded.pixels.get_pixel(3, 0), Rgb([255, 0, 0]));
        assert_eq!(reloaded.title(), "cell.a.tif");
    }
}
