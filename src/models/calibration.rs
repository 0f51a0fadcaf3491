// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Spatial calibration of an image.

use serde::{Deserialize, Serialize};

/// Physical size of one pixel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calibration {
    pub pixel_width: f64,
    pub pixel_height: f64,
    pub unit: String,
}

impl Default for Calibration {
    fn default() -> Self {
        Self {
            pixel_width: 1.0,
            pixel_height: 1.0,
            unit: String::new(),
        }
    }
}

impl Calibration {
    pub fn new(pixel_width: f64, pixel_height: f64, unit: impl Into<String>) -> Self {
        Self {
            pixel_width,
            pixel_height,
            unit: unit.into(),
        }
    }

    /// A blank unit or the "inch" fallback of uncalibrated scans means no
    /// scale has been set.
    pub fn is_set(&self) -> bool {
        let unit = self.unit.trim();
        !unit.is_empty() && unit != "inch"
    }

    pub fn is_isotropic(&self) -> bool {
        self.pixel_width == self.pixel_height
    }

    /// Pixel width as written to profiles: microns are reported in nm.
    pub fn output_pixel_width(&self) -> (f64, &str) {
        if self.unit == "micron" {
            (self.pixel_width * 1000.0, "nm")
        } else {
            (self.pixel_width, self.unit.as_str())
        }
    }

    /// Pixel width formatted with two decimals and its output unit.
    pub fn format_pixel_width(&self) -> String {
        let (width, unit) = self.output_pixel_width();
        format!("{:.2} {}", width, unit)
    }
}
