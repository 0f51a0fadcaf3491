// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! User options.
//!
//! Options are kept in a small YAML file in the platform config directory
//! and handed to the profile session when it is created.

use crate::models::annotation::{AnnotationKind, StrokeColor};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Number of random points placed when nothing else is configured.
pub const DEFAULT_RANDOM_POINT_COUNT: usize = 200;

/// Stroke colour for each component kind, plus the profile label colour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentColors {
    pub path: StrokeColor,
    pub points: StrokeColor,
    pub positive_polarity: StrokeColor,
    pub hole: StrokeColor,
    pub random_points: StrokeColor,
    pub text: StrokeColor,
}

impl Default for ComponentColors {
    fn default() -> Self {
        Self {
            path: StrokeColor::BLUE,
            points: StrokeColor::GREEN,
            positive_polarity: StrokeColor::MAGENTA,
            hole: StrokeColor::RED,
            random_points: StrokeColor::YELLOW,
            text: StrokeColor::BLUE,
        }
    }
}

impl ComponentColors {
    pub fn for_kind(&self, kind: AnnotationKind) -> StrokeColor {
        match kind {
            AnnotationKind::Path => self.path,
            AnnotationKind::Points => self.points,
            AnnotationKind::PositivePolarity => self.positive_polarity,
            AnnotationKind::Hole => self.hole,
            AnnotationKind::RandomPoints => self.random_points,
        }
    }
}

/// Persistent user options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    pub random_point_count: usize,
    pub colors: ComponentColors,
    /// TrueType font for the profile ID label burned into saved images.
    pub label_font: Option<PathBuf>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            random_point_count: DEFAULT_RANDOM_POINT_COUNT,
            colors: ComponentColors::default(),
            label_font: None,
        }
    }
}

impl Options {
    pub fn default_filename() -> &'static str {
        "options.yaml"
    }

    /// Default options file path, `None` when no config directory is known.
    pub fn default_path() -> Option<PathBuf> {
        if let Some(config_dir) = dirs::config_dir() {
            Some(config_dir.join("disttopath").join(Self::default_filename()))
        } else {
            dirs::home_dir().map(|home| {
                home.join(".config")
                    .join("disttopath")
                    .join(Self::default_filename())
            })
        }
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let mut options: Self = serde_yaml::from_str(yaml)?;
        if options.random_point_count == 0 {
            log::warn!(
                "random_point_count must be larger than 0, using {}",
                DEFAULT_RANDOM_POINT_COUNT
            );
            options.random_point_count = DEFAULT_RANDOM_POINT_COUNT;
        }
        Ok(options)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Load options from `path`, falling back to defaults on any problem.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            log::debug!("No options file found at {:?}", path);
            return Self::default();
        }
        let loaded = std::fs::read_to_string(path)
            .context("reading options file")
            .and_then(|yaml| Self::from_yaml(&yaml));
        match loaded {
            Ok(options) => {
                log::info!("Loaded options from {:?}", path);
                options
            }
            Err(e) => {
                log::warn!("Failed to load options from {:?}: {:#}", path, e);
                Self::default()
            }
        }
    }

    /// Load options from the default location.
    pub fn load() -> Self {
        match Self::default_path() {
            Some(path) => Self::load_or_default(&path),
            None => Self::default(),
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_yaml()?)
            .with_context(|| format!("writing options to {}", path.display()))?;
        log::info!("Saved options to {:?}", path);
        Ok(())
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::default_path().context("could not determine config directory")?;
        self.save_to(&path)
    }
}
