// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! DistToPath - profile annotation for distance-to-path analysis
//!
//! A cross-platform desktop application for defining profiles on
//! micrographs: a path, points, a polarity marker, holes and random points,
//! saved as `.dtp` text files for later analysis.

mod app;
mod config;
mod error;
mod host;
mod io;
mod models;
mod ui;
mod util;
mod version;

use anyhow::Result;
use app::DistToPathApp;
use config::Options;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();
    log::info!("{}", version::version_line());

    let options = Options::load();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title(version::TITLE),
        ..Default::default()
    };

    eframe::run_native(
        version::TITLE,
        native_options,
        Box::new(|_cc| Ok(Box::new(DistToPathApp::new(options)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
