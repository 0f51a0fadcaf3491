// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Profile info panel.
//!
//! This module provides the side panel summarising the profile under
//! construction, the profile ID used at the next save, and the spatial
//! calibration of the current image.

use crate::models::calibration::Calibration;
use crate::models::profile::ProfileSummary;

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

/// Display the profile info panel.
pub fn show(
    ui: &mut egui::Ui,
    summary: &ProfileSummary,
    dirty: bool,
    profile_id: &mut String,
    calibration: Option<&mut Calibration>,
) {
    ui.heading("Profile info");
    ui.separator();

    egui::Grid::new("profile_info")
        .num_columns(2)
        .striped(true)
        .show(ui, |ui| {
            let rows = [
                ("Profile n:", summary.profile_n.to_string()),
                ("Points:", summary.point_count.to_string()),
                ("Path nodes:", summary.path_nodes.to_string()),
                ("Positive polarity:", yes_no(summary.polarity_defined).to_string()),
                ("Holes:", summary.hole_count.to_string()),
                ("Random points:", yes_no(summary.random_points_placed).to_string()),
                ("Pixel width:", summary.pixel_width.clone()),
                ("Comment:", summary.comment.clone()),
                ("Unsaved changes:", yes_no(dirty).to_string()),
            ];
            for (label, value) in rows {
                ui.label(label);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(value);
                });
                ui.end_row();
            }
        });

    ui.add_space(12.0);
    ui.label("Profile ID for next save:");
    ui.add(egui::TextEdit::singleline(profile_id).hint_text(summary.profile_n.to_string()));

    ui.add_space(12.0);
    ui.heading("Scale");
    ui.separator();
    match calibration {
        Some(calibration) => {
            egui::Grid::new("calibration")
                .num_columns(2)
                .show(ui, |ui| {
                    ui.label("Pixel width:");
                    ui.add(
                        egui::DragValue::new(&mut calibration.pixel_width)
                            .speed(0.001)
                            .range(0.0..=f64::MAX),
                    );
                    ui.end_row();

                    ui.label("Pixel height:");
                    ui.add(
                        egui::DragValue::new(&mut calibration.pixel_height)
                            .speed(0.001)
                            .range(0.0..=f64::MAX),
                    );
                    ui.end_row();

                    ui.label("Unit:");
                    ui.text_edit_singleline(&mut calibration.unit);
                    ui.end_row();
                });
            if !calibration.is_set() {
                ui.label(
                    egui::RichText::new("Scale not set")
                        .color(egui::Color32::from_rgb(220, 120, 60)),
                );
            }
        }
        None => {
            ui.label(egui::RichText::new("No image loaded").weak());
        }
    }
}
