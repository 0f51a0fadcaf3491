// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Modeless windows for the text-entry commands.
//!
//! Comment, profile n, options and about are shown as egui windows; the
//! app applies whatever the user confirms on the next frame.

use crate::config::Options;
use crate::models::annotation::StrokeColor;
use crate::version;

/// Which windows are open and what has been typed into them.
#[derive(Default)]
pub struct Dialogs {
    pub comment: Option<String>,
    pub profile_n: Option<String>,
    pub options: Option<OptionsDraft>,
    pub about: bool,
}

/// Options being edited, with the point count kept as typed.
pub struct OptionsDraft {
    pub options: Options,
    pub random_point_count: String,
}

impl OptionsDraft {
    pub fn new(options: &Options) -> Self {
        Self {
            options: options.clone(),
            random_point_count: options.random_point_count.to_string(),
        }
    }
}

/// Value confirmed in one of the windows.
pub enum DialogAction {
    None,
    SetComment(String),
    SetProfileN(String),
    SetOptions {
        options: Options,
        random_point_count: String,
    },
}

fn color_row(ui: &mut egui::Ui, label: &str, color: &mut StrokeColor) {
    ui.label(label);
    let mut rgb = [color.r, color.g, color.b];
    if egui::color_picker::color_edit_button_srgb(ui, &mut rgb).changed() {
        *color = StrokeColor::rgb(rgb[0], rgb[1], rgb[2]);
    }
    ui.end_row();
}

/// Ok/Cancel row. Returns `Some(true)` on Ok, `Some(false)` on Cancel.
fn ok_cancel(ui: &mut egui::Ui) -> Option<bool> {
    let mut result = None;
    ui.horizontal(|ui| {
        if ui.button("OK").clicked() || ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            result = Some(true);
        }
        if ui.button("Cancel").clicked() {
            result = Some(false);
        }
    });
    result
}

fn text_window(ctx: &egui::Context, title: &str, label: &str, text: &mut Option<String>) -> Option<String> {
    let mut confirmed = None;
    let mut close = false;
    if let Some(value) = text.as_mut() {
        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(label);
                ui.text_edit_singleline(value).request_focus();
                match ok_cancel(ui) {
                    Some(true) => {
                        confirmed = Some(value.clone());
                        close = true;
                    }
                    Some(false) => close = true,
                    None => {}
                }
            });
    }
    if close {
        *text = None;
    }
    confirmed
}

/// Show every open window and return the value confirmed this frame.
pub fn show(ctx: &egui::Context, dialogs: &mut Dialogs) -> DialogAction {
    let mut action = DialogAction::None;

    if let Some(comment) = text_window(ctx, "Add comment", "Comment:", &mut dialogs.comment) {
        action = DialogAction::SetComment(comment);
    }
    if let Some(n) = text_window(ctx, "Set profile n", "Set profile n:", &mut dialogs.profile_n) {
        action = DialogAction::SetProfileN(n);
    }

    let mut close_options = false;
    if let Some(draft) = dialogs.options.as_mut() {
        egui::Window::new("Options")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                egui::Grid::new("options_grid").num_columns(2).show(ui, |ui| {
                    ui.label("Random point n:");
                    ui.text_edit_singleline(&mut draft.random_point_count);
                    ui.end_row();

                    let colors = &mut draft.options.colors;
                    color_row(ui, "Path:", &mut colors.path);
                    color_row(ui, "Points:", &mut colors.points);
                    color_row(ui, "Positive polarity:", &mut colors.positive_polarity);
                    color_row(ui, "Hole:", &mut colors.hole);
                    color_row(ui, "Random points:", &mut colors.random_points);
                    color_row(ui, "Profile ID label:", &mut colors.text);
                });
                ui.add_space(8.0);
                match ok_cancel(ui) {
                    Some(true) => {
                        action = DialogAction::SetOptions {
                            options: draft.options.clone(),
                            random_point_count: draft.random_point_count.clone(),
                        };
                        close_options = true;
                    }
                    Some(false) => close_options = true,
                    None => {}
                }
            });
    }
    if close_options {
        dialogs.options = None;
    }

    if dialogs.about {
        egui::Window::new(format!("About {}", version::TITLE))
            .collapsible(false)
            .resizable(false)
            .open(&mut dialogs.about)
            .show(ctx, |ui| {
                ui.heading(version::TITLE);
                ui.label(version::version_line());
                ui.add_space(8.0);
                ui.label(format!("Written by {}", version::AUTHOR));
                ui.label("Defines profiles on micrographs for distance-to-path analysis.");
            });
    }

    action
}
