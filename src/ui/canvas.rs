// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Drawing canvas for image display and selection.
//!
//! This module provides the main canvas area where the image is shown with
//! the profile overlay, and where the user draws selections or picks an
//! existing component.

use crate::app::Tool;
use crate::models::annotation::{Annotation, AnnotationId, AnnotationSet, Point, StrokeColor};
use crate::models::selection::{Selection, SelectionKind};
use crate::util::geometry::{hit_test, to_image_pixel, to_relative, HIT_RADIUS};

/// Result of canvas interaction.
pub enum CanvasAction {
    None,
    AddVertex(Point),
    FinishSelection,
    SelectComponent(Option<AnnotationId>),
}

fn color32(color: StrokeColor) -> egui::Color32 {
    egui::Color32::from_rgb(color.r, color.g, color.b)
}

/// Display the main canvas area and handle mouse interactions.
pub fn show(
    ui: &mut egui::Ui,
    annotations: &AnnotationSet,
    current_tool: Tool,
    image_texture: &Option<egui::TextureHandle>,
    image_size: Option<(u32, u32)>,
    selection: &Option<Selection>,
    selected_component: Option<AnnotationId>,
) -> CanvasAction {
    let mut action = CanvasAction::None;
    ui.style_mut().visuals.extreme_bg_color = egui::Color32::from_gray(40);

    let available_size = ui.available_size();

    egui::Frame::canvas(ui.style()).show(ui, |ui| {
        ui.set_min_size(available_size);

        let (Some(texture), Some((img_width, img_height))) = (image_texture, image_size) else {
            ui.centered_and_justified(|ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(20.0);
                    ui.heading(
                        egui::RichText::new("DistToPath")
                            .size(32.0)
                            .color(egui::Color32::from_gray(200)),
                    );
                    ui.add_space(20.0);
                    ui.label(
                        egui::RichText::new("Open a micrograph to begin a profile")
                            .color(egui::Color32::from_gray(180)),
                    );
                    ui.add_space(10.0);
                    ui.label(
                        egui::RichText::new("File → Open Image...")
                            .weak()
                            .color(egui::Color32::from_gray(130)),
                    );
                });
            });
            return;
        };

        // Fit the image in the available space, keeping its aspect ratio
        let available = ui.available_size();
        let img_aspect = img_width as f32 / img_height as f32;
        let available_aspect = available.x / available.y;
        let (display_width, display_height) = if img_aspect > available_aspect {
            (available.x, available.x / img_aspect)
        } else {
            (available.y * img_aspect, available.y)
        };
        let x_offset = (available.x - display_width) / 2.0;
        let y_offset = (available.y - display_height) / 2.0;
        let image_rect = egui::Rect::from_min_size(
            ui.min_rect().min + egui::vec2(x_offset, y_offset),
            egui::vec2(display_width, display_height),
        );

        ui.painter().image(
            texture.id(),
            image_rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );

        let response = ui.allocate_rect(image_rect, egui::Sense::click());
        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                if image_rect.contains(pos) {
                    let rel_x = (pos.x - image_rect.min.x) / display_width;
                    let rel_y = (pos.y - image_rect.min.y) / display_height;
                    let pixel = to_image_pixel(rel_x as f64, rel_y as f64, img_width, img_height);
                    action = if current_tool == Tool::Select {
                        let scale = img_width as f64 / display_width as f64;
                        CanvasAction::SelectComponent(hit_test(annotations, pixel, HIT_RADIUS * scale))
                    } else {
                        CanvasAction::AddVertex(pixel)
                    };
                }
            }
        }
        if response.double_clicked()
            && matches!(current_tool, Tool::SegmentedLine | Tool::Polygon)
        {
            action = CanvasAction::FinishSelection;
        }

        let to_screen = |p: &Point| {
            let (rx, ry) = to_relative(p, img_width, img_height);
            egui::pos2(
                image_rect.min.x + rx as f32 * image_rect.width(),
                image_rect.min.y + ry as f32 * image_rect.height(),
            )
        };

        let painter = ui.painter();
        for annotation in annotations {
            let highlighted = selected_component == Some(annotation.id());
            draw_annotation(painter, annotation, &to_screen, highlighted);
        }
        if let Some(selection) = selection {
            draw_selection(painter, selection, &to_screen);
        }
    });

    ui.separator();
    ui.horizontal(|ui| {
        ui.label(format!("Tool: {}", current_tool.label()));
        ui.separator();
        match image_size {
            Some((w, h)) => ui.label(format!("{} x {} pixels", w, h)),
            None => ui.label("No image loaded"),
        };
    });

    action
}

fn draw_cross(painter: &egui::Painter, at: egui::Pos2, half: f32, stroke: egui::Stroke) {
    painter.line_segment([at - egui::vec2(half, 0.0), at + egui::vec2(half, 0.0)], stroke);
    painter.line_segment([at - egui::vec2(0.0, half), at + egui::vec2(0.0, half)], stroke);
}

/// Draw a profile component in its own colour.
fn draw_annotation(
    painter: &egui::Painter,
    annotation: &Annotation,
    to_screen: &dyn Fn(&Point) -> egui::Pos2,
    highlighted: bool,
) {
    let color = color32(annotation.stroke_color);
    let width = if highlighted { 3.0 } else { 1.5 };
    let stroke = egui::Stroke::new(width, color);
    let screen_points: Vec<egui::Pos2> = annotation.vertices.iter().map(to_screen).collect();

    if annotation.kind.is_outline() {
        for pair in screen_points.windows(2) {
            painter.line_segment([pair[0], pair[1]], stroke);
        }
        if annotation.is_closed() && screen_points.len() > 2 {
            painter.line_segment([screen_points[screen_points.len() - 1], screen_points[0]], stroke);
        }
        if highlighted {
            for point in &screen_points {
                painter.circle_stroke(*point, 4.0, egui::Stroke::new(1.0, egui::Color32::WHITE));
            }
        }
    } else {
        for point in &screen_points {
            if annotation.hide_labels {
                painter.circle_filled(*point, 2.0, color);
            } else {
                draw_cross(painter, *point, 5.0, stroke);
            }
            if highlighted {
                painter.circle_stroke(*point, 6.0, egui::Stroke::new(1.0, egui::Color32::WHITE));
            }
        }
    }
}

/// Draw the selection the user is working on.
fn draw_selection(
    painter: &egui::Painter,
    selection: &Selection,
    to_screen: &dyn Fn(&Point) -> egui::Pos2,
) {
    let color = egui::Color32::YELLOW;
    let stroke = egui::Stroke::new(1.0, color);
    let screen_points: Vec<egui::Pos2> = selection.vertices.iter().map(to_screen).collect();

    match selection.kind {
        SelectionKind::Polyline | SelectionKind::Polygon => {
            for pair in screen_points.windows(2) {
                painter.line_segment([pair[0], pair[1]], stroke);
            }
            if selection.kind == SelectionKind::Polygon && screen_points.len() > 2 {
                painter.line_segment(
                    [screen_points[screen_points.len() - 1], screen_points[0]],
                    egui::Stroke::new(1.0, color.gamma_multiply(0.5)),
                );
            }
            for point in &screen_points {
                painter.circle_filled(*point, 3.0, egui::Color32::WHITE);
                painter.circle_stroke(*point, 3.0, egui::Stroke::new(1.0, egui::Color32::BLACK));
            }
        }
        SelectionKind::Points => {
            for point in &screen_points {
                draw_cross(painter, *point, 6.0, egui::Stroke::new(2.0, color));
            }
        }
    }
}
