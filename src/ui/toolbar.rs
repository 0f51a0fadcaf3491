// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Toolbar and selection tool choice.
//!
//! This module provides the toolbar interface for choosing how the next
//! selection is drawn on the image.

use crate::app::Tool;

/// Display the toolbar with tool selection buttons.
pub fn show(ui: &mut egui::Ui, current_tool: &mut Tool) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        ui.label("Selection:");

        ui.separator();

        for tool in Tool::all() {
            if ui
                .selectable_label(*current_tool == *tool, tool.label())
                .clicked()
            {
                *current_tool = *tool;
            }
        }

        ui.separator();

        let tool_text = match current_tool {
            Tool::Select => "Click a profile component to select it",
            Tool::SegmentedLine => "Click to add nodes, double-click to finish the line",
            Tool::Polygon => "Click to add vertices, double-click to close the polygon",
            Tool::MultiPoint => "Click to add points",
        };

        ui.label(egui::RichText::new(tool_text).italics().weak());
    });
}
