// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Profile command panel.
//!
//! One button per profile command, grouped the way the profile is built:
//! saving, defining components, deleting components and the rest.

use crate::models::annotation::AnnotationKind;

/// Command requested from the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SaveProfile,
    ClearProfile,
    Define(AnnotationKind),
    PlaceRandomPoints,
    Delete(AnnotationKind),
    DeleteSelected,
    AddComment,
    SetProfileN,
    Options,
    About,
}

fn button(ui: &mut egui::Ui, label: &str, command: Command, clicked: &mut Option<Command>) {
    let width = ui.available_width();
    if ui
        .add_sized([width, 22.0], egui::Button::new(label))
        .clicked()
    {
        *clicked = Some(command);
    }
}

/// Display the command buttons and return the one clicked, if any.
pub fn show(ui: &mut egui::Ui) -> Option<Command> {
    let mut clicked = None;

    button(ui, "Save profile", Command::SaveProfile, &mut clicked);
    button(ui, "Clear profile", Command::ClearProfile, &mut clicked);

    ui.add_space(8.0);
    ui.label("Define selection as:");
    for kind in [
        AnnotationKind::Path,
        AnnotationKind::Points,
        AnnotationKind::PositivePolarity,
        AnnotationKind::Hole,
    ] {
        button(ui, kind.title(), Command::Define(kind), &mut clicked);
    }

    ui.add_space(8.0);
    button(ui, "Place random points", Command::PlaceRandomPoints, &mut clicked);

    ui.add_space(8.0);
    ui.label("Delete profile components:");
    button(ui, "Delete path", Command::Delete(AnnotationKind::Path), &mut clicked);
    button(ui, "Delete points", Command::Delete(AnnotationKind::Points), &mut clicked);
    button(
        ui,
        "Delete polarity",
        Command::Delete(AnnotationKind::PositivePolarity),
        &mut clicked,
    );
    button(
        ui,
        "Delete random points",
        Command::Delete(AnnotationKind::RandomPoints),
        &mut clicked,
    );
    button(ui, "Delete selected component", Command::DeleteSelected, &mut clicked);

    ui.add_space(8.0);
    ui.label("Other:");
    button(ui, "Add comment", Command::AddComment, &mut clicked);
    button(ui, "Set profile n", Command::SetProfileN, &mut clicked);
    button(ui, "Options...", Command::Options, &mut clicked);
    button(ui, "About...", Command::About, &mut clicked);

    clicked
}
