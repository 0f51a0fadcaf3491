// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module contains the main application structure that implements
//! the egui::App trait. It owns the profile session and the open image,
//! and routes panel commands and canvas clicks to the session.

use crate::config::Options;
use crate::error::{ProfileError, Result as ProfileResult};
use crate::host::{Host, ImageId, ProfileImage};
use crate::io::media::{self, AnnotatedImage, IMAGE_EXTENSIONS};
use crate::models::annotation::{AnnotationId, Point};
use crate::models::calibration::Calibration;
use crate::models::profile::{ClearOutcome, ProfileSession, SaveOutcome, SaveReport};
use crate::models::selection::{Selection, SelectionKind};
use crate::ui::commands::{self, Command};
use crate::ui::dialogs::{self, DialogAction, Dialogs, OptionsDraft};
use crate::ui::native_host::NativeHost;
use crate::ui::{canvas, properties, toolbar};
use std::sync::mpsc::{channel, Receiver};

/// Current selection tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Select,
    SegmentedLine,
    Polygon,
    MultiPoint,
}

impl Tool {
    pub fn all() -> &'static [Tool] {
        &[Tool::Select, Tool::SegmentedLine, Tool::Polygon, Tool::MultiPoint]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tool::Select => "Select",
            Tool::SegmentedLine => "Segmented line",
            Tool::Polygon => "Polygon",
            Tool::MultiPoint => "Multi-point",
        }
    }

    /// Shape drawn by this tool, `None` for the select tool.
    pub fn selection_kind(&self) -> Option<SelectionKind> {
        match self {
            Tool::Select => None,
            Tool::SegmentedLine => Some(SelectionKind::Polyline),
            Tool::Polygon => Some(SelectionKind::Polygon),
            Tool::MultiPoint => Some(SelectionKind::Points),
        }
    }
}

/// Main application state.
pub struct DistToPathApp {
    session: ProfileSession,

    /// Currently open image, if any
    image: Option<AnnotatedImage>,

    /// Texture showing the image pixels
    image_texture: Option<egui::TextureHandle>,

    next_image_id: u64,

    current_tool: Tool,

    /// Selection being drawn or awaiting a Define command
    selection: Option<Selection>,

    /// Set once a line or polygon was finished with a double click
    selection_finished: bool,

    /// Component picked with the select tool
    selected_component: Option<AnnotationId>,

    /// Profile ID typed into the info panel for the next save
    profile_id_input: String,

    dialogs: Dialogs,

    /// Receiver for background image loading
    image_loader: Option<Receiver<Result<AnnotatedImage, String>>>,

    /// Loading state message
    loading_message: Option<String>,

    /// Last status line
    status: String,
}

impl DistToPathApp {
    pub fn new(options: Options) -> Self {
        Self {
            session: ProfileSession::new(options),
            image: None,
            image_texture: None,
            next_image_id: 1,
            current_tool: Tool::SegmentedLine,
            selection: None,
            selection_finished: false,
            selected_component: None,
            profile_id_input: String::new(),
            dialogs: Dialogs::default(),
            image_loader: None,
            loading_message: None,
            status: String::new(),
        }
    }

    /// Load an image file in the background.
    fn load_image_file(&mut self, path: std::path::PathBuf) {
        let (sender, receiver) = channel();
        self.image_loader = Some(receiver);
        self.loading_message = Some("Loading image...".to_string());

        let id = ImageId(self.next_image_id);
        self.next_image_id += 1;
        let font_path = self.session.options().label_font.clone();

        std::thread::spawn(move || {
            let result = media::load_image(&path, id)
                .map(|image| image.with_font(media::load_label_font(font_path.as_deref())))
                .map_err(|e| format!("Failed to load image: {:#}", e));
            let _ = sender.send(result);
        });
    }

    /// Offer to save an unsaved profile before its image is replaced.
    ///
    /// Returns `false` when the user kept the profile.
    fn release_profile(&mut self) -> bool {
        if !self.session.is_dirty() {
            return true;
        }
        let Some(mut image) = self.image.take() else {
            return true;
        };
        let mut host = NativeHost::new(self.profile_id_input.clone());
        let result = self.session.clear(&mut image, &mut host);
        self.image = Some(image);
        match result {
            Ok(ClearOutcome::Cleared) => {
                self.selected_component = None;
                self.profile_id_input.clear();
                true
            }
            Ok(ClearOutcome::Kept) => false,
            Err(e) => {
                self.report(&mut host, &e);
                false
            }
        }
    }

    fn upload_texture(&mut self, ctx: &egui::Context) {
        let Some(image) = self.image.as_mut() else {
            return;
        };
        let size = [image.width() as usize, image.height() as usize];
        let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &image.rgba_bytes());
        self.image_texture = Some(ctx.load_texture(
            "profile_image",
            color_image,
            egui::TextureOptions::LINEAR,
        ));
        image.modified = false;
    }

    fn set_tool(&mut self, tool: Tool) {
        if tool != self.current_tool {
            self.current_tool = tool;
            self.cancel_selection();
        }
    }

    fn cancel_selection(&mut self) {
        self.selection = None;
        self.selection_finished = false;
    }

    fn add_vertex(&mut self, point: Point) {
        let Some(kind) = self.current_tool.selection_kind() else {
            return;
        };
        let restart = self.selection_finished
            || self.selection.as_ref().map_or(true, |s| s.kind != kind);
        if restart {
            self.selection = Some(Selection::new(kind));
            self.selection_finished = false;
        }
        if let Some(selection) = self.selection.as_mut() {
            selection.add_vertex(point);
            log::debug!(
                "Added vertex ({}, {}), selection has {} vertices",
                point.x,
                point.y,
                selection.vertex_count()
            );
        }
    }

    /// Report a failed command the way the user should see it.
    fn report(&mut self, host: &mut dyn Host, error: &ProfileError) {
        self.status = error.to_string();
        if error.is_informational() {
            host.show_message(&error.to_string());
        } else {
            host.report_error(&error.to_string());
        }
    }

    fn run_command(&mut self, command: Command) {
        match command {
            Command::AddComment => {
                self.dialogs.comment = Some(self.session.comment().to_string());
                return;
            }
            Command::SetProfileN => {
                self.dialogs.profile_n = Some(self.session.total_sequence().to_string());
                return;
            }
            Command::Options => {
                self.dialogs.options = Some(OptionsDraft::new(self.session.options()));
                return;
            }
            Command::About => {
                self.dialogs.about = true;
                return;
            }
            _ => {}
        }

        let mut host = NativeHost::new(self.profile_id_input.clone());
        let Some(mut image) = self.image.take() else {
            host.show_message("There are no images open.");
            return;
        };
        let result = self.run_image_command(command, &mut image, &mut host);
        self.image = Some(image);
        if let Err(e) = result {
            self.report(&mut host, &e);
        }
    }

    fn run_image_command(
        &mut self,
        command: Command,
        image: &mut AnnotatedImage,
        host: &mut NativeHost,
    ) -> ProfileResult<()> {
        let id = image.id();
        match command {
            Command::SaveProfile => {
                if let SaveOutcome::Saved(report) = self.session.save_and_reset(image, host)? {
                    self.after_save(&report);
                }
            }
            Command::ClearProfile => {
                if self.session.clear(image, host)? == ClearOutcome::Cleared {
                    self.selected_component = None;
                    self.profile_id_input.clear();
                    self.status = "Profile cleared".to_string();
                }
            }
            Command::Define(kind) => {
                let selection = self.selection.as_ref().filter(|s| s.is_complete());
                self.session.define_component(id, kind, selection)?;
                self.cancel_selection();
                self.status = format!("{} defined", kind.title());
            }
            Command::PlaceRandomPoints => {
                let (width, height) = (image.width(), image.height());
                self.session
                    .generate_random_points(id, width, height, &mut rand::thread_rng())?;
                self.status = format!(
                    "{} random points placed",
                    self.session.options().random_point_count
                );
            }
            Command::Delete(kind) => {
                if self.session.delete_named(id, kind, host)? {
                    if self
                        .selected_component
                        .is_some_and(|c| self.session.annotations().get(c).is_none())
                    {
                        self.selected_component = None;
                    }
                    self.status = format!("{} deleted", kind.title());
                }
            }
            Command::DeleteSelected => {
                if self.session.delete_selected(id, self.selected_component, host)? {
                    self.selected_component = None;
                    self.status = "Component deleted".to_string();
                }
            }
            Command::AddComment | Command::SetProfileN | Command::Options | Command::About => {}
        }
        Ok(())
    }

    fn after_save(&mut self, report: &SaveReport) {
        self.selected_component = None;
        self.profile_id_input.clear();
        self.cancel_selection();
        self.status = match &report.raster {
            Some(raster) => format!(
                "Profile {} saved to {} and {}",
                report.profile_id,
                report.document.display(),
                raster.display()
            ),
            None => format!("Profile {} saved to {}", report.profile_id, report.document.display()),
        };
    }

    fn apply_dialog(&mut self, action: DialogAction) {
        let mut host = NativeHost::new(String::new());
        match action {
            DialogAction::None => {}
            DialogAction::SetComment(comment) => {
                self.session.set_comment(&comment);
            }
            DialogAction::SetProfileN(text) => match text.trim().parse::<u32>() {
                Ok(n) => self.session.set_total_sequence(n),
                Err(_) => host.report_error(&format!("'{}' is not a valid profile n.", text.trim())),
            },
            DialogAction::SetOptions {
                options,
                random_point_count,
            } => {
                self.session.set_options(options);
                let count = random_point_count.trim().parse::<usize>().unwrap_or(0);
                if let Err(e) = self.session.set_random_point_count(count) {
                    self.report(&mut host, &e);
                }
                if let Err(e) = self.session.options().save() {
                    log::warn!("Failed to save options: {:#}", e);
                }
            }
        }
    }

    fn calibration(&self) -> Calibration {
        self.image
            .as_ref()
            .map(|image| image.calibration.clone())
            .unwrap_or_default()
    }
}

impl eframe::App for DistToPathApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for completed image loading
        if let Some(ref receiver) = self.image_loader {
            if let Ok(result) = receiver.try_recv() {
                self.image_loader = None;
                self.loading_message = None;

                match result {
                    Ok(image) => {
                        self.status = format!("Opened {}", image.title());
                        self.image = Some(image);
                        self.cancel_selection();
                        self.selected_component = None;
                        self.upload_texture(ctx);
                    }
                    Err(e) => {
                        log::error!("{}", e);
                        NativeHost::new(String::new()).report_error(&e);
                    }
                }
            }
        }

        if self.image.as_ref().is_some_and(|image| image.modified) {
            self.upload_texture(ctx);
        }

        // Request repaint if still loading (to update spinner)
        if self.loading_message.is_some() {
            ctx.request_repaint();
        }

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Image...").clicked() {
                        if !self.release_profile() {
                            ui.close_menu();
                            return;
                        }
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Images", IMAGE_EXTENSIONS)
                            .pick_file()
                        {
                            self.load_image_file(path);
                        }
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.dialogs.about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        let mut tool = self.current_tool;
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            toolbar::show(ui, &mut tool);
        });
        self.set_tool(tool);

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(&self.status);
        });

        let command = egui::SidePanel::left("commands")
            .default_width(190.0)
            .resizable(false)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .show(ui, commands::show)
                    .inner
            })
            .inner;

        let summary = self.session.summary(&self.calibration());
        let dirty = self.session.is_dirty();
        egui::SidePanel::right("profile_info")
            .default_width(240.0)
            .show(ctx, |ui| {
                properties::show(
                    ui,
                    &summary,
                    dirty,
                    &mut self.profile_id_input,
                    self.image.as_mut().map(|image| &mut image.calibration),
                );
            });

        let dialog_action = dialogs::show(ctx, &mut self.dialogs);
        self.apply_dialog(dialog_action);

        if !ctx.wants_keyboard_input() {
            if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
                self.cancel_selection();
                self.selected_component = None;
            }
            if ctx.input(|i| i.key_pressed(egui::Key::Delete)) && self.selected_component.is_some() {
                self.run_command(Command::DeleteSelected);
            }
        }

        let canvas_action = egui::CentralPanel::default()
            .show(ctx, |ui| {
                if let Some(ref message) = self.loading_message {
                    ui.centered_and_justified(|ui| {
                        ui.vertical_centered(|ui| {
                            ui.add_space(20.0);
                            ui.spinner();
                            ui.add_space(10.0);
                            ui.label(
                                egui::RichText::new(message)
                                    .size(16.0)
                                    .color(egui::Color32::from_gray(200)),
                            );
                        });
                    });
                    canvas::CanvasAction::None
                } else {
                    canvas::show(
                        ui,
                        self.session.annotations(),
                        self.current_tool,
                        &self.image_texture,
                        self.image.as_ref().map(|image| (image.width(), image.height())),
                        &self.selection,
                        self.selected_component,
                    )
                }
            })
            .inner;

        match canvas_action {
            canvas::CanvasAction::AddVertex(point) => self.add_vertex(point),
            canvas::CanvasAction::FinishSelection => {
                if self.selection.as_ref().is_some_and(|s| s.is_complete()) {
                    self.selection_finished = true;
                }
            }
            canvas::CanvasAction::SelectComponent(id) => {
                self.selected_component = id;
                if let Some(annotation) = id.and_then(|id| self.session.annotations().get(id)) {
                    self.status = format!("Selected {}", annotation.kind);
                }
            }
            canvas::CanvasAction::None => {}
        }

        if let Some(command) = command {
            self.run_command(command);
        }
    }
}
