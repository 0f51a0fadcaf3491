// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Interfaces to the environment hosting a profile session.
//!
//! The session never opens dialogs or touches pixels itself. It asks a
//! [`Host`] for decisions and file names, and draws through a
//! [`ProfileImage`]. The desktop front-end backs these with native dialogs
//! and an RGB buffer; tests back them with scripted doubles.

use crate::error::Result;
use crate::models::annotation::{Point, StrokeColor};
use crate::models::calibration::Calibration;
use std::path::{Path, PathBuf};

/// Answer to a yes/no/cancel prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Yes,
    No,
    Cancel,
}

impl Decision {
    pub fn is_yes(self) -> bool {
        self == Decision::Yes
    }
}

/// Opaque identity of an open image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageId(pub u64);

/// Dialog services. Every call blocks until the user has answered.
pub trait Host {
    fn confirm(&mut self, prompt: &str) -> Decision;

    /// Ask for a line of text. An empty answer means "keep the previous value".
    fn prompt_string(&mut self, prompt: &str, default: &str) -> String;

    /// Ask for a destination file. `None` when the user cancelled.
    fn pick_save_destination(&mut self, suggested_name: &str, extension: &str) -> Option<PathBuf>;

    fn report_error(&mut self, message: &str);

    fn show_message(&mut self, message: &str);
}

/// The image a profile is drawn on.
pub trait ProfileImage {
    fn id(&self) -> ImageId;

    /// Full display title, e.g. the file name.
    fn title(&self) -> &str;

    /// Title without extension, used to name the annotated copy.
    fn short_title(&self) -> &str;

    fn width(&self) -> u32;

    fn height(&self) -> u32;

    fn calibration(&self) -> &Calibration;

    fn draw_line(&mut self, from: Point, to: Point, color: StrokeColor);

    /// Native marker for a point component.
    fn draw_marker(&mut self, at: Point, color: StrokeColor);

    /// Width and height of `text` rendered at `size` pixels.
    fn label_extent(&self, text: &str, size: u32) -> (u32, u32);

    /// Draw `text` with its top-left corner at `at`.
    fn draw_label(&mut self, text: &str, at: Point, size: u32, color: StrokeColor);

    fn save_raster_copy(&self, path: &Path) -> Result<()>;
}

#[cfg(test)]
pub mod testing {
    //! Scripted host for driving sessions in tests.

    use super::*;
    use std::collections::VecDeque;

    #[derive(Debug, Default)]
    pub struct ScriptedHost {
        pub decisions: VecDeque<Decision>,
        pub strings: VecDeque<String>,
        pub destinations: VecDeque<Option<PathBuf>>,
        pub prompts: Vec<String>,
        pub errors: Vec<String>,
        pub messages: Vec<String>,
        pub suggested_names: Vec<(String, String)>,
    }

    impl ScriptedHost {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn decide(mut self, decision: Decision) -> Self {
            self.decisions.push_back(decision);
            self
        }

        pub fn answer(mut self, text: &str) -> Self {
            self.strings.push_back(text.to_string());
            self
        }

        pub fn destination(mut self, path: Option<PathBuf>) -> Self {
            self.destinations.push_back(path);
            self
        }
    }

    /// Drawing call recorded by [`RecordingImage`].
    #[derive(Debug, Clone, PartialEq)]
    pub enum DrawOp {
        Line(Point, Point, StrokeColor),
        Marker(Point, StrokeColor),
        Label(String, Point, u32, StrokeColor),
    }

    /// In-memory image that records what is drawn on it.
    #[derive(Debug)]
    pub struct RecordingImage {
        pub id: ImageId,
        pub title: String,
        pub width: u32,
        pub height: u32,
        pub calibration: Calibration,
        pub ops: Vec<DrawOp>,
        pub raster_saves: std::cell::RefCell<Vec<PathBuf>>,
        pub fail_raster_save: bool,
    }

    impl RecordingImage {
        pub fn new(id: u64, title: &str) -> Self {
            Self {
                id: ImageId(id),
                title: title.to_string(),
                width: 420,
                height: 420,
                calibration: Calibration::new(0.25, 0.25, "micron"),
                ops: Vec::new(),
                raster_saves: std::cell::RefCell::new(Vec::new()),
                fail_raster_save: false,
            }
        }

        pub fn with_calibration(mut self, calibration: Calibration) -> Self {
            self.calibration = calibration;
            self
        }
    }

    impl ProfileImage for RecordingImage {
        fn id(&self) -> ImageId {
            self.id
        }

        fn title(&self) -> &str {
            &self.title
        }

        fn short_title(&self) -> &str {
            self.title
                .rsplit_once('.')
                .map_or(self.title.as_str(), |(stem, _)| stem)
        }

        fn width(&self) -> u32 {
            self.width
        }

        fn height(&self) -> u32 {
            self.height
        }

        fn calibration(&self) -> &Calibration {
            &self.calibration
        }

        fn draw_line(&mut self, from: Point, to: Point, color: StrokeColor) {
            self.ops.push(DrawOp::Line(from, to, color));
        }

        fn draw_marker(&mut self, at: Point, color: StrokeColor) {
            self.ops.push(DrawOp::Marker(at, color));
        }

        fn label_extent(&self, text: &str, size: u32) -> (u32, u32) {
            (text.chars().count() as u32 * size / 2, size)
        }

        fn draw_label(&mut self, text: &str, at: Point, size: u32, color: StrokeColor) {
            self.ops.push(DrawOp::Label(text.to_string(), at, size, color));
        }

        fn save_raster_copy(&self, path: &Path) -> Result<()> {
            if self.fail_raster_save {
                return Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only").into());
            }
            self.raster_saves.borrow_mut().push(path.to_path_buf());
            Ok(())
        }
    }

    impl Host for ScriptedHost {
        fn confirm(&mut self, prompt: &str) -> Decision {
            self.prompts.push(prompt.to_string());
            self.decisions.pop_front().unwrap_or(Decision::Cancel)
        }

        fn prompt_string(&mut self, prompt: &str, _default: &str) -> String {
            self.prompts.push(prompt.to_string());
            self.strings.pop_front().unwrap_or_default()
        }

        fn pick_save_destination(&mut self, suggested_name: &str, extension: &str) -> Option<PathBuf> {
            self.suggested_names
                .push((suggested_name.to_string(), extension.to_string()));
            self.destinations.pop_front().flatten()
        }

        fn report_error(&mut self, message: &str) {
            self.errors.push(message.to_string());
        }

        fn show_message(&mut self, message: &str) {
            self.messages.push(message.to_string());
        }
    }
}
