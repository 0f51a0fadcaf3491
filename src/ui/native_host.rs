// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Native dialogs backing the profile session.

use crate::host::{Decision, Host};
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};
use std::path::PathBuf;

/// Host backed by `rfd` message and file dialogs.
///
/// Text prompts cannot block an egui frame, so the profile ID is taken
/// from the info panel field the user filled in beforehand.
pub struct NativeHost {
    pub profile_id: String,
}

impl NativeHost {
    pub fn new(profile_id: impl Into<String>) -> Self {
        Self {
            profile_id: profile_id.into(),
        }
    }
}

fn message(level: MessageLevel, text: &str) {
    MessageDialog::new()
        .set_level(level)
        .set_title(crate::version::TITLE)
        .set_description(text)
        .set_buttons(MessageButtons::Ok)
        .show();
}

impl Host for NativeHost {
    fn confirm(&mut self, prompt: &str) -> Decision {
        let result = MessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title(crate::version::TITLE)
            .set_description(prompt)
            .set_buttons(MessageButtons::YesNoCancel)
            .show();
        match result {
            MessageDialogResult::Yes | MessageDialogResult::Ok => Decision::Yes,
            MessageDialogResult::No => Decision::No,
            _ => Decision::Cancel,
        }
    }

    fn prompt_string(&mut self, prompt: &str, default: &str) -> String {
        let answer = self.profile_id.trim().to_string();
        log::debug!("{}{} (default {})", prompt, answer, default);
        answer
    }

    fn pick_save_destination(&mut self, suggested_name: &str, extension: &str) -> Option<PathBuf> {
        let filter = extension.trim_start_matches('.');
        let filter = filter.rsplit('.').next().unwrap_or(filter);
        FileDialog::new()
            .set_file_name(format!("{}{}", suggested_name, extension))
            .add_filter(extension, &[filter])
            .save_file()
    }

    fn report_error(&mut self, message_text: &str) {
        log::error!("{}", message_text);
        message(MessageLevel::Error, message_text);
    }

    fn show_message(&mut self, message_text: &str) {
        log::info!("{}", message_text);
        message(MessageLevel::Info, message_text);
    }
}
