// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Validating and saving a profile.

use super::{render, ProfileSession};
use crate::error::{ProfileError, Result};
use crate::host::{Host, ProfileImage};
use crate::io::dtp::{self, ProfileDocument};
use crate::models::annotation::AnnotationKind;
use crate::models::calibration::Calibration;
use std::path::PathBuf;

/// Extension suggested for the annotated image copy.
pub const RASTER_EXTENSION: &str = ".a.tif";

/// Problems found before saving.
///
/// Errors block the save. Each warning must be confirmed by the user.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<ProfileError>,
    pub warnings: Vec<&'static str>,
}

/// Where a saved profile ended up.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveReport {
    pub document: PathBuf,
    pub raster: Option<PathBuf>,
    pub profile_id: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    Saved(SaveReport),
    /// The user declined a warning or picked no destination.
    Cancelled,
}

impl ProfileSession {
    /// Check the profile against the image calibration without asking anything.
    pub fn check(&self, calibration: &Calibration) -> ValidationReport {
        let mut report = ValidationReport::default();
        if !calibration.is_set() {
            report.errors.push(ProfileError::ScaleNotSet);
        }
        if self.annotations.point_count(AnnotationKind::Path) == 0 {
            report.errors.push(ProfileError::PathNotDefined);
        }
        if self.annotations.point_count(AnnotationKind::Points) == 0 {
            report.warnings.push("No point coordinates defined.");
        }
        if !self.annotations.contains(AnnotationKind::PositivePolarity) {
            report.warnings.push("Positive polarity not defined.");
        }
        report
    }

    /// Fail on the first hard error, then have each warning confirmed.
    ///
    /// Returns `Ok(false)` when the user declined a warning.
    pub fn validate_for_save(&self, calibration: &Calibration, host: &mut dyn Host) -> Result<bool> {
        let report = self.check(calibration);
        if let Some(error) = report.errors.into_iter().next() {
            log::warn!("Profile not saved: {}", error);
            return Err(error);
        }
        for warning in report.warnings {
            let prompt = format!("Warning:\n{}\nContinue anyway?", warning);
            if !host.confirm(&prompt).is_yes() {
                log::info!("Save declined at warning: {}", warning);
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// The document this session would write for an image.
    pub fn document<'a>(&'a self, image_title: &'a str, calibration: &'a Calibration) -> ProfileDocument<'a> {
        ProfileDocument {
            image_title,
            profile_id: &self.profile_id,
            comment: &self.comment,
            calibration,
            annotations: &self.annotations,
        }
    }

    /// Save the profile document, burn the profile into the image and offer
    /// to save the annotated image.
    ///
    /// Writing the document commits the profile: the running profile number
    /// advances even if the annotated image is not saved. The annotation set
    /// is never modified; callers reset the session after a successful save.
    pub fn save(&mut self, image: &mut dyn ProfileImage, host: &mut dyn Host) -> Result<SaveOutcome> {
        self.check_image_binding(image.id())?;
        let calibration = image.calibration().clone();
        if !self.validate_for_save(&calibration, host)? {
            return Ok(SaveOutcome::Cancelled);
        }
        if !calibration.is_isotropic() {
            host.show_message("Warning: pixel aspect ratio is not 1.\nOnly pixel WIDTH is used.");
        }

        let rollback = (
            self.sequence_in_image,
            self.previous_image_title.clone(),
            self.profile_id.clone(),
        );
        let title = image.title().to_string();
        if title != self.previous_image_title {
            self.sequence_in_image = 0;
            self.previous_image_title = title.clone();
        }
        self.sequence_in_image += 1;

        let default_id = self.total_sequence.to_string();
        let answer = host.prompt_string("Profile ID: ", &default_id);
        if !answer.is_empty() {
            self.profile_id = answer;
        } else if self.profile_id.is_empty() {
            self.profile_id = default_id;
        }

        let suggested = format!("{}.{}", title, self.sequence_in_image);
        let written = match host.pick_save_destination(&suggested, dtp::EXTENSION) {
            Some(path) => dtp::save_document(&path, &self.document(&title, &calibration)).map(|_| path),
            None => {
                log::info!("Save cancelled, no destination chosen");
                self.restore(rollback);
                return Ok(SaveOutcome::Cancelled);
            }
        };
        let document = match written {
            Ok(path) => path,
            Err(e) => {
                log::error!("Failed to write profile: {}", e);
                self.restore(rollback);
                return Err(e);
            }
        };

        render::write_id_label(
            &self.profile_id,
            &self.annotations,
            image,
            self.options.colors.text,
        );
        render::draw_components(&self.annotations, image);
        self.total_sequence += 1;

        let raster = host
            .pick_save_destination(image.short_title(), RASTER_EXTENSION)
            .and_then(|path| match image.save_raster_copy(&path) {
                Ok(()) => {
                    log::info!("Saved annotated image {}", path.display());
                    Some(path)
                }
                Err(e) => {
                    log::error!("Failed to save annotated image: {}", e);
                    host.report_error(&e.to_string());
                    None
                }
            });

        log::info!(
            "Saved profile {} of {} to {}",
            self.profile_id,
            title,
            document.display()
        );
        Ok(SaveOutcome::Saved(SaveReport {
            document,
            raster,
            profile_id: self.profile_id.clone(),
        }))
    }

    /// The "Save profile" command: save a dirty profile and start a new one.
    pub fn save_and_reset(&mut self, image: &mut dyn ProfileImage, host: &mut dyn Host) -> Result<SaveOutcome> {
        if !self.dirty {
            host.show_message("Nothing to save.");
            return Ok(SaveOutcome::Cancelled);
        }
        let outcome = self.save(image, host)?;
        if let SaveOutcome::Saved(_) = outcome {
            self.reset();
        }
        Ok(outcome)
    }

    fn restore(&mut self, (sequence, previous_title, profile_id): (u32, String, String)) {
        self.sequence_in_image = sequence;
        self.previous_image_title = previous_title;
        self.profile_id = profile_id;
    }
}
