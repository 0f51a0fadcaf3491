// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Error types for profile operations.
//!
//! The display text of each variant is the message shown to the user.
//! Every error leaves the session in an interactive, resumable state.

use crate::models::annotation::AnnotationKind;
use thiserror::Error;

/// Errors that can occur while building or saving a profile.
#[derive(Error, Debug)]
pub enum ProfileError {
    /// A unique component was defined twice
    #[error("{} already defined. Please delete old instance first.", .0.title())]
    AlreadyDefined(AnnotationKind),

    /// The polarity marker must be a single point
    #[error("Could not define polarity:\nMore than one point selected.")]
    MultiplePolarityPoints,

    /// The current selection is missing or of the wrong shape
    #[error("{0} selection required.")]
    SelectionRequired(&'static str),

    /// Component cannot be drawn by the user
    #[error("{} cannot be defined from a selection.", .0.title())]
    NotDrawable(AnnotationKind),

    /// Mutation attempted on another image than the one being profiled
    #[error("All measurements must be performed on the same image.")]
    DifferentImage,

    /// Named component is not present
    #[error("No {0} defined.")]
    NotDefined(AnnotationKind),

    /// Selected shape is not part of the profile
    #[error("The current selection does not define a profile component.")]
    NotAComponent,

    /// Image too small to place random points inside its border
    #[error("Image is too small to place random points ({width}x{height}).")]
    ImageTooSmall {
        /// Image width in pixels
        width: u32,
        /// Image height in pixels
        height: u32,
    },

    /// Random point count configured as zero
    #[error("Random point n must be larger than 0.")]
    InvalidRandomPointCount,

    /// Missing spatial calibration
    #[error("It appears the scale has not been set.")]
    ScaleNotSet,

    /// Path missing or empty at save time
    #[error("Path not defined.")]
    PathNotDefined,

    /// I/O error while writing the profile document
    #[error("Could not save profile: {0}")]
    Io(#[from] std::io::Error),

    /// Error while writing the annotated image copy
    #[error("Could not save annotated image: {0}")]
    Image(#[from] image::ImageError),
}

impl ProfileError {
    /// Informational reports rather than failures.
    pub fn is_informational(&self) -> bool {
        matches!(self, ProfileError::NotDefined(_) | ProfileError::NotAComponent)
    }
}

pub type Result<T> = std::result::Result<T, ProfileError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_dialog_text() {
        assert_eq!(
            ProfileError::AlreadyDefined(AnnotationKind::Path).to_string(),
            "Path already defined. Please delete old instance first."
        );
        assert_eq!(
            ProfileError::NotDefined(AnnotationKind::PositivePolarity).to_string(),
            "No positive polarity defined."
        );
        assert_eq!(
            ProfileError::SelectionRequired("Segmented line").to_string(),
            "Segmented line selection required."
        );
    }

    #[test]
    fn test_classification() {
        assert!(ProfileError::NotAComponent.is_informational());
        assert!(!ProfileError::DifferentImage.is_informational());
        assert!(!ProfileError::PathNotDefined.is_informational());
    }
}
