// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Profile session state management.
//!
//! A [`ProfileSession`] owns the annotation set being built for one image
//! together with the running profile counters, the comment and the dirty
//! flag. Every mutating command first checks that it targets the image the
//! unsaved profile belongs to.

pub mod render;
pub mod save;

pub use save::{SaveOutcome, SaveReport};

use crate::config::Options;
use crate::error::{ProfileError, Result};
use crate::host::{Decision, Host, ImageId, ProfileImage};
use crate::models::annotation::{Annotation, AnnotationId, AnnotationKind, AnnotationSet, Point};
use crate::models::calibration::Calibration;
use crate::models::selection::{Selection, SelectionKind};
use rand::Rng;

/// Result of a clear request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    Cleared,
    /// The user cancelled, or chose to save and the save did not go through.
    Kept,
}

/// Snapshot of the session for the profile info panel.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileSummary {
    pub profile_n: u32,
    pub point_count: usize,
    pub path_nodes: usize,
    pub polarity_defined: bool,
    pub hole_count: usize,
    pub random_points_placed: bool,
    pub pixel_width: String,
    pub comment: String,
}

/// One profile under construction plus the session-wide counters.
#[derive(Debug, Clone)]
pub struct ProfileSession {
    annotations: AnnotationSet,
    dirty: bool,
    bound_image: Option<ImageId>,
    /// Profiles saved for the current image title.
    sequence_in_image: u32,
    /// Running profile number across all images.
    total_sequence: u32,
    previous_image_title: String,
    profile_id: String,
    comment: String,
    options: Options,
}

impl Default for ProfileSession {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl ProfileSession {
    pub fn new(options: Options) -> Self {
        Self {
            annotations: AnnotationSet::new(),
            dirty: false,
            bound_image: None,
            sequence_in_image: 0,
            total_sequence: 1,
            previous_image_title: String::new(),
            profile_id: String::new(),
            comment: String::new(),
            options,
        }
    }

    pub fn annotations(&self) -> &AnnotationSet {
        &self.annotations
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn bound_image(&self) -> Option<ImageId> {
        self.bound_image
    }

    pub fn sequence_in_image(&self) -> u32 {
        self.sequence_in_image
    }

    pub fn total_sequence(&self) -> u32 {
        self.total_sequence
    }

    pub fn set_total_sequence(&mut self, n: u32) {
        log::info!("Profile n set to {}", n);
        self.total_sequence = n;
    }

    pub fn profile_id(&self) -> &str {
        &self.profile_id
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Set the profile comment. An empty comment leaves the current one.
    pub fn set_comment(&mut self, comment: &str) {
        if comment.is_empty() {
            return;
        }
        self.comment = comment.to_string();
        self.dirty = true;
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn set_random_point_count(&mut self, count: usize) -> Result<()> {
        if count == 0 {
            log::warn!("Rejected random point count 0");
            return Err(ProfileError::InvalidRandomPointCount);
        }
        self.options.random_point_count = count;
        Ok(())
    }

    /// Replace colours and label font. The random point count is only
    /// changed through [`Self::set_random_point_count`].
    pub fn set_options(&mut self, options: Options) {
        let count = self.options.random_point_count;
        self.options = options;
        self.options.random_point_count = count;
    }

    /// Make sure a mutation targets the image the profile belongs to.
    ///
    /// A clean or unbound session binds to `image`; a dirty session only
    /// accepts the image it is bound to.
    pub fn check_image_binding(&mut self, image: ImageId) -> Result<()> {
        match self.bound_image {
            Some(bound) if self.dirty && bound != image => {
                log::warn!("Rejected command on {:?}, profile is bound to {:?}", image, bound);
                Err(ProfileError::DifferentImage)
            }
            Some(bound) if bound == image => Ok(()),
            _ => {
                log::debug!("Profile bound to {:?}", image);
                self.bound_image = Some(image);
                Ok(())
            }
        }
    }

    /// Turn the current selection into a profile component.
    pub fn define_component(
        &mut self,
        image: ImageId,
        kind: AnnotationKind,
        selection: Option<&Selection>,
    ) -> Result<AnnotationId> {
        self.check_image_binding(image)?;
        let required = SelectionKind::required_for(kind).ok_or(ProfileError::NotDrawable(kind))?;
        if !kind.allows_multiple() && self.annotations.contains(kind) {
            return Err(ProfileError::AlreadyDefined(kind));
        }
        let selection = selection
            .filter(|s| s.kind == required && !s.vertices.is_empty())
            .ok_or(ProfileError::SelectionRequired(required.requirement()))?;
        if kind == AnnotationKind::PositivePolarity && selection.vertex_count() > 1 {
            return Err(ProfileError::MultiplePolarityPoints);
        }

        let color = self.options.colors.for_kind(kind);
        let id = self
            .annotations
            .add(Annotation::new(kind, selection.vertices.clone(), color));
        if kind.marks_dirty() {
            self.dirty = true;
        }
        log::info!(
            "Defined {} with {} coordinates, components: {}",
            kind,
            selection.vertex_count(),
            self.annotations.len()
        );
        Ok(id)
    }

    /// Scatter the configured number of random points over the image,
    /// keeping a one pixel margin.
    pub fn generate_random_points<R: Rng + ?Sized>(
        &mut self,
        image: ImageId,
        width: u32,
        height: u32,
        rng: &mut R,
    ) -> Result<AnnotationId> {
        self.check_image_binding(image)?;
        if self.annotations.contains(AnnotationKind::RandomPoints) {
            return Err(ProfileError::AlreadyDefined(AnnotationKind::RandomPoints));
        }
        if width < 2 || height < 2 {
            return Err(ProfileError::ImageTooSmall { width, height });
        }

        let (w, h) = (width as i32, height as i32);
        let points: Vec<Point> = (0..self.options.random_point_count)
            .map(|_| Point::new(rng.gen_range(1..w), rng.gen_range(1..h)))
            .collect();
        let color = self.options.colors.for_kind(AnnotationKind::RandomPoints);
        let id = self.annotations.add(
            Annotation::new(AnnotationKind::RandomPoints, points, color).with_hidden_labels(),
        );
        log::info!("Placed {} random points", self.options.random_point_count);
        Ok(id)
    }

    /// Delete the first component of `kind` after confirmation.
    ///
    /// Returns whether anything was removed.
    pub fn delete_named(&mut self, image: ImageId, kind: AnnotationKind, host: &mut dyn Host) -> Result<bool> {
        self.check_image_binding(image)?;
        if !self.annotations.contains(kind) {
            return Err(ProfileError::NotDefined(kind));
        }
        if !host.confirm(&format!("Delete {}?", kind)).is_yes() {
            return Ok(false);
        }
        self.annotations.remove_by_kind(kind);
        if kind.marks_dirty() {
            self.dirty = true;
        }
        log::info!("Deleted {}, components: {}", kind, self.annotations.len());
        Ok(true)
    }

    /// Delete the component the user has selected after confirmation.
    ///
    /// Returns `true` when the component was removed and the caller should
    /// drop its selection.
    pub fn delete_selected(
        &mut self,
        image: ImageId,
        selected: Option<AnnotationId>,
        host: &mut dyn Host,
    ) -> Result<bool> {
        self.check_image_binding(image)?;
        let (id, kind) = selected
            .and_then(|id| self.annotations.get(id))
            .map(|a| (a.id(), a.kind))
            .ok_or(ProfileError::NotAComponent)?;
        if !host.confirm(&format!("Delete {}?", kind)).is_yes() {
            return Ok(false);
        }
        self.annotations.remove_exact(id);
        if kind.marks_dirty() {
            self.dirty = true;
        }
        log::info!("Deleted selected {}, components: {}", kind, self.annotations.len());
        Ok(true)
    }

    /// Unconditionally start a new profile.
    pub fn reset(&mut self) {
        self.dirty = false;
        self.bound_image = None;
        self.annotations.clear();
        self.comment.clear();
        self.profile_id.clear();
    }

    /// Start a new profile, offering to save unsaved changes first.
    pub fn clear(&mut self, image: &mut dyn ProfileImage, host: &mut dyn Host) -> Result<ClearOutcome> {
        if self.dirty {
            match host.confirm("Save current\nprofile?") {
                Decision::Yes => {
                    if let SaveOutcome::Cancelled = self.save(image, host)? {
                        return Ok(ClearOutcome::Kept);
                    }
                }
                Decision::No => {}
                Decision::Cancel => return Ok(ClearOutcome::Kept),
            }
        }
        self.reset();
        log::info!("Profile cleared");
        Ok(ClearOutcome::Cleared)
    }

    pub fn summary(&self, calibration: &Calibration) -> ProfileSummary {
        ProfileSummary {
            profile_n: self.total_sequence,
            point_count: self.annotations.point_count(AnnotationKind::Points),
            path_nodes: self.annotations.point_count(AnnotationKind::Path),
            polarity_defined: self.annotations.contains(AnnotationKind::PositivePolarity),
            hole_count: self.annotations.count(AnnotationKind::Hole),
            random_points_placed: self.annotations.contains(AnnotationKind::RandomPoints),
            pixel_width: calibration.format_pixel_width(),
            comment: self.comment.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::testing::{RecordingImage, ScriptedHost};
    use crate::models::annotation::StrokeColor;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const IMG: ImageId = ImageId(1);
    const OTHER: ImageId = ImageId(2);

    fn polyline(points: &[(i32, i32)]) -> Selection {
        Selection::with_vertices(
            SelectionKind::Polyline,
            points.iter().map(|&p| Point::from(p)).collect(),
        )
    }

    fn points(points: &[(i32, i32)]) -> Selection {
        Selection::with_vertices(
            SelectionKind::Points,
            points.iter().map(|&p| Point::from(p)).collect(),
        )
    }

    fn polygon(points: &[(i32, i32)]) -> Selection {
        Selection::with_vertices(
            SelectionKind::Polygon,
            points.iter().map(|&p| Point::from(p)).collect(),
        )
    }

    #[test]
    fn test_new_session_is_empty_and_clean() {
        let session = ProfileSession::default();
        assert!(session.annotations().is_empty());
        assert!(!session.is_dirty());
        assert_eq!(session.total_sequence(), 1);
        assert_eq!(session.sequence_in_image(), 0);
        assert_eq!(session.bound_image(), None);
    }

    #[test]
    fn test_define_path_marks_dirty_and_uses_path_color() {
        let mut session = ProfileSession::default();
        let id = session
            .define_component(IMG, AnnotationKind::Path, Some(&polyline(&[(0, 0), (10, 0)])))
            .unwrap();

        assert!(session.is_dirty());
        let path = session.annotations().get(id).unwrap();
        assert_eq!(path.stroke_color, session.options().colors.path);
        assert_eq!(path.vertex_count(), 2);
    }

    #[test]
    fn test_unique_components_cannot_be_defined_twice() {
        let mut session = ProfileSession::default();
        session
            .define_component(IMG, AnnotationKind::Path, Some(&polyline(&[(0, 0), (1, 1)])))
            .unwrap();
        session
            .define_component(IMG, AnnotationKind::Points, Some(&points(&[(3, 3)])))
            .unwrap();
        session
            .define_component(IMG, AnnotationKind::PositivePolarity, Some(&points(&[(4, 4)])))
            .unwrap();

        let err = session
            .define_component(IMG, AnnotationKind::Path, Some(&polyline(&[(5, 5), (6, 6)])))
            .unwrap_err();
        assert!(matches!(err, ProfileError::AlreadyDefined(AnnotationKind::Path)));
        assert!(session
            .define_component(IMG, AnnotationKind::Points, Some(&points(&[(9, 9)])))
            .is_err());
        assert!(session
            .define_component(IMG, AnnotationKind::PositivePolarity, Some(&points(&[(9, 9)])))
            .is_err());

        for kind in [
            AnnotationKind::Path,
            AnnotationKind::Points,
            AnnotationKind::PositivePolarity,
            AnnotationKind::RandomPoints,
        ] {
            assert!(session.annotations().count(kind) <= 1);
        }
    }

    #[test]
    fn test_holes_may_repeat() {
        let mut session = ProfileSession::default();
        for _ in 0..3 {
            session
                .define_component(
                    IMG,
                    AnnotationKind::Hole,
                    Some(&polygon(&[(1, 1), (2, 1), (2, 2)])),
                )
                .unwrap();
        }
        assert_eq!(session.annotations().count(AnnotationKind::Hole), 3);
    }

    #[test]
    fn test_polarity_with_several_points_is_rejected() {
        let mut session = ProfileSession::default();
        let err = session
            .define_component(
                IMG,
                AnnotationKind::PositivePolarity,
                Some(&points(&[(1, 1), (2, 2)])),
            )
            .unwrap_err();

        assert!(matches!(err, ProfileError::MultiplePolarityPoints));
        assert!(session.annotations().is_empty());
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_wrong_or_missing_selection_is_rejected() {
        let mut session = ProfileSession::default();
        let err = session
            .define_component(IMG, AnnotationKind::Path, Some(&points(&[(1, 1)])))
            .unwrap_err();
        assert_eq!(err.to_string(), "Segmented line selection required.");

        let err = session
            .define_component(IMG, AnnotationKind::Hole, None)
            .unwrap_err();
        assert_eq!(err.to_string(), "Polygon selection required.");

        let err = session
            .define_component(IMG, AnnotationKind::RandomPoints, Some(&points(&[(1, 1)])))
            .unwrap_err();
        assert!(matches!(err, ProfileError::NotDrawable(AnnotationKind::RandomPoints)));
        assert!(session.annotations().is_empty());
    }

    #[test]
    fn test_binding_rejects_other_image_only_while_dirty() {
        let mut session = ProfileSession::default();
        assert!(session.check_image_binding(IMG).is_ok());
        assert!(session.check_image_binding(OTHER).is_ok());
        assert_eq!(session.bound_image(), Some(OTHER));

        session
            .define_component(OTHER, AnnotationKind::Path, Some(&polyline(&[(0, 0), (1, 1)])))
            .unwrap();
        assert!(matches!(
            session.check_image_binding(IMG),
            Err(ProfileError::DifferentImage)
        ));
        assert!(session.check_image_binding(OTHER).is_ok());

        let err = session
            .define_component(IMG, AnnotationKind::Points, Some(&points(&[(1, 1)])))
            .unwrap_err();
        assert!(matches!(err, ProfileError::DifferentImage));
        assert_eq!(session.annotations().len(), 1);

        session.reset();
        assert!(session.check_image_binding(IMG).is_ok());
    }

    #[test]
    fn test_random_points_stay_inside_border_and_keep_session_clean() {
        let mut session = ProfileSession::default();
        let mut rng = StdRng::seed_from_u64(7);
        let id = session
            .generate_random_points(IMG, 100, 100, &mut rng)
            .unwrap();

        let random = session.annotations().get(id).unwrap();
        assert_eq!(random.vertex_count(), 200);
        assert!(random.hide_labels);
        assert!(random
            .vertices
            .iter()
            .all(|p| (1..=99).contains(&p.x) && (1..=99).contains(&p.y)));
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_random_points_cannot_be_placed_twice() {
        let mut session = ProfileSession::default();
        let mut rng = StdRng::seed_from_u64(1);
        session.generate_random_points(IMG, 50, 40, &mut rng).unwrap();
        let err = session
            .generate_random_points(IMG, 50, 40, &mut rng)
            .unwrap_err();
        assert!(matches!(err, ProfileError::AlreadyDefined(AnnotationKind::RandomPoints)));
        assert_eq!(session.annotations().count(AnnotationKind::RandomPoints), 1);
    }

    #[test]
    fn test_random_point_count_follows_options() {
        let mut session = ProfileSession::default();
        session.set_random_point_count(12).unwrap();
        assert!(matches!(
            session.set_random_point_count(0),
            Err(ProfileError::InvalidRandomPointCount)
        ));
        assert_eq!(session.options().random_point_count, 12);

        let mut rng = StdRng::seed_from_u64(3);
        session.generate_random_points(IMG, 10, 10, &mut rng).unwrap();
        assert_eq!(session.annotations().point_count(AnnotationKind::RandomPoints), 12);
    }

    #[test]
    fn test_set_options_keeps_point_count() {
        let mut session = ProfileSession::default();
        session.set_random_point_count(12).unwrap();
        let mut options = Options::default();
        options.colors.path = StrokeColor::RED;
        options.random_point_count = 0;

        session.set_options(options);

        assert_eq!(session.options().random_point_count, 12);
        assert_eq!(session.options().colors.path, StrokeColor::RED);
    }

    #[test]
    fn test_tiny_image_cannot_hold_random_points() {
        let mut session = ProfileSession::default();
        let mut rng = StdRng::seed_from_u64(3);
        assert!(matches!(
            session.generate_random_points(IMG, 1, 10, &mut rng),
            Err(ProfileError::ImageTooSmall { .. })
        ));
    }

    #[test]
    fn test_delete_named_requires_presence_and_confirmation() {
        let mut session = ProfileSession::default();
        let mut host = ScriptedHost::new().decide(Decision::No).decide(Decision::Yes);

        let err = session
            .delete_named(IMG, AnnotationKind::Path, &mut host)
            .unwrap_err();
        assert_eq!(err.to_string(), "No path defined.");
        assert!(err.is_informational());

        session
            .define_component(IMG, AnnotationKind::Path, Some(&polyline(&[(0, 0), (1, 1)])))
            .unwrap();
        assert!(!session.delete_named(IMG, AnnotationKind::Path, &mut host).unwrap());
        assert!(session.annotations().contains(AnnotationKind::Path));
        assert!(session.delete_named(IMG, AnnotationKind::Path, &mut host).unwrap());
        assert!(!session.annotations().contains(AnnotationKind::Path));
        assert_eq!(host.prompts, vec!["Delete path?", "Delete path?"]);
    }

    #[test]
    fn test_delete_selected_removes_exact_instance() {
        let mut session = ProfileSession::default();
        let first = session
            .define_component(IMG, AnnotationKind::Hole, Some(&polygon(&[(1, 1), (2, 1), (2, 2)])))
            .unwrap();
        let second = session
            .define_component(IMG, AnnotationKind::Hole, Some(&polygon(&[(5, 5), (6, 5), (6, 6)])))
            .unwrap();
        let mut host = ScriptedHost::new().decide(Decision::Yes);

        assert!(session.delete_selected(IMG, Some(second), &mut host).unwrap());
        assert!(session.annotations().get(first).is_some());
        assert!(session.annotations().get(second).is_none());
        assert_eq!(host.prompts, vec!["Delete hole?"]);

        let err = session.delete_selected(IMG, Some(second), &mut host).unwrap_err();
        assert!(matches!(err, ProfileError::NotAComponent));
        assert!(session.delete_selected(IMG, None, &mut host).is_err());
    }

    #[test]
    fn test_comment_marks_dirty_and_empty_keeps_previous() {
        let mut session = ProfileSession::default();
        session.set_comment("");
        assert!(!session.is_dirty());
        session.set_comment("synapse 3");
        session.set_comment("");
        assert_eq!(session.comment(), "synapse 3");
        assert!(session.is_dirty());
    }

    #[test]
    fn test_clear_when_clean_resets_without_asking() {
        let mut session = ProfileSession::default();
        let mut rng = StdRng::seed_from_u64(5);
        session.generate_random_points(IMG, 20, 20, &mut rng).unwrap();
        let mut image = RecordingImage::new(1, "cell.tif");
        let mut host = ScriptedHost::new();

        assert_eq!(session.clear(&mut image, &mut host).unwrap(), ClearOutcome::Cleared);
        assert!(session.annotations().is_empty());
        assert!(host.prompts.is_empty());
    }

    #[test]
    fn test_clear_when_dirty_follows_decision() {
        let mut image = RecordingImage::new(1, "cell.tif");
        let mut session = ProfileSession::default();
        session.set_comment("keep me");

        let mut host = ScriptedHost::new().decide(Decision::Cancel);
        assert_eq!(session.clear(&mut image, &mut host).unwrap(), ClearOutcome::Kept);
        assert!(session.is_dirty());
        assert_eq!(session.comment(), "keep me");

        let mut host = ScriptedHost::new().decide(Decision::No);
        assert_eq!(session.clear(&mut image, &mut host).unwrap(), ClearOutcome::Cleared);
        assert!(!session.is_dirty());
        assert_eq!(session.comment(), "");
        assert_eq!(host.prompts, vec!["Save current\nprofile?"]);
    }

    #[test]
    fn test_clear_with_failed_save_keeps_profile() {
        let mut image = RecordingImage::new(1, "cell.tif");
        let mut session = ProfileSession::default();
        session
            .define_component(IMG, AnnotationKind::Points, Some(&points(&[(3, 3)])))
            .unwrap();
        let mut host = ScriptedHost::new().decide(Decision::Yes);

        let err = session.clear(&mut image, &mut host).unwrap_err();
        assert!(matches!(err, ProfileError::PathNotDefined));
        assert!(session.is_dirty());
        assert_eq!(session.annotations().len(), 1);
    }

    fn complete_profile(session: &mut ProfileSession) {
        session
            .define_component(IMG, AnnotationKind::Path, Some(&polyline(&[(0, 0), (8, 8)])))
            .unwrap();
        session
            .define_component(IMG, AnnotationKind::Points, Some(&points(&[(3, 3)])))
            .unwrap();
        session
            .define_component(IMG, AnnotationKind::PositivePolarity, Some(&points(&[(1, 1)])))
            .unwrap();
    }

    #[test]
    fn test_clear_with_save_starts_new_profile() {
        let dir = tempfile::tempdir().unwrap();
        let document = dir.path().join("cell.tif.1.dtp");
        let mut image = RecordingImage::new(1, "cell.tif");
        let mut session = ProfileSession::default();
        complete_profile(&mut session);
        session.set_comment("first");
        let mut host = ScriptedHost::new()
            .decide(Decision::Yes)
            .destination(Some(document.clone()))
            .destination(None);

        assert_eq!(session.clear(&mut image, &mut host).unwrap(), ClearOutcome::Cleared);

        assert!(document.exists());
        assert!(session.annotations().is_empty());
        assert_eq!(session.comment(), "");
        assert!(!session.is_dirty());
        assert_eq!(session.total_sequence(), 2);
        assert_eq!(host.prompts, vec!["Save current\nprofile?", "Profile ID: "]);
    }

    #[test]
    fn test_clear_keeps_profile_when_save_is_cancelled() {
        let mut image = RecordingImage::new(1, "cell.tif");

        // No destination picked.
        let mut session = ProfileSession::default();
        complete_profile(&mut session);
        let mut host = ScriptedHost::new().decide(Decision::Yes).destination(None);
        assert_eq!(session.clear(&mut image, &mut host).unwrap(), ClearOutcome::Kept);
        assert!(session.is_dirty());
        assert_eq!(session.annotations().len(), 3);
        assert_eq!(session.total_sequence(), 1);

        // Warning declined.
        let mut session = ProfileSession::default();
        session
            .define_component(IMG, AnnotationKind::Path, Some(&polyline(&[(0, 0), (8, 8)])))
            .unwrap();
        let mut host = ScriptedHost::new().decide(Decision::Yes).decide(Decision::No);
        assert_eq!(session.clear(&mut image, &mut host).unwrap(), ClearOutcome::Kept);
        assert!(session.is_dirty());
        assert_eq!(session.annotations().len(), 1);
        assert!(host.suggested_names.is_empty());
        assert!(image.ops.is_empty());
    }

    #[test]
    fn test_summary_reflects_components() {
        let mut session = ProfileSession::default();
        session
            .define_component(IMG, AnnotationKind::Path, Some(&polyline(&[(0, 0), (1, 1), (2, 2)])))
            .unwrap();
        session
            .define_component(IMG, AnnotationKind::Hole, Some(&polygon(&[(1, 1), (2, 1), (2, 2)])))
            .unwrap();
        session.set_comment("note");

        let summary = session.summary(&Calibration::new(0.5, 0.5, "micron"));
        assert_eq!(summary.profile_n, 1);
        assert_eq!(summary.path_nodes, 3);
        assert_eq!(summary.point_count, 0);
        assert_eq!(summary.hole_count, 1);
        assert!(!summary.polarity_defined);
        assert!(!summary.random_points_placed);
        assert_eq!(summary.pixel_width, "500.00 nm");
        assert_eq!(summary.comment, "note");
    }
}
