// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Annotation data structures.
//!
//! This module defines the named profile components (path, points,
//! polarity marker, holes, random points) and the ordered set that holds
//! them for one image.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 2D point in integer image pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// An RGB stroke colour. Display only; never affects analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrokeColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl StrokeColor {
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const MAGENTA: Self = Self::rgb(255, 0, 255);
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    pub const RED: Self = Self::rgb(255, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// The fixed vocabulary of profile components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnotationKind {
    Path,
    Points,
    PositivePolarity,
    Hole,
    RandomPoints,
}

impl AnnotationKind {
    /// Name used in messages and as the component name in the overlay.
    pub fn name(&self) -> &'static str {
        match self {
            AnnotationKind::Path => "path",
            AnnotationKind::Points => "points",
            AnnotationKind::PositivePolarity => "positive polarity",
            AnnotationKind::Hole => "hole",
            AnnotationKind::RandomPoints => "random points",
        }
    }

    /// Capitalised name for titles and "already defined" messages.
    pub fn title(&self) -> &'static str {
        match self {
            AnnotationKind::Path => "Path",
            AnnotationKind::Points => "Points",
            AnnotationKind::PositivePolarity => "Positive polarity",
            AnnotationKind::Hole => "Hole",
            AnnotationKind::RandomPoints => "Random points",
        }
    }

    /// Only holes may occur more than once in a profile.
    pub fn allows_multiple(&self) -> bool {
        matches!(self, AnnotationKind::Hole)
    }

    /// Path and holes are drawn as connected outlines, the rest as points.
    pub fn is_outline(&self) -> bool {
        matches!(self, AnnotationKind::Path | AnnotationKind::Hole)
    }

    /// Whether adding this component counts as an unsaved profile change.
    ///
    /// Random points are regenerable scratch data and never dirty the session.
    pub fn marks_dirty(&self) -> bool {
        !matches!(self, AnnotationKind::RandomPoints)
    }
}

impl fmt::Display for AnnotationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Stable handle for one annotation inside an [`AnnotationSet`].
pub type AnnotationId = u32;

/// A named, coloured geometric profile component.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    id: AnnotationId,
    pub kind: AnnotationKind,
    pub vertices: Vec<Point>,
    pub stroke_color: StrokeColor,
    /// Per-point labels are hidden when drawing (random points).
    pub hide_labels: bool,
}

impl Annotation {
    /// Create a new annotation. The id is assigned when it is added to a set.
    pub fn new(kind: AnnotationKind, vertices: Vec<Point>, stroke_color: StrokeColor) -> Self {
        Self {
            id: 0,
            kind,
            vertices,
            stroke_color,
            hide_labels: false,
        }
    }

    pub fn with_hidden_labels(mut self) -> Self {
        self.hide_labels = true;
        self
    }

    pub fn id(&self) -> AnnotationId {
        self.id
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Check if the annotation is a closed outline (hole).
    pub fn is_closed(&self) -> bool {
        matches!(self.kind, AnnotationKind::Hole)
    }
}

/// Ordered collection of annotations attached to one image.
///
/// Insertion order is preserved and is the order used when the profile is
/// drawn and written. Uniqueness per kind is enforced by the caller, not
/// here.
#[derive(Debug, Clone, Default)]
pub struct AnnotationSet {
    items: Vec<Annotation>,
    next_id: AnnotationId,
}

impl AnnotationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the first annotation of `kind`.
    pub fn index_of(&self, kind: AnnotationKind) -> Option<usize> {
        self.items.iter().position(|a| a.kind == kind)
    }

    pub fn contains(&self, kind: AnnotationKind) -> bool {
        self.index_of(kind).is_some()
    }

    /// Number of annotations of `kind`.
    pub fn count(&self, kind: AnnotationKind) -> usize {
        self.items.iter().filter(|a| a.kind == kind).count()
    }

    /// Number of vertices in the first annotation of `kind`, 0 if absent.
    pub fn point_count(&self, kind: AnnotationKind) -> usize {
        self.first(kind).map_or(0, Annotation::vertex_count)
    }

    pub fn first(&self, kind: AnnotationKind) -> Option<&Annotation> {
        self.items.iter().find(|a| a.kind == kind)
    }

    pub fn of_kind(&self, kind: AnnotationKind) -> impl Iterator<Item = &Annotation> {
        self.items.iter().filter(move |a| a.kind == kind)
    }

    pub fn get(&self, id: AnnotationId) -> Option<&Annotation> {
        self.items.iter().find(|a| a.id == id)
    }

    /// Append an annotation and return the id it was given.
    pub fn add(&mut self, mut annotation: Annotation) -> AnnotationId {
        self.next_id += 1;
        annotation.id = self.next_id;
        self.items.push(annotation);
        self.next_id
    }

    /// Remove the first annotation of `kind`.
    pub fn remove_by_kind(&mut self, kind: AnnotationKind) -> Option<Annotation> {
        let index = self.index_of(kind)?;
        Some(self.items.remove(index))
    }

    /// Remove exactly the annotation with the given id.
    pub fn remove_exact(&mut self, id: AnnotationId) -> Option<Annotation> {
        let index = self.items.iter().position(|a| a.id == id)?;
        Some(self.items.remove(index))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Annotation> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a AnnotationSet {
    type Item = &'a Annotation;
    type IntoIter = std::slice::Iter<'a, Annotation>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
