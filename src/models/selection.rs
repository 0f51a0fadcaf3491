// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! User-drawn selections.
//!
//! A selection is the shape the user has drawn on the image but not yet
//! assigned to a profile component.

use super::annotation::{AnnotationKind, Point};

/// Shape of a user-drawn selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionKind {
    /// Open segmented line.
    Polyline,
    /// Closed outline.
    Polygon,
    /// One or more separate points.
    Points,
}

impl SelectionKind {
    /// The selection kind a profile component must be drawn with.
    ///
    /// Random points are generated, never drawn.
    pub fn required_for(kind: AnnotationKind) -> Option<Self> {
        match kind {
            AnnotationKind::Path => Some(SelectionKind::Polyline),
            AnnotationKind::Hole => Some(SelectionKind::Polygon),
            AnnotationKind::Points | AnnotationKind::PositivePolarity => Some(SelectionKind::Points),
            AnnotationKind::RandomPoints => None,
        }
    }

    /// Text used when a different selection kind was required.
    pub fn requirement(&self) -> &'static str {
        match self {
            SelectionKind::Polyline => "Segmented line",
            SelectionKind::Polygon => "Polygon",
            SelectionKind::Points => "Point",
        }
    }
}

/// A completed (or in-progress) selection in image pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub kind: SelectionKind,
    pub vertices: Vec<Point>,
}

impl Selection {
    pub fn new(kind: SelectionKind) -> Self {
        Self {
            kind,
            vertices: Vec::new(),
        }
    }

    pub fn with_vertices(kind: SelectionKind, vertices: Vec<Point>) -> Self {
        Self { kind, vertices }
    }

    pub fn add_vertex(&mut self, point: Point) {
        self.vertices.push(point);
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Minimum number of vertices before the selection can be used.
    pub fn is_complete(&self) -> bool {
        let min = match self.kind {
            SelectionKind::Polyline => 2,
            SelectionKind::Polygon => 3,
            SelectionKind::Points => 1,
        };
        self.vertices.len() >= min
    }
}
