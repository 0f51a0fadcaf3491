// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module provides conversions between display coordinates and image
//! pixels, and hit testing of profile components.

use crate::models::annotation::{Annotation, AnnotationId, AnnotationSet, Point};

/// Radius within which a click selects a component, in image pixels.
pub const HIT_RADIUS: f64 = 6.0;

/// Convert a position relative to the displayed image to an image pixel.
///
/// `rel_x` and `rel_y` are fractions of the displayed width and height.
pub fn to_image_pixel(rel_x: f64, rel_y: f64, width: u32, height: u32) -> Point {
    let x = (rel_x * width as f64).floor() as i32;
    let y = (rel_y * height as f64).floor() as i32;
    Point::new(
        x.clamp(0, width.saturating_sub(1) as i32),
        y.clamp(0, height.saturating_sub(1) as i32),
    )
}

/// Convert an image pixel to fractions of the displayed image, at the pixel centre.
pub fn to_relative(point: &Point, width: u32, height: u32) -> (f64, f64) {
    (
        (point.x as f64 + 0.5) / width as f64,
        (point.y as f64 + 0.5) / height as f64,
    )
}

fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let (px, py) = (p.x as f64, p.y as f64);
    let (ax, ay) = (a.x as f64, a.y as f64);
    let (bx, by) = (b.x as f64, b.y as f64);
    let (dx, dy) = (bx - ax, by - ay);
    let len2 = dx * dx + dy * dy;
    let t = if len2 == 0.0 {
        0.0
    } else {
        (((px - ax) * dx + (py - ay) * dy) / len2).clamp(0.0, 1.0)
    };
    let (cx, cy) = (ax + t * dx, ay + t * dy);
    ((px - cx).powi(2) + (py - cy).powi(2)).sqrt()
}

/// Smallest distance from `p` to the drawn outline or points of an annotation.
pub fn distance_to_annotation(p: Point, annotation: &Annotation) -> f64 {
    let vertices = &annotation.vertices;
    let mut best = f64::INFINITY;
    for v in vertices {
        best = best.min(distance_to_segment(p, *v, *v));
    }
    if annotation.kind.is_outline() {
        for pair in vertices.windows(2) {
            best = best.min(distance_to_segment(p, pair[0], pair[1]));
        }
        if annotation.is_closed() && vertices.len() > 2 {
            best = best.min(distance_to_segment(p, vertices[vertices.len() - 1], vertices[0]));
        }
    }
    best
}

/// The component nearest to `p` within `radius`, latest on ties.
pub fn hit_test(annotations: &AnnotationSet, p: Point, radius: f64) -> Option<AnnotationId> {
    annotations
        .iter()
        .map(|a| (distance_to_annotation(p, a), a.id()))
        .filter(|(d, _)| *d <= radius)
        .fold(None, |best: Option<(f64, AnnotationId)>, candidate| match best {
            Some((d, _)) if d < candidate.0 => best,
            _ => Some(candidate),
        })
        .map(|(_, id)| id)
}
