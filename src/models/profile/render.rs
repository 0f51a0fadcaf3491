// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Burning a saved profile into its image.

use crate::host::ProfileImage;
use crate::models::annotation::{AnnotationKind, AnnotationSet, Point, StrokeColor};

/// Half length of the tick drawn for each measured point.
const POINT_TICK: i32 = 3;

/// Minimum distance of the profile label from the image edge.
const LABEL_MARGIN: i32 = 3;

/// Draw every component in set order in its own stroke colour.
pub fn draw_components(annotations: &AnnotationSet, image: &mut dyn ProfileImage) {
    for annotation in annotations {
        let color = annotation.stroke_color;
        let vertices = &annotation.vertices;
        match annotation.kind {
            AnnotationKind::Points => {
                for p in vertices {
                    image.draw_line(
                        Point::new(p.x - POINT_TICK, p.y),
                        Point::new(p.x + POINT_TICK, p.y),
                        color,
                    );
                    image.draw_line(
                        Point::new(p.x, p.y - POINT_TICK),
                        Point::new(p.x, p.y + POINT_TICK),
                        color,
                    );
                }
            }
            AnnotationKind::Path => {
                for pair in vertices.windows(2) {
                    image.draw_line(pair[0], pair[1], color);
                }
            }
            AnnotationKind::Hole => {
                for pair in vertices.windows(2) {
                    image.draw_line(pair[0], pair[1], color);
                }
                if let (Some(&first), Some(&last)) = (vertices.first(), vertices.last()) {
                    if vertices.len() > 2 {
                        image.draw_line(last, first, color);
                    }
                }
            }
            AnnotationKind::PositivePolarity | AnnotationKind::RandomPoints => {
                for &p in vertices {
                    image.draw_marker(p, color);
                }
            }
        }
    }
}

/// Topmost path vertex, leftmost among equally high ones.
pub fn label_anchor(vertices: &[Point]) -> Option<Point> {
    vertices.iter().copied().min_by_key(|p| (p.y, p.x))
}

/// Font size of the profile label for an image of the given height.
pub fn label_size(image_height: u32) -> u32 {
    (image_height / 42).max(1)
}

/// Write the profile ID just above and to the left of the top of the path.
pub fn write_id_label(
    profile_id: &str,
    annotations: &AnnotationSet,
    image: &mut dyn ProfileImage,
    color: StrokeColor,
) {
    if profile_id.is_empty() {
        return;
    }
    let Some(anchor) = annotations
        .first(AnnotationKind::Path)
        .and_then(|path| label_anchor(&path.vertices))
    else {
        return;
    };

    let size = label_size(image.height());
    let (width, height) = image.label_extent(profile_id, size);
    let mut x = anchor.x - width as i32;
    let mut y = anchor.y - height as i32;
    if x < 0 {
        x = LABEL_MARGIN;
    }
    if y < 0 {
        y = LABEL_MARGIN;
    }
    image.draw_label(profile_id, Point::new(x, y), size, color);
}
