// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Profile document (`.dtp`) serialization.
//!
//! The document is line oriented text read by the distance analysis
//! program. Sections appear in a fixed order; optional sections are left
//! out entirely when their component is absent:
//!
//! ```text
//! # DistToPath version 1.0.0 (October 18, 2025)
//! IMAGE cell.tif
//! PROFILE_ID A1
//! COMMENT optional
//! PIXELWIDTH 250.00 nm
//! POSLOC 0, 0
//! PATH
//!   0, 0
//! END
//! HOLE ... END        (once per hole)
//! POINTS ... END
//! RANDOM_POINTS ... END
//! ```

use crate::error::{ProfileError, Result};
use crate::models::annotation::{AnnotationKind, AnnotationSet, Point};
use crate::models::calibration::Calibration;
use crate::version;
use std::io::Write;
use std::path::Path;

/// Extension of profile documents, including the dot.
pub const EXTENSION: &str = ".dtp";

/// Everything that goes into one profile document.
#[derive(Debug, Clone, Copy)]
pub struct ProfileDocument<'a> {
    pub image_title: &'a str,
    pub profile_id: &'a str,
    pub comment: &'a str,
    pub calibration: &'a Calibration,
    pub annotations: &'a AnnotationSet,
}

fn section_name(kind: AnnotationKind) -> &'static str {
    match kind {
        AnnotationKind::Path => "PATH",
        AnnotationKind::Points => "POINTS",
        AnnotationKind::PositivePolarity => "POSLOC",
        AnnotationKind::Hole => "HOLE",
        AnnotationKind::RandomPoints => "RANDOM_POINTS",
    }
}

fn format_point(p: Point) -> String {
    format!("{}, {}", p.x, p.y)
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

fn push_block(out: &mut String, kind: AnnotationKind, vertices: &[Point]) {
    push_line(out, section_name(kind));
    for &p in vertices {
        push_line(out, &format!("  {}", format_point(p)));
    }
    push_line(out, "END");
}

/// Render the document text. Fails if the profile has no path.
pub fn render_document(doc: &ProfileDocument<'_>) -> Result<String> {
    let path = doc
        .annotations
        .first(AnnotationKind::Path)
        .ok_or(ProfileError::PathNotDefined)?;

    let mut out = String::new();
    push_line(&mut out, &format!("# {}", version::version_line()));
    push_line(&mut out, &format!("IMAGE {}", doc.image_title));
    push_line(&mut out, &format!("PROFILE_ID {}", doc.profile_id));
    if !doc.comment.is_empty() {
        push_line(&mut out, &format!("COMMENT {}", doc.comment));
    }
    push_line(
        &mut out,
        &format!("PIXELWIDTH {}", doc.calibration.format_pixel_width()),
    );
    if let Some(&p) = doc
        .annotations
        .first(AnnotationKind::PositivePolarity)
        .and_then(|a| a.vertices.first())
    {
        push_line(&mut out, &format!("POSLOC {}", format_point(p)));
    }
    push_block(&mut out, AnnotationKind::Path, &path.vertices);
    for hole in doc.annotations.of_kind(AnnotationKind::Hole) {
        push_block(&mut out, AnnotationKind::Hole, &hole.vertices);
    }
    for kind in [AnnotationKind::Points, AnnotationKind::RandomPoints] {
        if let Some(annotation) = doc.annotations.first(kind) {
            push_block(&mut out, kind, &annotation.vertices);
        }
    }
    Ok(out)
}

/// Write the document to any writer.
pub fn write_document<W: Write>(out: &mut W, doc: &ProfileDocument<'_>) -> Result<()> {
    let text = render_document(doc)?;
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Write the document to `path`.
///
/// The text goes to a temporary file next to the destination which is then
/// renamed over it, so a failed write never leaves a partial document.
pub fn save_document(path: &Path, doc: &ProfileDocument<'_>) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    write_document(tmp.as_file_mut(), doc)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    log::info!("Wrote profile document {}", path.display());
    Ok(())
}
