//! JSON summaries of clip runs, in the shape the presentation layer
//! displays: vertex counts, metrics, and per-segment visibility.

use serde::Serialize;

use crate::algorithms::metrics::{area, coverage, perimeter};
use crate::model::{ClipResult, Vec2};

#[derive(Serialize)]
struct PolygonSummary {
    subject_vertices: usize,
    clipped_vertices: usize,
    area: f32,
    perimeter: f32,
    coverage: f32,
}

#[derive(Serialize)]
struct SegmentEntry {
    visible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    coords: Option<[f32; 4]>,
}

#[derive(Serialize)]
struct SegmentSummary {
    total: usize,
    visible: usize,
    segments: Vec<SegmentEntry>,
}

/// Summary of one polygon clip: counts, metrics of the clipped result, and
/// the fraction of the subject's area that survived.
pub fn polygon_report(subject: &[Vec2], clipped: &[Vec2]) -> serde_json::Value {
    serde_json::to_value(PolygonSummary {
        subject_vertices: subject.len(),
        clipped_vertices: clipped.len(),
        area: area(clipped),
        perimeter: perimeter(clipped),
        coverage: coverage(subject, clipped),
    })
    .unwrap()
}

/// Per-segment visibility summary of a batch clip run, preserving input
/// order. Visible entries carry the clipped endpoints as [x1, y1, x2, y2].
pub fn segment_report(results: &[ClipResult]) -> serde_json::Value {
    let segments: Vec<SegmentEntry> = results
        .iter()
        .map(|r| match r {
            ClipResult::Visible(s) => SegmentEntry {
                visible: true,
                coords: Some([s.a.x, s.a.y, s.b.x, s.b.y]),
            },
            ClipResult::Rejected => SegmentEntry {
                visible: false,
                coords: None,
            },
        })
        .collect();
    let visible = segments.iter().filter(|e| e.visible).count();
    serde_json::to_value(SegmentSummary {
        total: results.len(),
        visible,
        segments,
    })
    .unwrap()
}
