//! Sutherland–Hodgman convex-polygon clipping.
//!
//! The subject polygon is reduced against each directed clip edge in turn:
//! every pass keeps the vertices on the edge's interior side and inserts the
//! intersection with the edge's carrier line at each inside/outside
//! transition. After the last edge the working list is the clipped polygon;
//! an empty list is a valid zero-area intersection, not an error.

use crate::geometry::tolerance::EPS_DENOM;
use crate::model::{ClipEdge, ClipWindow, Vec2};

/// Clip `subject` against an ordered sequence of directed convex-boundary
/// edges, all wound so the region interior is on their left.
///
/// The output keeps the subject's traversal order. Consecutive duplicate
/// vertices can appear where the subject is tangent to a clip edge; they
/// contribute nothing to area or perimeter and are left in place.
pub fn clip_polygon_edges(subject: &[Vec2], edges: &[ClipEdge]) -> Vec<Vec2> {
    let mut output = subject.to_vec();

    for edge in edges {
        if output.is_empty() {
            break;
        }
        let input = std::mem::take(&mut output);
        let mut prev = input[input.len() - 1];
        for &cur in &input {
            if edge.is_inside(cur) {
                if !edge.is_inside(prev) {
                    if let Some(p) = line_intersection(prev, cur, edge.from, edge.to) {
                        output.push(p);
                    }
                }
                output.push(cur);
            } else if edge.is_inside(prev) {
                if let Some(p) = line_intersection(prev, cur, edge.from, edge.to) {
                    output.push(p);
                }
            }
            prev = cur;
        }
    }

    output
}

/// Clip `subject` against a convex polygon used as the clip boundary. The
/// clip polygon's consecutive vertex pairs become the directed edges, so it
/// must be wound counter-clockwise for the half-plane test.
pub fn clip_polygon(subject: &[Vec2], clip: &[Vec2]) -> Vec<Vec2> {
    clip_polygon_edges(subject, &polygon_edges(clip))
}

/// Consecutive directed edges of a polygon, wrapping back to the start.
pub fn polygon_edges(poly: &[Vec2]) -> Vec<ClipEdge> {
    (0..poly.len())
        .map(|i| ClipEdge::new(poly[i], poly[(i + 1) % poly.len()]))
        .collect()
}

/// Clip `subject` to a rectangular window. `ClipWindow::corners` emits the
/// counter-clockwise winding the half-plane test expects; this is the only
/// place the two conventions meet.
pub fn clip_to_window(subject: &[Vec2], win: &ClipWindow) -> Vec<Vec2> {
    clip_polygon(subject, &win.corners())
}

/// Intersection of the infinite lines through `p1`-`p2` and `q1`-`q2`.
/// `None` when the lines are parallel within tolerance.
fn line_intersection(p1: Vec2, p2: Vec2, q1: Vec2, q2: Vec2) -> Option<Vec2> {
    let dx1 = p2.x - p1.x;
    let dy1 = p2.y - p1.y;
    let dx2 = q2.x - q1.x;
    let dy2 = q2.y - q1.y;

    let denom = dx1 * dy2 - dy1 * dx2;
    if denom.abs() < EPS_DENOM {
        return None;
    }

    let t = ((q1.x - p1.x) * dy2 - (q1.y - p1.y) * dx2) / denom;
    Some(Vec2::new(p1.x + t * dx1, p1.y + t * dy1))
}
