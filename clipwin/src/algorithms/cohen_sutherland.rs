//! Cohen–Sutherland segment clipping against an axis-aligned window.
//!
//! Both endpoints get an outcode; the loop trivially accepts when both codes
//! are zero, trivially rejects when the codes share a set bit, and otherwise
//! replaces one outside endpoint with its intersection on a window boundary
//! until one of the trivial cases applies.

use crate::geometry::outcode::{outcode, BOTTOM, RIGHT, TOP};
use crate::model::{ClipResult, ClipWindow, Segment, Vec2};

/// Clip a segment to the window.
///
/// Returns the visible sub-segment, or `Rejected` when no part of the
/// segment lies inside. A zero-length segment resolves through the trivial
/// accept/reject tests like any other input.
pub fn clip_segment(seg: Segment, win: &ClipWindow) -> ClipResult {
    let Segment { mut a, mut b } = seg;
    let mut code_a = outcode(a, win);
    let mut code_b = outcode(b, win);

    // Each pass clears one boundary bit that is never set again, so this
    // runs at most four times.
    loop {
        if code_a | code_b == 0 {
            return ClipResult::Visible(Segment { a, b });
        }
        if code_a & code_b != 0 {
            return ClipResult::Rejected;
        }

        // Clip the first endpoint that lies outside.
        let out = if code_a != 0 { code_a } else { code_b };
        let p = boundary_intersection(a, b, out, win);
        if out == code_a {
            a = p;
            code_a = outcode(a, win);
        } else {
            b = p;
            code_b = outcode(b, win);
        }
    }
}

/// Intersection of the segment's carrier line with the window boundary named
/// by the highest-precedence set bit of `code` (TOP, BOTTOM, RIGHT, LEFT).
///
/// The denominator is the coordinate delta along the tested axis. It is
/// nonzero whenever that axis's bit is set on exactly one endpoint, so a
/// vertical segment never divides by zero against TOP/BOTTOM, nor a
/// horizontal one against LEFT/RIGHT.
fn boundary_intersection(a: Vec2, b: Vec2, code: u8, win: &ClipWindow) -> Vec2 {
    if code & TOP != 0 {
        Vec2::new(a.x + (b.x - a.x) * (win.ymax - a.y) / (b.y - a.y), win.ymax)
    } else if code & BOTTOM != 0 {
        Vec2::new(a.x + (b.x - a.x) * (win.ymin - a.y) / (b.y - a.y), win.ymin)
    } else if code & RIGHT != 0 {
        Vec2::new(win.xmax, a.y + (b.y - a.y) * (win.xmax - a.x) / (b.x - a.x))
    } else {
        Vec2::new(win.xmin, a.y + (b.y - a.y) * (win.xmin - a.x) / (b.x - a.x))
    }
}

/// Clip every segment of a scene, preserving order.
pub fn clip_segments(segs: &[Segment], win: &ClipWindow) -> Vec<ClipResult> {
    segs.iter().map(|s| clip_segment(*s, win)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(x1: f32, y1: f32, x2: f32, y2: f32) -> Segment {
        Segment::new(Vec2::new(x1, y1), Vec2::new(x2, y2))
    }

    #[test]
    fn horizontal_crossing_is_trimmed_to_window() {
        let win = ClipWindow::new(0.0, 0.0, 200.0, 200.0);
        let r = clip_segment(seg(-10.0, 50.0, 250.0, 50.0), &win);
        assert_eq!(r, ClipResult::Visible(seg(0.0, 50.0, 200.0, 50.0)));
    }

    #[test]
    fn fully_outside_shared_side_is_rejected() {
        let win = ClipWindow::new(0.0, 0.0, 200.0, 200.0);
        let r = clip_segment(seg(300.0, 300.0, 400.0, 400.0), &win);
        assert_eq!(r, ClipResult::Rejected);
    }

    #[test]
    fn fully_inside_is_returned_unchanged() {
        let win = ClipWindow::new(0.0, 0.0, 200.0, 200.0);
        let s = seg(10.0, 20.0, 150.0, 180.0);
        assert_eq!(clip_segment(s, &win), ClipResult::Visible(s));
    }

    #[test]
    fn diagonal_crossing_two_corners() {
        let win = ClipWindow::new(0.0, 0.0, 100.0, 100.0);
        let r = clip_segment(seg(-50.0, 50.0, 50.0, -50.0), &win);
        assert_eq!(r, ClipResult::Visible(seg(0.0, 0.0, 0.0, 0.0)));
    }

    #[test]
    fn diagonal_through_window() {
        let win = ClipWindow::new(0.0, 0.0, 100.0, 100.0);
        match clip_segment(seg(-100.0, -100.0, 200.0, 200.0), &win) {
            ClipResult::Visible(s) => {
                assert_eq!(s.a, Vec2::new(0.0, 0.0));
                assert_eq!(s.b, Vec2::new(100.0, 100.0));
            }
            ClipResult::Rejected => panic!("diagonal through window must be visible"),
        }
    }

    #[test]
    fn vertical_segment_clips_without_dividing_by_zero() {
        let win = ClipWindow::new(0.0, 0.0, 100.0, 100.0);
        let r = clip_segment(seg(50.0, -50.0, 50.0, 150.0), &win);
        assert_eq!(r, ClipResult::Visible(seg(50.0, 0.0, 50.0, 100.0)));
    }

    #[test]
    fn horizontal_segment_clips_without_dividing_by_zero() {
        let win = ClipWindow::new(0.0, 0.0, 100.0, 100.0);
        let r = clip_segment(seg(-50.0, 50.0, 150.0, 50.0), &win);
        assert_eq!(r, ClipResult::Visible(seg(0.0, 50.0, 100.0, 50.0)));
    }

    #[test]
    fn zero_length_segment_inside_and_outside() {
        let win = ClipWindow::new(0.0, 0.0, 100.0, 100.0);
        let inside = seg(50.0, 50.0, 50.0, 50.0);
        assert_eq!(clip_segment(inside, &win), ClipResult::Visible(inside));
        let outside = seg(150.0, 50.0, 150.0, 50.0);
        assert_eq!(clip_segment(outside, &win), ClipResult::Rejected);
    }

    #[test]
    fn endpoint_on_boundary_is_kept() {
        let win = ClipWindow::new(0.0, 0.0, 100.0, 100.0);
        let s = seg(0.0, 0.0, 100.0, 100.0);
        assert_eq!(clip_segment(s, &win), ClipResult::Visible(s));
    }

    #[test]
    fn clipping_is_idempotent() {
        let win = ClipWindow::new(0.0, 0.0, 200.0, 200.0);
        let first = clip_segment(seg(-10.0, 50.0, 250.0, 50.0), &win)
            .segment()
            .expect("visible");
        let second = clip_segment(first, &win).segment().expect("visible");
        assert_eq!(first, second);
    }

    #[test]
    fn batch_preserves_order_and_outcomes() {
        let win = ClipWindow::new(0.0, 0.0, 200.0, 200.0);
        let segs = [
            seg(-10.0, 50.0, 250.0, 50.0),
            seg(300.0, 300.0, 400.0, 400.0),
            seg(10.0, 10.0, 20.0, 20.0),
        ];
        let results = clip_segments(&segs, &win);
        assert_eq!(results.len(), 3);
        assert!(results[0].is_visible());
        assert!(!results[1].is_visible());
        assert_eq!(results[2], ClipResult::Visible(segs[2]));
    }
}
