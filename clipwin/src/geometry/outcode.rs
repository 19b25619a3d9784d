//! 4-bit region codes for points relative to an axis-aligned window.
//!
//! Each bit marks one half-plane the point falls outside of; a code of 0
//! means the point is inside the window or on its boundary. The bitwise OR
//! and AND of two endpoint codes drive the trivial accept/reject tests of
//! Cohen–Sutherland segment clipping.

use crate::model::{ClipWindow, Vec2};

pub const LEFT: u8 = 1;
pub const RIGHT: u8 = 2;
pub const BOTTOM: u8 = 4;
pub const TOP: u8 = 8;

/// Classify a point against the window edges.
///
/// The four comparisons are strict and independent: LEFT iff `x < xmin`,
/// RIGHT iff `x > xmax`, BOTTOM iff `y < ymin`, TOP iff `y > ymax`.
/// Boundary points get no bit, so the window is closed.
pub fn outcode(p: Vec2, win: &ClipWindow) -> u8 {
    let mut code = 0u8;
    if p.x < win.xmin {
        code |= LEFT;
    }
    if p.x > win.xmax {
        code |= RIGHT;
    }
    if p.y < win.ymin {
        code |= BOTTOM;
    }
    if p.y > win.ymax {
        code |= TOP;
    }
    code
}
