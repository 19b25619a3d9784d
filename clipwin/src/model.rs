use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Vec2 {
        Vec2 { x, y }
    }
}

/// A segment with distinguishable endpoints. Zero-length segments are legal
/// inputs everywhere in the engine.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub a: Vec2,
    pub b: Vec2,
}

impl Segment {
    pub fn new(a: Vec2, b: Vec2) -> Segment {
        Segment { a, b }
    }
}

/// Axis-aligned clip window. `new` stores the bounds as given; ordering
/// (xmin <= xmax, ymin <= ymax) is the caller's responsibility, and an
/// inverted window produces an unspecified but non-panicking clip result.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClipWindow {
    pub xmin: f32,
    pub ymin: f32,
    pub xmax: f32,
    pub ymax: f32,
}

impl ClipWindow {
    pub fn new(xmin: f32, ymin: f32, xmax: f32, ymax: f32) -> ClipWindow {
        ClipWindow {
            xmin,
            ymin,
            xmax,
            ymax,
        }
    }

    /// Window spanning two arbitrary corner points, normalized to min/max.
    pub fn from_points(a: Vec2, b: Vec2) -> ClipWindow {
        ClipWindow {
            xmin: a.x.min(b.x),
            ymin: a.y.min(b.y),
            xmax: a.x.max(b.x),
            ymax: a.y.max(b.y),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.xmin <= self.xmax
            && self.ymin <= self.ymax
            && self.xmin.is_finite()
            && self.ymin.is_finite()
            && self.xmax.is_finite()
            && self.ymax.is_finite()
    }

    pub fn width(&self) -> f32 {
        (self.xmax - self.xmin).max(0.0)
    }

    pub fn height(&self) -> f32 {
        (self.ymax - self.ymin).max(0.0)
    }

    /// Closed-boundary containment: points on the window edge are inside.
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.xmin && p.x <= self.xmax && p.y >= self.ymin && p.y <= self.ymax
    }

    /// The window as a 4-vertex polygon, counter-clockwise. This winding is
    /// what `ClipEdge::is_inside` expects: the interior lies to the left of
    /// each directed edge.
    pub fn corners(&self) -> [Vec2; 4] {
        [
            Vec2::new(self.xmin, self.ymin),
            Vec2::new(self.xmax, self.ymin),
            Vec2::new(self.xmax, self.ymax),
            Vec2::new(self.xmin, self.ymax),
        ]
    }
}

/// One directed boundary edge of a convex clip region.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClipEdge {
    pub from: Vec2,
    pub to: Vec2,
}

impl ClipEdge {
    pub fn new(from: Vec2, to: Vec2) -> ClipEdge {
        ClipEdge { from, to }
    }

    /// Half-plane test: the interior side is the left of the directed edge,
    /// and the edge line itself counts as inside. This matches the closed
    /// window convention of the outcode classifier.
    pub fn is_inside(&self, p: Vec2) -> bool {
        let cross = (self.to.x - self.from.x) * (p.y - self.from.y)
            - (self.to.y - self.from.y) * (p.x - self.from.x);
        cross >= 0.0
    }
}

/// Outcome of clipping one segment: the visible sub-segment, or nothing.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum ClipResult {
    Visible(Segment),
    Rejected,
}

impl ClipResult {
    pub fn is_visible(&self) -> bool {
        matches!(self, ClipResult::Visible(_))
    }

    pub fn segment(&self) -> Option<Segment> {
        match self {
            ClipResult::Visible(s) => Some(*s),
            ClipResult::Rejected => None,
        }
    }
}
