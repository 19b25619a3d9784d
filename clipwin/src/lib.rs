pub mod model;
pub mod geometry {
    pub mod outcode;
    pub mod tolerance;
}
pub mod algorithms {
    pub mod cohen_sutherland;
    pub mod metrics;
    pub mod sutherland_hodgman;
}
pub mod report;

pub use model::{ClipEdge, ClipResult, ClipWindow, Segment, Vec2};
