// Centralized tolerances for robust clipping

pub const EPS_DENOM: f32 = 1e-8;          // denominator guard for intersections
pub const EPS_AREA: f32 = 1e-2;           // zero-area threshold for coverage

#[inline] pub fn approx_eq(a: f32, b: f32, eps: f32) -> bool { (a - b).abs() <= eps }
