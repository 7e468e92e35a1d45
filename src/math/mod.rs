pub mod hermite;
pub mod vec;

pub use vec::*;

/// Absolute epsilon used when comparing positions and velocities.
pub const EPSILON: f64 = 1e-9;

pub fn approx_eq(a: Vec2, b: Vec2, epsilon: f64) -> bool {
    (a.x - b.x).abs() <= epsilon && (a.y - b.y).abs() <= epsilon
}
