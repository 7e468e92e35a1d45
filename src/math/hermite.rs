//! Cubic Hermite basis over fixed-size tuples.
//!
//! Both functions take the segment's endpoint positions `p0`, `p1` and tangents `v0`, `v1`
//! and a normalized parameter `t` in `[0, 1]`. The derivative is taken with respect to `t`,
//! so it is only a physical velocity once the caller divides by the segment duration.

fn h00(t: f64) -> f64 {
    2.0 * t.powi(3) - 3.0 * t.powi(2) + 1.0
}
fn h10(t: f64) -> f64 {
    t.powi(3) - 2.0 * t.powi(2) + t
}
fn h01(t: f64) -> f64 {
    -2.0 * t.powi(3) + 3.0 * t.powi(2)
}
fn h11(t: f64) -> f64 {
    t.powi(3) - t.powi(2)
}

fn dh00(t: f64) -> f64 {
    6.0 * t.powi(2) - 6.0 * t
}
fn dh10(t: f64) -> f64 {
    3.0 * t.powi(2) - 4.0 * t + 1.0
}
fn dh01(t: f64) -> f64 {
    -6.0 * t.powi(2) + 6.0 * t
}
fn dh11(t: f64) -> f64 {
    3.0 * t.powi(2) - 2.0 * t
}

/// Point on the Hermite curve at `t`.
///
/// ```
/// use hermite_motion::math::hermite::hermite;
///
/// let p = hermite([0., 0.], [1., 0.], [10., 5.], [1., 0.], 1.);
/// assert_eq!(p, [10., 5.]);
/// ```
pub fn hermite<const N: usize>(
    p0: [f64; N],
    v0: [f64; N],
    p1: [f64; N],
    v1: [f64; N],
    t: f64,
) -> [f64; N] {
    let (a, b, c, d) = (h00(t), h10(t), h01(t), h11(t));
    std::array::from_fn(|i| p0[i] * a + v0[i] * b + p1[i] * c + v1[i] * d)
}

/// Derivative of [`hermite`] with respect to `t`.
pub fn hermite_derivative<const N: usize>(
    p0: [f64; N],
    v0: [f64; N],
    p1: [f64; N],
    v1: [f64; N],
    t: f64,
) -> [f64; N] {
    let (a, b, c, d) = (dh00(t), dh10(t), dh01(t), dh11(t));
    std::array::from_fn(|i| p0[i] * a + v0[i] * b + p1[i] * c + v1[i] * d)
}
