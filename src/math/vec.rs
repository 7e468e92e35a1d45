use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

#[derive(Deserialize, Serialize, PartialEq, Clone, Copy, Debug, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn scale(&self, scale: f64) -> Self {
        *self * scale
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<[f64; 2]> for Vec2 {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Vec2> for [f64; 2] {
    fn from(v: Vec2) -> Self {
        [v.x, v.y]
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl Div<f64> for Vec2 {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Self {
            x: self.x / rhs,
            y: self.y / rhs,
        }
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_does_not_touch_operands() {
        let a = Vec2::new(3., 4.);
        let b = Vec2::new(1., 1.);
        assert_eq!(a - b, Vec2::new(2., 3.));
        assert_eq!(a, Vec2::new(3., 4.));
    }

    #[test]
    fn scale_matches_mul() {
        let v = Vec2::new(500., -2.);
        assert_eq!(v.scale(200.), Vec2::new(100_000., -400.));
        assert_eq!(v.scale(0.), Vec2::zero());
    }

    #[test]
    fn tuple_conversion() {
        let v = Vec2::from([1.5, -2.5]);
        let ary: [f64; 2] = v.into();
        assert_eq!(ary, [1.5, -2.5]);
        assert_eq!(Vec2::from(ary), v);
    }
}
