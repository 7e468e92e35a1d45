use serde::{Deserialize, Serialize};

use crate::math::{
    hermite::{hermite, hermite_derivative},
    Vec2,
};

/// One end of a segment. `velocity` is the Hermite tangent, i.e. already scaled by the segment duration.
#[derive(Deserialize, Serialize, PartialEq, Clone, Copy, Debug)]
pub struct SegmentBound {
    pub time_ms: f64,
    pub position: Vec2,
    pub velocity: Vec2,
}

#[derive(Deserialize, Serialize, PartialEq, Clone, Copy, Debug)]
pub struct Segment {
    pub start: SegmentBound,
    pub end: SegmentBound,
}

#[derive(Deserialize, Serialize, PartialEq, Clone, Copy, Debug, Default)]
pub struct PathPoint {
    pub position: Vec2,
    pub velocity: Vec2,
}

impl Segment {
    /// A zero-length segment resting at `position`.
    pub fn stationary(position: Vec2) -> Self {
        let bound = SegmentBound {
            time_ms: 0.,
            position,
            velocity: Vec2::zero(),
        };
        Self {
            start: bound,
            end: bound,
        }
    }

    pub fn duration_ms(&self) -> f64 {
        self.end.time_ms - self.start.time_ms
    }

    /// true if `time_ms` lies in `[start, end)`
    pub fn contains(&self, time_ms: f64) -> bool {
        self.start.time_ms <= time_ms && time_ms < self.end.time_ms
    }

    /// Normalized progress through the segment. Zero-length segments report their end (`t = 1`).
    pub fn progress(&self, time_ms: f64) -> f64 {
        let duration = self.duration_ms();
        if duration == 0. {
            return 1.;
        }
        (time_ms - self.start.time_ms) / duration
    }

    pub fn point_at(&self, time_ms: f64) -> PathPoint {
        let t = self.progress(time_ms);
        let p0: [f64; 2] = self.start.position.into();
        let v0: [f64; 2] = self.start.velocity.into();
        let p1: [f64; 2] = self.end.position.into();
        let v1: [f64; 2] = self.end.velocity.into();

        PathPoint {
            position: hermite(p0, v0, p1, v1, t).into(),
            velocity: hermite_derivative(p0, v0, p1, v1, t).into(),
        }
    }

    pub fn end_point(&self) -> PathPoint {
        self.point_at(self.end.time_ms)
    }
}
