//! Path-by-node entry point.
//!
//! # Examples
//!
//! ```
//! use hermite_motion::{
//!     math::Vec2,
//!     trajectories::hermite_path::{HermitePath, Waypoint},
//! };
//!
//! let path = HermitePath::new(&[
//!     Waypoint::new(0., Vec2::new(0., 0.), Vec2::new(500., 0.)),
//!     Waypoint::new(200., Vec2::new(600., 100.), Vec2::new(1000., 0.)),
//!     Waypoint::new(500., Vec2::new(2100., 100.), Vec2::zero()),
//! ])
//! .expect("non empty path");
//!
//! let at_start = path.point_at_time(0.);
//! assert!(!at_start.done);
//! assert_eq!(at_start.point.position, Vec2::new(0., 0.));
//!
//! let at_end = path.point_at_time(700.);
//! assert!(at_end.done);
//! assert_eq!(at_end.point.position, Vec2::new(2100., 100.));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{
    compile::{compile_nodes, CompileError, PathNode, TangentPolicy},
    segment::{PathPoint, Segment},
    Trajectory,
};
use crate::math::Vec2;

#[derive(Deserialize, Serialize, PartialEq, Clone, Copy, Debug)]
pub struct Waypoint {
    /// Time to come to this waypoint from the previous one. On the first waypoint it delays the whole path.
    pub duration_ms: f64,
    #[serde(alias = "pos")]
    pub position: Vec2,
    pub velocity: Vec2,
}

impl Waypoint {
    pub fn new(duration_ms: f64, position: Vec2, velocity: Vec2) -> Self {
        Self {
            duration_ms,
            position,
            velocity,
        }
    }
}

impl From<&Waypoint> for PathNode {
    fn from(w: &Waypoint) -> Self {
        PathNode {
            duration_ms: w.duration_ms,
            position: w.position,
            velocity: w.velocity,
            start_velocity_override: None,
        }
    }
}

/// The result of sampling a path at a given time.
#[derive(Serialize, PartialEq, Clone, Copy, Debug)]
pub struct PointAtTime {
    pub done: bool,
    pub point: PathPoint,
}

#[derive(Serialize, PartialEq, Clone, Copy, Debug)]
pub struct Delta {
    pub pos_delta: Vec2,
    /// average velocity over the interval, `pos_delta / (next - prev)`
    pub accel: Vec2,
}

#[derive(Serialize, PartialEq, Clone, Copy, Debug)]
pub struct DeltaAtTime {
    pub done: bool,
    pub current_point: PathPoint,
    pub delta: Delta,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeltaError {
    ZeroTimeInterval { time_ms: f64 },
}

impl fmt::Display for DeltaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeltaError::ZeroTimeInterval { time_ms } => {
                write!(f, "delta requested over an empty interval at {}ms", time_ms)
            }
        }
    }
}

impl std::error::Error for DeltaError {}

/// An immutable, compiled sequence of contiguous Hermite segments. Never empty.
///
/// Serialized as the bare list of segments.
#[derive(Deserialize, Serialize, PartialEq, Clone, Debug)]
#[serde(try_from = "Vec<Segment>", into = "Vec<Segment>")]
pub struct HermitePath {
    segments: Vec<Segment>,
}

impl TryFrom<Vec<Segment>> for HermitePath {
    type Error = CompileError;

    fn try_from(segments: Vec<Segment>) -> Result<Self, Self::Error> {
        if segments.is_empty() {
            return Err(CompileError::EmptyWaypoints);
        }
        Ok(Self { segments })
    }
}

impl From<HermitePath> for Vec<Segment> {
    fn from(path: HermitePath) -> Self {
        path.segments
    }
}

impl HermitePath {
    pub fn new(waypoints: &[Waypoint]) -> Result<Self, CompileError> {
        Self::new_with_policy(waypoints, TangentPolicy::default())
    }

    pub fn new_with_policy(
        waypoints: &[Waypoint],
        policy: TangentPolicy,
    ) -> Result<Self, CompileError> {
        let first = waypoints.first().ok_or(CompileError::EmptyWaypoints)?;
        let nodes: Vec<PathNode> = waypoints.iter().map(PathNode::from).collect();
        let segments = compile_nodes(&nodes, first.duration_ms, policy)?;
        Ok(Self { segments })
    }

    /// `segments` must not be empty
    pub(crate) fn from_segments(segments: Vec<Segment>) -> Self {
        debug_assert!(!segments.is_empty());
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    fn final_segment(&self) -> &Segment {
        &self.segments[self.segments.len() - 1]
    }

    pub fn end_time_ms(&self) -> f64 {
        self.final_segment().end.time_ms
    }

    fn find_segment(&self, time_ms: f64) -> Option<&Segment> {
        self.segments.iter().find(|s| s.contains(time_ms))
    }

    /// Samples the path. Any time outside every segment (before the start as well as after the end)
    /// yields the final point with `done` set.
    pub fn point_at_time(&self, time_ms: f64) -> PointAtTime {
        match self.find_segment(time_ms) {
            Some(segment) => PointAtTime {
                done: false,
                point: segment.point_at(time_ms),
            },
            None => PointAtTime {
                done: true,
                point: self.final_segment().end_point(),
            },
        }
    }

    /// Displacement between two samples. `prev_time_ms` and `next_time_ms` must differ,
    /// otherwise `accel` is not finite. See [`HermitePath::checked_delta_at_time`].
    pub fn delta_at_time(&self, prev_time_ms: f64, next_time_ms: f64) -> DeltaAtTime {
        let prev = self.point_at_time(prev_time_ms);
        let current = self.point_at_time(next_time_ms);

        let time_delta_ms = next_time_ms - prev_time_ms;
        let pos_delta = current.point.position - prev.point.position;
        let accel = pos_delta.scale(1. / time_delta_ms);
        DeltaAtTime {
            done: current.done,
            current_point: current.point,
            delta: Delta { pos_delta, accel },
        }
    }

    pub fn checked_delta_at_time(
        &self,
        prev_time_ms: f64,
        next_time_ms: f64,
    ) -> Result<DeltaAtTime, DeltaError> {
        if next_time_ms == prev_time_ms {
            return Err(DeltaError::ZeroTimeInterval {
                time_ms: next_time_ms,
            });
        }
        Ok(self.delta_at_time(prev_time_ms, next_time_ms))
    }
}

/// Velocities are Hermite derivatives with respect to the segment's normalized parameter,
/// i.e. displacement per whole segment duration. Divide by the owning segment's
/// `duration_ms()` for a per-millisecond velocity.
impl Trajectory<Vec2, Vec2> for HermitePath {
    fn get_position(&self, t: f64) -> Vec2 {
        self.point_at_time(t).point.position
    }

    fn get_velocity(&self, t: f64) -> Vec2 {
        self.point_at_time(t).point.velocity
    }

    fn get_total_runtime(&self) -> f64 {
        self.end_time_ms()
    }

    fn get_final_destination(&self) -> Vec2 {
        self.final_segment().end_point().position
    }

    fn get_time_sections(&self) -> impl Iterator<Item = f64> {
        self.segments.iter().map(|s| s.end.time_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{approx_eq, EPSILON};

    fn scenario() -> HermitePath {
        HermitePath::new(&[
            Waypoint::new(0., Vec2::new(0., 0.), Vec2::new(500., 0.)),
            Waypoint::new(200., Vec2::new(600., 100.), Vec2::new(1000., 0.)),
            Waypoint::new(500., Vec2::new(2100., 100.), Vec2::zero()),
        ])
        .expect("scenario compiles")
    }

    #[test]
    fn empty_waypoints_fail() {
        assert_eq!(HermitePath::new(&[]), Err(CompileError::EmptyWaypoints));
    }

    #[test]
    fn start_of_path() {
        let r = scenario().point_at_time(0.);
        assert!(!r.done);
        assert!(approx_eq(r.point.position, Vec2::zero(), EPSILON));
        assert!(approx_eq(r.point.velocity, Vec2::new(100_000., 0.), EPSILON));
    }

    #[test]
    fn end_of_path_is_done() {
        let path = scenario();
        let r = path.point_at_time(700.);
        assert!(r.done);
        assert!(approx_eq(r.point.position, Vec2::new(2100., 100.), EPSILON));
        assert!(approx_eq(r.point.velocity, Vec2::new(500_000., 0.), EPSILON));
        assert_eq!(path.point_at_time(900.), r);
    }

    #[test]
    fn before_start_falls_through_to_end() {
        let path = scenario();
        assert_eq!(path.point_at_time(-1.), path.point_at_time(700.));
    }

    #[test]
    fn first_duration_is_an_offset() {
        let path = HermitePath::new(&[
            Waypoint::new(100., Vec2::new(0., 0.), Vec2::new(1., 0.)),
            Waypoint::new(200., Vec2::new(200., 0.), Vec2::new(1., 0.)),
        ])
        .expect("compiles");
        assert_eq!(path.segments()[0].start.time_ms, 100.);
        assert_eq!(path.end_time_ms(), 300.);

        let before = path.point_at_time(50.);
        assert!(before.done);
        assert!(approx_eq(before.point.position, Vec2::new(200., 0.), EPSILON));

        let middle = path.point_at_time(200.);
        assert!(!middle.done);
        assert!(approx_eq(middle.point.position, Vec2::new(100., 0.), EPSILON));
    }

    #[test]
    fn boundary_belongs_to_next_segment() {
        let path = scenario();
        let r = path.point_at_time(200.);
        assert!(!r.done);
        assert!(approx_eq(r.point.position, Vec2::new(600., 100.), EPSILON));
        assert!(approx_eq(r.point.velocity, Vec2::new(500_000., 0.), EPSILON));
    }

    #[test]
    fn single_waypoint_is_always_done() {
        let path = HermitePath::new(&[Waypoint::new(
            40.,
            Vec2::new(7., -3.),
            Vec2::new(10., 10.),
        )])
        .expect("compiles");
        for t in [-10., 0., 40., 1e9] {
            let r = path.point_at_time(t);
            assert!(r.done);
            assert_eq!(r.point.position, Vec2::new(7., -3.));
            assert_eq!(r.point.velocity, Vec2::zero());
        }
    }

    #[test]
    fn delta_over_one_ms() {
        let path = scenario();
        let d = path.delta_at_time(123., 124.);
        assert!(!d.done);
        assert!(d.delta.pos_delta.is_finite());
        assert_eq!(d.delta.accel, d.delta.pos_delta);
        assert_eq!(d.current_point, path.point_at_time(124.).point);
    }

    #[test]
    fn delta_divides_by_interval() {
        let path = scenario();
        let d = path.delta_at_time(100., 300.);
        assert!(approx_eq(d.delta.accel, d.delta.pos_delta / 200., EPSILON));
    }

    #[test]
    fn delta_done_follows_next_time() {
        let path = scenario();
        assert!(path.delta_at_time(600., 800.).done);
        assert!(!path.delta_at_time(800., 600.).done);
    }

    #[test]
    fn delta_over_empty_interval() {
        let path = scenario();
        assert!(!path.delta_at_time(10., 10.).delta.accel.is_finite());
        assert_eq!(
            path.checked_delta_at_time(10., 10.),
            Err(DeltaError::ZeroTimeInterval { time_ms: 10. })
        );
        assert!(path.checked_delta_at_time(10., 11.).is_ok());
    }

    #[test]
    fn trajectory_view() {
        let path = scenario();
        assert_eq!(path.get_total_runtime(), 700.);
        assert!(approx_eq(
            path.get_final_destination(),
            Vec2::new(2100., 100.),
            EPSILON
        ));
        assert_eq!(path.get_time_sections().collect::<Vec<_>>(), vec![200., 700.]);
        assert_eq!(path.get_position(350.), path.point_at_time(350.).point.position);
    }

    #[test]
    fn compiled_path_json_round_trip() {
        let path = scenario();
        let json = serde_json::to_string(&path).expect("serializes");
        let back: HermitePath = serde_json::from_str(&json).expect("deserializes");
        assert_eq!(back, path);
    }

    #[test]
    fn empty_compiled_path_is_rejected() {
        assert!(serde_json::from_str::<HermitePath>("[]").is_err());
        assert_eq!(
            HermitePath::try_from(Vec::new()),
            Err(CompileError::EmptyWaypoints)
        );
    }

    #[test]
    fn trajectory_velocity_is_per_segment_duration() {
        // straight line covering 200 units in 100ms
        let path = HermitePath::new(&[
            Waypoint::new(0., Vec2::zero(), Vec2::new(2., 0.)),
            Waypoint::new(100., Vec2::new(200., 0.), Vec2::new(2., 0.)),
        ])
        .expect("compiles");
        let segment = path.segments()[0];
        let velocity = path.get_velocity(50.);
        assert!(approx_eq(velocity, Vec2::new(200., 0.), EPSILON));
        assert!(approx_eq(
            velocity / segment.duration_ms(),
            Vec2::new(2., 0.),
            EPSILON
        ));
    }

    #[test]
    fn waypoints_load_from_json() {
        let json = r#"[
            {"duration_ms": 0, "pos": {"x": 0, "y": 0}, "velocity": {"x": 500, "y": 0}},
            {"duration_ms": 200, "position": {"x": 600, "y": 100}, "velocity": {"x": 1000, "y": 0}}
        ]"#;
        let waypoints: Vec<Waypoint> = serde_json::from_str(json).expect("valid json");
        assert_eq!(waypoints[0].position, Vec2::zero());
        assert_eq!(waypoints[1].position, Vec2::new(600., 100.));
    }
}
