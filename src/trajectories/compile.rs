//! Turns an ordered list of nodes into contiguous Hermite segments.
//!
//! Segment `i` joins node `i` to node `i + 1` and lasts `nodes[i + 1].duration_ms`.
//! Both tangents are multiplied by that duration so the `[0, 1]` parameterized basis
//! reaches the next node on time.

use std::fmt;

use tracing::{debug, warn};

use super::segment::{Segment, SegmentBound};
use crate::math::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompileError {
    EmptyWaypoints,
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::EmptyWaypoints => write!(f, "cannot compile a path without waypoints"),
        }
    }
}

impl std::error::Error for CompileError {}

/// Which node's velocity becomes the end tangent of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TangentPolicy {
    /// The node the segment leaves from. Both ends of a segment then share the same tangent.
    #[default]
    PreviousVelocity,
    /// The node the segment arrives at.
    NextVelocity,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathNode {
    /// time to come to this node from the previous one
    pub duration_ms: f64,
    pub position: Vec2,
    pub velocity: Vec2,
    /// replaces the previous node's velocity as the start tangent of the segment ending here
    pub start_velocity_override: Option<Vec2>,
}

pub fn compile_nodes(
    nodes: &[PathNode],
    initial_offset_ms: f64,
    policy: TangentPolicy,
) -> Result<Vec<Segment>, CompileError> {
    let first = nodes.first().ok_or(CompileError::EmptyWaypoints)?;
    if nodes.len() == 1 {
        return Ok(vec![Segment::stationary(first.position)]);
    }

    let mut total_time_ms = initial_offset_ms;
    let mut segments = Vec::with_capacity(nodes.len() - 1);
    for (i, pair) in nodes.windows(2).enumerate() {
        let (prev, next) = (&pair[0], &pair[1]);
        if !(next.duration_ms >= 0. && next.duration_ms.is_finite()) {
            warn!(
                "node {} has a suspicious duration of {}ms",
                i + 1,
                next.duration_ms
            );
        }

        let speed_mlt = next.duration_ms;
        let start_velocity = next.start_velocity_override.unwrap_or(prev.velocity);
        let end_velocity = match policy {
            TangentPolicy::PreviousVelocity => prev.velocity,
            TangentPolicy::NextVelocity => next.velocity,
        };
        let start_time_ms = total_time_ms;
        let end_time_ms = total_time_ms + next.duration_ms;

        segments.push(Segment {
            start: SegmentBound {
                time_ms: start_time_ms,
                position: prev.position,
                velocity: start_velocity.scale(speed_mlt),
            },
            end: SegmentBound {
                time_ms: end_time_ms,
                position: next.position,
                velocity: end_velocity.scale(speed_mlt),
            },
        });
        total_time_ms = end_time_ms;
    }

    debug!(
        "compiled {} nodes into {} segments ending at {}ms",
        nodes.len(),
        segments.len(),
        total_time_ms
    );
    Ok(segments)
}
