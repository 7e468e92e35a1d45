//! Movement-by-destination entry point.
//!
//! A movement starts at the origin with `start_velocity` and visits each destination in turn.
//! Positions are relative to wherever the moving object was when the movement started.

use serde::{Deserialize, Serialize};

use super::{
    compile::{compile_nodes, CompileError, PathNode, TangentPolicy},
    hermite_path::HermitePath,
};
use crate::math::Vec2;

#[derive(Deserialize, Serialize, PartialEq, Clone, Copy, Debug)]
pub struct MoveDestination {
    pub duration_ms: f64,
    pub position: Vec2,
    pub end_velocity: Vec2,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_velocity_override: Option<Vec2>,
}

impl MoveDestination {
    pub fn new(duration_ms: f64, position: Vec2, end_velocity: Vec2) -> Self {
        Self {
            duration_ms,
            position,
            end_velocity,
            start_velocity_override: None,
        }
    }

    pub fn with_start_velocity(mut self, start_velocity: Vec2) -> Self {
        self.start_velocity_override = Some(start_velocity);
        self
    }
}

impl From<&MoveDestination> for PathNode {
    fn from(d: &MoveDestination) -> Self {
        PathNode {
            duration_ms: d.duration_ms,
            position: d.position,
            velocity: d.end_velocity,
            start_velocity_override: d.start_velocity_override,
        }
    }
}

#[derive(Deserialize, Serialize, PartialEq, Clone, Debug, Default)]
pub struct HermiteMovement {
    pub start_velocity: Vec2,
    pub destinations: Vec<MoveDestination>,
}

impl HermiteMovement {
    pub fn new(start_velocity: Vec2, destinations: Vec<MoveDestination>) -> Self {
        Self {
            start_velocity,
            destinations,
        }
    }

    pub fn compile(&self) -> Result<HermitePath, CompileError> {
        self.compile_with_policy(TangentPolicy::default())
    }

    /// Never fails in practice: the origin is always prepended, so there is at least one node.
    pub fn compile_with_policy(&self, policy: TangentPolicy) -> Result<HermitePath, CompileError> {
        // the origin is not a destination but is compiled as one
        let origin = PathNode {
            duration_ms: 0.,
            position: Vec2::zero(),
            velocity: self.start_velocity,
            start_velocity_override: None,
        };
        let nodes: Vec<PathNode> = std::iter::once(origin)
            .chain(self.destinations.iter().map(PathNode::from))
            .collect();
        let segments = compile_nodes(&nodes, 0., policy)?;
        Ok(HermitePath::from_segments(segments))
    }
}
