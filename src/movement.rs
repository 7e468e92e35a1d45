//! Stateful replay of a compiled path.
//!
//! # Examples
//!
//! ```
//! use hermite_motion::{
//!     math::Vec2,
//!     movement::MovementState,
//!     trajectories::hermite_movement::{HermiteMovement, MoveDestination},
//! };
//!
//! let movement = HermiteMovement::new(
//!     Vec2::zero(),
//!     vec![MoveDestination::new(100., Vec2::new(10., 0.), Vec2::zero())],
//! );
//! let state = MovementState::from_movement(&movement).expect("compiles");
//!
//! let (delta, state) = state.update(60.);
//! assert!(!delta.done);
//! let (delta, _) = state.update(60.);
//! assert!(delta.done && delta.done_delta);
//! ```

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::{
    math::Vec2,
    trajectories::{
        compile::CompileError, hermite_movement::HermiteMovement, hermite_path::HermitePath,
    },
};

#[derive(Clone, Debug)]
pub struct MovementState {
    compiled_movement: Arc<HermitePath>,
    consumed_time_ms: f64,
    position: Vec2,
    velocity: Vec2,
    done: bool,
}

#[derive(Serialize, PartialEq, Clone, Copy, Debug)]
pub struct MovementDelta {
    pub position_delta: Vec2,
    pub velocity_delta: Vec2,
    /// true only on the update that finishes the movement
    pub done_delta: bool,
    pub done: bool,
}

impl MovementState {
    pub fn new(compiled_movement: impl Into<Arc<HermitePath>>) -> Self {
        let compiled_movement = compiled_movement.into();
        let initial = compiled_movement.point_at_time(0.);
        Self {
            compiled_movement,
            consumed_time_ms: 0.,
            position: initial.point.position,
            velocity: initial.point.velocity,
            done: initial.done,
        }
    }

    pub fn from_movement(movement: &HermiteMovement) -> Result<Self, CompileError> {
        Ok(Self::new(movement.compile()?))
    }

    pub fn compiled_movement(&self) -> &Arc<HermitePath> {
        &self.compiled_movement
    }

    pub fn consumed_time_ms(&self) -> f64 {
        self.consumed_time_ms
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Advances by `time_delta_ms`, leaving `self` untouched. Negative deltas are not supported.
    pub fn update(&self, time_delta_ms: f64) -> (MovementDelta, MovementState) {
        let new_time_ms = self.consumed_time_ms + time_delta_ms;
        let r = self.compiled_movement.point_at_time(new_time_ms);

        let new_state = MovementState {
            compiled_movement: Arc::clone(&self.compiled_movement),
            consumed_time_ms: new_time_ms,
            position: r.point.position,
            velocity: r.point.velocity,
            done: r.done,
        };

        let delta = MovementDelta {
            position_delta: new_state.position - self.position,
            velocity_delta: new_state.velocity - self.velocity,
            done_delta: !self.done && new_state.done,
            done: new_state.done,
        };
        if delta.done_delta {
            debug!("movement finished after {}ms", new_time_ms);
        }

        (delta, new_state)
    }
}
