use std::{env, error::Error, fs, sync::Arc, time::Instant};

use hermite_motion::{
    init_logging,
    math::Vec2,
    movement::MovementState,
    trajectories::hermite_path::{HermitePath, Waypoint},
    CONTROL_PERIOD,
};
use tokio::select;
use tracing::{debug, info, warn};

fn default_waypoints() -> Vec<Waypoint> {
    vec![
        Waypoint::new(0., Vec2::new(0., 0.), Vec2::new(500., 0.)),
        Waypoint::new(200., Vec2::new(600., 100.), Vec2::new(1000., 0.)),
        Waypoint::new(500., Vec2::new(2100., 100.), Vec2::zero()),
    ]
}

fn load_waypoints(path: Option<String>) -> Result<Vec<Waypoint>, Box<dyn Error>> {
    match path {
        Some(path) => {
            info!("loading waypoints from {}", path);
            Ok(serde_json::from_str(&fs::read_to_string(path)?)?)
        }
        None => Ok(default_waypoints()),
    }
}

/// Replays the path in real time, one update per tick, until it is done.
async fn replay_loop(mut state: MovementState) -> MovementState {
    let mut interval = tokio::time::interval(CONTROL_PERIOD);
    let mut last_tick = Instant::now();
    loop {
        interval.tick().await; // first tick ticks immediately that's why it's at the beginning
        let elapsed_ms = last_tick.elapsed().as_secs_f64() * 1000.;
        last_tick = Instant::now();

        let (delta, next) = state.update(elapsed_ms);
        state = next;
        debug!(
            "t={:.1}ms pos=({:.2}, {:.2}) dpos=({:.3}, {:.3})",
            state.consumed_time_ms(),
            state.position().x,
            state.position().y,
            delta.position_delta.x,
            delta.position_delta.y
        );
        if delta.done_delta {
            info!(
                "reached ({:.2}, {:.2}) after {:.1}ms",
                state.position().x,
                state.position().y,
                state.consumed_time_ms()
            );
            return state;
        }
        if delta.done {
            // started done (stationary path)
            return state;
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    init_logging();

    let waypoints = load_waypoints(env::args().nth(1))?;
    let path = Arc::new(HermitePath::new(&waypoints)?);
    info!(
        "replaying {} segments over {}ms",
        path.segments().len(),
        path.end_time_ms()
    );

    select! {
        _ = replay_loop(MovementState::new(path)) => {}
        _ = tokio::signal::ctrl_c() => {
            warn!("replay interrupted")
        }
    };
    Ok(())
}
