use std::{env, error::Error, fs};

use hermite_motion::{
    init_logging,
    math::Vec2,
    trajectories::hermite_path::{HermitePath, Waypoint},
};
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info, warn};

const SAMPLE_STEP_MS: f64 = 10.;
const RANDOM_WAYPOINTS: usize = 5;
const MAX_SAMPLES: usize = 100_000;

#[derive(Serialize, Debug)]
struct Sample {
    time_ms: f64,
    done: bool,
    position: Vec2,
    velocity: Vec2,
}

fn random_waypoints(n: usize) -> Vec<Waypoint> {
    let mut rng = rand::thread_rng();
    (0..n)
        .map(|i| {
            let duration_ms = if i == 0 { 0. } else { rng.gen_range(50.0..500.0) };
            Waypoint::new(
                duration_ms,
                Vec2::new(rng.gen_range(-1000.0..1000.0), rng.gen_range(-1000.0..1000.0)),
                Vec2::new(rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0)),
            )
        })
        .collect()
}

/// Samples from the start of the path until the first `done` sample, at most `MAX_SAMPLES` of them.
fn sample_path(path: &HermitePath, step_ms: f64) -> Vec<Sample> {
    let mut samples = Vec::new();
    let mut time_ms = path.segments()[0].start.time_ms;
    while samples.len() < MAX_SAMPLES {
        let r = path.point_at_time(time_ms);
        samples.push(Sample {
            time_ms,
            done: r.done,
            position: r.point.position,
            velocity: r.point.velocity,
        });
        if r.done {
            return samples;
        }
        let next_ms = time_ms + step_ms;
        if next_ms == time_ms {
            warn!("sample step is lost at {}ms, stopping", time_ms);
            return samples;
        }
        time_ms = next_ms;
    }
    warn!("stopped after {} samples", MAX_SAMPLES);
    samples
}

/// Prints one JSON sample per line from the start of the path until its end.
fn main() -> Result<(), Box<dyn Error>> {
    init_logging();

    let waypoints: Vec<Waypoint> = match env::args().nth(1) {
        Some(file) => serde_json::from_str(&fs::read_to_string(file)?)?,
        None => {
            info!("no waypoint file given, sampling a random path");
            random_waypoints(RANDOM_WAYPOINTS)
        }
    };
    let path = HermitePath::new(&waypoints)?;
    debug!("compiled path: {}", serde_json::to_string(&path)?);

    for sample in sample_path(&path, SAMPLE_STEP_MS) {
        println!("{}", serde_json::to_string(&sample)?);
    }
    Ok(())
}
