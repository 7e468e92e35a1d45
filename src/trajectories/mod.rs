pub mod compile;
pub mod hermite_movement;
pub mod hermite_path;
pub mod segment;

/// Something that can be sampled over time. Times are in milliseconds.
pub trait Trajectory<P, V> {
    fn get_position(&self, t: f64) -> P;
    fn get_velocity(&self, t: f64) -> V;
    fn get_total_runtime(&self) -> f64;
    fn get_final_destination(&self) -> P;
    fn get_time_sections(&self) -> impl Iterator<Item = f64>;
}
