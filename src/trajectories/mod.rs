pub mod axis;
pub mod min_time;
pub mod plan;
pub mod profile;
pub mod state;
pub mod trapezoidal;

pub use axis::{check_profile_params, AxisSpec};
pub use plan::{plan, AxisTrajectory, TrajectoryPlan};
pub use profile::{PlannedProfile, ProfileKind};
pub use state::{AxisState, Sample};

use crate::error::PlanningError;

/// Time-domain view of a single axis' motion.
pub trait Trajectory {
    /// acceleration, velocity and position at `t` seconds after the start
    fn get_state(&self, t: f64) -> Result<AxisState, PlanningError>;
    fn get_total_runtime(&self) -> f64;
    fn get_final_destination(&self) -> f64;
    fn get_max_speed(&self) -> f64;
    /// end time of each non-empty segment
    fn get_time_sections(&self) -> impl Iterator<Item = f64>;

    fn get_position(&self, t: f64) -> Result<f64, PlanningError> {
        self.get_state(t).map(|s| s.position)
    }

    fn get_velocity(&self, t: f64) -> Result<f64, PlanningError> {
        self.get_state(t).map(|s| s.velocity)
    }

    fn get_acceleration(&self, t: f64) -> Result<f64, PlanningError> {
        self.get_state(t).map(|s| s.acceleration)
    }
}
