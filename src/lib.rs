//! Per-axis motion profiles under velocity and acceleration limits.
//!
//! Every axis is planned on its own: the minimum-time (triangular) profile is
//! tried first, the trapezoidal one is used when the triangle would break the
//! velocity limit. The resulting [`TrajectoryPlan`] answers "where is axis `i`
//! at time `t`" for any `t >= 0`.
#![deny(clippy::unwrap_used)]
pub mod config;
pub mod error;
pub mod trajectories;

use std::time::Duration;

pub use error::PlanningError;
pub use trajectories::{plan, AxisSpec, AxisState, TrajectoryPlan};

/// default period of the sampling loop
pub const CONTROL_PERIOD: Duration = Duration::from_millis(10);
