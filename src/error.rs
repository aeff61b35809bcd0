use thiserror::Error;

/// Errors surfaced by [`plan`](crate::trajectories::plan) and by the evaluator.
///
/// Any of these aborts the whole planning call: there is no partial plan.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PlanningError {
    #[error("Invalid trajectory parameters: {0}")]
    InvalidParameters(String),
    #[error("Please specify {0}")]
    MissingLimit(&'static str),
    #[error(
        "Failed to plan trapezoidal profile for axis {axis}: distance {distance} is shorter than the {required} needed to ramp up and down"
    )]
    ProfileInfeasible {
        axis: usize,
        distance: f64,
        required: f64,
    },
    #[error("Time must be a positive number, got {0}")]
    NegativeTime(f64),
    #[error("Axis {axis} out of range, plan has {dof} axes")]
    AxisOutOfRange { axis: usize, dof: usize },
}

/// The triangular profile would go faster than the velocity limit allows.
///
/// Only the minimum-time planner produces this; the orchestrator always
/// recovers from it by falling back to the trapezoidal planner.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("Maximum speed exceeds bound: peak {peak} > limit {limit}")]
pub struct SpeedExceeded {
    pub peak: f64,
    pub limit: f64,
}

/// Why the minimum-time planner gave up on an axis.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum MinimumTimeRejected {
    #[error(transparent)]
    SpeedExceeded(#[from] SpeedExceeded),
    /// no non-negative duration covers `distance` starting at `v0`
    #[error("No bang-bang profile reaches distance {distance} from speed {v0}")]
    Unreachable { distance: f64, v0: f64 },
}
