use serde::{Deserialize, Serialize};

/// Which planner produced a [`PlannedProfile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProfileKind {
    /// accelerate then decelerate, no cruise
    MinimumTime,
    /// accelerate, cruise at the velocity limit, decelerate
    Trapezoidal,
}

/// Timing of one axis' motion.
///
/// Both ramps last `ta` and cover `sa`, the cruise lasts `tc` and covers `sc`.
/// `vc` is the speed at the end of the first ramp: the peak speed of a
/// triangular profile or the cruise speed of a trapezoidal one.
/// `t == 2 * ta + tc`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlannedProfile {
    pub kind: ProfileKind,
    pub t: f64,
    pub ta: f64,
    pub tc: f64,
    pub sa: f64,
    pub sc: f64,
    pub vc: f64,
}

impl PlannedProfile {
    /// time at which the deceleration ramp starts
    pub fn decel_start(&self) -> f64 {
        self.ta + self.tc
    }
}
