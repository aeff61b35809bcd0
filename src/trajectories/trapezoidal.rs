use crate::error::PlanningError;

use super::{
    axis::AxisSpec,
    profile::{PlannedProfile, ProfileKind},
};

/// Accelerate at `a_max` from `v0` up to `v_max`, cruise, then decelerate back
/// to `v0`.
///
/// Fails with [`PlanningError::ProfileInfeasible`] when the distance can't hold
/// both ramps, or when the ramp would have negative length (`v0 > v_max`).
/// `axis` is only used to label the error.
pub fn trapezoidal_planner(spec: &AxisSpec, axis: usize) -> Result<PlannedProfile, PlanningError> {
    let a = spec.a_max;
    let v_max = spec.v_max;
    let v0 = spec.v0;
    let distance = spec.distance();

    let ta = (v_max - v0) / a;
    let sa = a * ta * ta / 2. + v0 * ta;

    if ta < 0. || distance < 2. * sa {
        return Err(PlanningError::ProfileInfeasible {
            axis,
            distance,
            required: 2. * sa,
        });
    }

    // distance - 2·sa is what's left for the cruise; the check above keeps it >= 0
    let tc = (distance - 2. * sa) / v_max;
    let t = 2. * ta + tc;
    let sc = tc * v_max;

    Ok(PlannedProfile {
        kind: ProfileKind::Trapezoidal,
        t,
        ta,
        tc,
        sa,
        sc,
        vc: v_max,
    })
}
