use crate::error::{MinimumTimeRejected, SpeedExceeded};

use super::{
    axis::AxisSpec,
    profile::{PlannedProfile, ProfileKind},
};

/// Fastest bang-bang profile: `+a_max` for the first half of the motion,
/// `-a_max` for the second half, starting and ending at `v0`.
///
/// The duration is the non-negative root of `a_max/4·t² + v0·t − d = 0`.
/// Fails when the peak speed would go over `v_max`, or when the quadratic has
/// no non-negative root (a goal behind the start while already moving
/// forward); the caller then falls back to the trapezoidal planner.
///
/// A goal behind the start is fine when `v0 < 0` carries the axis there.
pub fn minimum_time_planner(spec: &AxisSpec) -> Result<PlannedProfile, MinimumTimeRejected> {
    let a = spec.a_max;
    let v0 = spec.v0;
    let distance = spec.distance();
    let unreachable = MinimumTimeRejected::Unreachable { distance, v0 };

    let radicand = v0 * v0 + distance * a;
    if radicand < 0. {
        return Err(unreachable);
    }
    let d = radicand.sqrt();
    let denom = a / 2.;

    let t1 = (-v0 + d) / denom;
    let t2 = (-v0 - d) / denom;
    // d >= 0 so t1 >= t2
    let t = t1.max(t2);
    if t < 0. {
        return Err(unreachable);
    }
    // turns the -0.0 of the degenerate `x0 == x1, v0 == 0` case into 0
    let t = t.max(0.);
    let ta = 0.5 * t;
    let sa = v0 * ta + a * ta * ta / 2.;

    let peak = v0 + a * ta;
    if peak > spec.v_max {
        return Err(SpeedExceeded {
            peak,
            limit: spec.v_max,
        }
        .into());
    }

    Ok(PlannedProfile {
        kind: ProfileKind::MinimumTime,
        t,
        ta,
        tc: 0.,
        sa,
        sc: 0.,
        vc: peak,
    })
}
