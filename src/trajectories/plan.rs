use tracing::{debug, info};

use crate::error::PlanningError;

use super::{
    axis::AxisSpec,
    min_time::minimum_time_planner,
    profile::PlannedProfile,
    state::{AxisState, Sample},
    trapezoidal::trapezoidal_planner,
    Trajectory,
};

/// upper bound on the number of samples [`TrajectoryPlan::sample_grid`] builds
pub const MAX_GRID_SAMPLES: usize = 10_000_000;

/// One planned axis: the request and the profile chosen for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisTrajectory {
    spec: AxisSpec,
    profile: PlannedProfile,
}

impl AxisTrajectory {
    pub fn spec(&self) -> &AxisSpec {
        &self.spec
    }

    pub fn profile(&self) -> &PlannedProfile {
        &self.profile
    }
}

impl Trajectory for AxisTrajectory {
    /// Segments, in order: start (`t == 0`), acceleration (`0 < t < ta`),
    /// cruise (`ta <= t < ta + tc`), deceleration (`ta + tc <= t < total`),
    /// goal (`t >= total`).
    ///
    /// `t == ta` belongs to the cruise segment, or to the deceleration one for
    /// a triangular profile. Velocity and position are continuous there, so
    /// either side gives the same state up to rounding.
    fn get_state(&self, t: f64) -> Result<AxisState, PlanningError> {
        if t.is_nan() {
            return Err(PlanningError::InvalidParameters(
                "query time is NaN".to_string(),
            ));
        }
        if t < 0. {
            return Err(PlanningError::NegativeTime(t));
        }

        let AxisSpec {
            x0, x1, v0, a0, a_max, ..
        } = self.spec;
        let PlannedProfile {
            t: total,
            ta,
            sa,
            sc,
            vc,
            ..
        } = self.profile;
        let decel_start = self.profile.decel_start();

        let state = if t == 0. {
            AxisState::new(a0, v0, x0)
        } else if t < ta {
            AxisState::new(a_max, a_max * t + v0, x0 + a_max * t * t / 2. + v0 * t)
        } else if t < decel_start {
            AxisState::new(0., vc, x0 + sa + vc * (t - ta))
        } else if t < total {
            let td = t - decel_start;
            AxisState::new(
                -a_max,
                vc - a_max * td,
                x0 + sa + sc - a_max * td * td / 2. + vc * td,
            )
        } else {
            AxisState::new(a0, v0, x1)
        };
        Ok(state)
    }

    fn get_total_runtime(&self) -> f64 {
        self.profile.t
    }

    fn get_final_destination(&self) -> f64 {
        self.spec.x1
    }

    fn get_max_speed(&self) -> f64 {
        self.profile.vc.abs().max(self.spec.v0.abs())
    }

    fn get_time_sections(&self) -> impl Iterator<Item = f64> {
        let p = self.profile;
        [p.ta, p.decel_start(), p.t]
            .into_iter()
            .scan(0., |prev, end| {
                let non_empty = end > *prev;
                *prev = end;
                Some((non_empty, end))
            })
            .filter_map(|(non_empty, end)| non_empty.then_some(end))
    }
}

/// Planned motion for every axis.
///
/// Each axis runs on its own timeline: a short move finishes early and then
/// holds its goal, it is not slowed down to end with the longest one.
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryPlan {
    axes: Vec<AxisTrajectory>,
}

impl TrajectoryPlan {
    pub fn dof(&self) -> usize {
        self.axes.len()
    }

    pub fn axis(&self, axis: usize) -> Result<&AxisTrajectory, PlanningError> {
        self.axes.get(axis).ok_or(PlanningError::AxisOutOfRange {
            axis,
            dof: self.dof(),
        })
    }

    pub fn axes(&self) -> &[AxisTrajectory] {
        &self.axes
    }

    pub fn specs(&self) -> impl Iterator<Item = &AxisSpec> {
        self.axes.iter().map(|a| &a.spec)
    }

    pub fn profiles(&self) -> impl Iterator<Item = &PlannedProfile> {
        self.axes.iter().map(|a| &a.profile)
    }

    pub fn total_duration(&self, axis: usize) -> Result<f64, PlanningError> {
        self.axis(axis).map(|a| a.get_total_runtime())
    }

    pub fn durations(&self) -> Vec<f64> {
        self.axes.iter().map(|a| a.get_total_runtime()).collect()
    }

    /// time at which the slowest axis reaches its goal, 0 for an empty plan
    pub fn max_duration(&self) -> f64 {
        self.axes
            .iter()
            .map(|a| a.get_total_runtime())
            .fold(0., f64::max)
    }

    /// State of every axis at `t`, in axis order.
    pub fn evaluate(&self, t: f64) -> Result<Vec<AxisState>, PlanningError> {
        self.axes.iter().map(|a| a.get_state(t)).collect()
    }

    pub fn evaluate_axis(&self, axis: usize, t: f64) -> Result<AxisState, PlanningError> {
        self.axis(axis)?.get_state(t)
    }

    /// [`evaluate`](Self::evaluate) bound to this plan.
    pub fn evaluator(&self) -> impl Fn(f64) -> Result<Vec<AxisState>, PlanningError> + '_ {
        move |t| self.evaluate(t)
    }

    pub fn sample(&self, time: f64) -> Result<Sample, PlanningError> {
        Ok(Sample {
            time,
            states: self.evaluate(time)?,
        })
    }

    /// Samples every axis at `0, dt, 2·dt, …` up to and including
    /// [`max_duration`](Self::max_duration).
    pub fn sample_grid(&self, dt: f64) -> Result<Vec<Sample>, PlanningError> {
        if !dt.is_finite() || dt <= 0. {
            return Err(PlanningError::InvalidParameters(format!(
                "sampling period must be a positive number, got {dt}"
            )));
        }
        let end = self.max_duration();
        let steps = (end / dt).ceil();
        if !(steps < MAX_GRID_SAMPLES as f64) {
            return Err(PlanningError::InvalidParameters(format!(
                "sampling {end}s every {dt}s needs more than {MAX_GRID_SAMPLES} samples"
            )));
        }
        let steps = steps as usize;

        let mut samples = (0..=steps)
            .map(|i| self.sample((i as f64 * dt).min(end)))
            .collect::<Result<Vec<_>, _>>()?;
        samples.dedup_by(|a, b| a.time == b.time);
        Ok(samples)
    }
}

fn plan_axis(axis: usize, spec: &AxisSpec) -> Result<PlannedProfile, PlanningError> {
    let profile = match minimum_time_planner(spec) {
        Ok(profile) => profile,
        Err(rejected) => {
            info!(
                axis,
                reason = %rejected,
                "failed to plan minimum time profile, falling back to trapezoidal"
            );
            trapezoidal_planner(spec, axis)?
        }
    };
    if !profile.t.is_finite() {
        return Err(PlanningError::InvalidParameters(format!(
            "axis {axis}: duration overflows ({}), limits are too small for the distance",
            profile.t
        )));
    }
    debug!(
        axis,
        kind = ?profile.kind,
        t = profile.t,
        ta = profile.ta,
        tc = profile.tc,
        sa = profile.sa,
        sc = profile.sc,
        vc = profile.vc,
        "planned axis"
    );
    Ok(profile)
}

/// Plans every axis independently.
///
/// Each axis gets the minimum-time (triangular) profile when it stays under
/// the velocity limit, and the trapezoidal one otherwise. The first axis that
/// has no feasible profile fails the whole call.
///
/// ```
/// use trapezoidal_planner::trajectories::{plan, AxisSpec, ProfileKind};
///
/// let plan = plan(&[AxisSpec::new(0., 2., 0., 0., 3., 2.)]).unwrap();
/// assert_eq!(plan.dof(), 1);
/// assert_eq!(plan.total_duration(0).unwrap(), 2.);
///
/// let profile = plan.profiles().next().unwrap();
/// assert_eq!(profile.kind, ProfileKind::MinimumTime);
/// assert_eq!(profile.tc, 0.);
///
/// let goal = plan.evaluate(2.).unwrap()[0];
/// assert_eq!((goal.acceleration, goal.velocity, goal.position), (0., 0., 2.));
/// ```
#[tracing::instrument(skip(specs), fields(dof = specs.len()))]
pub fn plan(specs: &[AxisSpec]) -> Result<TrajectoryPlan, PlanningError> {
    for (axis, spec) in specs.iter().enumerate() {
        spec.validate(axis)?;
    }

    let axes = specs
        .iter()
        .enumerate()
        .map(|(axis, spec)| {
            plan_axis(axis, spec).map(|profile| AxisTrajectory {
                spec: *spec,
                profile,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(TrajectoryPlan { axes })
}

/// [`plan`] for the column layout: one slice per parameter, one entry per axis.
pub fn plan_columns(
    x: &[f64],
    y: &[f64],
    v0: &[f64],
    a0: &[f64],
    v_max: Option<&[f64]>,
    a_max: Option<&[f64]>,
) -> Result<TrajectoryPlan, PlanningError> {
    plan(&AxisSpec::from_columns(x, y, v0, a0, v_max, a_max)?)
}
