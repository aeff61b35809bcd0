use proptest::prelude::*;
use trapezoidal_planner::{
    plan,
    trajectories::{ProfileKind, Trajectory},
    AxisSpec, AxisState,
};

/// forward moves starting between rest and the velocity limit, which always
/// have a feasible profile
fn forward_spec() -> impl Strategy<Value = AxisSpec> {
    (
        -100.0..100.0f64,
        0.0..200.0f64,
        0.0..1.0f64,
        -5.0..5.0f64,
        0.1..50.0f64,
        0.1..50.0f64,
    )
        .prop_map(|(x0, d, v0_ratio, a0, v_max, a_max)| {
            AxisSpec::new(x0, x0 + d, v0_ratio * v_max, a0, v_max, a_max)
        })
}

proptest! {
    #[test]
    fn start_and_goal_are_reproduced(spec in forward_spec()) {
        let plan = plan(&[spec]).unwrap();
        let t = plan.total_duration(0).unwrap();
        prop_assert_eq!(plan.evaluate(0.).unwrap()[0], AxisState::new(spec.a0, spec.v0, spec.x0));
        prop_assert_eq!(plan.evaluate(t).unwrap()[0], AxisState::new(spec.a0, spec.v0, spec.x1));
    }

    #[test]
    fn profile_shape(spec in forward_spec()) {
        let plan = plan(&[spec]).unwrap();
        let p = *plan.profiles().next().unwrap();
        prop_assert!(p.t >= 0.);
        prop_assert!((p.t - (2. * p.ta + p.tc)).abs() <= 1e-9 * p.t.max(1.));
        match p.kind {
            ProfileKind::MinimumTime => {
                prop_assert_eq!(p.tc, 0.);
                prop_assert!(p.vc <= spec.v_max);
            }
            ProfileKind::Trapezoidal => {
                prop_assert!(2. * p.sa <= spec.distance());
                prop_assert!(p.tc >= 0.);
            }
        }
    }

    #[test]
    fn continuous_across_segments(spec in forward_spec()) {
        let plan = plan(&[spec]).unwrap();
        let axis = plan.axis(0).unwrap();
        let scale = spec.distance().max(spec.v_max).max(1.);
        let eps = 1e-7;
        for edge in axis.get_time_sections() {
            if edge <= eps {
                continue;
            }
            let before = axis.get_state(edge - eps).unwrap();
            let after = axis.get_state(edge + eps).unwrap();
            prop_assert!((before.position - after.position).abs() <= 1e-5 * scale);
            if edge < axis.get_total_runtime() {
                prop_assert!((before.velocity - after.velocity).abs() <= 1e-5 * scale);
            }
        }
    }

    #[test]
    fn longer_moves_never_finish_sooner(spec in forward_spec(), extra in 0.0..100.0f64) {
        let further = AxisSpec { x1: spec.x1 + extra, ..spec };
        let t_near = plan(&[spec]).unwrap().total_duration(0).unwrap();
        let t_far = plan(&[further]).unwrap().total_duration(0).unwrap();
        prop_assert!(t_far >= t_near - 1e-9 * t_near.max(1.));
    }
}
