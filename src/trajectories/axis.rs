use serde::{Deserialize, Serialize};

use crate::error::PlanningError;

/// Motion request for one degree of freedom.
///
/// `v0` and `a0` are both the initial and the final velocity/acceleration:
/// the axis leaves `x0` and reaches `x1` in the same kinematic state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisSpec {
    pub x0: f64,
    pub x1: f64,
    pub v0: f64,
    pub a0: f64,
    pub v_max: f64,
    pub a_max: f64,
}

impl AxisSpec {
    pub fn new(x0: f64, x1: f64, v0: f64, a0: f64, v_max: f64, a_max: f64) -> Self {
        Self {
            x0,
            x1,
            v0,
            a0,
            v_max,
            a_max,
        }
    }

    /// signed travel distance, `x1 - x0`
    pub fn distance(&self) -> f64 {
        self.x1 - self.x0
    }

    /// Rejects non-finite values and non-positive limits.
    pub fn validate(&self, axis: usize) -> Result<(), PlanningError> {
        let values = [
            ("x0", self.x0),
            ("x1", self.x1),
            ("v0", self.v0),
            ("a0", self.a0),
            ("v_max", self.v_max),
            ("a_max", self.a_max),
        ];
        if let Some((name, value)) = values.iter().find(|(_, v)| !v.is_finite()) {
            return Err(PlanningError::InvalidParameters(format!(
                "axis {axis}: {name} must be finite, got {value}"
            )));
        }
        if !self.distance().is_finite() {
            return Err(PlanningError::InvalidParameters(format!(
                "axis {axis}: distance from {} to {} overflows",
                self.x0, self.x1
            )));
        }
        if self.v_max <= 0. || self.a_max <= 0. {
            return Err(PlanningError::InvalidParameters(format!(
                "axis {axis}: limits must be positive, got v_max={} a_max={}",
                self.v_max, self.a_max
            )));
        }
        Ok(())
    }

    /// Builds one spec per axis from per-parameter columns.
    ///
    /// Runs [`check_profile_params`] first, so mismatched columns fail before
    /// anything is assembled. Planning needs both limits: if only one column is
    /// given the missing one is reported.
    pub fn from_columns(
        x: &[f64],
        y: &[f64],
        v0: &[f64],
        a0: &[f64],
        v_max: Option<&[f64]>,
        a_max: Option<&[f64]>,
    ) -> Result<Vec<AxisSpec>, PlanningError> {
        let dof = check_profile_params(x, y, v0, a0, v_max, a_max)?;
        let v_max = v_max.ok_or(PlanningError::MissingLimit("v_max"))?;
        let a_max = a_max.ok_or(PlanningError::MissingLimit("a_max"))?;

        Ok((0..dof)
            .map(|i| AxisSpec::new(x[i], y[i], v0[i], a0[i], v_max[i], a_max[i]))
            .collect())
    }
}

/// Checks the per-axis columns all have the same length and returns it.
///
/// At least one of the two limit columns must be present; absent columns are
/// left out of the length comparison.
pub fn check_profile_params(
    x: &[f64],
    y: &[f64],
    v0: &[f64],
    a0: &[f64],
    v_max: Option<&[f64]>,
    a_max: Option<&[f64]>,
) -> Result<usize, PlanningError> {
    if v_max.is_none() && a_max.is_none() {
        return Err(PlanningError::MissingLimit("either v_max or a_max"));
    }

    let dof = x.len();
    let lengths = [
        ("y", Some(y.len())),
        ("v0", Some(v0.len())),
        ("a0", Some(a0.len())),
        ("v_max", v_max.map(<[f64]>::len)),
        ("a_max", a_max.map(<[f64]>::len)),
    ];
    for (name, len) in lengths {
        match len {
            Some(len) if len != dof => {
                return Err(PlanningError::InvalidParameters(format!(
                    "number of dimensions in parameters does not match: x has {dof}, {name} has {len}"
                )));
            }
            _ => {}
        }
    }

    Ok(dof)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_columns_give_dof() {
        let c = [0., 1.];
        assert_eq!(check_profile_params(&c, &c, &c, &c, Some(&c), Some(&c)), Ok(2));
        assert_eq!(check_profile_params(&c, &c, &c, &c, None, Some(&c)), Ok(2));
    }

    #[test]
    fn mismatched_columns_are_rejected() {
        let two = [0., 1.];
        let three = [0., 1., 2.];
        let res = check_profile_params(&two, &two, &three, &two, Some(&two), Some(&two));
        assert!(matches!(res, Err(PlanningError::InvalidParameters(_))));

        let res = check_profile_params(&two, &two, &two, &two, None, Some(&three));
        assert!(matches!(res, Err(PlanningError::InvalidParameters(_))));
    }

    #[test]
    fn no_limit_at_all() {
        let c = [0.];
        assert_eq!(
            check_profile_params(&c, &c, &c, &c, None, None),
            Err(PlanningError::MissingLimit("either v_max or a_max"))
        );
    }

    #[test]
    fn assembly_needs_both_limits() {
        let c = [1.];
        assert_eq!(
            AxisSpec::from_columns(&c, &c, &c, &c, Some(&c), None),
            Err(PlanningError::MissingLimit("a_max"))
        );
        assert_eq!(
            AxisSpec::from_columns(&c, &c, &c, &c, None, Some(&c)),
            Err(PlanningError::MissingLimit("v_max"))
        );
    }

    #[test]
    fn assembly_keeps_axis_order() {
        let specs = AxisSpec::from_columns(
            &[1., 0.],
            &[2., 15.],
            &[0., 0.],
            &[0., 0.],
            Some(&[3., 5.]),
            Some(&[2., 3.]),
        )
        .unwrap();
        assert_eq!(specs[0], AxisSpec::new(1., 2., 0., 0., 3., 2.));
        assert_eq!(specs[1], AxisSpec::new(0., 15., 0., 0., 5., 3.));
    }

    #[test]
    fn validate_rejects_bad_values() {
        assert!(AxisSpec::new(0., 1., 0., 0., 1., 1.).validate(0).is_ok());
        assert!(AxisSpec::new(f64::NAN, 1., 0., 0., 1., 1.).validate(0).is_err());
        assert!(AxisSpec::new(0., 1., 0., 0., 0., 1.).validate(0).is_err());
        assert!(AxisSpec::new(0., 1., 0., 0., 1., -2.).validate(3).is_err());
    }

    #[test]
    fn validate_rejects_overflowing_distance() {
        let spec = AxisSpec::new(-1e308, 1e308, 0., 0., 1., 1.);
        assert!(spec.x0.is_finite() && spec.x1.is_finite());
        assert!(matches!(
            spec.validate(0),
            Err(PlanningError::InvalidParameters(_))
        ));
    }
}
