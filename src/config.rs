use std::{fs, io, path::Path, time::Duration};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{error::PlanningError, trajectories::AxisSpec, CONTROL_PERIOD};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("couldn't read job file: {0}")]
    Io(#[from] io::Error),
    #[error("couldn't parse job file: {0}")]
    Json(#[from] serde_json::Error),
}

/// A planning job, one list per parameter and one entry per axis.
///
/// ```json
/// {
///     "start": [1.0, 0.0],
///     "goal": [2.0, 15.0],
///     "v0": [0.0, 0.0],
///     "a0": [0.0, 0.0],
///     "v_max": [3.0, 5.0],
///     "a_max": [2.0, 3.0],
///     "sample_period_ms": 10
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanConfig {
    pub start: Vec<f64>,
    pub goal: Vec<f64>,
    pub v0: Vec<f64>,
    pub a0: Vec<f64>,
    #[serde(default)]
    pub v_max: Option<Vec<f64>>,
    #[serde(default)]
    pub a_max: Option<Vec<f64>>,
    #[serde(default)]
    pub sample_period_ms: Option<u64>,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            start: vec![1., 0.],
            goal: vec![2., 15.],
            v0: vec![0., 0.],
            a0: vec![0., 0.],
            v_max: Some(vec![3., 5.]),
            a_max: Some(vec![2., 3.]),
            sample_period_ms: None,
        }
    }
}

impl PlanConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_json_str(&fs::read_to_string(path)?)
    }

    /// Validates the columns and turns them into one spec per axis.
    pub fn axis_specs(&self) -> Result<Vec<AxisSpec>, PlanningError> {
        AxisSpec::from_columns(
            &self.start,
            &self.goal,
            &self.v0,
            &self.a0,
            self.v_max.as_deref(),
            self.a_max.as_deref(),
        )
    }

    pub fn sample_period(&self) -> Duration {
        match self.sample_period_ms {
            Some(ms) if ms > 0 => Duration::from_millis(ms),
            _ => CONTROL_PERIOD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_job() {
        let config = PlanConfig::default();
        let specs = config.axis_specs().unwrap();
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[1], AxisSpec::new(0., 15., 0., 0., 5., 3.));
        assert_eq!(config.sample_period(), CONTROL_PERIOD);
    }

    #[test]
    fn parse_job() {
        let config = PlanConfig::from_json_str(
            r#"{
                "start": [0.0],
                "goal": [2.0],
                "v0": [0.0],
                "a0": [0.0],
                "v_max": [3.0],
                "a_max": [2.0],
                "sample_period_ms": 20
            }"#,
        )
        .unwrap();
        assert_eq!(config.sample_period(), Duration::from_millis(20));
        assert_eq!(
            config.axis_specs().unwrap(),
            [AxisSpec::new(0., 2., 0., 0., 3., 2.)]
        );
    }

    #[test]
    fn limits_are_optional_in_the_file() {
        let config = PlanConfig::from_json_str(
            r#"{ "start": [0.0], "goal": [2.0], "v0": [0.0], "a0": [0.0] }"#,
        )
        .unwrap();
        assert_eq!(
            config.axis_specs(),
            Err(PlanningError::MissingLimit("either v_max or a_max"))
        );
    }

    #[test]
    fn mismatched_job() {
        let config = PlanConfig {
            goal: vec![2.],
            ..PlanConfig::default()
        };
        assert!(matches!(
            config.axis_specs(),
            Err(PlanningError::InvalidParameters(_))
        ));
    }

    #[test]
    fn malformed_json() {
        assert!(matches!(
            PlanConfig::from_json_str("{ \"start\": "),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(
            PlanConfig::load("/nonexistent/job.json"),
            Err(ConfigError::Io(_))
        ));
    }
}
