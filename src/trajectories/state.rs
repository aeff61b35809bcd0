use serde::Serialize;

/// Kinematic state of one axis at a given time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct AxisState {
    pub acceleration: f64,
    pub velocity: f64,
    pub position: f64,
}

impl AxisState {
    pub fn new(acceleration: f64, velocity: f64, position: f64) -> Self {
        Self {
            acceleration,
            velocity,
            position,
        }
    }
}

/// The state of every axis at `time`, in axis order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sample {
    pub time: f64,
    pub states: Vec<AxisState>,
}
