use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{error::PhysicsError, properties::Material};

/// Tunables of a [`World`](crate::world::World).
///
/// Missing fields fall back to their defaults when deserializing, so a config file
/// only needs to name what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Acceleration applied to every dynamic body, in m/s²
    pub gravity: Vec2,
    /// Integration substeps per call to `step`
    pub substeps: u32,
    /// Solver passes per substep over ground, pairs and constraints
    pub iterations: u32,
    /// Height of the ground half-plane, `None` for no ground
    pub ground_y: Option<f32>,
    pub circle_ground: Material,
    pub box_ground: Material,
    pub circle_circle: Material,
    pub box_box: Material,
    pub circle_box: Material,
    /// Sequential impulse passes inside a single box-box resolution
    pub box_box_iterations: u32,
    /// Distance above the ground at which a box corner counts as touching
    pub box_ground_epsilon: f32,
    /// Circles touching the ground have their spin clamped to this magnitude
    pub max_angular_velocity: f32,
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), PhysicsError> {
        if self.substeps == 0 {
            return Err(PhysicsError::InvalidConfig("substeps must be at least 1".into()));
        }
        if self.iterations == 0 {
            return Err(PhysicsError::InvalidConfig("iterations must be at least 1".into()));
        }
        if self.box_box_iterations == 0 {
            return Err(PhysicsError::InvalidConfig(
                "box_box_iterations must be at least 1".into(),
            ));
        }
        if !self.gravity.is_finite() {
            return Err(PhysicsError::InvalidConfig(format!(
                "gravity must be finite, got {}",
                self.gravity
            )));
        }
        if self.ground_y.is_some_and(|y| !y.is_finite()) {
            return Err(PhysicsError::InvalidConfig("ground_y must be finite".into()));
        }
        if self.max_angular_velocity.is_nan() || self.max_angular_velocity < 0.0 {
            return Err(PhysicsError::InvalidConfig(
                "max_angular_velocity must be non-negative".into(),
            ));
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravity: Vec2::new(0.0, -9.81),
            substeps: 8,
            iterations: 10,
            ground_y: Some(-3.0),
            circle_ground: Material::new(0.3, 0.6),
            box_ground: Material::new(0.2, 0.8),
            circle_circle: Material::new(0.6, 0.5),
            box_box: Material::new(0.3, 0.5),
            circle_box: Material::new(0.3, 0.5),
            box_box_iterations: 5,
            box_ground_epsilon: 0.05,
            max_angular_velocity: 50.0,
        }
    }
}
