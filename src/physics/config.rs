use crate::error::Result;
use crate::rig::{JointKey, ANKLE_HEIGHT, GROUND_ANCHOR};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tuning for the ragdoll simulation.
///
/// Defaults are the tuned values the editor ships with; every field can be
/// overridden from JSON, missing fields keep their default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PhysicsConfig {
    /// Acceleration applied to every movable particle (pixels/s², +y is down).
    #[serde(with = "crate::math::vec2_xy")]
    pub gravity: Vec2,
    /// Fraction of the implicit velocity kept from one step to the next.
    pub friction: f32,
    /// Proportional gain pulling particles toward the target skeleton.
    pub stiffness: f32,
    /// Derivative gain opposing the implicit per-step velocity, so the
    /// damping force is `damping * (position - previous_position) * friction`.
    pub damping: f32,
    /// Relaxation passes over the distance constraints per step.
    pub constraint_iterations: u32,
    /// Ground plane; particles may not go below (greater y than) it.
    pub ground_y: f32,
    /// Fraction of horizontal velocity kept by a particle touching the ground.
    pub ground_friction: f32,
    /// Fraction of the vertical velocity removed on ground contact. The rest
    /// keeps its sign, so a landing particle never bounces.
    pub ground_damping: f32,
    pub min_x: f32,
    pub max_x: f32,
    /// Largest time step a driver passes to the integrator.
    pub max_dt: f32,
    /// Mass of the root, torso and waist particles.
    pub core_mass: f32,
    /// Mass of the hand and foot particles.
    pub extremity_mass: f32,
    pub default_mass: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: Vec2::new(0.0, 600.0),
            friction: 0.98,
            stiffness: 400.0,
            damping: 12.0,
            constraint_iterations: 10,
            ground_y: GROUND_ANCHOR.y - ANKLE_HEIGHT,
            ground_friction: 0.8,
            ground_damping: 1.0,
            min_x: 0.0,
            max_x: 800.0,
            max_dt: 1.0 / 30.0,
            core_mass: 2.0,
            extremity_mass: 0.5,
            default_mass: 1.0,
        }
    }
}

impl PhysicsConfig {
    pub fn with_gravity(mut self, gravity: Vec2) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_gains(mut self, stiffness: f32, damping: f32) -> Self {
        self.stiffness = stiffness;
        self.damping = damping;
        self
    }

    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.constraint_iterations = iterations;
        self
    }

    pub fn with_ground(mut self, ground_y: f32) -> Self {
        self.ground_y = ground_y;
        self
    }

    pub fn with_ground_contact(mut self, friction: f32, damping: f32) -> Self {
        self.ground_friction = friction;
        self.ground_damping = damping;
        self
    }

    pub fn with_bounds(mut self, min_x: f32, max_x: f32) -> Self {
        self.min_x = min_x;
        self.max_x = max_x;
        self
    }

    pub fn with_max_dt(mut self, max_dt: f32) -> Self {
        self.max_dt = max_dt;
        self
    }

    /// Heavier trunk for stability, lighter extremities.
    pub fn mass_for(&self, key: JointKey) -> f32 {
        match key {
            JointKey::Root | JointKey::Torso | JointKey::Waist => self.core_mass,
            k if k.is_hand() || k.is_foot() => self.extremity_mass,
            _ => self.default_mass,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
