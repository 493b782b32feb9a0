//! Ragdoll physics
//!
//! The figure as Verlet particles joined by distance constraints. Each step
//! integrates gravity plus an optional PD pull toward a target skeleton,
//! relaxes the constraints a fixed number of times and resolves ground and
//! bounds contact. [`extract_pose`] reads the result back into a pose.

mod body;
mod collision;
mod config;
mod driver;
mod extract;
mod step;

pub use body::{create_physics_body_from_pose, DistanceConstraint, Particle, PhysicsBody};
pub use collision::CollisionResponse;
pub use config::PhysicsConfig;
pub use driver::RagdollDriver;
pub use extract::{extract_pose, extract_pose_from_physics_body};
pub use step::step_physics;
