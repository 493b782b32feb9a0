//! Math utilities module
//!
//! Provides convenient re-exports from glam, a 2D rotation frame used by the
//! kinematics walk, and angle helpers shared by IK, physics and editing.

mod angle;
mod transform;
pub mod vec2_xy;

pub use angle::{circular_mean, direction_angle, normalize_angle, unwrap_near};
pub use transform::Frame;

// Re-export commonly used glam types
pub use glam::Vec2;
