//! Forward kinematics
//!
//! Turns a [`Pose`](crate::Pose) into world-space joint positions and bone
//! segments, and exposes the frame lookups editing code needs to turn world
//! directions back into local angles.

mod forward;
mod skeleton;

pub use forward::{compute_skeleton, parent_world_angle, parent_world_angle_by_name, world_angle};
pub use skeleton::{Bone, Skeleton};
