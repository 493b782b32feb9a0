//! # puppet-rig
//!
//! Kinematics and physics for posing an articulated 2D figure.
//!
//! ## Features
//! - Forward kinematics from a compact [`Pose`] to a world-space [`Skeleton`]
//! - FABRIK (Forward And Backward Reaching Inverse Kinematics) chain solver
//! - Pose editing helpers: aim, rotate and IK-drag with per-joint angle limits
//! - Ragdoll physics: Verlet particles, distance constraints, ground contact
//!   and a PD controller that steers the body toward the animator's pose
//! - Eased keyframe interpolation and per-frame smoothing of poses
//!
//! ## Example
//! ```rust,ignore
//! use puppet_rig::{compute_skeleton, Pose, PhysicsConfig, RagdollDriver};
//!
//! let pose = Pose::default();
//! let skeleton = compute_skeleton(&pose);
//! println!("left hand at {:?}", skeleton.joint(puppet_rig::JointKey::LeftHand));
//!
//! let mut driver = RagdollDriver::new(PhysicsConfig::default());
//! driver.set_enabled(true, &pose);
//! for _ in 0..60 {
//!     let simulated = driver.tick(1.0 / 60.0, &pose);
//!     println!("tilt {:.3}", simulated.ground_tilt);
//! }
//! ```

pub mod animation;
pub mod edit;
pub mod error;
pub mod ik;
pub mod kinematics;
pub mod math;
pub mod physics;
pub mod pose;
pub mod rig;

pub use animation::{approach_pose, interpolate_pose, Easing};
pub use edit::{aim_joint, drag_effector, drag_ground, rotate_joint};
pub use error::{Result, RigError};
pub use ik::{
    solve_fabrik, AngleRange, Chain, ChainBuilder, Constraint, FabrikSolver, JointConstraints,
    SolveResult,
};
pub use kinematics::{
    compute_skeleton, parent_world_angle, parent_world_angle_by_name, world_angle, Bone, Skeleton,
};
pub use math::Frame;
pub use physics::{
    create_physics_body_from_pose, extract_pose, extract_pose_from_physics_body, step_physics,
    PhysicsBody, PhysicsConfig, RagdollDriver,
};
pub use pose::{LimbPose, Pose};
pub use rig::{JointKey, Side};
