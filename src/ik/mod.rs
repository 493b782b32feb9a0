//! Inverse Kinematics module
//!
//! FABRIK solver over point chains plus the per-joint angle constraints the
//! edit operations clamp against.

pub mod chain;
pub mod constraint;
pub mod solver;

pub use chain::{Chain, ChainBuilder};
pub use constraint::{AngleRange, Constraint, JointConstraints, NoConstraint};
pub use solver::{solve_fabrik, solve_fabrik_default, FabrikSolver, SolveResult};

pub const DEFAULT_ITERATIONS: u32 = 10;
pub const DEFAULT_TOLERANCE: f32 = 0.1;
