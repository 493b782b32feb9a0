//! Static figure description
//!
//! The joint tree, segment dimensions and the anchoring constants shared by
//! forward kinematics and the physics body.

pub mod hierarchy;
pub mod joint;

pub use hierarchy::{JointDef, ANKLE_HEIGHT, GROUND_ANCHOR, HIERARCHY, LEG_STACK, ROOT_DROP};
pub use joint::{JointKey, LimbJoint, Side};
