//! Pose editing
//!
//! The conversions an editor performs on top of forward and inverse
//! kinematics: a desired world direction is turned back into a local angle
//! through [`parent_world_angle`], then clamped by the joint's constraint.
//! Every operation returns a new pose, or `None` when the edit does not apply
//! to the joint and should be skipped.

use crate::ik::{solve_fabrik, JointConstraints, DEFAULT_ITERATIONS, DEFAULT_TOLERANCE};
use crate::kinematics::{compute_skeleton, parent_world_angle};
use crate::math::{direction_angle, unwrap_near};
use crate::pose::Pose;
use crate::rig::{JointKey, LimbJoint};
use glam::Vec2;

/// Points the bone ending at `key` toward `point`.
pub fn aim_joint(
    pose: &Pose,
    key: JointKey,
    point: Vec2,
    constraints: &JointConstraints,
) -> Option<Pose> {
    if !key.has_segment() {
        return None;
    }

    let skeleton = compute_skeleton(pose);
    let start = skeleton.bone(key)?.start;
    if (point - start).length_squared() < 1e-8 {
        return None;
    }

    let world = direction_angle(start, point) - key.def().axis;
    let mut edited = *pose;
    set_world_angle(&mut edited, key, world, constraints);
    Some(edited)
}

/// Adds `delta` to the local angle of `key`. Rotating the ground marker tilts
/// the whole rig.
pub fn rotate_joint(
    pose: &Pose,
    key: JointKey,
    delta: f32,
    constraints: &JointConstraints,
) -> Option<Pose> {
    let mut edited = *pose;
    let angle = constraints.apply(key, pose.local_angle(key) + delta);
    if !edited.set_local_angle(key, angle) {
        log::debug!("rotate_joint: {} has no angle of its own", key);
        return None;
    }
    Some(edited)
}

/// Translates the rig by `delta`.
pub fn drag_ground(pose: &Pose, delta: Vec2) -> Pose {
    Pose {
        offset: pose.offset + delta,
        ..*pose
    }
}

/// The two bones solved when `key` is dragged: upper arm and forearm for a
/// wrist or hand, thigh and shin for an ankle or foot.
pub fn ik_bones(key: JointKey) -> Option<[JointKey; 2]> {
    let (side, joint) = key.as_limb()?;
    let bones = match joint {
        LimbJoint::Elbow | LimbJoint::Hand => [LimbJoint::Shoulder, LimbJoint::Elbow],
        LimbJoint::Knee | LimbJoint::Foot => [LimbJoint::Hip, LimbJoint::Knee],
        LimbJoint::Shoulder | LimbJoint::Hip => return None,
    };
    Some(bones.map(|j| JointKey::limb(side, j)))
}

/// Drags the end of a limb chain toward `target` with FABRIK.
///
/// The chain is the parent joint of the upper bone, the upper bone's end and
/// the lower bone's end, as forward kinematics currently places them. The
/// solved positions become local angles: the upper bone against its parent
/// frame, the lower bone against the already updated upper bone.
pub fn drag_effector(
    pose: &Pose,
    key: JointKey,
    target: Vec2,
    constraints: &JointConstraints,
) -> Option<Pose> {
    let Some([upper, lower]) = ik_bones(key) else {
        log::debug!("drag_effector: {} does not end an IK chain", key);
        return None;
    };

    let skeleton = compute_skeleton(pose);
    let chain = [
        skeleton.bone(upper)?.start,
        skeleton.joint(upper)?,
        skeleton.joint(lower)?,
    ];
    let solved = solve_fabrik(chain, target, DEFAULT_ITERATIONS, DEFAULT_TOLERANCE);

    let mut edited = *pose;
    for (bone, (from, to)) in [(upper, (solved[0], solved[1])), (lower, (solved[1], solved[2]))] {
        if (to - from).length_squared() < 1e-8 {
            continue;
        }
        let world = direction_angle(from, to) - bone.def().axis;
        set_world_angle(&mut edited, bone, world, constraints);
    }
    Some(edited)
}

fn set_world_angle(pose: &mut Pose, key: JointKey, world: f32, constraints: &JointConstraints) {
    let local = unwrap_near(world - parent_world_angle(key, pose), pose.local_angle(key));
    pose.set_local_angle(key, constraints.apply(key, local));
}
