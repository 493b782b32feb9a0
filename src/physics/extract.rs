use super::body::PhysicsBody;
use crate::math::{circular_mean, direction_angle, unwrap_near};
use crate::pose::{LimbPose, Pose};
use crate::rig::{JointKey, LimbJoint, Side, GROUND_ANCHOR, ROOT_DROP};
use glam::Vec2;

/// Segments shorter than this carry no usable direction.
const MIN_SEGMENT: f32 = 1e-4;

/// Reads a pose back out of the particle positions.
///
/// Each joint's world angle is the direction from its parent particle, less
/// the segment's rest axis; the local angle is that minus the parent's world
/// angle, wound to lie nearest the value in `previous` so angles do not jump
/// by 2π between frames. The root has no parent direction of its own: its
/// tilt is the circular mean of what the torso and waist directions imply
/// once `previous`'s trunk angles are taken out. The offset undoes the fixed
/// drop forward kinematics places between the ground marker and the root.
///
/// Joints whose particles are missing or collapsed keep their previous
/// angle.
pub fn extract_pose(body: &PhysicsBody, previous: &Pose) -> Pose {
    let Some(root) = body.position(JointKey::Root) else {
        return *previous;
    };

    let implied_tilts: Vec<f32> = [JointKey::Torso, JointKey::Waist]
        .into_iter()
        .filter_map(|key| {
            let world = segment_world_angle(body, root, key)?;
            Some(world - previous.local_angle(key))
        })
        .collect();
    let ground_tilt = circular_mean(&implied_tilts)
        .map_or(previous.ground_tilt, |tilt| unwrap_near(tilt, previous.ground_tilt));

    let mut world = [0.0f32; JointKey::COUNT];
    let mut local = [0.0f32; JointKey::COUNT];
    world[JointKey::Ground.index()] = ground_tilt;
    world[JointKey::Root.index()] = ground_tilt;
    walk(body, previous, JointKey::Root, &mut world, &mut local);

    let angle = |key: JointKey| local[key.index()];
    let limb = |side: Side| LimbPose {
        shoulder: angle(JointKey::limb(side, LimbJoint::Shoulder)),
        elbow: angle(JointKey::limb(side, LimbJoint::Elbow)),
        hand: angle(JointKey::limb(side, LimbJoint::Hand)),
        hip: angle(JointKey::limb(side, LimbJoint::Hip)),
        knee: angle(JointKey::limb(side, LimbJoint::Knee)),
        foot: angle(JointKey::limb(side, LimbJoint::Foot)),
    };

    Pose {
        ground_tilt,
        offset: root + Vec2::new(0.0, ROOT_DROP) - GROUND_ANCHOR,
        torso: angle(JointKey::Torso),
        waist: angle(JointKey::Waist),
        head: angle(JointKey::Head),
        left: limb(Side::Left),
        right: limb(Side::Right),
    }
}

/// Same as [`extract_pose`].
pub fn extract_pose_from_physics_body(body: &PhysicsBody, previous: &Pose) -> Pose {
    extract_pose(body, previous)
}

fn segment_world_angle(body: &PhysicsBody, from: Vec2, key: JointKey) -> Option<f32> {
    let to = body.position(key)?;
    if (to - from).length() < MIN_SEGMENT {
        return None;
    }
    Some(direction_angle(from, to) - key.def().axis)
}

fn walk(
    body: &PhysicsBody,
    previous: &Pose,
    parent: JointKey,
    world: &mut [f32; JointKey::COUNT],
    local: &mut [f32; JointKey::COUNT],
) {
    let parent_world = world[parent.index()];
    let parent_position = body.position(parent);

    for child in parent.children() {
        let prior = previous.local_angle(child);
        let angle = parent_position
            .and_then(|from| segment_world_angle(body, from, child))
            .map_or(prior, |w| unwrap_near(w - parent_world, prior));

        local[child.index()] = angle;
        world[child.index()] = parent_world + angle;
        walk(body, previous, child, world, local);
    }
}
