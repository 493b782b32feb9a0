use super::skeleton::{Bone, Skeleton};
use crate::math::Frame;
use crate::pose::Pose;
use crate::rig::{JointKey, GROUND_ANCHOR, HIERARCHY, ROOT_DROP};
use glam::Vec2;

/// Computes world-space joints and bones for `pose`.
///
/// The ground marker sits at `GROUND_ANCHOR + offset` and the root a fixed
/// distance above it, independent of any joint angle. Every other joint is
/// placed by composing its local angle onto the parent frame and stepping
/// along the segment.
pub fn compute_skeleton(pose: &Pose) -> Skeleton {
    let mut skeleton = Skeleton::default();
    let mut frames = [Frame::IDENTITY; JointKey::COUNT];

    for def in HIERARCHY.iter() {
        let (frame, bone) = match def.parent {
            None => {
                let frame = Frame::new(GROUND_ANCHOR + pose.offset, pose.ground_tilt);
                let marker = Bone {
                    key: def.key,
                    start: frame.position,
                    end: frame.position,
                    width: def.width,
                    world_angle: frame.angle,
                };
                (frame, Some(marker))
            }
            Some(parent) if !def.key.has_segment() => {
                let ground = frames[parent.index()];
                let frame = Frame::new(ground.position - Vec2::new(0.0, ROOT_DROP), ground.angle);
                (frame, None)
            }
            Some(parent) => {
                let parent_frame = frames[parent.index()];
                let rotated = parent_frame.rotated(pose.local_angle(def.key));
                let end = rotated.step(def.axis, def.length);
                let bone = Bone {
                    key: def.key,
                    start: parent_frame.position,
                    end,
                    width: def.width,
                    world_angle: rotated.angle,
                };
                (Frame::new(end, rotated.angle), Some(bone))
            }
        };

        frames[def.key.index()] = frame;
        skeleton.push(def.key, frame.position, bone);
    }

    skeleton
}

/// World orientation of `key`'s own frame: `groundTilt` plus every local
/// angle from the root down to and including `key`.
pub fn world_angle(key: JointKey, pose: &Pose) -> f32 {
    match key.parent() {
        None => pose.local_angle(key),
        Some(parent) => world_angle(parent, pose) + pose.local_angle(key),
    }
}

/// World orientation of the frame `key` is measured in.
///
/// Subtracting this from a desired world angle yields the local angle to
/// store in the pose. The ground marker and the root both report
/// `groundTilt`.
pub fn parent_world_angle(key: JointKey, pose: &Pose) -> f32 {
    match key.parent() {
        None => pose.ground_tilt,
        Some(parent) => world_angle(parent, pose),
    }
}

/// Name-based variant of [`parent_world_angle`] for callers holding joint
/// names from the wire format. Unknown names yield `None`.
pub fn parent_world_angle_by_name(name: &str, pose: &Pose) -> Option<f32> {
    match name.parse::<JointKey>() {
        Ok(key) => Some(parent_world_angle(key, pose)),
        Err(err) => {
            log::debug!("parent_world_angle: {}", err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rig::{ANKLE_HEIGHT, LEG_STACK};

    fn sample_pose() -> Pose {
        let mut pose = Pose::default();
        pose.ground_tilt = 0.15;
        pose.offset = Vec2::new(-20.0, 5.0);
        pose.torso = 0.2;
        pose.waist = -0.1;
        pose.head = 0.3;
        pose.left.elbow = -0.7;
        pose.right.elbow = 0.4;
        pose.left.knee = 0.5;
        pose.right.hip = 1.2;
        pose
    }

    #[test]
    fn deterministic() {
        let pose = sample_pose();
        assert_eq!(compute_skeleton(&pose), compute_skeleton(&pose));
    }

    #[test]
    fn bone_angles_compose_local_angles() {
        let pose = sample_pose();
        let skeleton = compute_skeleton(&pose);

        let elbow = skeleton.bone(JointKey::LeftElbow).unwrap();
        let expected = pose.ground_tilt + pose.torso + pose.left.shoulder + pose.left.elbow;
        assert!((elbow.world_angle - expected).abs() < 1e-5);

        for bone in skeleton.bones() {
            let composed = parent_world_angle(bone.key, &pose) + pose.local_angle(bone.key);
            assert!(
                (bone.world_angle - composed).abs() < 1e-5,
                "{}: {} vs {}",
                bone.key,
                bone.world_angle,
                composed
            );
        }
    }

    #[test]
    fn bone_lengths_match_hierarchy() {
        let skeleton = compute_skeleton(&sample_pose());
        for bone in skeleton.bones() {
            assert!((bone.length() - bone.key.def().length).abs() < 1e-3);
        }
    }

    #[test]
    fn ground_marker_is_zero_length_and_root_sits_above_it() {
        let pose = sample_pose();
        let skeleton = compute_skeleton(&pose);
        let marker = skeleton.bone(JointKey::Ground).unwrap();
        assert_eq!(marker.start, marker.end);
        assert_eq!(marker.world_angle, pose.ground_tilt);
        assert_eq!(skeleton.joint(JointKey::Ground), Some(GROUND_ANCHOR + pose.offset));

        let root = skeleton.joint(JointKey::Root).unwrap();
        assert!((root - (GROUND_ANCHOR + pose.offset - Vec2::new(0.0, ROOT_DROP))).length() < 1e-4);
        assert!(skeleton.bone(JointKey::Root).is_none());
    }

    #[test]
    fn rest_pose_stands_on_ankles() {
        let skeleton = compute_skeleton(&Pose::default());
        let root = skeleton.joint(JointKey::Root).unwrap();
        for key in [JointKey::LeftKnee, JointKey::RightKnee] {
            let ankle = skeleton.joint(key).unwrap();
            assert!((ankle.y - (root.y + LEG_STACK)).abs() < 1e-3);
            assert!((ankle.y - (GROUND_ANCHOR.y - ANKLE_HEIGHT)).abs() < 1e-3);
        }
        let neck = skeleton.joint(JointKey::Torso).unwrap();
        assert!(neck.y < root.y);
    }

    #[test]
    fn rest_pose_hands_point_apart() {
        let skeleton = compute_skeleton(&Pose::default());
        let left = skeleton.bone(JointKey::LeftHand).unwrap().direction();
        let right = skeleton.bone(JointKey::RightHand).unwrap().direction();
        assert!(left.x < -0.99);
        assert!(right.x > 0.99);
    }

    #[test]
    fn parent_world_angle_sums_ancestors() {
        let pose = sample_pose();
        assert_eq!(parent_world_angle(JointKey::Root, &pose), pose.ground_tilt);
        assert_eq!(parent_world_angle(JointKey::Ground, &pose), pose.ground_tilt);

        let knee_parent = parent_world_angle(JointKey::LeftKnee, &pose);
        let expected = pose.ground_tilt + pose.waist + pose.left.hip;
        assert!((knee_parent - expected).abs() < 1e-6);
    }

    #[test]
    fn unknown_name_is_unresolvable() {
        let pose = Pose::default();
        assert!(parent_world_angle_by_name("left.wing", &pose).is_none());
        assert_eq!(
            parent_world_angle_by_name("right.hand", &pose),
            Some(parent_world_angle(JointKey::RightHand, &pose))
        );
    }
}
