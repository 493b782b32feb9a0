//! Pose data model
//!
//! A [`Pose`] is the compact, serializable description of the figure: one
//! local rotation per joint plus a global tilt and a translation.

use crate::error::{Result, RigError};
use crate::rig::{JointKey, LimbJoint, Side};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_2, PI};
use std::path::Path;

/// Local rotations of one arm and one leg.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LimbPose {
    pub shoulder: f32,
    pub elbow: f32,
    pub hand: f32,
    pub hip: f32,
    pub knee: f32,
    pub foot: f32,
}

impl LimbPose {
    pub fn get(&self, joint: LimbJoint) -> f32 {
        match joint {
            LimbJoint::Shoulder => self.shoulder,
            LimbJoint::Elbow => self.elbow,
            LimbJoint::Hand => self.hand,
            LimbJoint::Hip => self.hip,
            LimbJoint::Knee => self.knee,
            LimbJoint::Foot => self.foot,
        }
    }

    pub fn get_mut(&mut self, joint: LimbJoint) -> &mut f32 {
        match joint {
            LimbJoint::Shoulder => &mut self.shoulder,
            LimbJoint::Elbow => &mut self.elbow,
            LimbJoint::Hand => &mut self.hand,
            LimbJoint::Hip => &mut self.hip,
            LimbJoint::Knee => &mut self.knee,
            LimbJoint::Foot => &mut self.foot,
        }
    }

    pub fn zip_with(&self, other: &Self, f: impl Fn(f32, f32) -> f32) -> Self {
        Self {
            shoulder: f(self.shoulder, other.shoulder),
            elbow: f(self.elbow, other.elbow),
            hand: f(self.hand, other.hand),
            hip: f(self.hip, other.hip),
            knee: f(self.knee, other.knee),
            foot: f(self.foot, other.foot),
        }
    }
}

/// Complete figure configuration. All angles are radians, local to the
/// parent joint's frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pose {
    pub ground_tilt: f32,
    #[serde(with = "crate::math::vec2_xy")]
    pub offset: Vec2,
    pub torso: f32,
    pub waist: f32,
    pub head: f32,
    pub left: LimbPose,
    pub right: LimbPose,
}

impl Default for Pose {
    /// Rest pose: upright, arms out to the sides, legs straight, feet forward.
    fn default() -> Self {
        Self {
            ground_tilt: 0.0,
            offset: Vec2::ZERO,
            torso: 0.0,
            waist: 0.0,
            head: 0.0,
            left: LimbPose {
                shoulder: PI,
                hip: FRAC_PI_2,
                foot: -FRAC_PI_2,
                ..LimbPose::default()
            },
            right: LimbPose {
                shoulder: 0.0,
                hip: FRAC_PI_2,
                foot: -FRAC_PI_2,
                ..LimbPose::default()
            },
        }
    }
}

impl Pose {
    pub fn limb(&self, side: Side) -> &LimbPose {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn limb_mut(&mut self, side: Side) -> &mut LimbPose {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Local rotation stored for `key`. The ground marker carries the global
    /// tilt; the root has no rotation of its own.
    pub fn local_angle(&self, key: JointKey) -> f32 {
        match key {
            JointKey::Ground => self.ground_tilt,
            JointKey::Root => 0.0,
            JointKey::Torso => self.torso,
            JointKey::Waist => self.waist,
            JointKey::Head => self.head,
            _ => match key.as_limb() {
                Some((side, joint)) => self.limb(side).get(joint),
                None => 0.0,
            },
        }
    }

    /// Writes the local rotation for `key`. Returns `false` for the root,
    /// which has no angle field.
    pub fn set_local_angle(&mut self, key: JointKey, angle: f32) -> bool {
        let slot = match key {
            JointKey::Ground => &mut self.ground_tilt,
            JointKey::Root => return false,
            JointKey::Torso => &mut self.torso,
            JointKey::Waist => &mut self.waist,
            JointKey::Head => &mut self.head,
            _ => match key.as_limb() {
                Some((side, joint)) => self.limb_mut(side).get_mut(joint),
                None => return false,
            },
        };
        *slot = angle;
        true
    }

    /// Combines two poses field by field. `offset` is combined per component.
    pub fn zip_with(&self, other: &Self, f: impl Fn(f32, f32) -> f32) -> Self {
        Self {
            ground_tilt: f(self.ground_tilt, other.ground_tilt),
            offset: Vec2::new(
                f(self.offset.x, other.offset.x),
                f(self.offset.y, other.offset.y),
            ),
            torso: f(self.torso, other.torso),
            waist: f(self.waist, other.waist),
            head: f(self.head, other.head),
            left: self.left.zip_with(&other.left, &f),
            right: self.right.zip_with(&other.right, &f),
        }
    }

    pub fn map(&self, f: impl Fn(f32) -> f32) -> Self {
        self.zip_with(self, |a, _| f(a))
    }

    /// Every numeric field with its serialized name.
    pub fn fields(&self) -> [(&'static str, f32); 18] {
        [
            ("groundTilt", self.ground_tilt),
            ("offset.x", self.offset.x),
            ("offset.y", self.offset.y),
            ("torso", self.torso),
            ("waist", self.waist),
            ("head", self.head),
            ("left.shoulder", self.left.shoulder),
            ("left.elbow", self.left.elbow),
            ("left.hand", self.left.hand),
            ("left.hip", self.left.hip),
            ("left.knee", self.left.knee),
            ("left.foot", self.left.foot),
            ("right.shoulder", self.right.shoulder),
            ("right.elbow", self.right.elbow),
            ("right.hand", self.right.hand),
            ("right.hip", self.right.hip),
            ("right.knee", self.right.knee),
            ("right.foot", self.right.foot),
        ]
    }

    pub fn validate(&self) -> Result<()> {
        match self.fields().into_iter().find(|(_, v)| !v.is_finite()) {
            Some((field, _)) => Err(RigError::NonFinite { field }),
            None => Ok(()),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let pose: Pose = serde_json::from_str(json)?;
        pose.validate()?;
        Ok(pose)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rest_pose_has_opposite_shoulders() {
        let pose = Pose::default();
        assert_eq!(pose.left.shoulder, PI);
        assert_eq!(pose.right.shoulder, 0.0);
    }

    #[test]
    fn local_angle_reads_and_writes_every_joint() {
        let mut pose = Pose::default();
        for (i, key) in JointKey::ALL.iter().enumerate() {
            let value = i as f32 * 0.1;
            let written = pose.set_local_angle(*key, value);
            if *key == JointKey::Root {
                assert!(!written);
                assert_eq!(pose.local_angle(*key), 0.0);
            } else {
                assert!(written);
                assert_eq!(pose.local_angle(*key), value);
            }
        }
        assert_eq!(pose.ground_tilt, 0.0);
        assert!((pose.right.foot - 1.6).abs() < 1e-6);
    }

    #[test]
    fn json_shape_matches_wire_format() {
        let pose = Pose {
            offset: Vec2::new(3.0, -4.0),
            ..Pose::default()
        };
        let value: serde_json::Value = serde_json::to_value(pose).unwrap();
        assert_eq!(value["offset"]["x"], 3.0);
        assert_eq!(value["offset"]["y"], -4.0);
        assert!(value.get("groundTilt").is_some());
        assert!(value["left"].get("shoulder").is_some());

        let back = Pose::from_json(&serde_json::to_string(&pose).unwrap()).unwrap();
        assert_eq!(back, pose);
    }

    #[test]
    fn validate_rejects_non_finite_fields() {
        let mut pose = Pose::default();
        pose.right.knee = f32::NAN;
        match pose.validate() {
            Err(RigError::NonFinite { field }) => assert_eq!(field, "right.knee"),
            other => panic!("expected NonFinite, got {:?}", other),
        }
    }

    #[test]
    fn zip_with_touches_every_field() {
        let a = Pose::default().map(|_| 1.0);
        let b = Pose::default().map(|_| 2.0);
        let sum = a.zip_with(&b, |x, y| x + y);
        assert!(sum.fields().iter().all(|(_, v)| *v == 3.0));
    }
}
