use crate::math::vec2_xy::{self, AsXy};
use crate::rig::JointKey;
use glam::Vec2;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// One drawn segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bone {
    pub key: JointKey,
    #[serde(with = "vec2_xy")]
    pub start: Vec2,
    #[serde(with = "vec2_xy")]
    pub end: Vec2,
    pub width: f32,
    pub world_angle: f32,
}

impl Bone {
    pub fn length(&self) -> f32 {
        (self.end - self.start).length()
    }

    pub fn direction(&self) -> Vec2 {
        (self.end - self.start).normalize_or_zero()
    }
}

/// World-space figure derived from a pose. Rebuilt wholesale on every query.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Skeleton {
    #[serde(serialize_with = "serialize_joints")]
    pub(crate) joints: BTreeMap<JointKey, Vec2>,
    pub(crate) bones: Vec<Bone>,
}

impl Skeleton {
    pub fn joint(&self, key: JointKey) -> Option<Vec2> {
        self.joints.get(&key).copied()
    }

    pub fn joints(&self) -> &BTreeMap<JointKey, Vec2> {
        &self.joints
    }

    pub fn bones(&self) -> &[Bone] {
        &self.bones
    }

    pub fn bone(&self, key: JointKey) -> Option<&Bone> {
        self.bones.iter().find(|b| b.key == key)
    }

    /// Drops a joint position, e.g. to leave a particle unsteered when the
    /// skeleton is used as a physics target.
    pub fn remove_joint(&mut self, key: JointKey) -> Option<Vec2> {
        self.joints.remove(&key)
    }

    pub(crate) fn push(&mut self, key: JointKey, position: Vec2, bone: Option<Bone>) {
        self.joints.insert(key, position);
        if let Some(bone) = bone {
            self.bones.push(bone);
        }
    }
}

fn serialize_joints<S: Serializer>(
    joints: &BTreeMap<JointKey, Vec2>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(joints.len()))?;
    for (key, position) in joints {
        map.serialize_entry(key.as_str(), &AsXy(*position))?;
    }
    map.end()
}
