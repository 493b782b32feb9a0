//! Joint tree and segment dimensions.
//!
//! Screen space: x grows to the right, y grows downward, angles are radians
//! measured from +x toward +y.

use super::joint::JointKey;
use glam::Vec2;
use std::f32::consts::FRAC_PI_2;

// --- Segment lengths (pixels) ---

pub const TORSO_LENGTH: f32 = 60.0;
pub const WAIST_LENGTH: f32 = 20.0;
pub const HEAD_LENGTH: f32 = 30.0;
pub const UPPER_ARM_LENGTH: f32 = 40.0;
pub const FOREARM_LENGTH: f32 = 38.0;
pub const HAND_LENGTH: f32 = 12.0;
pub const THIGH_LENGTH: f32 = 50.0;
pub const SHIN_LENGTH: f32 = 48.0;
pub const FOOT_LENGTH: f32 = 16.0;

/// Where the ground marker sits when the pose offset is zero.
pub const GROUND_ANCHOR: Vec2 = Vec2::new(400.0, 430.0);

/// Vertical distance between the ankle joints and the ground marker.
pub const ANKLE_HEIGHT: f32 = 12.0;

/// Vertical extent of the waist and a straight leg.
pub const LEG_STACK: f32 = WAIST_LENGTH + THIGH_LENGTH + SHIN_LENGTH;

/// How far the root sits above the ground marker.
pub const ROOT_DROP: f32 = ANKLE_HEIGHT + LEG_STACK;

/// Static joint definition.
#[derive(Debug, Clone, Copy)]
pub struct JointDef {
    pub key: JointKey,
    /// Parent joint (None for the ground marker)
    pub parent: Option<JointKey>,
    /// Distance from the parent joint
    pub length: f32,
    /// Draw width of the bone ending at this joint
    pub width: f32,
    /// Direction of the segment within the joint's own frame.
    ///
    /// Trunk segments run across their frame so a zero angle keeps the figure
    /// upright; limbs run along it.
    pub axis: f32,
}

const fn def(
    key: JointKey,
    parent: Option<JointKey>,
    length: f32,
    width: f32,
    axis: f32,
) -> JointDef {
    JointDef {
        key,
        parent,
        length,
        width,
        axis,
    }
}

/// The figure, indexed by [`JointKey::index`].
pub static HIERARCHY: [JointDef; JointKey::COUNT] = [
    def(JointKey::Ground, None, 0.0, 0.0, 0.0),
    def(JointKey::Root, Some(JointKey::Ground), 0.0, 0.0, 0.0),
    def(JointKey::Torso, Some(JointKey::Root), TORSO_LENGTH, 18.0, -FRAC_PI_2),
    def(JointKey::Head, Some(JointKey::Torso), HEAD_LENGTH, 22.0, -FRAC_PI_2),
    def(JointKey::LeftShoulder, Some(JointKey::Torso), UPPER_ARM_LENGTH, 10.0, 0.0),
    def(JointKey::LeftElbow, Some(JointKey::LeftShoulder), FOREARM_LENGTH, 8.0, 0.0),
    def(JointKey::LeftHand, Some(JointKey::LeftElbow), HAND_LENGTH, 6.0, 0.0),
    def(JointKey::RightShoulder, Some(JointKey::Torso), UPPER_ARM_LENGTH, 10.0, 0.0),
    def(JointKey::RightElbow, Some(JointKey::RightShoulder), FOREARM_LENGTH, 8.0, 0.0),
    def(JointKey::RightHand, Some(JointKey::RightElbow), HAND_LENGTH, 6.0, 0.0),
    def(JointKey::Waist, Some(JointKey::Root), WAIST_LENGTH, 16.0, FRAC_PI_2),
    def(JointKey::LeftHip, Some(JointKey::Waist), THIGH_LENGTH, 12.0, 0.0),
    def(JointKey::LeftKnee, Some(JointKey::LeftHip), SHIN_LENGTH, 10.0, 0.0),
    def(JointKey::LeftFoot, Some(JointKey::LeftKnee), FOOT_LENGTH, 6.0, 0.0),
    def(JointKey::RightHip, Some(JointKey::Waist), THIGH_LENGTH, 12.0, 0.0),
    def(JointKey::RightKnee, Some(JointKey::RightHip), SHIN_LENGTH, 10.0, 0.0),
    def(JointKey::RightFoot, Some(JointKey::RightKnee), FOOT_LENGTH, 6.0, 0.0),
];

impl JointKey {
    pub fn def(self) -> &'static JointDef {
        &HIERARCHY[self.index()]
    }

    pub fn parent(self) -> Option<JointKey> {
        self.def().parent
    }

    /// Direct children, in topological order.
    pub fn children(self) -> impl Iterator<Item = JointKey> {
        HIERARCHY
            .iter()
            .filter(move |d| d.parent == Some(self))
            .map(|d| d.key)
    }

    /// Whether the joint ends a visible segment. The ground marker and the
    /// root are positioned directly rather than by a segment.
    pub fn has_segment(self) -> bool {
        !matches!(self, JointKey::Ground | JointKey::Root)
    }
}
