use crate::error::RigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which half of the figure a limb belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];
}

/// The six joints of a limb record, arm chain first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LimbJoint {
    Shoulder,
    Elbow,
    Hand,
    Hip,
    Knee,
    Foot,
}

/// Identifies every joint of the figure.
///
/// A joint key also names the bone that ends at that joint, so `LeftElbow` is
/// both the wrist position and the forearm segment. Variants are ordered
/// parents before children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum JointKey {
    #[serde(rename = "ground")]
    Ground = 0,
    #[serde(rename = "root")]
    Root = 1,
    #[serde(rename = "torso")]
    Torso = 2,
    #[serde(rename = "head")]
    Head = 3,
    #[serde(rename = "left.shoulder")]
    LeftShoulder = 4,
    #[serde(rename = "left.elbow")]
    LeftElbow = 5,
    #[serde(rename = "left.hand")]
    LeftHand = 6,
    #[serde(rename = "right.shoulder")]
    RightShoulder = 7,
    #[serde(rename = "right.elbow")]
    RightElbow = 8,
    #[serde(rename = "right.hand")]
    RightHand = 9,
    #[serde(rename = "waist")]
    Waist = 10,
    #[serde(rename = "left.hip")]
    LeftHip = 11,
    #[serde(rename = "left.knee")]
    LeftKnee = 12,
    #[serde(rename = "left.foot")]
    LeftFoot = 13,
    #[serde(rename = "right.hip")]
    RightHip = 14,
    #[serde(rename = "right.knee")]
    RightKnee = 15,
    #[serde(rename = "right.foot")]
    RightFoot = 16,
}

impl JointKey {
    pub const COUNT: usize = 17;

    /// All keys in topological order (parents before children).
    pub const ALL: [JointKey; Self::COUNT] = [
        JointKey::Ground,
        JointKey::Root,
        JointKey::Torso,
        JointKey::Head,
        JointKey::LeftShoulder,
        JointKey::LeftElbow,
        JointKey::LeftHand,
        JointKey::RightShoulder,
        JointKey::RightElbow,
        JointKey::RightHand,
        JointKey::Waist,
        JointKey::LeftHip,
        JointKey::LeftKnee,
        JointKey::LeftFoot,
        JointKey::RightHip,
        JointKey::RightKnee,
        JointKey::RightFoot,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            JointKey::Ground => "ground",
            JointKey::Root => "root",
            JointKey::Torso => "torso",
            JointKey::Head => "head",
            JointKey::LeftShoulder => "left.shoulder",
            JointKey::LeftElbow => "left.elbow",
            JointKey::LeftHand => "left.hand",
            JointKey::RightShoulder => "right.shoulder",
            JointKey::RightElbow => "right.elbow",
            JointKey::RightHand => "right.hand",
            JointKey::Waist => "waist",
            JointKey::LeftHip => "left.hip",
            JointKey::LeftKnee => "left.knee",
            JointKey::LeftFoot => "left.foot",
            JointKey::RightHip => "right.hip",
            JointKey::RightKnee => "right.knee",
            JointKey::RightFoot => "right.foot",
        }
    }

    pub const fn limb(side: Side, joint: LimbJoint) -> JointKey {
        match (side, joint) {
            (Side::Left, LimbJoint::Shoulder) => JointKey::LeftShoulder,
            (Side::Left, LimbJoint::Elbow) => JointKey::LeftElbow,
            (Side::Left, LimbJoint::Hand) => JointKey::LeftHand,
            (Side::Left, LimbJoint::Hip) => JointKey::LeftHip,
            (Side::Left, LimbJoint::Knee) => JointKey::LeftKnee,
            (Side::Left, LimbJoint::Foot) => JointKey::LeftFoot,
            (Side::Right, LimbJoint::Shoulder) => JointKey::RightShoulder,
            (Side::Right, LimbJoint::Elbow) => JointKey::RightElbow,
            (Side::Right, LimbJoint::Hand) => JointKey::RightHand,
            (Side::Right, LimbJoint::Hip) => JointKey::RightHip,
            (Side::Right, LimbJoint::Knee) => JointKey::RightKnee,
            (Side::Right, LimbJoint::Foot) => JointKey::RightFoot,
        }
    }

    /// Splits a limb key into its side and limb joint. Trunk keys return `None`.
    pub const fn as_limb(self) -> Option<(Side, LimbJoint)> {
        let pair = match self {
            JointKey::LeftShoulder => (Side::Left, LimbJoint::Shoulder),
            JointKey::LeftElbow => (Side::Left, LimbJoint::Elbow),
            JointKey::LeftHand => (Side::Left, LimbJoint::Hand),
            JointKey::LeftHip => (Side::Left, LimbJoint::Hip),
            JointKey::LeftKnee => (Side::Left, LimbJoint::Knee),
            JointKey::LeftFoot => (Side::Left, LimbJoint::Foot),
            JointKey::RightShoulder => (Side::Right, LimbJoint::Shoulder),
            JointKey::RightElbow => (Side::Right, LimbJoint::Elbow),
            JointKey::RightHand => (Side::Right, LimbJoint::Hand),
            JointKey::RightHip => (Side::Right, LimbJoint::Hip),
            JointKey::RightKnee => (Side::Right, LimbJoint::Knee),
            JointKey::RightFoot => (Side::Right, LimbJoint::Foot),
            _ => return None,
        };
        Some(pair)
    }

    pub fn is_foot(self) -> bool {
        matches!(self, JointKey::LeftFoot | JointKey::RightFoot)
    }

    pub fn is_hand(self) -> bool {
        matches!(self, JointKey::LeftHand | JointKey::RightHand)
    }
}

impl fmt::Display for JointKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JointKey {
    type Err = RigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JointKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| RigError::UnknownJoint(s.to_string()))
    }
}
