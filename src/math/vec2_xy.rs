//! Serde adapter that writes a `Vec2` as `{"x": .., "y": ..}`.
//!
//! Use with `#[serde(with = "crate::math::vec2_xy")]`.

use glam::Vec2;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Serialize, Deserialize)]
struct Xy {
    x: f32,
    y: f32,
}

impl From<Vec2> for Xy {
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

/// Serializable borrowed view, for use inside hand-written `Serialize` impls.
pub struct AsXy(pub Vec2);

impl Serialize for AsXy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Xy::from(self.0).serialize(serializer)
    }
}

pub fn serialize<S: Serializer>(value: &Vec2, serializer: S) -> Result<S::Ok, S::Error> {
    Xy::from(*value).serialize(serializer)
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec2, D::Error> {
    let xy = Xy::deserialize(deserializer)?;
    Ok(Vec2::new(xy.x, xy.y))
}
