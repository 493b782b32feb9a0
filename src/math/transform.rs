use glam::Vec2;

/// A 2D frame: an origin and a world orientation.
///
/// The hierarchy walk composes frames by adding local angles to the parent's
/// orientation and stepping along the resulting direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub position: Vec2,
    pub angle: f32,
}

impl Default for Frame {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Frame {
    pub const IDENTITY: Self = Self {
        position: Vec2::ZERO,
        angle: 0.0,
    };

    pub fn new(position: Vec2, angle: f32) -> Self {
        Self { position, angle }
    }

    /// Same origin, orientation advanced by `local_angle`.
    pub fn rotated(&self, local_angle: f32) -> Self {
        Self {
            position: self.position,
            angle: self.angle + local_angle,
        }
    }

    /// End point of a segment of `length` leaving the origin at `angle + axis`.
    pub fn step(&self, axis: f32, length: f32) -> Vec2 {
        self.position + Vec2::from_angle(self.angle + axis) * length
    }
}
