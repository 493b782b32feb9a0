use crate::math::normalize_angle;
use crate::rig::JointKey;
use std::collections::HashMap;
use std::fmt::Debug;

/// Limits the local angle a joint may take when edited.
pub trait Constraint: Send + Sync + Debug {
    fn apply(&self, angle: f32) -> f32;
    fn clone_box(&self) -> Box<dyn Constraint>;
}

impl Clone for Box<dyn Constraint> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Inclusive `[min, max]` range in radians, compared in `[-PI, PI]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleRange {
    pub min: f32,
    pub max: f32,
}

impl AngleRange {
    /// Bounds given in either order are sorted.
    pub fn new(min_degrees: f32, max_degrees: f32) -> Self {
        Self::from_radians(min_degrees.to_radians(), max_degrees.to_radians())
    }

    pub fn from_radians(a: f32, b: f32) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn contains(&self, angle: f32) -> bool {
        let a = normalize_angle(angle);
        a >= self.min && a <= self.max
    }
}

impl Constraint for AngleRange {
    /// Angles already inside the range pass through untouched, so callers
    /// keep their winding.
    fn apply(&self, angle: f32) -> f32 {
        if self.contains(angle) {
            angle
        } else {
            normalize_angle(angle).clamp(self.min, self.max)
        }
    }

    fn clone_box(&self) -> Box<dyn Constraint> {
        Box::new(*self)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct NoConstraint;

impl Constraint for NoConstraint {
    fn apply(&self, angle: f32) -> f32 {
        angle
    }

    fn clone_box(&self) -> Box<dyn Constraint> {
        Box::new(*self)
    }
}

/// Per-joint constraints used by the edit operations. Joints without an
/// entry are unrestricted, which is also the shipped default.
#[derive(Debug, Clone, Default)]
pub struct JointConstraints {
    constraints: HashMap<JointKey, Box<dyn Constraint>>,
}

impl JointConstraints {
    pub fn unrestricted() -> Self {
        Self::default()
    }

    pub fn with<C: Constraint + 'static>(mut self, key: JointKey, constraint: C) -> Self {
        self.set(key, constraint);
        self
    }

    pub fn set<C: Constraint + 'static>(&mut self, key: JointKey, constraint: C) {
        self.constraints.insert(key, Box::new(constraint));
    }

    pub fn clear(&mut self, key: JointKey) {
        self.constraints.remove(&key);
    }

    pub fn get(&self, key: JointKey) -> Option<&dyn Constraint> {
        self.constraints.get(&key).map(|c| c.as_ref())
    }

    pub fn apply(&self, key: JointKey, angle: f32) -> f32 {
        match self.get(key) {
            Some(c) => c.apply(angle),
            None => angle,
        }
    }
}
