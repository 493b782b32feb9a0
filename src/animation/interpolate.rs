use super::easing::Easing;
use crate::pose::Pose;

/// Blends two keyframe poses.
///
/// `t` is clamped to [0, 1] and eased; every angle and both offset
/// components are then blended linearly. Angles are blended as plain numbers,
/// without taking the short way around the circle.
pub fn interpolate_pose(a: &Pose, b: &Pose, t: f32, easing: Easing) -> Pose {
    let t = t.clamp(0.0, 1.0);
    // Exact endpoints, whatever rounding the blend would introduce.
    if t <= 0.0 {
        return *a;
    }
    if t >= 1.0 {
        return *b;
    }

    let k = easing.apply(t);
    a.zip_with(b, |x, y| x + (y - x) * k)
}

/// Moves `current` a fraction `rate` of the way toward `target`.
///
/// Called once per displayed frame this gives an exponential ease toward the
/// target; `rate` of 1 snaps.
pub fn approach_pose(current: &Pose, target: &Pose, rate: f32) -> Pose {
    interpolate_pose(current, target, rate, Easing::Linear)
}
