use glam::Vec2;
use std::f32::consts::{PI, TAU};

/// Wraps an angle into `[-PI, PI]`.
pub fn normalize_angle(angle: f32) -> f32 {
    (angle + PI).rem_euclid(TAU) - PI
}

/// Picks the 2π-equivalent of `angle` closest to `reference`.
pub fn unwrap_near(angle: f32, reference: f32) -> f32 {
    reference + normalize_angle(angle - reference)
}

/// World angle of the vector from `from` to `to`.
pub fn direction_angle(from: Vec2, to: Vec2) -> f32 {
    let delta = to - from;
    delta.y.atan2(delta.x)
}

/// Mean direction of a set of angles, computed on the unit circle.
///
/// Returns `None` when the input is empty or the directions cancel out.
pub fn circular_mean(angles: &[f32]) -> Option<f32> {
    let sum = angles
        .iter()
        .fold(Vec2::ZERO, |acc, a| acc + Vec2::from_angle(*a));

    if sum.length_squared() < 1e-12 {
        return None;
    }

    Some(sum.y.atan2(sum.x))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_wraps_into_range() {
        assert!((normalize_angle(3.0 * PI).abs() - PI).abs() < 1e-5);
        assert!((normalize_angle(-PI / 2.0 - TAU) + PI / 2.0).abs() < 1e-5);
        assert!((normalize_angle(0.25) - 0.25).abs() < 1e-6);
    }

    #[test]
    fn unwrap_stays_near_reference() {
        let unwrapped = unwrap_near(-PI + 0.1, PI - 0.1);
        assert!((unwrapped - (PI + 0.1)).abs() < 1e-5);
    }

    #[test]
    fn circular_mean_handles_wraparound() {
        let mean = circular_mean(&[PI - 0.1, -PI + 0.1]).unwrap();
        assert!((mean.abs() - PI).abs() < 1e-5);
        assert!(circular_mean(&[0.0, PI]).is_none());
        assert!(circular_mean(&[]).is_none());
    }
}
