//! Keyframe interpolation
//!
//! Eased blending between two poses for scrubbing and playback, plus the
//! per-frame approach used to smooth a displayed pose toward its target.

mod easing;
mod interpolate;

pub use easing::Easing;
pub use interpolate::{approach_pose, interpolate_pose};
