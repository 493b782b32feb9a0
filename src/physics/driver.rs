use super::body::PhysicsBody;
use super::config::PhysicsConfig;
use super::extract::extract_pose;
use super::step::step_physics;
use crate::kinematics::compute_skeleton;
use crate::pose::Pose;

/// Owns the physics body across frames.
///
/// While enabled, every [`tick`](Self::tick) steers the body toward the
/// animator's current pose and returns the simulated pose. Disabling drops
/// the body; enabling again rebuilds it from the target, so there is nothing
/// to tear down.
#[derive(Debug, Clone)]
pub struct RagdollDriver {
    config: PhysicsConfig,
    body: Option<PhysicsBody>,
    pose: Pose,
}

impl RagdollDriver {
    pub fn new(config: PhysicsConfig) -> Self {
        Self {
            config,
            body: None,
            pose: Pose::default(),
        }
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    pub fn body(&self) -> Option<&PhysicsBody> {
        self.body.as_ref()
    }

    pub fn body_mut(&mut self) -> Option<&mut PhysicsBody> {
        self.body.as_mut()
    }

    pub fn is_enabled(&self) -> bool {
        self.body.is_some()
    }

    /// Last pose produced by the simulation, or the target it was reset to.
    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    pub fn set_enabled(&mut self, enabled: bool, target: &Pose) {
        match (enabled, self.is_enabled()) {
            (true, false) => self.reset(target),
            (false, true) => {
                log::debug!("ragdoll disabled");
                self.body = None;
            }
            _ => {}
        }
    }

    /// Discards the body and builds a fresh one at rest in `target`.
    pub fn reset(&mut self, target: &Pose) {
        log::debug!("ragdoll reset to target pose");
        self.body = Some(PhysicsBody::from_pose(target, &self.config));
        self.pose = *target;
    }

    /// Advances the simulation one frame.
    ///
    /// `dt` is capped at `max_dt` so a stalled frame cannot blow up the
    /// integrator. When disabled the target is returned unchanged.
    pub fn tick(&mut self, dt: f32, target: &Pose) -> Pose {
        let Some(body) = self.body.as_mut() else {
            self.pose = *target;
            return self.pose;
        };

        let dt = if dt > self.config.max_dt {
            log::warn!("clamping dt {:.4}s to {:.4}s", dt, self.config.max_dt);
            self.config.max_dt
        } else {
            dt
        };

        let goal = compute_skeleton(target);
        step_physics(body, dt, Some(&goal), &self.config);
        self.pose = extract_pose(body, &self.pose);
        self.pose
    }
}

impl Default for RagdollDriver {
    fn default() -> Self {
        Self::new(PhysicsConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn disabled_driver_passes_target_through() {
        let mut driver = RagdollDriver::default();
        let mut target = Pose::default();
        target.head = 0.4;
        assert_eq!(driver.tick(1.0 / 60.0, &target), target);
        assert!(driver.body().is_none());
    }

    #[test]
    fn enable_builds_body_and_disable_drops_it() {
        let mut driver = RagdollDriver::default();
        let target = Pose::default();
        driver.set_enabled(true, &target);
        assert!(driver.is_enabled());
        assert_eq!(driver.pose(), &target);

        driver.set_enabled(false, &target);
        assert!(!driver.is_enabled());
    }

    #[test]
    fn long_stall_is_clamped() {
        let config = PhysicsConfig::default().with_gravity(Vec2::new(0.0, 600.0));
        let mut stalled = RagdollDriver::new(config);
        let mut capped = RagdollDriver::new(config);
        let mut raised = Pose::default();
        raised.offset.y = -100.0;
        stalled.reset(&raised);
        capped.reset(&raised);

        let a = stalled.tick(5.0, &raised);
        let b = capped.tick(config.max_dt, &raised);
        assert_eq!(a, b);
    }

    #[test]
    fn re_enabling_starts_from_target() {
        let mut driver = RagdollDriver::default();
        let start = Pose::default();
        driver.set_enabled(true, &start);
        for _ in 0..30 {
            driver.tick(1.0 / 60.0, &start);
        }

        let mut next = Pose::default();
        next.offset.x = 40.0;
        driver.set_enabled(false, &start);
        driver.set_enabled(true, &next);
        let root = driver.body().unwrap().position(crate::rig::JointKey::Root).unwrap();
        let expected = compute_skeleton(&next).joint(crate::rig::JointKey::Root).unwrap();
        assert_eq!(root, expected);
    }
}
