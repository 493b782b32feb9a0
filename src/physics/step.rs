use super::body::PhysicsBody;
use super::collision::CollisionResponse;
use super::config::PhysicsConfig;
use crate::kinematics::Skeleton;

/// Constraints shorter than this are skipped for the pass.
const MIN_CONSTRAINT_LENGTH: f32 = 1e-6;

/// Advances the body by `dt` seconds.
///
/// Integrates every particle, then runs the configured number of relaxation
/// passes, then resolves ground and bounds contact. With a `target` skeleton
/// each particle whose joint appears in it is steered toward that position by
/// a PD force; particles without an entry only feel gravity.
///
/// Callers are expected to cap `dt` (see [`PhysicsConfig::max_dt`]); a
/// non-positive `dt` leaves the body untouched.
pub fn step_physics(
    body: &mut PhysicsBody,
    dt: f32,
    target: Option<&Skeleton>,
    config: &PhysicsConfig,
) {
    if !(dt > 0.0) {
        return;
    }

    integrate(body, dt, target, config);

    for _ in 0..config.constraint_iterations {
        relax_constraints(body);
    }

    CollisionResponse::resolve(body, config);
}

fn integrate(body: &mut PhysicsBody, dt: f32, target: Option<&Skeleton>, config: &PhysicsConfig) {
    let dt2 = dt * dt;

    for particle in body.particles.iter_mut() {
        if particle.mass <= 0.0 {
            continue;
        }

        let velocity = particle.velocity() * config.friction;
        let mut acceleration = config.gravity;

        if let Some(goal) = target.and_then(|s| s.joint(particle.id)) {
            let force = (goal - particle.position) * config.stiffness - velocity * config.damping;
            acceleration += force / particle.mass;
        }

        particle.previous_position = particle.position;
        particle.position += velocity + acceleration * dt2;
    }
}

/// One Gauss-Seidel pass. Corrections are shared in proportion to inverse
/// mass, so a pinned endpoint leaves the whole correction to the other one.
fn relax_constraints(body: &mut PhysicsBody) {
    for constraint in body.constraints.iter() {
        let a = body.particles[constraint.a];
        let b = body.particles[constraint.b];

        let delta = b.position - a.position;
        let distance = delta.length();
        if distance < MIN_CONSTRAINT_LENGTH {
            continue;
        }

        let wa = a.inverse_mass();
        let wb = b.inverse_mass();
        let total = wa + wb;
        if total <= 0.0 {
            continue;
        }

        let correction = delta * ((distance - constraint.rest_length) / (distance * total));
        body.particles[constraint.a].position += correction * wa;
        body.particles[constraint.b].position -= correction * wb;
    }
}

impl PhysicsBody {
    pub fn step(&mut self, dt: f32, target: Option<&Skeleton>, config: &PhysicsConfig) {
        step_physics(self, dt, target, config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::Pose;
    use crate::rig::JointKey;
    use glam::Vec2;

    fn floating() -> PhysicsConfig {
        PhysicsConfig::default().with_ground(10_000.0)
    }

    #[test]
    fn gravity_pulls_free_body_down() {
        let config = floating();
        let mut body = PhysicsBody::from_pose(&Pose::default(), &config);
        let before = body.position(JointKey::Head).unwrap();
        for _ in 0..10 {
            step_physics(&mut body, 1.0 / 60.0, None, &config);
        }
        let after = body.position(JointKey::Head).unwrap();
        assert!(after.y > before.y, "head should fall: {:?} -> {:?}", before, after);
    }

    #[test]
    fn damping_opposes_per_step_velocity() {
        let config = floating().with_gravity(Vec2::ZERO).with_iterations(0);
        let pose = Pose::default();
        let target = crate::kinematics::compute_skeleton(&pose);
        let mut body = PhysicsBody::from_pose(&pose, &config);

        let head = body.particle_mut(JointKey::Head).unwrap();
        let start = head.position;
        head.previous_position = start - Vec2::new(1.0, 0.0);

        let dt = 1.0 / 60.0;
        step_physics(&mut body, dt, Some(&target), &config);

        let velocity = config.friction;
        let mass = config.mass_for(JointKey::Head);
        let expected = velocity - config.damping * velocity / mass * dt * dt;
        let moved = body.position(JointKey::Head).unwrap() - start;
        assert!((moved.x - expected).abs() < 1e-4, "moved {} expected {}", moved.x, expected);
        assert!(moved.y.abs() < 1e-4);
    }

    #[test]
    fn zero_dt_is_a_no_op() {
        let config = PhysicsConfig::default();
        let mut body = PhysicsBody::from_pose(&Pose::default(), &config);
        let before = body.particles().to_vec();
        step_physics(&mut body, 0.0, None, &config);
        step_physics(&mut body, -1.0, None, &config);
        assert_eq!(body.particles(), &before[..]);
    }

    #[test]
    fn pinned_particle_never_moves() {
        let config = floating();
        let mut body = PhysicsBody::from_pose(&Pose::default(), &config);
        body.pin(JointKey::Torso);
        let anchor = body.position(JointKey::Torso).unwrap();
        for _ in 0..120 {
            step_physics(&mut body, 1.0 / 60.0, None, &config);
        }
        assert_eq!(body.position(JointKey::Torso).unwrap(), anchor);
    }

    #[test]
    fn relaxation_restores_rest_length() {
        let config = floating().with_gravity(Vec2::ZERO);
        let mut body = PhysicsBody::from_pose(&Pose::default(), &config);
        let hand = body.particle_mut(JointKey::RightHand).unwrap();
        hand.position += Vec2::new(30.0, 0.0);
        hand.previous_position = hand.position;

        relax_constraints(&mut body);
        for _ in 0..50 {
            relax_constraints(&mut body);
        }

        for c in body.constraints() {
            let d = (body.particles()[c.b].position - body.particles()[c.a].position).length();
            assert!((d - c.rest_length).abs() < 0.05, "constraint {:?} at {}", c, d);
        }
    }

    #[test]
    fn coincident_endpoints_are_skipped() {
        let config = floating();
        let mut body = PhysicsBody::from_pose(&Pose::default(), &config);
        let elbow = body.position(JointKey::LeftShoulder).unwrap();
        body.particle_mut(JointKey::LeftElbow).unwrap().position = elbow;
        relax_constraints(&mut body);
        assert!(body.particles().iter().all(|p| p.position.is_finite()));
    }

    #[test]
    fn missing_target_entry_gets_gravity_only() {
        let config = floating();
        let pose = Pose::default();
        let mut steered = PhysicsBody::from_pose(&pose, &config);
        let mut target = crate::kinematics::compute_skeleton(&pose);
        target.remove_joint(JointKey::Head);
        let neck = target.joint(JointKey::Torso).unwrap();
        target.joints.insert(JointKey::Torso, neck - Vec2::new(0.0, 10.0));

        // Single integration so constraints do not mix the effects.
        integrate(&mut steered, 1.0 / 60.0, Some(&target), &config);
        let head = steered.particle(JointKey::Head).unwrap();
        let expected = config.gravity * (1.0 / 60.0f32).powi(2);
        assert!((head.velocity() - expected).length() < 1e-4);

        let torso = steered.particle(JointKey::Torso).unwrap();
        assert!(torso.velocity().y < 0.0, "torso should be pulled up: {:?}", torso.velocity());
    }
}
