use super::config::PhysicsConfig;
use crate::kinematics::compute_skeleton;
use crate::pose::Pose;
use crate::rig::JointKey;
use glam::Vec2;
use std::collections::HashMap;

/// A point mass. Velocity is implicit: `position - previous_position`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub id: JointKey,
    pub position: Vec2,
    pub previous_position: Vec2,
    /// Zero pins the particle in place.
    pub mass: f32,
}

impl Particle {
    pub fn new(id: JointKey, position: Vec2, mass: f32) -> Self {
        Self {
            id,
            position,
            previous_position: position,
            mass,
        }
    }

    pub fn inverse_mass(&self) -> f32 {
        if self.mass > 0.0 {
            1.0 / self.mass
        } else {
            0.0
        }
    }

    pub fn velocity(&self) -> Vec2 {
        self.position - self.previous_position
    }
}

/// Keeps two particles `rest_length` apart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceConstraint {
    pub a: usize,
    pub b: usize,
    pub rest_length: f32,
}

/// Particle/constraint model of the figure.
///
/// Built once from a pose and then mutated in place by
/// [`step_physics`](super::step_physics). One particle per joint except the
/// ground marker, one constraint per bone.
#[derive(Debug, Clone)]
pub struct PhysicsBody {
    pub(crate) particles: Vec<Particle>,
    pub(crate) constraints: Vec<DistanceConstraint>,
    index: HashMap<JointKey, usize>,
}

impl PhysicsBody {
    pub fn from_pose(pose: &Pose, config: &PhysicsConfig) -> Self {
        let skeleton = compute_skeleton(pose);
        let mut particles = Vec::with_capacity(JointKey::COUNT - 1);
        let mut index = HashMap::with_capacity(JointKey::COUNT - 1);

        for (&key, &position) in skeleton.joints() {
            if key == JointKey::Ground {
                continue;
            }
            index.insert(key, particles.len());
            particles.push(Particle::new(key, position, config.mass_for(key)));
        }

        let constraints = particles
            .iter()
            .enumerate()
            .filter_map(|(b, particle)| {
                let parent = particle.id.parent()?;
                let a = *index.get(&parent)?;
                Some(DistanceConstraint {
                    a,
                    b,
                    rest_length: (particle.position - particles[a].position).length(),
                })
            })
            .collect::<Vec<_>>();

        log::debug!(
            "physics body: {} particles, {} constraints",
            particles.len(),
            constraints.len()
        );

        Self {
            particles,
            constraints,
            index,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn constraints(&self) -> &[DistanceConstraint] {
        &self.constraints
    }

    pub fn index_of(&self, key: JointKey) -> Option<usize> {
        self.index.get(&key).copied()
    }

    pub fn particle(&self, key: JointKey) -> Option<&Particle> {
        self.index_of(key).map(|i| &self.particles[i])
    }

    pub fn particle_mut(&mut self, key: JointKey) -> Option<&mut Particle> {
        self.index_of(key).map(move |i| &mut self.particles[i])
    }

    pub fn position(&self, key: JointKey) -> Option<Vec2> {
        self.particle(key).map(|p| p.position)
    }

    /// Pins a particle where it is. Returns `false` if the key has no particle.
    pub fn pin(&mut self, key: JointKey) -> bool {
        match self.particle_mut(key) {
            Some(p) => {
                p.mass = 0.0;
                p.previous_position = p.position;
                true
            }
            None => false,
        }
    }

    /// Largest implicit per-step displacement over all particles.
    pub fn max_speed(&self) -> f32 {
        self.particles
            .iter()
            .map(|p| p.velocity().length())
            .fold(0.0, f32::max)
    }
}

/// Builds a fresh body at rest in `pose`.
pub fn create_physics_body_from_pose(pose: &Pose, config: &PhysicsConfig) -> PhysicsBody {
    PhysicsBody::from_pose(pose, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rig::HIERARCHY;

    #[test]
    fn one_particle_per_joint_except_ground() {
        let body = PhysicsBody::from_pose(&Pose::default(), &PhysicsConfig::default());
        assert_eq!(body.particles().len(), JointKey::COUNT - 1);
        assert!(body.particle(JointKey::Ground).is_none());
        assert!(body.particles().iter().all(|p| p.velocity() == Vec2::ZERO));
    }

    #[test]
    fn constraints_follow_bones() {
        let body = PhysicsBody::from_pose(&Pose::default(), &PhysicsConfig::default());
        let segments = HIERARCHY.iter().filter(|d| d.key.has_segment()).count();
        assert_eq!(body.constraints().len(), segments);

        for c in body.constraints() {
            let child = body.particles()[c.b].id;
            assert_eq!(child.parent(), Some(body.particles()[c.a].id));
            assert!((c.rest_length - child.def().length).abs() < 1e-3);
        }
    }

    #[test]
    fn pin_zeroes_mass() {
        let mut body = create_physics_body_from_pose(&Pose::default(), &PhysicsConfig::default());
        assert!(body.pin(JointKey::Head));
        assert_eq!(body.particle(JointKey::Head).unwrap().inverse_mass(), 0.0);
        assert!(!body.pin(JointKey::Ground));
    }
}
