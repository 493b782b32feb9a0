use super::body::PhysicsBody;
use super::config::PhysicsConfig;
use glam::Vec2;

pub struct CollisionResponse;

impl CollisionResponse {
    /// Keeps every particle above the ground plane and inside the horizontal
    /// bounds.
    ///
    /// A particle pushed back onto the ground loses `ground_damping` of its
    /// vertical velocity without reversing it, and keeps `ground_friction` of
    /// its horizontal velocity. Feet keep none of the horizontal part, so a
    /// planted foot stays put.
    pub fn resolve(body: &mut PhysicsBody, config: &PhysicsConfig) {
        for particle in body.particles.iter_mut() {
            if particle.position.y > config.ground_y {
                let velocity = particle.velocity();
                particle.position.y = config.ground_y;

                let sink = velocity.y * (1.0 - config.ground_damping);
                let slide = if particle.id.is_foot() {
                    0.0
                } else {
                    velocity.x * config.ground_friction
                };
                particle.previous_position = particle.position - Vec2::new(slide, sink);
            }

            if particle.position.x < config.min_x {
                particle.position.x = config.min_x;
                particle.previous_position.x = config.min_x;
            } else if particle.position.x > config.max_x {
                particle.position.x = config.max_x;
                particle.previous_position.x = config.max_x;
            }
        }
    }

    pub fn touching_ground(body: &PhysicsBody, config: &PhysicsConfig) -> usize {
        body.particles
            .iter()
            .filter(|p| p.position.y >= config.ground_y - 1e-3)
            .count()
    }
}
