use super::chain::Chain;
use super::{DEFAULT_ITERATIONS, DEFAULT_TOLERANCE};
use glam::Vec2;

/// Separations below this are treated as coincident joints.
const MIN_SEPARATION: f32 = 0.0001;

#[derive(Debug, Clone, Copy)]
pub struct SolveResult {
    pub converged: bool,
    pub iterations: u32,
    pub final_distance: f32,
}

pub struct FabrikSolver;

impl FabrikSolver {
    pub fn solve(chain: &mut Chain, target: Vec2) -> SolveResult {
        if chain.joints.is_empty() {
            return SolveResult {
                converged: true,
                iterations: 0,
                final_distance: 0.0,
            };
        }

        let base = chain.joints[0];
        Self::solve_anchored(chain, target, base)
    }

    pub fn solve_anchored(chain: &mut Chain, target: Vec2, base: Vec2) -> SolveResult {
        let joint_count = chain.joints.len();

        if joint_count < 2 {
            return SolveResult {
                converged: true,
                iterations: 0,
                final_distance: 0.0,
            };
        }

        let total_length = chain.total_length();
        let distance_to_target = (target - base).length();

        if distance_to_target > total_length {
            Self::stretch_towards_target(chain, base, target);
            log::trace!(
                "fabrik: target {:.1} beyond reach {:.1}, stretched",
                distance_to_target,
                total_length
            );
            return SolveResult {
                converged: false,
                iterations: 0,
                final_distance: distance_to_target - total_length,
            };
        }

        let tolerance = chain.tolerance;
        let max_iterations = chain.max_iterations;
        let mut final_distance = Self::effector_distance(chain, target);

        for iteration in 0..max_iterations {
            if final_distance <= tolerance {
                return SolveResult {
                    converged: true,
                    iterations: iteration,
                    final_distance,
                };
            }

            Self::forward_pass(chain, target);
            Self::backward_pass(chain, base);
            final_distance = Self::effector_distance(chain, target);
        }

        log::trace!(
            "fabrik: {} iterations, residual {:.4}",
            max_iterations,
            final_distance
        );
        SolveResult {
            converged: final_distance <= tolerance,
            iterations: max_iterations,
            final_distance,
        }
    }

    fn effector_distance(chain: &Chain, target: Vec2) -> f32 {
        chain
            .joints
            .last()
            .map_or(0.0, |end| (*end - target).length())
    }

    fn forward_pass(chain: &mut Chain, target: Vec2) {
        let n = chain.joints.len();

        chain.joints[n - 1] = target;

        for i in (0..n - 1).rev() {
            let next_pos = chain.joints[i + 1];
            let curr_pos = chain.joints[i];
            let bone_length = chain.bone_lengths[i];

            let direction = Self::unit_or_fallback(curr_pos - next_pos);
            chain.joints[i] = next_pos + direction * bone_length;
        }
    }

    fn backward_pass(chain: &mut Chain, base: Vec2) {
        let n = chain.joints.len();

        chain.joints[0] = base;

        for i in 1..n {
            let prev_pos = chain.joints[i - 1];
            let curr_pos = chain.joints[i];
            let bone_length = chain.bone_lengths[i - 1];

            let direction = Self::unit_or_fallback(curr_pos - prev_pos);
            chain.joints[i] = prev_pos + direction * bone_length;
        }
    }

    fn unit_or_fallback(dir: Vec2) -> Vec2 {
        let len = dir.length();
        if len > MIN_SEPARATION {
            dir / len
        } else {
            Vec2::Y
        }
    }

    fn stretch_towards_target(chain: &mut Chain, base: Vec2, target: Vec2) {
        let direction = (target - base).normalize_or_zero();

        if direction.length_squared() < MIN_SEPARATION {
            return;
        }

        chain.joints[0] = base;

        for i in 1..chain.joints.len() {
            let prev = chain.joints[i - 1];
            let bone_length = chain.bone_lengths[i - 1];
            chain.joints[i] = prev + direction * bone_length;
        }
    }
}

/// Solves a three-point chain (root, middle, end effector) toward `target`.
///
/// Rest lengths come from the input positions, so the solver does not care
/// which limb the chain belongs to. When the target is out of reach the
/// chain is laid straight toward it; otherwise the result may still miss the
/// target by up to `tolerance` or by whatever the iteration budget leaves.
pub fn solve_fabrik(chain: [Vec2; 3], target: Vec2, iterations: u32, tolerance: f32) -> [Vec2; 3] {
    let mut solved = Chain::builder()
        .add_joint(chain[0])
        .add_joint(chain[1])
        .add_joint(chain[2])
        .max_iterations(iterations)
        .tolerance(tolerance)
        .build();

    FabrikSolver::solve(&mut solved, target);

    [solved.joints[0], solved.joints[1], solved.joints[2]]
}

/// [`solve_fabrik`] with the default budget of 10 iterations and a 0.1 tolerance.
pub fn solve_fabrik_default(chain: [Vec2; 3], target: Vec2) -> [Vec2; 3] {
    solve_fabrik(chain, target, DEFAULT_ITERATIONS, DEFAULT_TOLERANCE)
}
