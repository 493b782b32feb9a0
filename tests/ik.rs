use glam::Vec2;
use puppet_rig::ik::{solve_fabrik, DEFAULT_ITERATIONS, DEFAULT_TOLERANCE};

/// xorshift64, seeded so the sampled targets are the same on every run.
struct Rng(u64);

impl Rng {
    fn next_f32(&mut self) -> f32 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        (x >> 40) as f32 / (1u64 << 24) as f32
    }

    fn range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + (hi - lo) * self.next_f32()
    }
}

const UPPER: f32 = 40.0;
const LOWER: f32 = 38.0;

fn bent_arm() -> [Vec2; 3] {
    let elbow = Vec2::new(UPPER, 0.0);
    [Vec2::ZERO, elbow, elbow + Vec2::from_angle(0.5) * LOWER]
}

fn sample_reachable(rng: &mut Rng) -> Vec2 {
    let inner = UPPER - LOWER;
    let outer = UPPER + LOWER;
    // Uniform over the annulus area.
    let r = rng.range(inner * inner, outer * outer).sqrt();
    Vec2::from_angle(rng.range(-std::f32::consts::PI, std::f32::consts::PI)) * r
}

#[test]
fn reachable_targets_converge() {
    let mut rng = Rng(0x9E37_79B9_7F4A_7C15);
    let samples = 1000;
    let mut hits = 0;

    for _ in 0..samples {
        let target = sample_reachable(&mut rng);
        let solved = solve_fabrik(bent_arm(), target, 100, DEFAULT_TOLERANCE);
        if (solved[2] - target).length() <= DEFAULT_TOLERANCE {
            hits += 1;
        }
        assert_eq!(solved[0], Vec2::ZERO);
    }

    let rate = hits as f32 / samples as f32;
    assert!(rate >= 0.95, "only {:.1}% converged", rate * 100.0);
}

#[test]
fn default_budget_improves_every_target() {
    let mut rng = Rng(42);
    for _ in 0..200 {
        let target = sample_reachable(&mut rng);
        let start = bent_arm();
        let before = (start[2] - target).length();
        let solved = solve_fabrik(start, target, DEFAULT_ITERATIONS, DEFAULT_TOLERANCE);
        let after = (solved[2] - target).length();
        assert!(after <= before + 1e-3, "{:?}: {} -> {}", target, before, after);
        assert!(((solved[1] - solved[0]).length() - UPPER).abs() < 1e-2);
        assert!(((solved[2] - solved[1]).length() - LOWER).abs() < 1e-2);
    }
}

#[test]
fn out_of_reach_target_stretches_toward_it() {
    let target = Vec2::new(-120.0, 95.0);
    let solved = solve_fabrik(bent_arm(), target, DEFAULT_ITERATIONS, DEFAULT_TOLERANCE);

    let total = (solved[1] - solved[0]).length() + (solved[2] - solved[1]).length();
    assert!((total - (UPPER + LOWER)).abs() < 1e-3);

    let aim = target.normalize();
    assert!(((solved[1] - solved[0]).normalize() - aim).length() < 1e-5);
    assert!(((solved[2] - solved[1]).normalize() - aim).length() < 1e-5);
}
