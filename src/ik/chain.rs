use glam::Vec2;

#[derive(Debug, Clone)]
pub struct Chain {
    pub(crate) joints: Vec<Vec2>,
    pub(crate) bone_lengths: Vec<f32>,
    pub(crate) tolerance: f32,
    pub(crate) max_iterations: u32,
}

impl Chain {
    pub fn builder() -> ChainBuilder {
        ChainBuilder::new()
    }

    /// Chain through `points`, with rest lengths taken from the spacing
    /// between consecutive points.
    pub fn from_points(points: &[Vec2]) -> Self {
        points
            .iter()
            .fold(ChainBuilder::new(), |b, p| b.add_joint(*p))
            .build()
    }

    pub fn joints(&self) -> &[Vec2] {
        &self.joints
    }

    pub fn bone_lengths(&self) -> &[f32] {
        &self.bone_lengths
    }

    pub fn total_length(&self) -> f32 {
        self.bone_lengths.iter().sum()
    }

    pub fn tolerance(&self) -> f32 {
        self.tolerance
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    pub fn joint_count(&self) -> usize {
        self.joints.len()
    }

    pub fn end_effector(&self) -> Option<Vec2> {
        self.joints.last().copied()
    }

    pub fn base(&self) -> Option<Vec2> {
        self.joints.first().copied()
    }
}

pub struct ChainBuilder {
    joints: Vec<Vec2>,
    tolerance: f32,
    max_iterations: u32,
}

impl ChainBuilder {
    pub fn new() -> Self {
        Self {
            joints: Vec::new(),
            tolerance: super::DEFAULT_TOLERANCE,
            max_iterations: super::DEFAULT_ITERATIONS,
        }
    }

    pub fn add_joint(mut self, position: Vec2) -> Self {
        self.joints.push(position);
        self
    }

    pub fn tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn build(self) -> Chain {
        let bone_lengths = self.calculate_bone_lengths();
        Chain {
            joints: self.joints,
            bone_lengths,
            tolerance: self.tolerance,
            max_iterations: self.max_iterations,
        }
    }

    fn calculate_bone_lengths(&self) -> Vec<f32> {
        if self.joints.len() < 2 {
            return Vec::new();
        }

        self.joints
            .windows(2)
            .map(|w| (w[1] - w[0]).length())
            .collect()
    }
}

impl Default for ChainBuilder {
    fn default() -> Self {
        Self::new()
    }
}
