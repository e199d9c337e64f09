use rand::{SeedableRng, rngs::StdRng};

/// Parameters of the trajectory simulation.
///
/// The defaults produce the neon "VR" logo.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimConfig {
    /// Total particle budget, split evenly between glyphs.
    pub particles: usize,
    /// Number of recorded steps (trail length).
    pub steps: usize,
    /// Fraction of the distance to the target covered per step.
    pub attraction: f32,
    /// Standard deviation of the per-step Gaussian jitter.
    pub noise: f32,
    /// Standard deviation of the initial scatter around each target.
    pub initial_spread: f32,
    /// Fixed RNG seed; `None` draws from the OS-seeded thread RNG.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            particles: 400,
            steps: 100,
            attraction: 0.18,
            noise: 0.1,
            initial_spread: 0.2,
            seed: None,
        }
    }
}

impl SimConfig {
    /// Builds the random source for a run: seeded from `seed` when set,
    /// otherwise from the operating system.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
