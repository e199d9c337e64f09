use crate::types::ParticleId;
use glam::Vec2;

/// The recorded positions of every particle at every simulation step.
///
/// Logically this is a `[steps][particles]` array of [`Vec2`]
/// (`[steps][particles][2]` in scalar terms). Internally it is stored
/// step-major in one flat vector, so `positions[step * particles + id]`
/// is particle `id` after update `step`.
///
/// The buffer is append-only: whole step slices are pushed in order
/// with [`History::push_step`] and can only be read afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct History {
    /// Flat step-major storage.
    positions: Vec<Vec2>,
    /// Number of particles per step slice.
    particles: usize,
}

impl History {
    /// Creates an empty history for `particles` particles with room for
    /// `steps` steps.
    ///
    /// ### Parameters
    /// - `particles` - Number of particles recorded per step.
    /// - `steps` - Number of steps to preallocate storage for.
    pub fn with_capacity(particles: usize, steps: usize) -> Self {
        Self {
            positions: Vec::with_capacity(particles * steps),
            particles,
        }
    }

    /// Appends one step slice.
    ///
    /// ### Panics
    /// Panics if `positions.len()` differs from the particle count the
    /// history was created with.
    pub fn push_step(&mut self, positions: &[Vec2]) {
        assert_eq!(positions.len(), self.particles);
        self.positions.extend_from_slice(positions);
    }

    /// Number of recorded steps.
    pub fn steps(&self) -> usize {
        if self.particles == 0 {
            0
        } else {
            self.positions.len() / self.particles
        }
    }

    pub fn particles(&self) -> usize {
        self.particles
    }

    /// Returns `(steps, particles)`; each entry holds two coordinates.
    pub fn shape(&self) -> (usize, usize) {
        (self.steps(), self.particles)
    }

    /// Positions of all particles after update `step`.
    ///
    /// ### Panics
    /// Panics if `step >= self.steps()`.
    pub fn step(&self, step: usize) -> &[Vec2] {
        let start = step * self.particles;
        &self.positions[start..start + self.particles]
    }

    /// Position of one particle after update `step`.
    #[inline]
    pub fn at(&self, step: usize, id: ParticleId) -> Vec2 {
        self.step(step)[id]
    }

    /// The positions after the final step, if any step was recorded.
    pub fn last_step(&self) -> Option<&[Vec2]> {
        self.steps().checked_sub(1).map(|s| self.step(s))
    }

    /// Iterates over one particle's positions in step order.
    pub fn trajectory(&self, id: ParticleId) -> impl Iterator<Item = Vec2> + '_ {
        assert!(id < self.particles, "particle {id} out of range");
        self.positions
            .iter()
            .skip(id)
            .step_by(self.particles)
            .copied()
    }
}
