//! Simulation phases for the particle–target system.
//!
//! A full run looks like:
//! 1. [`scatter_phase`] — place every particle near its target with
//!    Gaussian jitter.
//! 2. [`attraction_phase`], repeated `steps` times — pull each particle a
//!    fixed fraction of the way towards its target and add fresh noise.
//! 3. After every attraction phase the positions are appended to a
//!    [`History`].
//!
//! [`simulate`] drives steps 2 and 3.

use crate::{config::SimConfig, error::SimError, history::History, targets::TargetSet};
use glam::Vec2;
use log::debug;
use rand::Rng;
use rand_distr::StandardNormal;

/// Draws a vector whose components are independent standard normal samples.
#[inline]
fn gaussian(rng: &mut impl Rng) -> Vec2 {
    Vec2::new(rng.sample(StandardNormal), rng.sample(StandardNormal))
}

/// Produces initial positions scattered around the targets.
///
/// Each particle starts at `target + spread * N(0, 1)`, sampled per axis.
///
/// ### Parameters
/// - `targets` - One target per particle.
/// - `spread` - Standard deviation of the scatter.
/// - `rng` - Random source for the jitter.
///
/// ### Returns
/// One position per target, in target order.
pub fn scatter_phase(targets: &TargetSet, spread: f32, rng: &mut impl Rng) -> Vec<Vec2> {
    targets
        .points
        .iter()
        .map(|&t| t + spread * gaussian(rng))
        .collect()
}

/// Advances every particle by one step.
///
/// For each particle:
///
/// `position += attraction * (target - position) + noise * N(0, 1)`
///
/// applied independently per axis. There is no velocity term; this is a
/// first-order relaxation towards the target.
///
/// ### Parameters
/// - `positions` - Current positions, updated in place.
/// - `targets` - One target per particle; must match `positions` in length.
/// - `attraction` - Fraction of the remaining distance covered per step.
/// - `noise` - Standard deviation of the per-step jitter.
/// - `rng` - Random source for the jitter.
///
/// ### Panics
/// Panics if `positions` and `targets` differ in length.
pub fn attraction_phase(
    positions: &mut [Vec2],
    targets: &TargetSet,
    attraction: f32,
    noise: f32,
    rng: &mut impl Rng,
) {
    assert_eq!(positions.len(), targets.len());
    for (pos, &target) in positions.iter_mut().zip(&targets.points) {
        let force = target - *pos;
        *pos += attraction * force + noise * gaussian(rng);
    }
}

/// Runs the simulation for `cfg.steps` steps and records every step.
///
/// `history.step(0)` holds the positions after the first update, not the
/// initial positions; the final positions are `history.last_step()`.
///
/// ### Parameters
/// - `initial` - Starting positions, one per particle.
/// - `targets` - One target per particle.
/// - `cfg` - Provides the step count, attraction and noise.
/// - `rng` - Random source for the per-step jitter.
///
/// ### Errors
/// [`SimError::LengthMismatch`] if `initial` and `targets` differ in length.
pub fn simulate(
    initial: Vec<Vec2>,
    targets: &TargetSet,
    cfg: &SimConfig,
    rng: &mut impl Rng,
) -> Result<History, SimError> {
    if initial.len() != targets.len() {
        return Err(SimError::LengthMismatch {
            positions: initial.len(),
            targets: targets.len(),
        });
    }

    let mut positions = initial;
    let mut history = History::with_capacity(positions.len(), cfg.steps);

    for _ in 0..cfg.steps {
        attraction_phase(&mut positions, targets, cfg.attraction, cfg.noise, rng);
        history.push_step(&positions);
    }

    debug!(
        "simulated {} particles for {} steps",
        history.particles(),
        history.steps()
    );
    Ok(history)
}
