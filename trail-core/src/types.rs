/// Identifier for a particle.
///
/// This is an index into a [`crate::targets::TargetSet`] and into every
/// step slice of a [`crate::history::History`]; it is only meaningful
/// for the particle count the simulation was started with.
pub type ParticleId = usize;
