//! Turning recorded trajectories into drawable line segments.

use glam::Vec2;
use trail_core::history::History;

/// A straight stroke between two consecutive positions of one particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: Vec2,
    pub to: Vec2,
}

/// Collects one segment per consecutive pair of positions, particle by
/// particle.
///
/// The result holds `particles * (steps - 1)` segments, or none when fewer
/// than two steps were recorded. Segments of particle `i` come before those
/// of particle `i + 1`, each particle's in step order.
pub fn collect(history: &History) -> Vec<Segment> {
    let (steps, particles) = history.shape();
    let mut segments = Vec::with_capacity(particles * steps.saturating_sub(1));

    for id in 0..particles {
        let trail = history.trajectory(id);
        let next = history.trajectory(id).skip(1);
        segments.extend(trail.zip(next).map(|(from, to)| Segment { from, to }));
    }

    segments
}
