use crate::glyph::Polyline;
use glam::Vec2;
use log::{debug, warn};

/// Fixed rest positions, one per particle.
///
/// Produced once from one or more polylines and never mutated afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct TargetSet {
    pub points: Vec<Vec2>,
}

impl TargetSet {
    pub fn from_positions(points: Vec<Vec2>) -> Self {
        Self { points }
    }

    /// Spreads `budget` points along `line`, denser on longer segments.
    ///
    /// Each segment receives `trunc(length / total * budget)` evenly spaced
    /// points (both endpoints included); segments whose share truncates to
    /// zero are skipped. Whatever the truncation leaves over is re-sampled
    /// evenly along the final segment.
    ///
    /// A polyline with fewer than two vertices, or with zero total length,
    /// yields `budget` copies of `Vec2::ZERO`.
    ///
    /// ### Parameters
    /// - `budget` - Exact number of points to produce.
    /// - `line` - The polyline to sample.
    ///
    /// ### Returns
    /// A [`TargetSet`] with exactly `budget` points.
    pub fn distribute(budget: usize, line: &Polyline) -> Self {
        if budget == 0 {
            return Self::from_positions(Vec::new());
        }

        let total = line.total_length();
        if total <= 0.0 {
            warn!(
                "polyline with {} vertices has no length; placing {budget} targets at the origin",
                line.vertices.len()
            );
            return Self::from_positions(vec![Vec2::ZERO; budget]);
        }

        let mut points = Vec::with_capacity(budget);
        for seg in line.segments() {
            let count = ((seg.length / total) * budget as f64) as usize;
            if count == 0 {
                continue;
            }
            points.extend(seg.sample(count));
        }

        let remaining = budget.saturating_sub(points.len());
        if remaining > 0
            && let Some(last) = line.segments().last()
        {
            points.extend(last.sample(remaining));
        }
        points.truncate(budget);

        Self::from_positions(points)
    }

    /// Splits `budget` evenly between `glyphs` and concatenates their
    /// targets in glyph order.
    ///
    /// Integer division means up to `glyphs.len() - 1` particles of the
    /// budget go unused.
    pub fn from_glyphs(glyphs: &[Polyline], budget: usize) -> Self {
        if glyphs.is_empty() {
            return Self::from_positions(Vec::new());
        }
        let per_glyph = budget / glyphs.len();

        let mut points = Vec::with_capacity(per_glyph * glyphs.len());
        for (i, glyph) in glyphs.iter().enumerate() {
            let set = Self::distribute(per_glyph, glyph);
            debug!("glyph {i}: {} targets", set.len());
            points.extend(set.points);
        }

        Self::from_positions(points)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
