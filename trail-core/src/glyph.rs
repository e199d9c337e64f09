use glam::{DVec2, Vec2};

const LETTER_V: [DVec2; 3] = [
    DVec2::new(-1.8, 1.2),
    DVec2::new(-0.8, -1.2),
    DVec2::new(0.2, 1.2),
];

const LETTER_R: [DVec2; 6] = [
    DVec2::new(0.8, -1.2),
    DVec2::new(0.8, 1.2),
    DVec2::new(2.0, 1.2),
    DVec2::new(2.0, 0.0),
    DVec2::new(0.8, 0.0),
    DVec2::new(2.2, -1.2),
];

/// One straight piece of a [`Polyline`].
///
/// Geometry is kept in double precision; only sampled points are narrowed
/// to `Vec2`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: DVec2,
    pub end: DVec2,
    pub length: f64,
}

impl Segment {
    fn new(start: DVec2, end: DVec2) -> Self {
        Self {
            start,
            end,
            length: start.distance(end),
        }
    }

    /// Returns `count` points evenly spaced from `start` to `end`, both
    /// endpoints included. A single point sits at `start`.
    pub fn sample(&self, count: usize) -> impl Iterator<Item = Vec2> + '_ {
        let denom = count.saturating_sub(1).max(1) as f64;
        (0..count).map(move |i| {
            let t = i as f64 / denom;
            (self.start * (1.0 - t) + self.end * t).as_vec2()
        })
    }
}

/// An ordered sequence of vertices describing a letterform stroke.
#[derive(Clone, Debug, PartialEq)]
pub struct Polyline {
    pub vertices: Vec<DVec2>,
}

impl Polyline {
    pub fn new(vertices: Vec<DVec2>) -> Self {
        Self { vertices }
    }

    pub fn letter_v() -> Self {
        Self::new(LETTER_V.to_vec())
    }

    pub fn letter_r() -> Self {
        Self::new(LETTER_R.to_vec())
    }

    /// Consecutive vertex pairs, in order. Empty for fewer than two vertices.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.vertices.windows(2).map(|w| Segment::new(w[0], w[1]))
    }

    pub fn total_length(&self) -> f64 {
        self.segments().map(|s| s.length).sum()
    }
}
