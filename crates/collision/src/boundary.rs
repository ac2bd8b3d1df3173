use gjk2d_math::{Vec2, lit};

use crate::support::{SupportError, SupportMap};

#[derive(Debug, Copy, Clone)]
pub struct Settings<N> {
    /// Every chord of the traced outline is within this distance of the shape's boundary.
    pub epsilon: N,
    /// A new support point closer than this to either end of the chord being refined is treated
    /// as the same point. Zero makes this an exact equality test.
    pub point_tolerance: N,
    /// Chords are split at most this many times. A chord still outside of `epsilon` at this depth
    /// gets its support point added but is not refined further, and the result is marked as not
    /// converged.
    pub max_depth: u32,
}

impl<N: num::Float> Default for Settings<N> {
    fn default() -> Self {
        Self {
            epsilon: lit(0.01),
            point_tolerance: lit(1e-6),
            max_depth: 16,
        }
    }
}

impl<N: num::Float> Settings<N> {
    pub fn with_epsilon(epsilon: N) -> Self {
        Self {
            epsilon,
            ..Default::default()
        }
    }
}

/// A polygonal approximation of a shape's support boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct Boundary<N> {
    /// Points on the shape's boundary in counter-clockwise order, the last point connects back to
    /// the first.
    pub points: Vec<Vec2<N>>,
    /// False if `Settings::max_depth` was reached before every chord was within `epsilon`.
    pub converged: bool,
}

/// Trace the outline of a shape through its support function.
///
/// Starts from the topmost and bottommost support points and repeatedly splits each chord at the
/// support point in the chord's outward direction, until the support point lies within `epsilon`
/// of the chord or matches one of its ends. For a shape with a single support point (such as a
/// point or a zero radius circle) the result is that single point.
///
/// Only the boundary reachable by support queries is traced, so a non-convex shape produces the
/// outline of its convex hull.
pub fn trace<N, S>(settings: Settings<N>, shape: S) -> Result<Boundary<N>, SupportError>
where
    N: num::Float,
    S: SupportMap<N>,
{
    let _0 = N::zero();
    let _1 = N::one();

    let mut tracer = Tracer {
        settings,
        tolerance_squared: settings.point_tolerance * settings.point_tolerance,
        shape,
        points: Vec::new(),
        converged: true,
    };

    let top = tracer.shape.support_point(Vec2::new(_0, _1))?;
    let bottom = tracer.shape.support_point(Vec2::new(_0, -_1))?;

    tracer.points.push(top);
    if !tracer.same_point(top, bottom) {
        tracer.refine(top, bottom, 0)?;
        tracer.points.push(bottom);
        tracer.refine(bottom, top, 0)?;
    }

    if tracer.converged {
        log::debug!("traced boundary with {} points", tracer.points.len());
    } else {
        log::warn!(
            "boundary trace reached max depth {} before tolerance {:?}, returning {} points",
            settings.max_depth,
            settings.epsilon.to_f64(),
            tracer.points.len(),
        );
    }

    Ok(Boundary {
        points: tracer.points,
        converged: tracer.converged,
    })
}

/// Calls `trace` with the default depth limit and point tolerance.
pub fn trace_boundary<N, S>(shape: S, epsilon: N) -> Result<Boundary<N>, SupportError>
where
    N: num::Float,
    S: SupportMap<N>,
{
    trace(Settings::with_epsilon(epsilon), shape)
}

struct Tracer<N, S> {
    settings: Settings<N>,
    tolerance_squared: N,
    shape: S,
    points: Vec<Vec2<N>>,
    converged: bool,
}

impl<N, S> Tracer<N, S>
where
    N: num::Float,
    S: SupportMap<N>,
{
    fn same_point(&self, a: Vec2<N>, b: Vec2<N>) -> bool {
        a.distance_squared(b) <= self.tolerance_squared
    }

    // Adds the points strictly between `start` and `end`, walking counter-clockwise.
    fn refine(&mut self, start: Vec2<N>, end: Vec2<N>, depth: u32) -> Result<(), SupportError> {
        let out = (end - start).perp();
        let support = self.shape.support_point(out)?;
        if self.same_point(support, start) || self.same_point(support, end) {
            return Ok(());
        }

        let dist = (support - start).dot(out).abs() / out.length();
        if dist <= self.settings.epsilon {
            return Ok(());
        }

        if depth >= self.settings.max_depth {
            self.converged = false;
            self.points.push(support);
            return Ok(());
        }

        self.refine(start, support, depth + 1)?;
        self.points.push(support);
        self.refine(support, end, depth + 1)
    }
}
