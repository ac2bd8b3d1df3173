use gjk2d_math::Vec2;

use crate::support::{SupportError, SupportMap};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Circle<N> {
    pub center: Vec2<N>,
    pub radius: N,
}

impl<N: num::Float> Circle<N> {
    /// The radius must not be negative. A negative radius would turn every support point to the
    /// opposite side of the center.
    pub fn new(center: Vec2<N>, radius: N) -> Self {
        debug_assert!(radius >= N::zero(), "circle radius must not be negative");
        Self { center, radius }
    }
}

impl<N: num::Float> SupportMap<N> for Circle<N> {
    fn support_point(&self, dir: Vec2<N>) -> Result<Vec2<N>, SupportError> {
        // A zero radius circle is a point, its support does not depend on the direction.
        if self.radius.is_zero() {
            return Ok(self.center);
        }

        let length = dir.length();
        if !(length > N::zero() && length.is_finite()) {
            return Err(SupportError::ZeroDirection);
        }

        Ok(self.center + dir * (self.radius / length))
    }
}

/// A polygon given by a list of points in no required order.
///
/// The support query scans every point, so the points do not need to be convex or wound in any
/// particular direction. The support function of a non-convex point list is the support function
/// of its convex hull. `points` may be updated freely between queries.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon<N> {
    pub points: Vec<Vec2<N>>,
}

impl<N> Polygon<N> {
    pub fn new(points: impl IntoIterator<Item = Vec2<N>>) -> Self {
        Self {
            points: points.into_iter().collect(),
        }
    }
}

impl<N: num::Float> SupportMap<N> for Polygon<N> {
    fn support_point(&self, dir: Vec2<N>) -> Result<Vec2<N>, SupportError> {
        let (&first, rest) = self
            .points
            .split_first()
            .ok_or(SupportError::EmptyPolygon)?;

        // Only a strictly greater dot product replaces the current best, so ties (and a zero
        // direction) resolve to the earliest point.
        let mut best = first;
        let mut best_dot = dir.dot(first);
        for &p in rest {
            let d = dir.dot(p);
            if d > best_dot {
                best = p;
                best_dot = d;
            }
        }

        Ok(best)
    }
}

/// The Minkowski sum of two shapes, the set of `a + b` for every `a` in A and `b` in B.
#[derive(Debug, Copy, Clone)]
pub struct Sum<A, B>(pub A, pub B);

impl<A, B, N> SupportMap<N> for Sum<A, B>
where
    A: SupportMap<N>,
    B: SupportMap<N>,
    N: num::Float,
{
    fn support_point(&self, dir: Vec2<N>) -> Result<Vec2<N>, SupportError> {
        Ok(self.0.support_point(dir)? + self.1.support_point(dir)?)
    }
}

/// The Minkowski difference of two shapes, the set of `a - b` for every `a` in A and `b` in B.
///
/// This shape contains the origin if and only if A and B share at least one point.
#[derive(Debug, Copy, Clone)]
pub struct Difference<A, B>(pub A, pub B);

impl<A, B, N> SupportMap<N> for Difference<A, B>
where
    A: SupportMap<N>,
    B: SupportMap<N>,
    N: num::Float,
{
    fn support_point(&self, dir: Vec2<N>) -> Result<Vec2<N>, SupportError> {
        Ok(self.0.support_point(dir)? - self.1.support_point(-dir)?)
    }
}
