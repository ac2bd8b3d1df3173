use either::Either;
use gjk2d_math::Vec2;
use thiserror::Error;

/// A support query that has no defined answer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Error)]
pub enum SupportError {
    #[error("support direction must be non-zero and finite")]
    ZeroDirection,
    #[error("polygon has no points")]
    EmptyPolygon,
}

/// A trait for shapes that are representable by a support mapping function.
///
/// A "support mapping function", or just "support function", finds the point of a shape that is
/// furthest in a given direction. The provided direction and the returned point produce a
/// "supporting line" which touches the shape at at least one point, and every point of the shape
/// lies on the side of the line opposite the direction. A convex shape is uniquely determined by
/// its support function. For a non-convex shape the support function describes its convex hull.
pub trait SupportMap<N> {
    /// Produce the point of the shape furthest in the given direction.
    ///
    /// The direction does not need to be normalized. Shapes which must normalize it (circles)
    /// return `SupportError::ZeroDirection` when given a zero direction rather than a NaN point.
    fn support_point(&self, dir: Vec2<N>) -> Result<Vec2<N>, SupportError>;
}

impl<'a, S, N> SupportMap<N> for &'a S
where
    S: SupportMap<N> + ?Sized,
{
    fn support_point(&self, dir: Vec2<N>) -> Result<Vec2<N>, SupportError> {
        (**self).support_point(dir)
    }
}

impl<S, N> SupportMap<N> for Box<S>
where
    S: SupportMap<N> + ?Sized,
{
    fn support_point(&self, dir: Vec2<N>) -> Result<Vec2<N>, SupportError> {
        (**self).support_point(dir)
    }
}

impl<A, B, N> SupportMap<N> for Either<A, B>
where
    A: SupportMap<N>,
    B: SupportMap<N>,
{
    fn support_point(&self, dir: Vec2<N>) -> Result<Vec2<N>, SupportError> {
        match self {
            Either::Left(sm) => sm.support_point(dir),
            Either::Right(sm) => sm.support_point(dir),
        }
    }
}
