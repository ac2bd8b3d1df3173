use gjk2d_math::{Box2, Vec2};

use crate::{
    shapes::{Difference, Sum},
    support::{SupportError, SupportMap},
};

pub trait SupportMapExt<N>: SupportMap<N> {
    /// The tightest axis aligned box around the shape, found with four support queries.
    fn bound_box(&self) -> Result<Box2<N>, SupportError>
    where
        N: num::Float,
    {
        let _0 = N::zero();
        let _1 = N::one();
        let xmin = self.support_point(Vec2::new(-_1, _0))?.x();
        let xmax = self.support_point(Vec2::new(_1, _0))?.x();
        let ymin = self.support_point(Vec2::new(_0, -_1))?.y();
        let ymax = self.support_point(Vec2::new(_0, _1))?.y();
        Ok(Box2::new(Vec2::new(xmin, ymin), Vec2::new(xmax, ymax)))
    }

    fn sum<S>(self, other: S) -> Sum<Self, S>
    where
        Self: Sized,
    {
        Sum(self, other)
    }

    /// Takes this support function (A) and a provided support function (B) and finds the support
    /// function for the Minkowski difference A - B.
    ///
    /// If A and B share a point `p`, then `p - p` is in the difference, so the difference contains
    /// the origin if and only if the original shapes intersect.
    fn difference<S>(self, other: S) -> Difference<Self, S>
    where
        Self: Sized,
    {
        Difference(self, other)
    }
}

impl<S, N> SupportMapExt<N> for S where S: SupportMap<N> + ?Sized {}
