use std::{array, ops};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Vector<T, const N: usize>([T; N]);

pub type Vec2<T> = Vector<T, 2>;

impl<T: Default, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::from_fn(|_| Default::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(a: [T; N]) -> Self {
        Self(a)
    }
}

impl<T, I, const N: usize> ops::Index<I> for Vector<T, N>
where
    [T; N]: ops::Index<I>,
{
    type Output = <[T; N] as ops::Index<I>>::Output;

    fn index(&self, index: I) -> &Self::Output {
        &self.0[index]
    }
}

impl<T: ops::Neg<Output = T>, const N: usize> ops::Neg for Vector<T, N> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|v| -v)
    }
}

impl<T: ops::Add<T, Output = T> + Copy, const N: usize> ops::Add<Self> for Vector<T, N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_fn(|i| self[i] + rhs[i])
    }
}

impl<T: ops::Sub<T, Output = T> + Copy, const N: usize> ops::Sub<Self> for Vector<T, N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_fn(|i| self[i] - rhs[i])
    }
}

impl<T: ops::Mul<T, Output = T> + Copy, const N: usize> ops::Mul<T> for Vector<T, N> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self::from_fn(|i| self[i] * rhs)
    }
}

impl<T: ops::Div<T, Output = T> + Copy, const N: usize> ops::Div<T> for Vector<T, N> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        Self::from_fn(|i| self[i] / rhs)
    }
}

impl<T, const N: usize> Vector<T, N> {
    #[must_use]
    pub fn from_fn(f: impl Fn(usize) -> T) -> Self {
        Self(array::from_fn(f))
    }

    #[must_use]
    pub fn splat(t: T) -> Self
    where
        T: Copy,
    {
        Self::from_fn(|_| t)
    }

    #[must_use]
    pub fn map<U>(self, f: impl Fn(T) -> U) -> Vector<U, N> {
        Vector(self.0.map(f))
    }
}

impl<T: num::Zero + Copy, const N: usize> Vector<T, N> {
    #[must_use]
    pub fn zero() -> Self {
        Self::splat(T::zero())
    }

    /// True only if every component is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|v| v.is_zero())
    }
}

impl<T, const N: usize> Vector<T, N>
where
    T: num::Zero + ops::Mul<T, Output = T> + ops::Add<T, Output = T> + Copy,
{
    #[must_use]
    pub fn dot(self, rhs: Self) -> T {
        (0..N).fold(T::zero(), |a, i| a + self[i] * rhs[i])
    }
}

impl<T: num::Float, const N: usize> Vector<T, N> {
    #[must_use]
    pub fn length_squared(self) -> T {
        self.dot(self)
    }

    #[must_use]
    pub fn length(self) -> T {
        self.length_squared().sqrt()
    }

    #[must_use]
    pub fn distance_squared(self, rhs: Self) -> T {
        (self - rhs).length_squared()
    }
}

impl<T> Vec2<T> {
    #[must_use]
    pub const fn new(x: T, y: T) -> Self {
        Self([x, y])
    }
}

impl<T: Copy> Vec2<T> {
    #[must_use]
    pub fn x(&self) -> T {
        self.0[0]
    }

    #[must_use]
    pub fn y(&self) -> T {
        self.0[1]
    }
}

impl<T> Vec2<T>
where
    T: ops::Mul<T, Output = T> + ops::Sub<T, Output = T>,
{
    /// Perpendicular dot product, AKA the 2d cross product.
    #[must_use]
    pub fn perp_dot(self, rhs: Self) -> T {
        let Self([x, y]) = self;
        let Self([rx, ry]) = rhs;
        x * ry - y * rx
    }
}

impl<T: ops::Neg<Output = T>> Vec2<T> {
    /// Rotates a quarter turn clockwise, `(x, y)` becomes `(y, -x)`.
    ///
    /// For an edge walked counter-clockwise around a shape this is the outward normal.
    #[must_use]
    pub fn perp(self) -> Self {
        let Self([x, y]) = self;
        Self([y, -x])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perp() {
        let v = Vec2::new(3.0, 4.0);
        assert_eq!(v.perp(), Vec2::new(4.0, -3.0));
        assert_eq!(v.perp().dot(v), 0.0);
        // The right hand side of the direction of travel.
        assert!(Vec2::new(1.0, 0.0).perp().y() < 0.0);
    }

    #[test]
    fn test_perp_dot() {
        assert_eq!(Vec2::new(1.0, 0.0).perp_dot(Vec2::new(0.0, 1.0)), 1.0);
        assert_eq!(Vec2::new(0.0, 1.0).perp_dot(Vec2::new(1.0, 0.0)), -1.0);
        assert_eq!(Vec2::new(2.0, 2.0).perp_dot(Vec2::new(1.0, 1.0)), 0.0);
    }

    #[test]
    fn test_length() {
        assert_eq!(Vec2::new(3.0f64, -4.0).length(), 5.0);
        assert_eq!(Vec2::new(3.0f64, -4.0).length_squared(), 25.0);
    }

    #[test]
    fn test_is_zero() {
        assert!(Vec2::<f32>::zero().is_zero());
        assert!(Vec2::new(-0.0f32, 0.0).is_zero());
        assert!(!Vec2::new(0.0f32, 1e-30).is_zero());
    }

    #[test]
    fn test_arithmetic() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(-3.0, 0.5);
        assert_eq!(a + b, Vec2::new(-2.0, 2.5));
        assert_eq!(a - b, Vec2::new(4.0, 1.5));
        assert_eq!(-a, Vec2::new(-1.0, -2.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
        assert_eq!(b / 0.5, Vec2::new(-6.0, 1.0));
        assert_eq!(a.dot(b), -2.0);
        assert_eq!(a.distance_squared(b), 18.25);
    }
}
